//! Common validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

/// `local@domain.tld`
pub static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern compiles")
});

/// Common validation functions
pub mod validators {
    use super::EMAIL_REGEX;

    /// Check if a string is not empty
    pub fn not_empty(value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// Check if a string length, in characters, is within bounds
    pub fn length_between(value: &str, min: usize, max: usize) -> bool {
        let len = value.chars().count();
        len >= min && len <= max
    }

    /// Check if an email address has the `local@domain.tld` shape
    pub fn is_valid_email(email: &str) -> bool {
        EMAIL_REGEX.is_match(email)
    }

    /// Check if a value lies in the closed range `[min, max]`
    pub fn in_range(value: f64, min: f64, max: f64) -> bool {
        value.is_finite() && value >= min && value <= max
    }
}

#[cfg(test)]
mod tests {
    use super::validators::*;

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("alice@example.com"));
        assert!(is_valid_email("first.last+tag@mail.example.co"));
        assert!(!is_valid_email("alice@example"));
        assert!(!is_valid_email("alice.example.com"));
        assert!(!is_valid_email("alice@example.c"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_length_between_counts_chars() {
        assert!(length_between("héllo", 5, 5));
        assert!(!length_between("", 1, 10));
        assert!(length_between("secret", 6, 50));
    }

    #[test]
    fn test_in_range_rejects_nan() {
        assert!(in_range(50.0, 0.01, 999_999.0));
        assert!(!in_range(0.0, 0.01, 999_999.0));
        assert!(!in_range(f64::NAN, 0.01, 999_999.0));
    }
}
