//! Authentication route handlers
//!
//! - Registration and login, both returning a signed token
//! - Current user lookup for an authenticated identity

pub mod login;
pub mod me;
pub mod register;

pub use login::login;
pub use me::me;
pub use register::register;
