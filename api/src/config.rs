//! Runtime configuration for the API binary
//!
//! Thin layer over `sh_shared::config` that loads `.env` once and checks the
//! result before anything is wired.

use sh_shared::config::{AppConfig, Environment};

/// Load `.env` (if present) and build the validated application config
pub fn load() -> anyhow::Result<AppConfig> {
    let env_file = Environment::from_env().dotenv_file();
    if dotenvy::from_filename(env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env();
    config
        .validate()
        .map_err(|message| anyhow::anyhow!("Invalid configuration: {}", message))?;

    Ok(config)
}

