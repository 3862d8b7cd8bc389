//! # Bot Configuration Module
//!
//! Process configuration read from the environment (with `.env` support via
//! `dotenv` in `main`): bot identity, the species catalog file, and the
//! voices directory. Required fields are validated at startup.

use anyhow::{ensure, Context, Result};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_BIRDS_FILE: &str = "./birds.json";
pub const DEFAULT_VOICES_DIR: &str = "./voices";

/// Configuration for the Telegram bot process
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Bot username, used in the /start command description
    pub username: String,
    /// Telegram Bot API token
    pub token: String,
    /// Path to the species catalog JSON (key -> language -> localized name)
    pub birds_file: PathBuf,
    /// Root directory of voice recordings, laid out as `<lang>/<species>/`
    pub voices_dir: PathBuf,
}

impl BotConfig {
    /// Build the configuration from environment variables.
    ///
    /// `TELEGRAM_BOT_USERNAME` and `TELEGRAM_BOT_TOKEN` are required;
    /// `BIRDS_FILE` and `VOICES_DIR` fall back to repo-local defaults.
    pub fn from_env() -> Result<Self> {
        let username = env::var("TELEGRAM_BOT_USERNAME")
            .context("TELEGRAM_BOT_USERNAME must be set")?;
        let token =
            env::var("TELEGRAM_BOT_TOKEN").context("TELEGRAM_BOT_TOKEN must be set")?;
        let birds_file = env::var("BIRDS_FILE")
            .unwrap_or_else(|_| DEFAULT_BIRDS_FILE.to_string())
            .into();
        let voices_dir = env::var("VOICES_DIR")
            .unwrap_or_else(|_| DEFAULT_VOICES_DIR.to_string())
            .into();

        let config = Self {
            username,
            token,
            birds_file,
            voices_dir,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate required fields are non-blank
    pub fn validate(&self) -> Result<()> {
        ensure!(
            !self.username.trim().is_empty(),
            "TELEGRAM_BOT_USERNAME must not be blank"
        );
        ensure!(
            !self.token.trim().is_empty(),
            "TELEGRAM_BOT_TOKEN must not be blank"
        );
        Ok(())
    }
}
