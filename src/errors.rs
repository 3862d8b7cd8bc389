//! # Bot Error Types Module
//!
//! This module defines the error taxonomy used throughout the bot:
//! catalog lookups, voice storage access, and Telegram transport failures.

/// Custom error types for bot operations
#[derive(Debug, Clone)]
pub enum BotError {
    /// A species key that is not present in the catalog. Callback payloads
    /// are matched against catalog membership before dispatch, so hitting
    /// this from a handler indicates a broken invariant.
    SpeciesNotFound(String),
    /// Voice directory or clip file unreadable at the storage layer
    ResourceUnavailable(String),
    /// An outbound Telegram call failed
    Transport(String),
}

impl std::fmt::Display for BotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BotError::SpeciesNotFound(key) => write!(f, "Species not found: {key}"),
            BotError::ResourceUnavailable(msg) => write!(f, "Resource unavailable: {msg}"),
            BotError::Transport(msg) => write!(f, "Transport error: {msg}"),
        }
    }
}

impl std::error::Error for BotError {}

impl From<teloxide::RequestError> for BotError {
    fn from(err: teloxide::RequestError) -> Self {
        BotError::Transport(err.to_string())
    }
}
