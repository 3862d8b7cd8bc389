//! Bot module for handling Telegram interactions
//!
//! This module is split into several submodules for better organization:
//! - `message_handler`: Handles incoming text messages
//! - `callback_handler`: Handles inline keyboard callback queries
//! - `ui_builder`: Creates keyboards and packs the species grid
//! - `commands`: One-shot registration of the bot command list

pub mod callback_handler;
pub mod commands;
pub mod message_handler;
pub mod ui_builder;

// Re-export main handler functions for use in main.rs
pub use callback_handler::callback_handler;
pub use message_handler::message_handler;

// Re-export utility functions that might be used elsewhere
pub use commands::ensure_commands_installed;
pub use ui_builder::{pack_rows, MAX_ROW_WIDTH};
