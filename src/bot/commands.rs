//! One-shot registration of the bot's externally visible command list

use std::sync::atomic::{AtomicBool, Ordering};
use teloxide::prelude::*;
use teloxide::types::BotCommand;
use tracing::{info, warn};

/// Process-wide flag: set once the command list is known to be installed
static COMMANDS_INSTALLED: AtomicBool = AtomicBool::new(false);

/// The single command this bot exposes
pub fn start_command(username: &str) -> BotCommand {
    BotCommand::new("start", format!("Launch @{username}"))
}

/// Lazily install the command list on the first inbound event.
///
/// Queries the currently installed commands; a non-empty list counts as
/// installed. Query or install failures are logged and swallowed, leaving
/// the flag unset so the next event retries. Concurrent first events may
/// each attempt the install; the platform treats that as idempotent.
pub async fn ensure_commands_installed(bot: &Bot, username: &str) {
    if COMMANDS_INSTALLED.load(Ordering::Acquire) {
        return;
    }

    match bot.get_my_commands().await {
        Ok(commands) if !commands.is_empty() => {
            COMMANDS_INSTALLED.store(true, Ordering::Release);
        }
        Ok(_) => match bot.set_my_commands(vec![start_command(username)]).await {
            Ok(_) => {
                info!("Installed bot command list");
                COMMANDS_INSTALLED.store(true, Ordering::Release);
            }
            Err(err) => warn!(error = %err, "Failed to install bot command list"),
        },
        Err(err) => warn!(error = %err, "Failed to query installed bot commands"),
    }
}
