//! Message Handler module for processing incoming Telegram messages

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::debug;

use crate::catalog::Catalog;
use crate::config::BotConfig;
use crate::locale::resolve_language;

// Import localization
use crate::localization::t_lang;

use crate::navigation::{navigate, ConversationEvent, Screen};

use super::commands::ensure_commands_installed;
use super::ui_builder::{emoji, top_keyboard};

/// Handle an incoming message. Only `/start` produces output; every other
/// message type and text is ignored.
pub async fn message_handler(
    bot: Bot,
    msg: Message,
    catalog: Arc<Catalog>,
    config: Arc<BotConfig>,
) -> Result<()> {
    ensure_commands_installed(&bot, &config.username).await;

    let Some(text) = msg.text() else {
        debug!(user_id = %msg.chat.id, "Ignoring non-text message");
        return Ok(());
    };

    // Extract user's language code from Telegram
    let language_code = msg
        .from
        .as_ref()
        .and_then(|user| user.language_code.as_deref());
    let language = resolve_language(language_code, &catalog);

    match navigate(ConversationEvent::Command(text), &catalog, &language)? {
        Some(Screen::Top { .. }) => {
            debug!(user_id = %msg.chat.id, language = %language, "Showing top screen");
            bot.send_message(
                msg.chat.id,
                format!("{}{}", emoji::DOOR, t_lang("top-message", &language)),
            )
            .reply_markup(top_keyboard(&language))
            .await?;
        }
        _ => {
            debug!(user_id = %msg.chat.id, "Ignoring unrecognized text message");
        }
    }

    Ok(())
}
