//! Callback Handler module for processing inline keyboard callback queries

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::{InputFile, MessageId};
use tracing::debug;

use crate::catalog::Catalog;
use crate::config::BotConfig;
use crate::locale::resolve_language;

// Import localization
use crate::localization::{t_args_lang, t_lang};

use crate::navigation::{navigate, ConversationEvent, Screen, BACK_BIRD_VOICE, BACK_VOICES};

use super::commands::ensure_commands_installed;
use super::ui_builder::{back_keyboard, emoji, species_keyboard, top_keyboard};

/// Handle callback queries from inline keyboards
pub async fn callback_handler(
    bot: Bot,
    q: CallbackQuery,
    catalog: Arc<Catalog>,
    config: Arc<BotConfig>,
) -> Result<()> {
    ensure_commands_installed(&bot, &config.username).await;

    let data = q.data.as_deref().unwrap_or("");
    debug!(user_id = %q.from.id, data = %data, "Received callback query");

    let language = resolve_language(q.from.language_code.as_deref(), &catalog);

    if let Some(msg) = &q.message {
        match navigate(ConversationEvent::ButtonPress(data), &catalog, &language)? {
            Some(Screen::Top { .. }) => {
                bot.edit_message_text(
                    msg.chat().id,
                    msg.id(),
                    format!("{}{}", emoji::DOOR, t_lang("top-message", &language)),
                )
                .reply_markup(top_keyboard(&language))
                .await?;
            }
            Some(Screen::SpeciesList { species }) => {
                if species.is_empty() {
                    bot.edit_message_text(
                        msg.chat().id,
                        msg.id(),
                        format!("{}{}", emoji::FACE, t_lang("voices-empty", &language)),
                    )
                    .reply_markup(back_keyboard(BACK_VOICES, &language))
                    .await?;
                } else {
                    bot.edit_message_text(
                        msg.chat().id,
                        msg.id(),
                        format!("{}{}", emoji::BIRD, t_lang("voices-message", &language)),
                    )
                    .reply_markup(species_keyboard(species, &language))
                    .await?;
                }
            }
            Some(Screen::BirdVoice {
                key,
                display_name,
                clip,
            }) => {
                send_bird_voice(
                    &bot,
                    msg.chat().id,
                    msg.id(),
                    &catalog,
                    &language,
                    &key,
                    &display_name,
                    &clip,
                )
                .await?;
            }
            Some(Screen::BirdVoiceEmpty) => {
                bot.edit_message_text(
                    msg.chat().id,
                    msg.id(),
                    format!("{}{}", emoji::FACE, t_lang("bird-voice-empty", &language)),
                )
                .reply_markup(back_keyboard(BACK_BIRD_VOICE, &language))
                .await?;
            }
            None => {
                debug!(user_id = %q.from.id, data = %data, "Ignoring unknown callback payload");
            }
        }
    }

    // Answer the callback query to remove the loading state
    bot.answer_callback_query(q.id).await?;

    Ok(())
}

/// The voice sequence: drop the pressed keyboard message, then three fresh
/// sends in fixed order (announcement, voice attachment, back prompt). A
/// transport failure aborts the remaining steps; already-sent messages are
/// left as they are.
async fn send_bird_voice(
    bot: &Bot,
    chat_id: ChatId,
    message_id: MessageId,
    catalog: &Catalog,
    language: &str,
    key: &str,
    display_name: &str,
    clip: &str,
) -> Result<()> {
    debug!(
        %chat_id,
        species = %key,
        clip = %clip,
        language = %language,
        "Sending bird voice"
    );

    bot.delete_message(chat_id, message_id).await?;

    bot.send_message(
        chat_id,
        format!(
            "{}{}",
            emoji::BIRD,
            t_args_lang("bird-announce", &[("bird", display_name)], language)
        ),
    )
    .await?;

    // The clip handle is dropped once the send finishes, whatever the outcome
    let file = catalog.open_clip(language, key, clip).await?;
    bot.send_voice(chat_id, InputFile::read(file).file_name(clip.to_string()))
        .await?;

    bot.send_message(
        chat_id,
        format!("{}{}", emoji::PENCIL, t_lang("bird-voice-message", language)),
    )
    .reply_markup(back_keyboard(BACK_BIRD_VOICE, language))
    .await?;

    Ok(())
}
