//! UI Builder module for creating keyboards and packing the species grid

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

// Import localization
use crate::localization::t_lang;

use crate::navigation::{BACK_VOICES, SEND_VOICES};

/// Emoji prefixes attached to bot messages and buttons
pub mod emoji {
    pub const DOOR: &str = "🚪 ";
    pub const LOUD_SOUND: &str = "🔊 ";
    pub const BIRD: &str = "🐦 ";
    pub const BACK: &str = "◀️ ";
    pub const FACE: &str = "🧐 ";
    pub const MUSICAL_NOTE: &str = "🎵 ";
    pub const PENCIL: &str = "✏️ ";
}

/// Maximum cumulative label width of one keyboard row
pub const MAX_ROW_WIDTH: usize = 23;

/// Pack (key, label) pairs into rows of bounded cumulative label width.
///
/// Items are sorted by label first so the grid stays stable across renders.
/// A row always accepts its first item, so a single oversized label gets a
/// row of its own; once a row holds anything, appending never pushes its
/// label sum past `max_row_width`. Label width is counted in chars; emoji
/// prefixes are added after packing and don't count.
pub fn pack_rows(
    mut items: Vec<(String, String)>,
    max_row_width: usize,
) -> Vec<Vec<(String, String)>> {
    items.sort_by(|a, b| a.1.cmp(&b.1));

    let mut rows: Vec<Vec<(String, String)>> = Vec::new();
    let mut row: Vec<(String, String)> = Vec::new();
    let mut row_width = 0;

    for item in items {
        let label_width = item.1.chars().count();
        if !row.is_empty() && row_width + label_width > max_row_width {
            rows.push(std::mem::take(&mut row));
            row_width = 0;
        }
        row_width += label_width;
        row.push(item);
    }
    if !row.is_empty() {
        rows.push(row);
    }
    rows
}

/// Keyboard for the top screen: a single button opening the species list
pub fn top_keyboard(language: &str) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
        format!("{}{}", emoji::LOUD_SOUND, t_lang("voices-button", language)),
        SEND_VOICES.to_string(),
    )]])
}

/// Keyboard for the species list: one button per species packed into
/// width-bounded rows, plus a trailing back row
pub fn species_keyboard(species: Vec<(String, String)>, language: &str) -> InlineKeyboardMarkup {
    let mut keyboard: Vec<Vec<InlineKeyboardButton>> = pack_rows(species, MAX_ROW_WIDTH)
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|(key, name)| {
                    InlineKeyboardButton::callback(
                        format!("{}{}", emoji::MUSICAL_NOTE, name),
                        key,
                    )
                })
                .collect()
        })
        .collect();
    keyboard.push(back_row(BACK_VOICES, language));
    InlineKeyboardMarkup::new(keyboard)
}

/// Keyboard holding only a back button with the given payload
pub fn back_keyboard(callback_data: &str, language: &str) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![back_row(callback_data, language)])
}

fn back_row(callback_data: &str, language: &str) -> Vec<InlineKeyboardButton> {
    vec![InlineKeyboardButton::callback(
        format!("{}{}", emoji::BACK, t_lang("back-button", language)),
        callback_data.to_string(),
    )]
}
