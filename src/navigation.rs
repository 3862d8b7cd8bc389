//! # Navigation Engine Module
//!
//! The conversation state machine: classifies one inbound event (command or
//! button press) against the catalog and produces the screen to render.
//!
//! The engine is stateless across turns. Every transition is computed from
//! the event payload, the referencing message identity (send vs. edit), and
//! catalog membership alone; no dialog history is kept. A consequence kept
//! on purpose: a back-button press replayed from a superseded message is
//! still served against whichever message it references.

use rand::seq::SliceRandom;

use crate::catalog::Catalog;
use crate::errors::BotError;

/// The /start command text
pub const START_COMMAND: &str = "/start";

/// Callback payload opening the species list
pub const SEND_VOICES: &str = "/send_voices";
/// Callback payload returning from the species list to the top screen
pub const BACK_VOICES: &str = "/back_voices";
/// Callback payload returning from a bird's voice to the species list
pub const BACK_BIRD_VOICE: &str = "/back_bird_voice";

/// An inbound conversation event, stripped down to its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationEvent<'a> {
    /// A plain text message
    Command(&'a str),
    /// An inline keyboard button press
    ButtonPress(&'a str),
}

/// Rendering instruction produced by one navigation step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Entry screen: sent as a fresh message on /start, edited in place on
    /// back-navigation
    Top { edit: bool },
    /// Species selection keyboard, always an edit of the pressed message.
    /// Pairs are (canonical key, localized display name); an empty list
    /// renders the empty-catalog notice instead of the grid.
    SpeciesList { species: Vec<(String, String)> },
    /// Delete the pressed keyboard message, then announce the bird, send
    /// the chosen clip as a voice attachment, and offer a back button
    BirdVoice {
        key: String,
        display_name: String,
        clip: String,
    },
    /// The species has no recordings in this language; the pressed message
    /// is edited to an empty notice
    BirdVoiceEmpty,
}

/// Compute the screen for one inbound event.
///
/// Unknown payloads and non-/start text produce `Ok(None)`: the event is
/// ignored without an error. Storage failures while resolving clips
/// propagate so the handler can abort the turn.
pub fn navigate(
    event: ConversationEvent<'_>,
    catalog: &Catalog,
    language: &str,
) -> Result<Option<Screen>, BotError> {
    match event {
        ConversationEvent::Command(text) => {
            if text == START_COMMAND {
                Ok(Some(Screen::Top { edit: false }))
            } else {
                Ok(None)
            }
        }
        ConversationEvent::ButtonPress(data) => match data {
            SEND_VOICES | BACK_BIRD_VOICE => Ok(Some(species_list_screen(catalog, language))),
            BACK_VOICES => Ok(Some(Screen::Top { edit: true })),
            key if catalog.contains_species(key) => {
                bird_voice_screen(catalog, language, key).map(Some)
            }
            _ => Ok(None),
        },
    }
}

fn species_list_screen(catalog: &Catalog, language: &str) -> Screen {
    let mut species: Vec<(String, String)> =
        catalog.available_species(language).into_iter().collect();
    // Deterministic screen content; the keyboard re-sorts by label anyway
    species.sort();
    Screen::SpeciesList { species }
}

fn bird_voice_screen(catalog: &Catalog, language: &str, key: &str) -> Result<Screen, BotError> {
    let clips = catalog.audio_clips(language, key)?;
    let Some(clip) = clips.choose(&mut rand::thread_rng()) else {
        return Ok(Screen::BirdVoiceEmpty);
    };
    let display_name = catalog.display_name(language, key)?;
    Ok(Screen::BirdVoice {
        key: key.to_string(),
        display_name,
        clip: clip.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Catalog pointing at a voices dir that does not exist, so every
    /// species resolves to zero clips
    fn catalog_without_voices() -> Catalog {
        let species = HashMap::from([
            (
                "Common Cuckoo".to_string(),
                HashMap::from([("ru".to_string(), "Обыкновенная кукушка".to_string())]),
            ),
            ("Great Tit".to_string(), HashMap::new()),
        ]);
        Catalog::new(species, "./no-such-voices-dir".into())
    }

    #[test]
    fn test_start_command_sends_top_screen() {
        let catalog = catalog_without_voices();
        let screen = navigate(ConversationEvent::Command("/start"), &catalog, "en").unwrap();
        assert_eq!(screen, Some(Screen::Top { edit: false }));
    }

    #[test]
    fn test_other_text_is_ignored() {
        let catalog = catalog_without_voices();
        let screen = navigate(ConversationEvent::Command("hello"), &catalog, "en").unwrap();
        assert_eq!(screen, None);
    }

    #[test]
    fn test_back_voices_edits_top_screen() {
        let catalog = catalog_without_voices();
        let screen = navigate(ConversationEvent::ButtonPress("/back_voices"), &catalog, "en")
            .unwrap();
        assert_eq!(screen, Some(Screen::Top { edit: true }));
    }

    #[test]
    fn test_send_voices_lists_species_for_default_language() {
        let catalog = catalog_without_voices();
        let screen = navigate(ConversationEvent::ButtonPress("/send_voices"), &catalog, "en")
            .unwrap()
            .unwrap();

        let Screen::SpeciesList { mut species } = screen else {
            panic!("expected species list");
        };
        species.sort();
        assert_eq!(
            species,
            vec![
                ("Common Cuckoo".to_string(), "Common Cuckoo".to_string()),
                ("Great Tit".to_string(), "Great Tit".to_string()),
            ]
        );
    }

    #[test]
    fn test_species_list_filters_by_language() {
        let catalog = catalog_without_voices();
        let screen = navigate(ConversationEvent::ButtonPress("/send_voices"), &catalog, "ru")
            .unwrap()
            .unwrap();

        let Screen::SpeciesList { species } = screen else {
            panic!("expected species list");
        };
        assert_eq!(
            species,
            vec![(
                "Common Cuckoo".to_string(),
                "Обыкновенная кукушка".to_string()
            )]
        );
    }

    #[test]
    fn test_back_bird_voice_returns_to_species_list() {
        let catalog = catalog_without_voices();
        let screen = navigate(
            ConversationEvent::ButtonPress("/back_bird_voice"),
            &catalog,
            "en",
        )
        .unwrap();
        assert!(matches!(screen, Some(Screen::SpeciesList { .. })));
    }

    #[test]
    fn test_species_without_clips_yields_empty_screen() {
        let catalog = catalog_without_voices();
        let screen = navigate(ConversationEvent::ButtonPress("Great Tit"), &catalog, "en")
            .unwrap();
        assert_eq!(screen, Some(Screen::BirdVoiceEmpty));
    }

    #[test]
    fn test_unknown_payload_is_ignored() {
        let catalog = catalog_without_voices();
        let screen = navigate(
            ConversationEvent::ButtonPress("unknown_xyz"),
            &catalog,
            "en",
        )
        .unwrap();
        assert_eq!(screen, None);
    }

    #[test]
    fn test_species_list_is_stable_across_round_trips() {
        // SEND_VOICES -> BACK_VOICES -> SEND_VOICES reproduces the same list
        let catalog = catalog_without_voices();
        let first = navigate(ConversationEvent::ButtonPress("/send_voices"), &catalog, "ru")
            .unwrap()
            .unwrap();
        let back = navigate(ConversationEvent::ButtonPress("/back_voices"), &catalog, "ru")
            .unwrap();
        assert_eq!(back, Some(Screen::Top { edit: true }));
        let second = navigate(ConversationEvent::ButtonPress("/send_voices"), &catalog, "ru")
            .unwrap()
            .unwrap();
        assert_eq!(first, second);
    }
}
