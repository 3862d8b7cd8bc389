//! # Navigation Tests
//!
//! Integration tests for the navigation engine against a catalog with real
//! voice directories, covering the full transition table and the voice
//! selection path.

use birdcalls::catalog::Catalog;
use birdcalls::locale::resolve_language;
use birdcalls::navigation::{
    navigate, ConversationEvent, Screen, BACK_BIRD_VOICE, BACK_VOICES, SEND_VOICES,
    START_COMMAND,
};
use std::collections::HashMap;
use std::fs;
use tempfile::TempDir;

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_with_voices() -> (TempDir, Catalog) {
        let dir = tempfile::tempdir().expect("Failed to create temp voices dir");
        let root = dir.path();

        let great_tit = root.join("en").join("great_tit");
        fs::create_dir_all(&great_tit).unwrap();
        fs::write(great_tit.join("song-a.ogg"), b"a").unwrap();
        fs::write(great_tit.join("song-b.ogg"), b"b").unwrap();
        fs::write(great_tit.join("song-c.ogg"), b"c").unwrap();

        fs::create_dir_all(root.join("en").join("song_thrush")).unwrap();

        let species = HashMap::from([
            (
                "Great Tit".to_string(),
                HashMap::from([("ru".to_string(), "Большая синица".to_string())]),
            ),
            ("Song Thrush".to_string(), HashMap::new()),
        ]);
        let catalog = Catalog::new(species, root.to_path_buf());
        (dir, catalog)
    }

    #[test]
    fn test_start_yields_fresh_top_screen() {
        let (_dir, catalog) = catalog_with_voices();
        let screen = navigate(ConversationEvent::Command(START_COMMAND), &catalog, "en").unwrap();
        assert_eq!(screen, Some(Screen::Top { edit: false }));
    }

    #[test]
    fn test_send_voices_yields_species_list() {
        let (_dir, catalog) = catalog_with_voices();
        let screen = navigate(ConversationEvent::ButtonPress(SEND_VOICES), &catalog, "en")
            .unwrap()
            .unwrap();
        let Screen::SpeciesList { species } = screen else {
            panic!("expected species list");
        };
        assert_eq!(species.len(), 2);
    }

    #[test]
    fn test_species_with_clips_yields_voice_screen() {
        let (_dir, catalog) = catalog_with_voices();
        let screen = navigate(ConversationEvent::ButtonPress("Great Tit"), &catalog, "en")
            .unwrap()
            .unwrap();

        let Screen::BirdVoice {
            key,
            display_name,
            clip,
        } = screen
        else {
            panic!("expected bird voice screen");
        };
        assert_eq!(key, "Great Tit");
        assert_eq!(display_name, "Great Tit");
        assert!(["song-a.ogg", "song-b.ogg", "song-c.ogg"].contains(&clip.as_str()));
    }

    #[test]
    fn test_voice_screen_uses_localized_display_name() {
        let (dir, _) = catalog_with_voices();
        // Russian bucket still keys on the lowercased canonical name
        let tit = dir.path().join("ru").join("great_tit");
        fs::create_dir_all(&tit).unwrap();
        fs::write(tit.join("zvuk.ogg"), b"z").unwrap();

        let species = HashMap::from([(
            "Great Tit".to_string(),
            HashMap::from([("ru".to_string(), "Большая синица".to_string())]),
        )]);
        let catalog = Catalog::new(species, dir.path().to_path_buf());

        let screen = navigate(ConversationEvent::ButtonPress("Great Tit"), &catalog, "ru")
            .unwrap()
            .unwrap();
        let Screen::BirdVoice {
            display_name, clip, ..
        } = screen
        else {
            panic!("expected bird voice screen");
        };
        assert_eq!(display_name, "Большая синица");
        assert_eq!(clip, "zvuk.ogg");
    }

    #[test]
    fn test_species_without_clips_yields_empty_notice() {
        let (_dir, catalog) = catalog_with_voices();
        let screen = navigate(ConversationEvent::ButtonPress("Song Thrush"), &catalog, "en")
            .unwrap();
        assert_eq!(screen, Some(Screen::BirdVoiceEmpty));
    }

    #[test]
    fn test_back_buttons_replay_their_screens() {
        let (_dir, catalog) = catalog_with_voices();

        let top = navigate(ConversationEvent::ButtonPress(BACK_VOICES), &catalog, "en").unwrap();
        assert_eq!(top, Some(Screen::Top { edit: true }));

        // A stale back press from a superseded message is still served
        let list = navigate(
            ConversationEvent::ButtonPress(BACK_BIRD_VOICE),
            &catalog,
            "en",
        )
        .unwrap();
        assert!(matches!(list, Some(Screen::SpeciesList { .. })));
    }

    #[test]
    fn test_unknown_inputs_are_no_ops() {
        let (_dir, catalog) = catalog_with_voices();

        for event in [
            ConversationEvent::Command("hello birds"),
            ConversationEvent::Command("/help"),
            ConversationEvent::ButtonPress("unknown_xyz"),
            ConversationEvent::ButtonPress(""),
        ] {
            assert_eq!(navigate(event, &catalog, "en").unwrap(), None, "{event:?}");
        }
    }

    #[test]
    fn test_round_trip_reproduces_species_list() {
        let (_dir, catalog) = catalog_with_voices();

        let first = navigate(ConversationEvent::ButtonPress(SEND_VOICES), &catalog, "en")
            .unwrap()
            .unwrap();
        navigate(ConversationEvent::ButtonPress(BACK_VOICES), &catalog, "en").unwrap();
        let second = navigate(ConversationEvent::ButtonPress(SEND_VOICES), &catalog, "en")
            .unwrap()
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unsupported_user_language_serves_default_catalog() {
        let (_dir, catalog) = catalog_with_voices();

        let language = resolve_language(Some("de-DE"), &catalog);
        assert_eq!(language, "en");

        let screen = navigate(ConversationEvent::ButtonPress(SEND_VOICES), &catalog, &language)
            .unwrap()
            .unwrap();
        let Screen::SpeciesList { species } = screen else {
            panic!("expected species list");
        };
        assert!(species
            .iter()
            .all(|(key, name)| key == name));
    }
}
