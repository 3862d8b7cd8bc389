//! # Species Catalog Module
//!
//! The immutable species catalog: canonical keys (English common names)
//! mapped to per-language display names, plus resolution of the voice
//! recordings stored on disk under `<voices_dir>/<lang>/<species_dir>/`.
//!
//! The catalog is loaded once at startup and shared behind an `Arc`; all
//! lookups are read-only and reentrant.

use anyhow::{ensure, Context, Result};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::errors::BotError;
use crate::locale::DEFAULT_LANGUAGE;

/// Immutable species catalog with voice storage resolution
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Canonical species key -> language -> localized display name
    species: HashMap<String, HashMap<String, String>>,
    voices_dir: PathBuf,
}

impl Catalog {
    pub fn new(species: HashMap<String, HashMap<String, String>>, voices_dir: PathBuf) -> Self {
        Self {
            species,
            voices_dir,
        }
    }

    /// Load the catalog from a JSON file shaped as
    /// `{ "Great Tit": { "ru": "Большая синица", ... }, ... }`
    pub fn load(birds_file: &Path, voices_dir: PathBuf) -> Result<Self> {
        let content = fs::read_to_string(birds_file)
            .with_context(|| format!("Failed to read species catalog {}", birds_file.display()))?;
        let species: HashMap<String, HashMap<String, String>> = serde_json::from_str(&content)
            .with_context(|| {
                format!("Failed to parse species catalog {}", birds_file.display())
            })?;
        ensure!(
            !species.is_empty(),
            "Species catalog {} must not be empty",
            birds_file.display()
        );
        Ok(Self::new(species, voices_dir))
    }

    /// Languages for which at least one species has a localized name
    pub fn supported_languages(&self) -> HashSet<&str> {
        self.species
            .values()
            .flat_map(|translations| translations.keys())
            .map(String::as_str)
            .collect()
    }

    /// Whether a callback payload names a species in this catalog
    pub fn contains_species(&self, key: &str) -> bool {
        self.species.contains_key(key)
    }

    pub fn species_count(&self) -> usize {
        self.species.len()
    }

    /// Species available in the given language, as key -> display name.
    ///
    /// The default language lists every species under its canonical key;
    /// other languages list only species that carry a translation.
    pub fn available_species(&self, language: &str) -> HashMap<String, String> {
        if language == DEFAULT_LANGUAGE {
            return self
                .species
                .keys()
                .map(|key| (key.clone(), key.clone()))
                .collect();
        }

        self.species
            .iter()
            .filter_map(|(key, translations)| {
                translations
                    .get(language)
                    .map(|name| (key.clone(), name.clone()))
            })
            .collect()
    }

    /// Display name of one species in the given language, falling back to
    /// the canonical key when no translation exists.
    pub fn display_name(&self, language: &str, key: &str) -> Result<String, BotError> {
        let translations = self
            .species
            .get(key)
            .ok_or_else(|| BotError::SpeciesNotFound(key.to_string()))?;

        if language != DEFAULT_LANGUAGE {
            if let Some(name) = translations.get(language) {
                return Ok(name.clone());
            }
        }
        Ok(key.to_string())
    }

    /// Filenames of the voice recordings for a species in a language, in
    /// directory enumeration order. A missing directory is an empty list,
    /// not an error; the order carries no meaning because a clip is chosen
    /// at random from it.
    pub fn audio_clips(&self, language: &str, key: &str) -> Result<Vec<String>, BotError> {
        let dir = self.voice_dir(language, key);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                return Err(BotError::ResourceUnavailable(format!(
                    "{}: {err}",
                    dir.display()
                )))
            }
        };

        let mut clips = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|err| {
                BotError::ResourceUnavailable(format!("{}: {err}", dir.display()))
            })?;
            let file_type = entry.file_type().map_err(|err| {
                BotError::ResourceUnavailable(format!("{}: {err}", dir.display()))
            })?;
            if file_type.is_file() {
                clips.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(clips)
    }

    /// Open one clip for reading. The returned handle is dropped (and the
    /// file closed) when the caller finishes the send, on every exit path.
    pub async fn open_clip(
        &self,
        language: &str,
        key: &str,
        clip: &str,
    ) -> Result<tokio::fs::File, BotError> {
        let path = self.voice_dir(language, key).join(clip);
        tokio::fs::File::open(&path).await.map_err(|err| {
            BotError::ResourceUnavailable(format!("{}: {err}", path.display()))
        })
    }

    fn voice_dir(&self, language: &str, key: &str) -> PathBuf {
        self.voices_dir.join(language).join(species_dir_name(key))
    }
}

/// Directory identifier for a species key: lowercased, spaces to
/// underscores. Filesystem lookup only; key identity is untouched.
pub fn species_dir_name(key: &str) -> String {
    key.to_lowercase().replace(' ', "_")
}
