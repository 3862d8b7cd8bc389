//! # Localization Module
//!
//! Fluent-backed string tables for all user-facing bot text. One bundle is
//! loaded per `./locales/<lang>/main.ftl` directory at startup; lookups for
//! unsupported languages or missing keys fall back to English.

use anyhow::{ensure, Context, Result};
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource, FluentValue};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use unic_langid::LanguageIdentifier;

use crate::locale::DEFAULT_LANGUAGE;

const LOCALES_DIR: &str = "./locales";

/// Localization manager holding one Fluent bundle per supported language
pub struct LocalizationManager {
    bundles: HashMap<String, FluentBundle<FluentResource>>,
}

impl LocalizationManager {
    /// Create a manager from every `<lang>/main.ftl` under `./locales`
    pub fn new() -> Result<Self> {
        Self::from_dir(Path::new(LOCALES_DIR))
    }

    pub fn from_dir(locales_dir: &Path) -> Result<Self> {
        let mut bundles = HashMap::new();

        let entries = fs::read_dir(locales_dir)
            .with_context(|| format!("Failed to read locales dir {}", locales_dir.display()))?;
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let language = entry.file_name().to_string_lossy().into_owned();
            let resource_path = entry.path().join("main.ftl");
            if !resource_path.exists() {
                continue;
            }
            let bundle = Self::create_bundle(&language, &resource_path)?;
            bundles.insert(language, bundle);
        }

        ensure!(
            bundles.contains_key(DEFAULT_LANGUAGE),
            "Locales dir {} must provide the {} fallback bundle",
            locales_dir.display(),
            DEFAULT_LANGUAGE
        );
        Ok(Self { bundles })
    }

    /// Create a fluent bundle for a specific locale
    fn create_bundle(
        language: &str,
        resource_path: &Path,
    ) -> Result<FluentBundle<FluentResource>> {
        let langid: LanguageIdentifier = language
            .parse()
            .with_context(|| format!("Invalid locale directory name {language}"))?;
        let mut bundle = FluentBundle::new_concurrent(vec![langid]);
        // No bidi isolation marks around arguments; Telegram renders plain text
        bundle.set_use_isolating(false);

        let content = fs::read_to_string(resource_path)
            .with_context(|| format!("Failed to read {}", resource_path.display()))?;
        let resource = FluentResource::try_new(content)
            .map_err(|_| anyhow::anyhow!("Failed to parse {}", resource_path.display()))?;
        bundle
            .add_resource(resource)
            .map_err(|_| anyhow::anyhow!("Conflicting messages in {}", resource_path.display()))?;

        Ok(bundle)
    }

    pub fn is_language_supported(&self, language: &str) -> bool {
        self.bundles.contains_key(language)
    }

    /// Get a localized message, falling back to English for unsupported
    /// languages and missing keys
    pub fn get_message_in_language(
        &self,
        key: &str,
        language: &str,
        args: Option<&HashMap<&str, &str>>,
    ) -> String {
        if let Some(bundle) = self.bundles.get(language) {
            if let Some(message) = Self::format_message(bundle, key, args) {
                return message;
            }
        }
        if language != DEFAULT_LANGUAGE {
            if let Some(bundle) = self.bundles.get(DEFAULT_LANGUAGE) {
                if let Some(message) = Self::format_message(bundle, key, args) {
                    return message;
                }
            }
        }
        format!("Missing translation: {key}")
    }

    fn format_message(
        bundle: &FluentBundle<FluentResource>,
        key: &str,
        args: Option<&HashMap<&str, &str>>,
    ) -> Option<String> {
        let message = bundle.get_message(key)?;
        let pattern = message.value()?;

        let mut value = String::new();
        if let Some(args) = args {
            let fluent_args =
                FluentArgs::from_iter(args.iter().map(|(k, v)| (*k, FluentValue::from(*v))));
            let _ = bundle.write_pattern(&mut value, pattern, Some(&fluent_args), &mut vec![]);
        } else {
            let _ = bundle.write_pattern(&mut value, pattern, None, &mut vec![]);
        }
        Some(value)
    }
}

/// Global localization instance
static LOCALIZATION_MANAGER: OnceLock<LocalizationManager> = OnceLock::new();

/// Initialize the global localization manager. Safe to call more than once;
/// later calls keep the first manager.
pub fn init_localization() -> Result<()> {
    if LOCALIZATION_MANAGER.get().is_some() {
        return Ok(());
    }
    let manager = LocalizationManager::new()?;
    let _ = LOCALIZATION_MANAGER.set(manager);
    Ok(())
}

/// Get the global localization manager
pub fn get_localization_manager() -> &'static LocalizationManager {
    LOCALIZATION_MANAGER
        .get()
        .expect("Localization manager not initialized")
}

/// Convenience function to get a localized message
pub fn t_lang(key: &str, language: &str) -> String {
    get_localization_manager().get_message_in_language(key, language, None)
}

/// Convenience function to get a localized message with arguments
pub fn t_args_lang(key: &str, args: &[(&str, &str)], language: &str) -> String {
    let args_map: HashMap<&str, &str> = args.iter().cloned().collect();
    get_localization_manager().get_message_in_language(key, language, Some(&args_map))
}
