//! # Locale Resolution Module
//!
//! Maps the raw language tag Telegram attaches to a user onto a language the
//! species catalog can actually serve, falling back to English otherwise.

use crate::catalog::Catalog;

/// Default language used when the user's tag is absent or unsupported
pub const DEFAULT_LANGUAGE: &str = "en";

/// Resolve a raw user language tag against the catalog.
///
/// A language is supported when at least one species carries a localized
/// name for it. Anything else (including a missing tag) resolves to
/// [`DEFAULT_LANGUAGE`]. Total: never fails.
pub fn resolve_language(raw_tag: Option<&str>, catalog: &Catalog) -> String {
    let Some(tag) = raw_tag else {
        return DEFAULT_LANGUAGE.to_string();
    };

    let language = primary_subtag(tag);
    if catalog.supported_languages().contains(language.as_str()) {
        language
    } else {
        DEFAULT_LANGUAGE.to_string()
    }
}

/// Extract the lowercase primary subtag from tags like `fr-CA` or `sr_Latn`
fn primary_subtag(tag: &str) -> String {
    tag.split(['-', '_'])
        .next()
        .unwrap_or(tag)
        .to_ascii_lowercase()
}
