//! System locale detection.

use crate::core::Language;

/// Maps a system locale such as `"fr-FR"`, `"sw_KE"` or `"rw"` to a supported
/// language by its language part. System locales are normalized here, unlike
/// codes given by the user.
pub fn language_from_locale(locale: &str) -> Option<Language> {
    let lang_code = locale.trim().split(['-', '_', '.']).next()?;
    Language::from_code(&lang_code.to_ascii_lowercase()).ok()
}

/// Detects the user's language from the system locale.
/// Falls back to English if detection fails or the language is not supported.
pub fn detect_system_language() -> Language {
    sys_locale::get_locale()
        .as_deref()
        .and_then(language_from_locale)
        .unwrap_or_default()
}
