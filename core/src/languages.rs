//! The fixed set of dictionary codes converted by default.

/// Aspell dictionary codes for the languages converted by default.
///
/// The codes name installed aspell dictionaries, so regional variants keep
/// aspell's spelling (`pt_BR`, `pt_PT`). Conversion runs in this order.
pub const DEFAULT_LANGUAGES: &[&str] = &[
    "af", "bg", "br", "ca", "cs", "cy", "da", "de", "el", "en", "eo", "es",
    "et", "eu", "fi", "fo", "fr", "ga", "gl", "he", "hr", "hu", "id", "is",
    "it", "lt", "lv", "nl", "no", "pl", "pt_BR", "pt_PT", "ro", "ru", "sk",
    "sl", "sr", "sv", "tr", "uk",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_languages_are_sorted_and_unique() {
        assert!(DEFAULT_LANGUAGES.is_sorted());
        let mut deduped = DEFAULT_LANGUAGES.to_vec();
        deduped.dedup();
        assert_eq!(deduped.len(), DEFAULT_LANGUAGES.len());
    }

    #[test]
    fn default_languages_look_like_dictionary_codes() {
        DEFAULT_LANGUAGES.iter().for_each(|code| {
            assert!(!code.is_empty());
            assert!(
                code.chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_'),
                "unexpected character in {code:?}",
            );
        });
    }
}
