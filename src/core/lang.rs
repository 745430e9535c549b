// Language tag mapping between the OCR-facing short codes and the two-letter
// codes the translation service consumes.

/// Target language tags accepted from the UI shell.
pub const TARGET_LANGUAGES: &[&str] = &["eng", "jpn", "spa", "fra", "deu", "ita", "kor", "zh"];

/// Map a short recognition-language tag to the two-letter translation code.
///
/// Unmapped tags default to "en".
pub fn to_two_letter(tag: &str) -> &'static str {
    match tag {
        "jpn" => "ja",
        "eng" => "en",
        "spa" => "es",
        "fra" => "fr",
        "deu" => "de",
        "ita" => "it",
        "kor" => "ko",
        "chi_sim" => "zh",
        "zh" => "zh",
        _ => "en",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags() {
        assert_eq!(to_two_letter("jpn"), "ja");
        assert_eq!(to_two_letter("eng"), "en");
        assert_eq!(to_two_letter("chi_sim"), "zh");
        assert_eq!(to_two_letter("zh"), "zh");
        assert_eq!(to_two_letter("kor"), "ko");
    }

    #[test]
    fn test_unknown_tags_default_to_english() {
        assert_eq!(to_two_letter("rus"), "en");
        assert_eq!(to_two_letter(""), "en");
        assert_eq!(to_two_letter("auto"), "en");
    }

    #[test]
    fn test_target_languages_all_map() {
        for tag in TARGET_LANGUAGES {
            assert!(!to_two_letter(tag).is_empty());
        }
    }
}
