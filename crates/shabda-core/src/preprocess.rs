use shabda_types::WordKey;
use unicode_normalization::UnicodeNormalization;

/// Trim, NFC-normalize and collapse internal whitespace
pub fn normalize_text(text: &str) -> String {
    let text = text.trim();

    if text.is_empty() {
        return String::new();
    }

    // NFC keeps combined diacritics (ś, ā) as single code points
    let text: String = text.nfc().collect();

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn normalize_language(language: &str) -> String {
    normalize_text(language).to_lowercase()
}

/// Tag labels compare case-insensitively
pub fn normalize_tag(label: &str) -> String {
    normalize_text(label).to_lowercase()
}

/// Key identifying a word bank entry
pub fn word_key(language: &str, headword: &str) -> WordKey {
    WordKey {
        language: normalize_language(language),
        headword: normalize_text(headword).to_lowercase(),
    }
}
