use shabda_types::{DailyWord, LanguageOption};

/// Codes must match the ones FreeDictionaryAPI accepts
pub fn default_languages() -> Vec<LanguageOption> {
    vec![
        LanguageOption::new("en", "English"),
        LanguageOption::new("hi", "Hindi"),
        LanguageOption::new("sa", "Sanskrit"),
        LanguageOption::new("ta", "Tamil"),
        LanguageOption::new("es", "Spanish"),
        LanguageOption::new("fr", "French"),
        LanguageOption::new("de", "German"),
        LanguageOption::new("all", "All languages (advanced)"),
    ]
}

pub fn default_daily_words() -> Vec<DailyWord> {
    vec![
        DailyWord::new("sattva", "sa"),
        DailyWord::new("tamas", "sa"),
        DailyWord::new("rajas", "sa"),
        DailyWord::new("śiva", "sa"),
        DailyWord::new("dharma", "sa"),
        DailyWord::new("karma", "sa"),
        DailyWord::new("bhakti", "sa"),
        DailyWord::new("śānti", "sa"),
        DailyWord::new("serene", "en"),
        DailyWord::new("benevolent", "en"),
        DailyWord::new("gratitude", "en"),
        DailyWord::new("सत्य", "hi"),
        DailyWord::new("शक्ति", "hi"),
        DailyWord::new("அன்பு", "ta"),
        DailyWord::new("அருள்", "ta"),
    ]
}

/// Human label for a language code, falling back to the code itself
pub fn language_label<'a>(languages: &'a [LanguageOption], code: &'a str) -> &'a str {
    languages
        .iter()
        .find(|l| l.code == code)
        .map(|l| l.label.as_str())
        .unwrap_or(code)
}
