use std::collections::BTreeSet;

use shabda_types::{Records, WordEntry};

use crate::preprocess::{normalize_tag, normalize_text};

/// Free-text query and/or required tags. Empty matches everything.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pub text: Option<String>,
    pub tags: BTreeSet<String>,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: &str) -> Self {
        let text = normalize_text(text).to_lowercase();
        self.text = (!text.is_empty()).then_some(text);
        self
    }

    pub fn tag(mut self, label: &str) -> Self {
        let label = normalize_tag(label);
        if !label.is_empty() {
            self.tags.insert(label);
        }
        self
    }

    fn matches(&self, entry: &WordEntry) -> bool {
        if !self.tags.is_subset(&entry.tags) {
            return false;
        }

        let Some(needle) = &self.text else {
            return true;
        };
        let contains = |haystack: &str| haystack.to_lowercase().contains(needle.as_str());

        contains(&entry.headword)
            || entry.senses.iter().any(|s| contains(&s.meaning))
            || entry.notes.iter().any(|n| contains(&n.text))
    }
}

/// Linear scan in stored order
pub fn search<'a>(records: &'a Records, query: &SearchQuery) -> Vec<&'a WordEntry> {
    let results: Vec<_> = records.words.iter().filter(|w| query.matches(w)).collect();
    tracing::debug!("Search {:?} matched {} entries", query, results.len());
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::{self, LookupRequest, lookup};
    use crate::notes;
    use crate::preprocess::word_key;
    use crate::testing::FakeDictionary;

    async fn sample() -> Records {
        let dict = FakeDictionary::new()
            .with_meaning("en", "serene", "Calm and peaceful")
            .with_meaning("en", "ephemeral", "lasting a short time")
            .with_meaning("sa", "śānti", "peace");
        let mut records = Records::default();
        for (lang, word) in [("en", "serene"), ("en", "ephemeral"), ("sa", "śānti")] {
            lookup(&mut records, &dict, &LookupRequest::new(lang, word))
                .await
                .unwrap();
        }
        bank::add_tag(&mut records, &word_key("en", "serene"), "mood").unwrap();
        notes::add_word_note(&mut records, &word_key("en", "ephemeral"), "like a Mayfly", false)
            .unwrap();
        records
    }

    fn words(results: Vec<&WordEntry>) -> Vec<&str> {
        results.into_iter().map(|w| w.headword.as_str()).collect()
    }

    #[tokio::test]
    async fn test_empty_query_returns_all_in_order() {
        let records = sample().await;
        assert_eq!(
            words(search(&records, &SearchQuery::new())),
            ["serene", "ephemeral", "śānti"]
        );
    }

    #[tokio::test]
    async fn test_text_matches_headword_meaning_and_notes() {
        let records = sample().await;

        assert_eq!(words(search(&records, &SearchQuery::new().text("SER"))), ["serene"]);
        assert_eq!(
            words(search(&records, &SearchQuery::new().text("peace"))),
            ["serene", "śānti"]
        );
        assert_eq!(words(search(&records, &SearchQuery::new().text("mayfly"))), ["ephemeral"]);
        assert!(search(&records, &SearchQuery::new().text("xyz")).is_empty());
    }

    #[tokio::test]
    async fn test_tags_intersect_with_text() {
        let records = sample().await;

        assert_eq!(words(search(&records, &SearchQuery::new().tag("SA"))), ["śānti"]);
        assert_eq!(
            words(search(&records, &SearchQuery::new().text("peace").tag("en"))),
            ["serene"]
        );
        assert_eq!(
            words(search(&records, &SearchQuery::new().tag("en").tag("mood"))),
            ["serene"]
        );
        assert!(search(&records, &SearchQuery::new().tag("mood").tag("sa")).is_empty());
    }
}
