use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use shabda_types::{DictionaryResult, Sense};

use crate::dictionary::{DictionaryProvider, LookupError, ProviderMetadata};

/// In-memory dictionary with canned answers
#[derive(Default)]
pub(crate) struct FakeDictionary {
    answers: Mutex<HashMap<(String, String), Result<DictionaryResult, LookupError>>>,
    calls: AtomicUsize,
}

impl FakeDictionary {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_meaning(self, language: &str, word: &str, meaning: &str) -> Self {
        self.set(language, word, Ok(result(word, meaning)));
        self
    }

    pub(crate) fn with_error(self, language: &str, word: &str, error: LookupError) -> Self {
        self.set(language, word, Err(error));
        self
    }

    pub(crate) fn set(
        &self,
        language: &str,
        word: &str,
        answer: Result<DictionaryResult, LookupError>,
    ) {
        self.answers
            .lock()
            .unwrap()
            .insert((language.to_string(), word.to_string()), answer);
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

pub(crate) fn result(word: &str, meaning: &str) -> DictionaryResult {
    DictionaryResult {
        headword: word.to_string(),
        senses: vec![Sense {
            meaning: meaning.to_string(),
            part_of_speech: Some("adjective".to_string()),
            ..Default::default()
        }],
        translations: vec![],
        source_url: Some(format!("https://en.wiktionary.org/wiki/{word}")),
    }
}

#[async_trait::async_trait]
impl DictionaryProvider for FakeDictionary {
    async fn lookup(
        &self,
        language: &str,
        headword: &str,
    ) -> Result<DictionaryResult, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answers
            .lock()
            .unwrap()
            .get(&(language.to_string(), headword.to_string()))
            .cloned()
            .unwrap_or_else(|| Err(LookupError::NotFound(headword.to_string())))
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "fake".to_string(),
            base_url: "memory://".to_string(),
        }
    }
}
