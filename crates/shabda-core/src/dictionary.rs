use shabda_types::DictionaryResult;

/// Online dictionary interface
#[async_trait::async_trait]
pub trait DictionaryProvider: Send + Sync {
    /// Look up a headword in the given language
    async fn lookup(&self, language: &str, headword: &str)
    -> Result<DictionaryResult, LookupError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub base_url: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LookupError {
    #[error("Network error: {0}")]
    Unreachable(String),

    #[error("Request timed out")]
    Timeout,

    #[error("No entry for {0}")]
    NotFound(String),

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("API error: {0}")]
    Api(String),
}

impl LookupError {
    /// The API answered but had nothing usable for the word
    pub fn is_no_definition(&self) -> bool {
        matches!(self, LookupError::NotFound(_) | LookupError::Malformed(_))
    }
}
