use shabda_store::StoreError;
use shabda_types::WordKey;
use uuid::Uuid;

use crate::dictionary::LookupError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Lookup failed for {key}: {source}")]
    LookupFailed {
        key: WordKey,
        #[source]
        source: LookupError,
    },

    #[error("No definition found for {key}: {source}")]
    NoDefinition {
        key: WordKey,
        #[source]
        source: LookupError,
    },

    #[error("Word not in word bank: {0}")]
    WordNotFound(WordKey),

    #[error("Note not found: {0}")]
    NoteNotFound(Uuid),

    #[error("History item not found: {0}")]
    HistoryItemNotFound(Uuid),

    #[error("{0} must not be empty")]
    EmptyInput(&'static str),

    #[error("Dump holds more than one entry for {0}")]
    DuplicateWord(WordKey),

    #[error("Unsupported dump version: {0}")]
    UnsupportedDump(u32),

    #[error("Export error: {0}")]
    Export(#[from] serde_json::Error),

    #[error("Render error: {0}")]
    Render(#[from] std::fmt::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CoreError {
    pub(crate) fn from_lookup(key: WordKey, source: LookupError) -> Self {
        if source.is_no_definition() {
            CoreError::NoDefinition { key, source }
        } else {
            CoreError::LookupFailed { key, source }
        }
    }
}
