use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type LanguageCode = String;

/// Identity of a word bank entry: normalized (language, headword)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WordKey {
    pub language: LanguageCode,
    pub headword: String,
}

impl fmt::Display for WordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.language, self.headword)
    }
}

/// One meaning of a word as reported by the dictionary
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Sense {
    pub meaning: String,
    pub part_of_speech: Option<String>,
    pub examples: Vec<String>,
    pub synonyms: Vec<String>,
    pub language_code: Option<String>,
    pub language_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Translation {
    pub language_code: Option<String>,
    pub language_name: Option<String>,
    pub word: String,
}

/// Normalized result of a dictionary lookup
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DictionaryResult {
    pub headword: String,
    pub senses: Vec<Sense>,
    pub translations: Vec<Translation>,
    pub source_url: Option<String>,
}

/// A user's personal record for one (language, headword) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub id: Uuid,
    pub language: LanguageCode,
    pub headword: String,
    #[serde(default)]
    pub senses: Vec<Sense>,
    #[serde(default)]
    pub translations: Vec<Translation>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub favourite: bool,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub notes: Vec<WordNote>,
    pub first_seen: DateTime<Utc>,
    /// Last time the dictionary fields were fetched
    pub last_seen: DateTime<Utc>,
}

impl WordEntry {
    /// First meaning, used for previews
    pub fn short_definition(&self) -> Option<&str> {
        self.senses.first().map(|s| s.meaning.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordNote {
    pub id: Uuid,
    pub text: String,
    #[serde(default)]
    pub important: bool,
    pub created_at: DateTime<Utc>,
    /// Owning entry
    pub word: WordKey,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralNote {
    pub id: Uuid,
    pub text: String,
    #[serde(default)]
    pub important: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagKind {
    /// Derived from the entry language
    Language,
    User,
}

impl TagKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TagKind::Language => "language",
            TagKind::User => "user",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub label: String,
    pub kind: TagKind,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub id: Uuid,
    pub headword: String,
    pub language: LanguageCode,
    pub looked_up_at: DateTime<Utc>,
}

/// Everything persisted for one user
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Records {
    pub words: Vec<WordEntry>,
    pub general_notes: Vec<GeneralNote>,
    pub tags: Vec<Tag>,
    pub history: Vec<HistoryItem>,
}

impl Records {
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
            && self.general_notes.is_empty()
            && self.tags.is_empty()
            && self.history.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageOption {
    pub code: LanguageCode,
    pub label: String,
}

impl LanguageOption {
    pub fn new(code: &str, label: &str) -> Self {
        Self {
            code: code.to_string(),
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyWord {
    pub word: String,
    pub language: LanguageCode,
}

impl DailyWord {
    pub fn new(word: &str, language: &str) -> Self {
        Self {
            word: word.to_string(),
            language: language.to_string(),
        }
    }
}
