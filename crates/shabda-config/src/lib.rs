use std::env;

use serde::{Deserialize, Serialize};
use shabda_types::{DailyWord, LanguageOption};

use self::dictionary::DictionaryConfig;
use self::languages::{default_daily_words, default_languages};
use self::storage::StorageConfig;

pub mod dictionary;
pub mod languages;
pub mod storage;

fn default_language() -> String {
    env::var("DEFAULT_LANGUAGE").unwrap_or_else(|_| "en".to_string())
}

fn default_history_limit() -> usize {
    env::var("HISTORY_LIMIT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(20)
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub dictionary: DictionaryConfig,

    /// Language used when a command does not name one
    #[serde(default = "default_language")]
    pub default_language: String,
    /// Number of history items shown by default
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    #[serde(default = "default_languages")]
    pub languages: Vec<LanguageOption>,
    /// Rotation list for the word of the day
    #[serde(default = "default_daily_words")]
    pub daily_words: Vec<DailyWord>,
}

impl Config {
    pub fn new() -> Self {
        Config {
            storage: StorageConfig::default(),
            dictionary: DictionaryConfig::default(),

            default_language: default_language(),
            history_limit: default_history_limit(),
            languages: default_languages(),
            daily_words: default_daily_words(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
