use std::env;

use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    env::var("DICTIONARY_API_URL")
        .unwrap_or_else(|_| "https://freedictionaryapi.com/api/v1/entries".to_string())
}

fn default_timeout_seconds() -> u64 {
    env::var("DICTIONARY_TIMEOUT_SECONDS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(10)
}

fn default_translations() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Entries endpoint, `{api_url}/{language}/{word}` is appended per lookup
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Ask the API for translations alongside definitions
    #[serde(default = "default_translations")]
    pub translations: bool,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_seconds: default_timeout_seconds(),
            translations: default_translations(),
        }
    }
}
