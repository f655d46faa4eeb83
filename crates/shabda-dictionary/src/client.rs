use std::time::Duration;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use shabda_config::dictionary::DictionaryConfig;
use shabda_core::dictionary::{DictionaryProvider, LookupError, ProviderMetadata};
use shabda_types::DictionaryResult;

use crate::schema::parse_response;

/// FreeDictionaryAPI.com client
#[derive(Clone)]
pub struct FreeDictionaryClient {
    client: reqwest::Client,
    base_url: Url,
    translations: bool,
}

impl FreeDictionaryClient {
    pub fn new(config: &DictionaryConfig) -> anyhow::Result<Self> {
        let base_url = Url::parse(&config.api_url)?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("Dictionary API URL cannot be a base: {}", config.api_url);
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url,
            translations: config.translations,
        })
    }

    /// `{base}/{language}/{word}`, each segment percent-encoded
    pub fn entry_url(&self, language: &str, headword: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(language).push(headword);
        }
        if self.translations {
            url.query_pairs_mut().append_pair("translations", "true");
        }
        url
    }
}

fn request_error(e: reqwest::Error) -> LookupError {
    if e.is_timeout() {
        LookupError::Timeout
    } else {
        LookupError::Unreachable(e.to_string())
    }
}

#[async_trait]
impl DictionaryProvider for FreeDictionaryClient {
    async fn lookup(
        &self,
        language: &str,
        headword: &str,
    ) -> Result<DictionaryResult, LookupError> {
        let url = self.entry_url(language, headword);
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await.map_err(request_error)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound(headword.to_string()));
        }
        if !status.is_success() {
            return Err(LookupError::Api(format!("HTTP {}", status)));
        }

        let body = response.text().await.map_err(request_error)?;
        let result = parse_response(&body, headword)?;
        tracing::debug!("{} senses for {}", result.senses.len(), headword);

        Ok(result)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "FreeDictionaryAPI".to_string(),
            base_url: self.base_url.to_string(),
        }
    }
}
