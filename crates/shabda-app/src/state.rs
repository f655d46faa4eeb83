use shabda_config::Config;
use shabda_core::dictionary::DictionaryProvider;
use shabda_core::preprocess::word_key;
use shabda_dictionary::FreeDictionaryClient;
use shabda_store::RecordStore;
use shabda_types::WordKey;

use crate::cli::WordArgs;

/// Per-invocation handles: config, record store and dictionary
pub struct AppState {
    pub config: Config,
    pub store: RecordStore,
    pub dictionary: Box<dyn DictionaryProvider>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let store = RecordStore::open(&config.storage.data_dir)?;
        let dictionary = FreeDictionaryClient::new(&config.dictionary)?;

        tracing::debug!(
            "Using data dir {} and {}",
            store.dir().display(),
            config.dictionary.api_url
        );

        Ok(Self::with_provider(config, store, Box::new(dictionary)))
    }

    pub fn with_provider(
        config: Config,
        store: RecordStore,
        dictionary: Box<dyn DictionaryProvider>,
    ) -> Self {
        Self {
            config,
            store,
            dictionary,
        }
    }

    /// Language given on the command line, or the configured default
    pub fn language<'a>(&'a self, language: Option<&'a str>) -> &'a str {
        language.unwrap_or(&self.config.default_language)
    }

    pub fn key(&self, args: &WordArgs) -> WordKey {
        word_key(self.language(args.language.as_deref()), &args.word)
    }
}
