use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use shabda_types::{DictionaryResult, Records, Tag, TagKind, WordEntry, WordKey};
use uuid::Uuid;

use crate::dictionary::DictionaryProvider;
use crate::error::CoreError;
use crate::history;
use crate::preprocess::{normalize_language, normalize_tag, normalize_text, word_key};

#[derive(Debug, Clone)]
pub struct LookupRequest {
    pub language: String,
    pub headword: String,
    /// Re-fetch dictionary fields even if the word is already banked
    pub refresh: bool,
}

impl LookupRequest {
    pub fn new(language: impl Into<String>, headword: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            headword: headword.into(),
            refresh: false,
        }
    }

    pub fn refresh(mut self, refresh: bool) -> Self {
        self.refresh = refresh;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupSource {
    /// Fetched and added to the word bank
    Created,
    /// Served from the word bank without calling the dictionary
    Cached,
    /// Dictionary fields re-fetched, annotations kept
    Refreshed,
}

#[derive(Debug, Clone)]
pub struct LookupOutcome {
    pub entry: WordEntry,
    pub source: LookupSource,
}

/// Find-or-create a word bank entry.
///
/// The dictionary is only called for unknown words or a forced refresh, and
/// records are only touched after it answers. A failed lookup leaves them as
/// they were.
pub async fn lookup(
    records: &mut Records,
    provider: &dyn DictionaryProvider,
    request: &LookupRequest,
) -> Result<LookupOutcome, CoreError> {
    let language = normalize_language(&request.language);
    let headword = normalize_text(&request.headword);
    if language.is_empty() {
        return Err(CoreError::EmptyInput("language"));
    }
    if headword.is_empty() {
        return Err(CoreError::EmptyInput("headword"));
    }

    let key = word_key(&language, &headword);
    let existing = position(records, &key);

    if let Some(idx) = existing
        && !request.refresh
    {
        tracing::debug!("Word bank hit for {}", key);
        history::record(records, &language, &headword, Utc::now());
        return Ok(LookupOutcome {
            entry: records.words[idx].clone(),
            source: LookupSource::Cached,
        });
    }

    tracing::info!("Fetching {} from {}", key, provider.metadata().name);
    let result = provider
        .lookup(&language, &headword)
        .await
        .map_err(|e| CoreError::from_lookup(key.clone(), e))?;

    if result.senses.is_empty() {
        return Err(CoreError::from_lookup(
            key.clone(),
            crate::dictionary::LookupError::NotFound(headword),
        ));
    }

    let now = Utc::now();
    let (entry, source) = match existing {
        Some(idx) => {
            let entry = &mut records.words[idx];
            apply_dictionary_fields(entry, result, now);
            (entry.clone(), LookupSource::Refreshed)
        }
        None => {
            let entry = new_entry(&language, &headword, result, now);
            register_tag(records, &language, TagKind::Language, now);
            records.words.push(entry.clone());
            (entry, LookupSource::Created)
        }
    };

    history::record(records, &language, &headword, now);
    tracing::info!("Lookup {:?}: {}", source, key);

    Ok(LookupOutcome { entry, source })
}

fn new_entry(
    language: &str,
    headword: &str,
    result: DictionaryResult,
    now: DateTime<Utc>,
) -> WordEntry {
    WordEntry {
        id: Uuid::new_v4(),
        language: language.to_string(),
        headword: headword.to_string(),
        senses: result.senses,
        translations: result.translations,
        source_url: result.source_url,
        favourite: false,
        pinned: false,
        tags: BTreeSet::from([language.to_string()]),
        notes: Vec::new(),
        first_seen: now,
        last_seen: now,
    }
}

/// Overwrite only what came from the dictionary
fn apply_dictionary_fields(entry: &mut WordEntry, result: DictionaryResult, now: DateTime<Utc>) {
    entry.senses = result.senses;
    entry.translations = result.translations;
    entry.source_url = result.source_url;
    entry.last_seen = now;
}

fn position(records: &Records, key: &WordKey) -> Option<usize> {
    records
        .words
        .iter()
        .position(|w| word_key(&w.language, &w.headword) == *key)
}

pub fn get<'a>(records: &'a Records, key: &WordKey) -> Option<&'a WordEntry> {
    position(records, key).map(|idx| &records.words[idx])
}

pub(crate) fn get_mut<'a>(
    records: &'a mut Records,
    key: &WordKey,
) -> Result<&'a mut WordEntry, CoreError> {
    let idx = position(records, key).ok_or_else(|| CoreError::WordNotFound(key.clone()))?;
    Ok(&mut records.words[idx])
}

/// Returns the new favourite state
pub fn toggle_favourite(records: &mut Records, key: &WordKey) -> Result<bool, CoreError> {
    let entry = get_mut(records, key)?;
    entry.favourite = !entry.favourite;
    Ok(entry.favourite)
}

/// Returns the new pinned state
pub fn toggle_pinned(records: &mut Records, key: &WordKey) -> Result<bool, CoreError> {
    let entry = get_mut(records, key)?;
    entry.pinned = !entry.pinned;
    Ok(entry.pinned)
}

pub fn favourites(records: &Records) -> Vec<&WordEntry> {
    records.words.iter().filter(|w| w.favourite).collect()
}

pub fn pinned(records: &Records) -> Vec<&WordEntry> {
    records.words.iter().filter(|w| w.pinned).collect()
}

/// Add a user tag. Returns false if the entry already had it.
pub fn add_tag(records: &mut Records, key: &WordKey, label: &str) -> Result<bool, CoreError> {
    let label = normalize_tag(label);
    if label.is_empty() {
        return Err(CoreError::EmptyInput("tag"));
    }

    let added = get_mut(records, key)?.tags.insert(label.clone());
    if added {
        register_tag(records, &label, TagKind::User, Utc::now());
    }
    Ok(added)
}

/// Returns false if the entry did not have the tag
pub fn remove_tag(records: &mut Records, key: &WordKey, label: &str) -> Result<bool, CoreError> {
    let label = normalize_tag(label);
    Ok(get_mut(records, key)?.tags.remove(&label))
}

/// Remove an entry with its notes. History and the tag catalog stay.
pub fn delete_word(records: &mut Records, key: &WordKey) -> Result<WordEntry, CoreError> {
    let idx = position(records, key).ok_or_else(|| CoreError::WordNotFound(key.clone()))?;
    let entry = records.words.remove(idx);
    tracing::info!("Deleted {} from word bank", key);
    Ok(entry)
}

/// Catalog tags with the number of entries carrying each
pub fn tag_summary(records: &Records) -> Vec<(&Tag, usize)> {
    records
        .tags
        .iter()
        .map(|tag| {
            let count = records
                .words
                .iter()
                .filter(|w| w.tags.contains(&tag.label))
                .count();
            (tag, count)
        })
        .collect()
}

fn register_tag(records: &mut Records, label: &str, kind: TagKind, now: DateTime<Utc>) {
    if records.tags.iter().any(|t| t.label == label) {
        return;
    }
    records.tags.push(Tag {
        label: label.to_string(),
        kind,
        created_at: now,
    });
}
