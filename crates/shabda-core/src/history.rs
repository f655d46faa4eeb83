use chrono::{DateTime, Utc};
use shabda_types::{HistoryItem, Records};
use uuid::Uuid;

use crate::error::CoreError;

/// Append a lookup to the history
pub fn record(
    records: &mut Records,
    language: &str,
    headword: &str,
    at: DateTime<Utc>,
) -> HistoryItem {
    let item = HistoryItem {
        id: Uuid::new_v4(),
        headword: headword.to_string(),
        language: language.to_string(),
        looked_up_at: at,
    };
    records.history.push(item.clone());
    item
}

/// Newest first
pub fn recent(records: &Records, limit: usize) -> Vec<&HistoryItem> {
    records.history.iter().rev().take(limit).collect()
}

pub fn delete_history_item(records: &mut Records, id: Uuid) -> Result<HistoryItem, CoreError> {
    let idx = records
        .history
        .iter()
        .position(|h| h.id == id)
        .ok_or(CoreError::HistoryItemNotFound(id))?;

    Ok(records.history.remove(idx))
}

/// Returns the number of removed items
pub fn clear_history(records: &mut Records) -> usize {
    let removed = records.history.len();
    records.history.clear();
    tracing::info!("Cleared {} history items", removed);
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notes;

    #[test]
    fn test_recent_is_newest_first() {
        let mut records = Records::default();
        for word in ["a", "b", "c"] {
            record(&mut records, "en", word, Utc::now());
        }

        let words: Vec<_> = recent(&records, 2).iter().map(|h| h.headword.as_str()).collect();
        assert_eq!(words, ["c", "b"]);
    }

    #[test]
    fn test_delete_removes_only_that_item() {
        let mut records = Records::default();
        let first = record(&mut records, "en", "serene", Utc::now());
        let second = record(&mut records, "en", "serene", Utc::now());
        let third = record(&mut records, "sa", "karma", Utc::now());

        let removed = delete_history_item(&mut records, second.id).unwrap();

        assert_eq!(removed, second);
        assert_eq!(records.history, vec![first, third]);
    }

    #[test]
    fn test_delete_unknown_item() {
        let mut records = Records::default();
        record(&mut records, "en", "serene", Utc::now());

        let err = delete_history_item(&mut records, Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, CoreError::HistoryItemNotFound(_)));
        assert_eq!(records.history.len(), 1);
    }

    #[test]
    fn test_clear_touches_nothing_else() {
        let mut records = Records::default();
        record(&mut records, "en", "serene", Utc::now());
        record(&mut records, "en", "benevolent", Utc::now());
        notes::add_general_note(&mut records, "keep me", false).unwrap();
        let before = records.clone();

        assert_eq!(clear_history(&mut records), 2);
        assert!(records.history.is_empty());
        assert_eq!(records.general_notes, before.general_notes);
        assert_eq!(records.words, before.words);
        assert_eq!(records.tags, before.tags);
    }
}
