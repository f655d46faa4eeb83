use std::cmp::Reverse;

use chrono::Utc;
use shabda_types::{GeneralNote, Records, WordKey, WordNote};
use uuid::Uuid;

use crate::bank;
use crate::error::CoreError;

fn note_text(text: &str) -> Result<String, CoreError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(CoreError::EmptyInput("note text"));
    }
    Ok(text.to_string())
}

pub fn add_general_note(
    records: &mut Records,
    text: &str,
    important: bool,
) -> Result<GeneralNote, CoreError> {
    let note = GeneralNote {
        id: Uuid::new_v4(),
        text: note_text(text)?,
        important,
        created_at: Utc::now(),
    };
    records.general_notes.push(note.clone());
    Ok(note)
}

pub fn delete_general_note(records: &mut Records, id: Uuid) -> Result<GeneralNote, CoreError> {
    let idx = records
        .general_notes
        .iter()
        .position(|n| n.id == id)
        .ok_or(CoreError::NoteNotFound(id))?;
    Ok(records.general_notes.remove(idx))
}

/// Returns the new important state
pub fn toggle_important(records: &mut Records, id: Uuid) -> Result<bool, CoreError> {
    let note = records
        .general_notes
        .iter_mut()
        .find(|n| n.id == id)
        .ok_or(CoreError::NoteNotFound(id))?;
    note.important = !note.important;
    Ok(note.important)
}

/// Important first, then newest first. Equal timestamps go to the later insert.
pub fn general_notes(records: &Records) -> Vec<&GeneralNote> {
    let mut notes: Vec<(usize, &GeneralNote)> = records.general_notes.iter().enumerate().collect();
    notes.sort_by_key(|(idx, n)| (!n.important, Reverse(n.created_at), Reverse(*idx)));
    notes.into_iter().map(|(_, n)| n).collect()
}

/// Append a note to a banked word. Existing notes and tags are left alone.
pub fn add_word_note(
    records: &mut Records,
    key: &WordKey,
    text: &str,
    important: bool,
) -> Result<WordNote, CoreError> {
    let text = note_text(text)?;
    let entry = bank::get_mut(records, key)?;
    let note = WordNote {
        id: Uuid::new_v4(),
        text,
        important,
        created_at: Utc::now(),
        word: key.clone(),
    };
    entry.notes.push(note.clone());
    Ok(note)
}

pub fn delete_word_note(
    records: &mut Records,
    key: &WordKey,
    id: Uuid,
) -> Result<WordNote, CoreError> {
    let entry = bank::get_mut(records, key)?;
    let idx = entry
        .notes
        .iter()
        .position(|n| n.id == id)
        .ok_or(CoreError::NoteNotFound(id))?;
    Ok(entry.notes.remove(idx))
}

pub fn toggle_word_note_important(
    records: &mut Records,
    key: &WordKey,
    id: Uuid,
) -> Result<bool, CoreError> {
    let note = bank::get_mut(records, key)?
        .notes
        .iter_mut()
        .find(|n| n.id == id)
        .ok_or(CoreError::NoteNotFound(id))?;
    note.important = !note.important;
    Ok(note.important)
}

/// Insertion order
pub fn word_notes<'a>(records: &'a Records, key: &WordKey) -> Result<&'a [WordNote], CoreError> {
    bank::get(records, key)
        .map(|w| w.notes.as_slice())
        .ok_or_else(|| CoreError::WordNotFound(key.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::{LookupRequest, lookup};
    use crate::preprocess::word_key;
    use crate::testing::FakeDictionary;

    fn texts(notes: &[&GeneralNote]) -> Vec<String> {
        notes.iter().map(|n| n.text.clone()).collect()
    }

    async fn banked(word: &str) -> (Records, WordKey) {
        let dict = FakeDictionary::new().with_meaning("en", word, "meaning");
        let mut records = Records::default();
        lookup(&mut records, &dict, &LookupRequest::new("en", word))
            .await
            .unwrap();
        (records, word_key("en", word))
    }

    #[test]
    fn test_general_notes_order() {
        let mut records = Records::default();
        add_general_note(&mut records, "old", false).unwrap();
        add_general_note(&mut records, "flagged", true).unwrap();
        add_general_note(&mut records, "new", false).unwrap();

        assert_eq!(texts(&general_notes(&records)), ["flagged", "new", "old"]);
    }

    #[test]
    fn test_toggle_important_moves_note_to_front() {
        let mut records = Records::default();
        let oldest = add_general_note(&mut records, "oldest", false).unwrap();
        add_general_note(&mut records, "middle", false).unwrap();
        add_general_note(&mut records, "newest", false).unwrap();

        assert!(toggle_important(&mut records, oldest.id).unwrap());
        assert_eq!(texts(&general_notes(&records)), ["oldest", "newest", "middle"]);

        assert!(!toggle_important(&mut records, oldest.id).unwrap());
        assert_eq!(texts(&general_notes(&records)), ["newest", "middle", "oldest"]);
    }

    #[test]
    fn test_empty_note_rejected() {
        let mut records = Records::default();
        let err = add_general_note(&mut records, "  \n", false).unwrap_err();
        assert!(matches!(err, CoreError::EmptyInput(_)));
        assert!(records.general_notes.is_empty());
    }

    #[test]
    fn test_delete_general_note() {
        let mut records = Records::default();
        let keep = add_general_note(&mut records, "keep", false).unwrap();
        let gone = add_general_note(&mut records, "drop", false).unwrap();

        assert_eq!(delete_general_note(&mut records, gone.id).unwrap(), gone);
        assert_eq!(records.general_notes, vec![keep]);
        assert!(matches!(
            delete_general_note(&mut records, gone.id),
            Err(CoreError::NoteNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_word_note_leaves_existing_notes_and_tags() {
        let (mut records, key) = banked("serene").await;
        bank::add_tag(&mut records, &key, "mood").unwrap();
        add_word_note(&mut records, &key, "first", true).unwrap();
        let before = bank::get(&records, &key).unwrap().clone();

        let note = add_word_note(&mut records, &key, "second", false).unwrap();

        let after = bank::get(&records, &key).unwrap();
        assert_eq!(after.tags, before.tags);
        assert_eq!(after.notes[..before.notes.len()], before.notes[..]);
        assert_eq!(after.notes.last(), Some(&note));
        assert_eq!(note.word, key);
    }

    #[tokio::test]
    async fn test_word_notes_keep_insertion_order() {
        let (mut records, key) = banked("serene").await;
        add_word_note(&mut records, &key, "a", false).unwrap();
        let b = add_word_note(&mut records, &key, "b", false).unwrap();
        add_word_note(&mut records, &key, "c", false).unwrap();

        assert!(toggle_word_note_important(&mut records, &key, b.id).unwrap());
        let order: Vec<_> = word_notes(&records, &key)
            .unwrap()
            .iter()
            .map(|n| n.text.as_str())
            .collect();
        assert_eq!(order, ["a", "b", "c"]);

        delete_word_note(&mut records, &key, b.id).unwrap();
        assert_eq!(word_notes(&records, &key).unwrap().len(), 2);
    }

    #[test]
    fn test_word_note_on_unknown_word() {
        let mut records = Records::default();
        let err = add_word_note(&mut records, &word_key("en", "nope"), "text", false).unwrap_err();
        assert!(matches!(err, CoreError::WordNotFound(_)));
    }
}
