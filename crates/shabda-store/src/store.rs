use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use shabda_types::Records;

use crate::error::StoreError;

pub const WORDS_FILE: &str = "words.json";
pub const NOTES_FILE: &str = "notes.json";
pub const TAGS_FILE: &str = "tags.json";
pub const HISTORY_FILE: &str = "history.json";

/// File-backed record store, one JSON file per entity type
#[derive(Debug, Clone)]
pub struct RecordStore {
    dir: PathBuf,
}

impl RecordStore {
    /// Open the store rooted at `dir`, creating the directory if missing
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StoreError::Io {
            path: dir.clone(),
            source,
        })?;
        tracing::debug!("Record store opened at {}", dir.display());
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Read every entity file. Missing files count as empty.
    pub fn load(&self) -> Result<Records, StoreError> {
        let records = Records {
            words: self.read_file(WORDS_FILE)?,
            general_notes: self.read_file(NOTES_FILE)?,
            tags: self.read_file(TAGS_FILE)?,
            history: self.read_file(HISTORY_FILE)?,
        };

        tracing::debug!(
            "Loaded {} words, {} notes, {} tags, {} history items",
            records.words.len(),
            records.general_notes.len(),
            records.tags.len(),
            records.history.len()
        );
        Ok(records)
    }

    /// Write every entity file.
    ///
    /// All files are serialized and written to `.tmp` siblings first. Each
    /// current file is then moved to a `.bak` sibling before its replacement
    /// is renamed into place. If any step fails, replaced files are restored
    /// from their backups and unused temps are removed, so the store keeps
    /// its previous state.
    pub fn save(&self, records: &Records) -> Result<(), StoreError> {
        let files = [
            (WORDS_FILE, to_json(WORDS_FILE, &records.words)?),
            (NOTES_FILE, to_json(NOTES_FILE, &records.general_notes)?),
            (TAGS_FILE, to_json(TAGS_FILE, &records.tags)?),
            (HISTORY_FILE, to_json(HISTORY_FILE, &records.history)?),
        ];

        let mut staged = Vec::with_capacity(files.len());
        for (name, contents) in &files {
            let temp = self.dir.join(format!("{name}.tmp"));
            if let Err(source) = fs::write(&temp, contents) {
                discard(&staged);
                return Err(StoreError::Io { path: temp, source });
            }
            staged.push((temp, self.dir.join(name)));
        }

        let mut committed: Vec<Committed> = Vec::with_capacity(staged.len());
        for (i, (temp, target)) in staged.iter().enumerate() {
            if let Err(e) = commit(temp, target, &mut committed) {
                tracing::warn!("Save failed at {}, rolling back", target.display());
                rollback(&committed);
                discard(&staged[i..]);
                return Err(e);
            }
        }

        for done in &committed {
            if let Some(backup) = &done.backup
                && let Err(e) = fs::remove_file(backup)
            {
                tracing::warn!("Failed to remove {}: {}", backup.display(), e);
            }
        }

        tracing::debug!("Saved records to {}", self.dir.display());
        Ok(())
    }

    /// Load, apply `f`, and save only if `f` succeeds
    pub fn update<T, E>(&self, f: impl FnOnce(&mut Records) -> Result<T, E>) -> Result<T, E>
    where
        E: From<StoreError>,
    {
        let mut records = self.load()?;
        let value = f(&mut records)?;
        self.save(&records)?;
        Ok(value)
    }

    fn read_file<T: DeserializeOwned + Default>(&self, name: &str) -> Result<T, StoreError> {
        let path = self.dir.join(name);
        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(T::default()),
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        if data.trim().is_empty() {
            return Ok(T::default());
        }

        serde_json::from_str(&data).map_err(|source| StoreError::Parse { path, source })
    }
}

fn to_json<T: Serialize>(file: &'static str, value: &T) -> Result<String, StoreError> {
    serde_json::to_string_pretty(value).map_err(|source| StoreError::Serialize { file, source })
}

/// A target that now holds new contents, and where its old contents went
struct Committed {
    target: PathBuf,
    backup: Option<PathBuf>,
}

/// Move `target` aside, then rename `temp` over it
fn commit(temp: &Path, target: &Path, committed: &mut Vec<Committed>) -> Result<(), StoreError> {
    let backup = target.with_file_name(format!(
        "{}.bak",
        target.file_name().unwrap_or_default().to_string_lossy()
    ));

    let backup = match fs::rename(target, &backup) {
        Ok(()) => Some(backup),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(source) => {
            return Err(StoreError::Io {
                path: target.to_path_buf(),
                source,
            });
        }
    };

    if let Err(source) = fs::rename(temp, target) {
        restore(target, backup.as_deref());
        return Err(StoreError::Io {
            path: target.to_path_buf(),
            source,
        });
    }

    committed.push(Committed {
        target: target.to_path_buf(),
        backup,
    });
    Ok(())
}

fn restore(target: &Path, backup: Option<&Path>) {
    let result = match backup {
        Some(backup) => fs::rename(backup, target),
        None => fs::remove_file(target),
    };
    if let Err(e) = result {
        tracing::warn!("Failed to restore {}: {}", target.display(), e);
    }
}

fn rollback(committed: &[Committed]) {
    for done in committed.iter().rev() {
        restore(&done.target, done.backup.as_deref());
    }
}

fn discard(staged: &[(PathBuf, PathBuf)]) {
    for (temp, _) in staged {
        if let Err(e) = fs::remove_file(temp)
            && e.kind() != ErrorKind::NotFound
        {
            tracing::warn!("Failed to remove {}: {}", temp.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use chrono::Utc;
    use shabda_types::{GeneralNote, HistoryItem, Sense, Tag, TagKind, WordEntry, WordKey, WordNote};
    use tempfile::TempDir;
    use uuid::Uuid;

    use super::*;

    fn sample_records() -> Records {
        let now = Utc::now();
        let key = WordKey {
            language: "sa".to_string(),
            headword: "śānti".to_string(),
        };
        Records {
            words: vec![WordEntry {
                id: Uuid::new_v4(),
                language: "sa".to_string(),
                headword: "śānti".to_string(),
                senses: vec![Sense {
                    meaning: "peace".to_string(),
                    part_of_speech: Some("noun".to_string()),
                    ..Default::default()
                }],
                translations: vec![],
                source_url: None,
                favourite: true,
                pinned: false,
                tags: BTreeSet::from(["sa".to_string()]),
                notes: vec![WordNote {
                    id: Uuid::new_v4(),
                    text: "शान्ति".to_string(),
                    important: false,
                    created_at: now,
                    word: key,
                }],
                first_seen: now,
                last_seen: now,
            }],
            general_notes: vec![GeneralNote {
                id: Uuid::new_v4(),
                text: "review verbs".to_string(),
                important: true,
                created_at: now,
            }],
            tags: vec![Tag {
                label: "sa".to_string(),
                kind: TagKind::Language,
                created_at: now,
            }],
            history: vec![HistoryItem {
                id: Uuid::new_v4(),
                headword: "śānti".to_string(),
                language: "sa".to_string(),
                looked_up_at: now,
            }],
        }
    }

    #[test]
    fn test_load_empty_directory() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::open(dir.path()).unwrap();

        let records = store.load().unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::open(dir.path().join("nested")).unwrap();
        let records = sample_records();

        store.save(&records).unwrap();

        assert_eq!(store.load().unwrap(), records);
        assert!(!dir.path().join("nested").join("words.json.tmp").exists());
    }

    #[test]
    fn test_files_are_human_readable() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::open(dir.path()).unwrap();
        store.save(&sample_records()).unwrap();

        let words = fs::read_to_string(dir.path().join(WORDS_FILE)).unwrap();
        assert!(words.contains("\"headword\": \"śānti\""));
        assert!(words.contains("शान्ति"));
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(NOTES_FILE), "{ not json").unwrap();
        let store = RecordStore::open(dir.path()).unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
    }

    #[test]
    fn test_failed_save_keeps_previous_files() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::open(dir.path()).unwrap();
        let records = sample_records();
        store.save(&records).unwrap();

        // A directory squatting on the temp path makes the last write fail
        fs::create_dir(dir.path().join("history.json.tmp")).unwrap();

        let result = store.save(&Records::default());
        assert!(matches!(result, Err(StoreError::Io { .. })));
        assert_eq!(store.load().unwrap(), records);
        assert!(!dir.path().join("words.json.tmp").exists());
    }

    #[test]
    fn test_failed_rename_rolls_back_replaced_files() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::open(dir.path()).unwrap();
        let records = sample_records();
        store.save(&records).unwrap();

        // A non-empty directory in the way stops history.json being moved aside
        let blocker = dir.path().join("history.json.bak");
        fs::create_dir(&blocker).unwrap();
        fs::write(blocker.join("keep"), "x").unwrap();

        let result = store.save(&Records::default());

        assert!(matches!(result, Err(StoreError::Io { .. })));
        assert_eq!(store.load().unwrap(), records);
        for name in [WORDS_FILE, NOTES_FILE, TAGS_FILE, HISTORY_FILE] {
            assert!(!dir.path().join(format!("{name}.tmp")).exists(), "{name}.tmp left behind");
        }
        assert!(!dir.path().join("words.json.bak").exists());
    }

    #[test]
    fn test_save_leaves_no_backups() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::open(dir.path()).unwrap();
        store.save(&sample_records()).unwrap();
        store.save(&Records::default()).unwrap();

        assert!(store.load().unwrap().is_empty());
        for name in [WORDS_FILE, NOTES_FILE, TAGS_FILE, HISTORY_FILE] {
            assert!(!dir.path().join(format!("{name}.bak")).exists());
        }
    }

    #[test]
    fn test_update_discards_changes_on_error() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::open(dir.path()).unwrap();
        let records = sample_records();
        store.save(&records).unwrap();

        let result: Result<(), StoreError> = store.update(|r| {
            r.words.clear();
            Err(StoreError::Io {
                path: PathBuf::from("x"),
                source: std::io::Error::other("aborted"),
            })
        });

        assert!(result.is_err());
        assert_eq!(store.load().unwrap(), records);
    }

    #[test]
    fn test_update_persists_on_success() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::open(dir.path()).unwrap();
        store.save(&sample_records()).unwrap();

        let cleared: Result<usize, StoreError> = store.update(|r| {
            let n = r.history.len();
            r.history.clear();
            Ok(n)
        });

        assert_eq!(cleared.unwrap(), 1);
        let records = store.load().unwrap();
        assert!(records.history.is_empty());
        assert_eq!(records.words.len(), 1);
    }
}
