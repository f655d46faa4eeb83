use std::collections::HashSet;
use std::fmt::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shabda_types::{Records, WordEntry};

use crate::error::CoreError;
use crate::notes;
use crate::preprocess::word_key;

pub const DUMP_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Full-fidelity structural dump, importable
    Json,
    /// Flattened human-readable rendering
    Text,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportDump {
    pub version: u32,
    pub exported_at: DateTime<Utc>,
    #[serde(flatten)]
    pub records: Records,
}

/// Export every record in `format`
pub fn export(records: &Records, format: ExportFormat) -> Result<String, CoreError> {
    match format {
        ExportFormat::Json => {
            let dump = ExportDump {
                version: DUMP_VERSION,
                exported_at: Utc::now(),
                records: records.clone(),
            };
            Ok(serde_json::to_string_pretty(&dump)?)
        }
        ExportFormat::Text => {
            let mut out = String::new();
            render_text(records, &mut out)?;
            Ok(out)
        }
    }
}

/// Parse a JSON dump back into records.
///
/// Rejects dumps where two words share a (language, headword) key.
pub fn import_dump(data: &str) -> Result<Records, CoreError> {
    let dump: ExportDump = serde_json::from_str(data)?;
    if dump.version != DUMP_VERSION {
        return Err(CoreError::UnsupportedDump(dump.version));
    }

    let mut seen = HashSet::with_capacity(dump.records.words.len());
    for entry in &dump.records.words {
        let key = word_key(&entry.language, &entry.headword);
        if !seen.insert(key.clone()) {
            return Err(CoreError::DuplicateWord(key));
        }
    }

    tracing::info!(
        "Imported dump from {}: {} words, {} notes",
        dump.exported_at,
        dump.records.words.len(),
        dump.records.general_notes.len()
    );
    Ok(dump.records)
}

/// `1 word`, `2 words`
pub fn counted(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {plural}")
    }
}

fn render_text(records: &Records, out: &mut impl Write) -> std::fmt::Result {
    writeln!(out, "Word bank ({})", counted(records.words.len(), "word", "words"))?;
    writeln!(out, "====================")?;
    for entry in &records.words {
        writeln!(out)?;
        render_word(entry, out)?;
    }

    writeln!(out)?;
    writeln!(out, "General notes ({})", records.general_notes.len())?;
    writeln!(out, "====================")?;
    for note in notes::general_notes(records) {
        let mark = if note.important { "! " } else { "" };
        writeln!(out, "- {}{} ({})", mark, note.text, note.created_at.format("%Y-%m-%d %H:%M"))?;
    }

    writeln!(out)?;
    writeln!(out, "Tags ({})", records.tags.len())?;
    writeln!(out, "====================")?;
    for tag in &records.tags {
        writeln!(out, "- {} [{}]", tag.label, tag.kind.as_str())?;
    }

    writeln!(out)?;
    writeln!(out, "History ({})", records.history.len())?;
    writeln!(out, "====================")?;
    for item in records.history.iter().rev() {
        writeln!(
            out,
            "- {} [{}] {}",
            item.looked_up_at.format("%Y-%m-%d %H:%M"),
            item.language,
            item.headword
        )?;
    }

    Ok(())
}

/// One word as an indented text block
pub fn render_word(entry: &WordEntry, out: &mut impl Write) -> std::fmt::Result {
    let mut flags = Vec::new();
    if entry.favourite {
        flags.push("favourite");
    }
    if entry.pinned {
        flags.push("pinned");
    }

    write!(out, "{} [{}]", entry.headword, entry.language)?;
    if !flags.is_empty() {
        write!(out, " ({})", flags.join(", "))?;
    }
    writeln!(out)?;

    if !entry.tags.is_empty() {
        let tags: Vec<&str> = entry.tags.iter().map(String::as_str).collect();
        writeln!(out, "  tags: {}", tags.join(", "))?;
    }

    for (i, sense) in entry.senses.iter().enumerate() {
        match &sense.part_of_speech {
            Some(pos) if !pos.is_empty() => writeln!(out, "  {}. ({}) {}", i + 1, pos, sense.meaning)?,
            _ => writeln!(out, "  {}. {}", i + 1, sense.meaning)?,
        }
        for example in &sense.examples {
            writeln!(out, "     e.g. {example}")?;
        }
        if !sense.synonyms.is_empty() {
            writeln!(out, "     synonyms: {}", sense.synonyms.join(", "))?;
        }
    }

    if !entry.translations.is_empty() {
        let translations: Vec<String> = entry
            .translations
            .iter()
            .map(|t| match &t.language_code {
                Some(code) => format!("{} ({})", t.word, code),
                None => t.word.clone(),
            })
            .collect();
        writeln!(out, "  translations: {}", translations.join(", "))?;
    }

    if let Some(url) = &entry.source_url {
        writeln!(out, "  source: {url}")?;
    }

    if !entry.notes.is_empty() {
        writeln!(out, "  notes:")?;
        for note in &entry.notes {
            let mark = if note.important { "! " } else { "" };
            writeln!(out, "    - {}{} ({})", mark, note.text, note.created_at.format("%Y-%m-%d %H:%M"))?;
        }
    }

    Ok(())
}
