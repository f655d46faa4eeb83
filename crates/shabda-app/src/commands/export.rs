use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use shabda_core::export::{ExportFormat, counted, export, import_dump};

use crate::state::AppState;

pub fn handle_export(
    state: &AppState,
    format: ExportFormat,
    output: Option<&Path>,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let records = state.store.load()?;
    let data = export(&records, format)?;

    match output {
        Some(path) => {
            fs::write(path, &data).with_context(|| format!("Failed to write {}", path.display()))?;
            writeln!(
                out,
                "Exported {} to {}",
                counted(records.words.len(), "word", "words"),
                path.display()
            )?;
        }
        None => {
            write!(out, "{data}")?;
            if !data.ends_with('\n') {
                writeln!(out)?;
            }
        }
    }
    Ok(())
}

/// Replace every record with the dump at `path`
pub fn handle_import(state: &AppState, path: &Path, out: &mut dyn Write) -> anyhow::Result<()> {
    let data =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let records = import_dump(&data)?;
    state.store.save(&records)?;

    writeln!(
        out,
        "Imported {}, {}, {}, {}",
        counted(records.words.len(), "word", "words"),
        counted(records.general_notes.len(), "note", "notes"),
        counted(records.tags.len(), "tag", "tags"),
        counted(records.history.len(), "history item", "history items")
    )?;
    Ok(())
}
