use std::io::Write;

use shabda_core::notes;

use crate::cli::{NoteCommand, WordNoteCommand};
use crate::state::AppState;

fn mark(important: bool) -> &'static str {
    if important { "! " } else { "" }
}

pub fn handle_note(state: &AppState, command: NoteCommand, out: &mut dyn Write) -> anyhow::Result<()> {
    match command {
        NoteCommand::Add { text, important } => {
            let note = state
                .store
                .update(|r| notes::add_general_note(r, &text, important))?;
            writeln!(out, "Added note {}", note.id)?;
        }
        NoteCommand::List => {
            let records = state.store.load()?;
            let listing = notes::general_notes(&records);
            if listing.is_empty() {
                writeln!(out, "No notes")?;
            }
            for note in listing {
                writeln!(
                    out,
                    "{} {} {}{}",
                    note.id,
                    note.created_at.format("%Y-%m-%d %H:%M"),
                    mark(note.important),
                    note.text
                )?;
            }
        }
        NoteCommand::Delete { id } => {
            state.store.update(|r| notes::delete_general_note(r, id))?;
            writeln!(out, "Deleted note {id}")?;
        }
        NoteCommand::Important { id } => {
            let important = state.store.update(|r| notes::toggle_important(r, id))?;
            let state_label = if important { "important" } else { "normal" };
            writeln!(out, "Note {id} marked {state_label}")?;
        }
    }
    Ok(())
}

pub fn handle_word_note(
    state: &AppState,
    command: WordNoteCommand,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    match command {
        WordNoteCommand::Add {
            word,
            text,
            important,
        } => {
            let key = state.key(&word);
            let note = state
                .store
                .update(|r| notes::add_word_note(r, &key, &text, important))?;
            writeln!(out, "Added note {} to {}", note.id, word.word)?;
        }
        WordNoteCommand::List(word) => {
            let key = state.key(&word);
            let records = state.store.load()?;
            for note in notes::word_notes(&records, &key)? {
                writeln!(
                    out,
                    "{} {} {}{}",
                    note.id,
                    note.created_at.format("%Y-%m-%d %H:%M"),
                    mark(note.important),
                    note.text
                )?;
            }
        }
        WordNoteCommand::Delete { word, id } => {
            let key = state.key(&word);
            state.store.update(|r| notes::delete_word_note(r, &key, id))?;
            writeln!(out, "Deleted note {id} from {}", word.word)?;
        }
        WordNoteCommand::Important { word, id } => {
            let key = state.key(&word);
            let important = state
                .store
                .update(|r| notes::toggle_word_note_important(r, &key, id))?;
            let state_label = if important { "important" } else { "normal" };
            writeln!(out, "Note {id} marked {state_label}")?;
        }
    }
    Ok(())
}
