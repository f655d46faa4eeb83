use std::io::Write;

use crate::cli::Command;
use crate::profile;
use crate::state::AppState;

pub mod daily;
pub mod export;
pub mod history;
pub mod lookup;
pub mod notes;
pub mod words;

use daily::handle_daily;
use export::{handle_export, handle_import};
use history::handle_history;
use lookup::{handle_lookup, handle_show};
use notes::{handle_note, handle_word_note};
use words::{
    handle_delete, handle_flag_list, handle_languages, handle_search, handle_tag,
    handle_toggle_favourite, handle_toggle_pin,
};

/// Run one command: a single load-operate-save cycle against the store
pub async fn handle_command(
    state: &AppState,
    command: Command,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    tracing::debug!("Handling command: {:?}", command);
    match command {
        Command::Lookup { word, refresh } => handle_lookup(state, &word, refresh, out).await?,
        Command::Show(word) => handle_show(state, &word, out)?,
        Command::Delete(word) => handle_delete(state, &word, out)?,
        Command::Favourite(word) => handle_toggle_favourite(state, &word, out)?,
        Command::Pin(word) => handle_toggle_pin(state, &word, out)?,
        Command::Favourites => handle_flag_list(state, words::Flag::Favourite, out)?,
        Command::Pinned => handle_flag_list(state, words::Flag::Pinned, out)?,
        Command::Tag(command) => handle_tag(state, command, out)?,
        Command::Note(command) => handle_note(state, command, out)?,
        Command::WordNote(command) => handle_word_note(state, command, out)?,
        Command::History(command) => handle_history(state, command, out)?,
        Command::Search { query, tags } => handle_search(state, query.as_deref(), &tags, out)?,
        Command::Daily { date, no_preview } => handle_daily(state, date, !no_preview, out).await?,
        Command::Languages => handle_languages(state, out)?,
        Command::Export { format, output } => {
            handle_export(state, format.into(), output.as_deref(), out)?
        }
        Command::Import { path } => handle_import(state, &path, out)?,
        Command::InitConfig { path } => {
            profile::init_profile(&path)?;
            writeln!(out, "Wrote {}", path.display())?;
        }
    }

    Ok(())
}
