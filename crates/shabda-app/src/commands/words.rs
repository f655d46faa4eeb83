use std::io::Write;

use shabda_core::bank;
use shabda_core::export::counted;
use shabda_core::search::{SearchQuery, search};
use shabda_types::WordEntry;

use crate::cli::{TagCommand, WordArgs};
use crate::state::AppState;

#[derive(Debug, Clone, Copy)]
pub enum Flag {
    Favourite,
    Pinned,
}

fn write_summary(entries: &[&WordEntry], out: &mut dyn Write) -> anyhow::Result<()> {
    if entries.is_empty() {
        writeln!(out, "No words")?;
        return Ok(());
    }
    for entry in entries {
        let preview = entry.short_definition().unwrap_or("");
        writeln!(out, "{} [{}] {}", entry.headword, entry.language, preview)?;
    }
    Ok(())
}

pub fn handle_delete(state: &AppState, args: &WordArgs, out: &mut dyn Write) -> anyhow::Result<()> {
    let key = state.key(args);
    let removed = state.store.update(|r| bank::delete_word(r, &key))?;
    writeln!(out, "Deleted {} [{}]", removed.headword, removed.language)?;
    Ok(())
}

pub fn handle_toggle_favourite(
    state: &AppState,
    args: &WordArgs,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let key = state.key(args);
    let favourite = state.store.update(|r| bank::toggle_favourite(r, &key))?;
    if favourite {
        writeln!(out, "Added {} to favourites", args.word)?;
    } else {
        writeln!(out, "Removed {} from favourites", args.word)?;
    }
    Ok(())
}

pub fn handle_toggle_pin(state: &AppState, args: &WordArgs, out: &mut dyn Write) -> anyhow::Result<()> {
    let key = state.key(args);
    let pinned = state.store.update(|r| bank::toggle_pinned(r, &key))?;
    let verb = if pinned { "Pinned" } else { "Unpinned" };
    writeln!(out, "{verb} {}", args.word)?;
    Ok(())
}

pub fn handle_flag_list(state: &AppState, flag: Flag, out: &mut dyn Write) -> anyhow::Result<()> {
    let records = state.store.load()?;
    let entries = match flag {
        Flag::Favourite => bank::favourites(&records),
        Flag::Pinned => bank::pinned(&records),
    };
    write_summary(&entries, out)
}

pub fn handle_tag(state: &AppState, command: TagCommand, out: &mut dyn Write) -> anyhow::Result<()> {
    match command {
        TagCommand::Add { word, label } => {
            let key = state.key(&word);
            let added = state.store.update(|r| bank::add_tag(r, &key, &label))?;
            if added {
                writeln!(out, "Tagged {} with {}", word.word, label)?;
            } else {
                writeln!(out, "{} already has tag {}", word.word, label)?;
            }
        }
        TagCommand::Remove { word, label } => {
            let key = state.key(&word);
            let removed = state.store.update(|r| bank::remove_tag(r, &key, &label))?;
            if removed {
                writeln!(out, "Removed tag {} from {}", label, word.word)?;
            } else {
                writeln!(out, "{} has no tag {}", word.word, label)?;
            }
        }
        TagCommand::List => {
            let records = state.store.load()?;
            for (tag, count) in bank::tag_summary(&records) {
                let words = counted(count, "word", "words");
                writeln!(out, "{} [{}] {}", tag.label, tag.kind.as_str(), words)?;
            }
        }
    }
    Ok(())
}

pub fn handle_search(
    state: &AppState,
    query: Option<&str>,
    tags: &[String],
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let mut search_query = SearchQuery::new();
    if let Some(text) = query {
        search_query = search_query.text(text);
    }
    for tag in tags {
        search_query = search_query.tag(tag);
    }

    let records = state.store.load()?;
    write_summary(&search(&records, &search_query), out)
}

pub fn handle_languages(state: &AppState, out: &mut dyn Write) -> anyhow::Result<()> {
    for language in &state.config.languages {
        let marker = if language.code == state.config.default_language {
            " (default)"
        } else {
            ""
        };
        writeln!(out, "{}\t{}{}", language.code, language.label, marker)?;
    }
    Ok(())
}
