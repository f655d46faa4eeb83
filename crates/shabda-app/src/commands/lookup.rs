use std::io::Write;

use anyhow::Context;
use shabda_core::CoreError;
use shabda_core::bank::{self, LookupRequest, LookupSource};
use shabda_core::export::render_word;

use crate::cli::WordArgs;
use crate::state::AppState;

pub async fn handle_lookup(
    state: &AppState,
    args: &WordArgs,
    refresh: bool,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let language = state.language(args.language.as_deref());
    let request = LookupRequest::new(language, args.word.as_str()).refresh(refresh);

    let mut records = state.store.load().context("Failed to load word bank")?;
    let outcome = bank::lookup(&mut records, state.dictionary.as_ref(), &request).await?;
    state.store.save(&records).context("Failed to save word bank")?;

    let label = match outcome.source {
        LookupSource::Created => "added to word bank",
        LookupSource::Cached => "from word bank",
        LookupSource::Refreshed => "refreshed",
    };

    let mut text = String::new();
    render_word(&outcome.entry, &mut text)?;
    writeln!(out, "({label})")?;
    write!(out, "{text}")?;
    Ok(())
}

pub fn handle_show(state: &AppState, args: &WordArgs, out: &mut dyn Write) -> anyhow::Result<()> {
    let key = state.key(args);
    let records = state.store.load()?;
    let entry = bank::get(&records, &key).ok_or_else(|| CoreError::WordNotFound(key.clone()))?;

    let mut text = String::new();
    render_word(entry, &mut text)?;
    write!(out, "{text}")?;
    writeln!(out, "  first seen: {}", entry.first_seen.format("%Y-%m-%d %H:%M"))?;
    writeln!(out, "  last fetched: {}", entry.last_seen.format("%Y-%m-%d %H:%M"))?;
    Ok(())
}
