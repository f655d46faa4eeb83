use std::io::Write;

use chrono::{Local, NaiveDate};
use shabda_config::languages::language_label;
use shabda_core::daily::word_of_the_day;

use crate::state::AppState;

/// Print the word of the day. The preview lookup never touches the word bank.
pub async fn handle_daily(
    state: &AppState,
    date: Option<NaiveDate>,
    preview: bool,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let date = date.unwrap_or_else(|| Local::now().date_naive());
    let Some(pick) = word_of_the_day(&state.config.daily_words, date) else {
        writeln!(out, "No daily words configured")?;
        return Ok(());
    };

    let label = language_label(&state.config.languages, &pick.language);
    writeln!(out, "Word of the day ({date}): {} [{label}]", pick.word)?;

    if preview {
        match state.dictionary.lookup(&pick.language, &pick.word).await {
            Ok(result) => {
                if let Some(sense) = result.senses.first() {
                    writeln!(out, "  {}", sense.meaning)?;
                }
            }
            Err(e) => {
                tracing::warn!("No preview for {}: {}", pick.word, e);
            }
        }
    }

    Ok(())
}
