use std::io::Write;

use shabda_core::export::counted;
use shabda_core::history;

use crate::cli::HistoryCommand;
use crate::state::AppState;

pub fn handle_history(
    state: &AppState,
    command: HistoryCommand,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    match command {
        HistoryCommand::List { limit } => {
            let records = state.store.load()?;
            let limit = limit.unwrap_or(state.config.history_limit);
            for item in history::recent(&records, limit) {
                writeln!(
                    out,
                    "{} {} [{}] {}",
                    item.id,
                    item.looked_up_at.format("%Y-%m-%d %H:%M"),
                    item.language,
                    item.headword
                )?;
            }
        }
        HistoryCommand::Delete { id } => {
            let item = state
                .store
                .update(|r| history::delete_history_item(r, id))?;
            writeln!(out, "Deleted {} from history", item.headword)?;
        }
        HistoryCommand::Clear => {
            let removed = state
                .store
                .update(|r| Ok::<_, shabda_core::CoreError>(history::clear_history(r)))?;
            writeln!(out, "Cleared {}", counted(removed, "history item", "history items"))?;
        }
    }
    Ok(())
}
