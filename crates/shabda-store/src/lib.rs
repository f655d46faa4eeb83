mod error;
mod store;

pub use error::StoreError;
pub use store::{HISTORY_FILE, NOTES_FILE, RecordStore, TAGS_FILE, WORDS_FILE};
