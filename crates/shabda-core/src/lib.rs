pub mod bank;
pub mod daily;
pub mod dictionary;
pub mod error;
pub mod export;
pub mod history;
pub mod notes;
pub mod preprocess;
pub mod search;

#[cfg(test)]
mod testing;

pub use error::CoreError;
