use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use shabda_core::export::ExportFormat;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(name = "shabda")]
#[command(version)]
#[command(about = "Personal multilingual dictionary and word bank", long_about = None)]
pub struct Cli {
    /// JSON config profile (defaults to ./shabda.json when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the data directory
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// A word in the word bank
#[derive(Args, Debug, Clone)]
pub struct WordArgs {
    pub word: String,

    /// Language code (defaults to the configured default language)
    #[arg(short, long)]
    pub language: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Look a word up, adding it to the word bank
    Lookup {
        #[command(flatten)]
        word: WordArgs,

        /// Re-fetch the definition, keeping notes, tags and flags
        #[arg(long)]
        refresh: bool,
    },
    /// Show a banked word without calling the dictionary
    Show(WordArgs),
    /// Remove a word and its notes from the word bank
    Delete(WordArgs),
    /// Toggle the favourite flag
    Favourite(WordArgs),
    /// Toggle the pinned flag
    Pin(WordArgs),
    /// List favourite words
    Favourites,
    /// List pinned words
    Pinned,
    /// Word tags
    #[command(subcommand)]
    Tag(TagCommand),
    /// General notes
    #[command(subcommand)]
    Note(NoteCommand),
    /// Notes attached to a word
    #[command(subcommand)]
    WordNote(WordNoteCommand),
    /// Lookup history
    #[command(subcommand)]
    History(HistoryCommand),
    /// Search banked words by text and tags
    Search {
        query: Option<String>,

        /// Required tag, repeatable
        #[arg(short, long = "tag")]
        tags: Vec<String>,
    },
    /// Word of the day
    Daily {
        /// Pick for another date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Skip fetching a preview definition
        #[arg(long)]
        no_preview: bool,
    },
    /// List configured languages
    Languages,
    /// Export everything
    Export {
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Replace all records with a JSON export
    Import { path: PathBuf },
    /// Write a config profile with default values
    InitConfig {
        #[arg(default_value = "shabda.json")]
        path: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
pub enum TagCommand {
    /// Add a tag to a word
    Add {
        #[command(flatten)]
        word: WordArgs,
        label: String,
    },
    /// Remove a tag from a word
    Remove {
        #[command(flatten)]
        word: WordArgs,
        label: String,
    },
    /// List known tags with usage counts
    List,
}

#[derive(Subcommand, Debug)]
pub enum NoteCommand {
    Add {
        text: String,
        #[arg(long)]
        important: bool,
    },
    /// Important first, then newest
    List,
    Delete { id: Uuid },
    /// Toggle the important flag
    Important { id: Uuid },
}

#[derive(Subcommand, Debug)]
pub enum WordNoteCommand {
    Add {
        #[command(flatten)]
        word: WordArgs,
        text: String,
        #[arg(long)]
        important: bool,
    },
    List(WordArgs),
    Delete {
        #[command(flatten)]
        word: WordArgs,
        id: Uuid,
    },
    Important {
        #[command(flatten)]
        word: WordArgs,
        id: Uuid,
    },
}

#[derive(Subcommand, Debug)]
pub enum HistoryCommand {
    /// Newest first
    List {
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    Delete { id: Uuid },
    Clear,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Text,
}

impl From<Format> for ExportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => ExportFormat::Json,
            Format::Text => ExportFormat::Text,
        }
    }
}
