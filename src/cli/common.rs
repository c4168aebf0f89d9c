//! Shared clap helper types for CLI commands.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use wordy::{Config, DEFAULT_STORE_PATH, RecordFormat};

/// Record formats accepted by `--format`.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum FormatArg {
    /// Three lines per word: word, description, comma-joined tags.
    Lines,
    /// One JSON object per line.
    Jsonl,
}

impl From<FormatArg> for RecordFormat {
    fn from(value: FormatArg) -> RecordFormat {
        match value {
            FormatArg::Lines => RecordFormat::Lines,
            FormatArg::Jsonl => RecordFormat::Jsonl,
        }
    }
}

/// Word file selection shared by every command.
#[derive(Args, Debug, Clone)]
pub struct StoreArgs {
    /// File to save to.
    #[arg(short = 'f', long = "file", default_value = DEFAULT_STORE_PATH)]
    pub file: PathBuf,
    /// On-disk record format of the file.
    #[arg(long, default_value_t = FormatArg::Lines, value_enum)]
    pub format: FormatArg,
}

impl StoreArgs {
    pub fn config(&self) -> Config {
        Config::new(self.file.clone(), self.format.into())
    }
}
