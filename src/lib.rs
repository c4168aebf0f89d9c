//! Core library for keeping a personal collection of words.
//!
//! Words live in a flat file (by default `~/.wordy`) together with a short
//! description and a list of tags. [`Store`] owns that file and the entries
//! read from it.

mod config;
mod entry;
mod error;
mod format;
mod store;

pub use config::{Config, DEFAULT_STORE_PATH, expand_home};
pub use entry::{Entry, parse_tags};
pub use error::StoreError;
pub use format::RecordFormat;
pub use store::Store;
