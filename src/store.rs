use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::expand_home;
use crate::entry::Entry;
use crate::error::StoreError;
use crate::format::RecordFormat;

/// A word file plus the entries loaded from it.
///
/// The file is opened for reading and appending. Entries are read lazily by
/// [`Store::load`] and cached for the lifetime of the store.
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    format: RecordFormat,
    file: File,
    entries: Option<Vec<Entry>>,
    /// The file is non-empty and its last line has no terminating newline.
    unterminated: bool,
}

impl Store {
    /// Open (creating if absent) a word file in the default line format.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        Self::open_with(path, RecordFormat::default())
    }

    pub fn open_with(path: impl AsRef<Path>, format: RecordFormat) -> Result<Self, StoreError> {
        let path = expand_home(path.as_ref())?;
        let file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&path)
            .map_err(|err| StoreError::io(&path, err))?;
        debug!(path = %path.display(), %format, "opened word store");
        Ok(Self {
            path,
            format,
            file,
            entries: None,
            unterminated: false,
        })
    }

    /// Resolved location of the word file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> RecordFormat {
        self.format
    }

    /// Read the file into memory unless it has already been read.
    pub fn load(&mut self) -> Result<&[Entry], StoreError> {
        if self.entries.is_none() {
            (&self.file)
                .seek(SeekFrom::Start(0))
                .map_err(|err| StoreError::io(&self.path, err))?;
            let mut raw = Vec::new();
            (&self.file)
                .read_to_end(&mut raw)
                .map_err(|err| StoreError::io(&self.path, err))?;
            self.unterminated = raw.last().is_some_and(|&byte| byte != b'\n');
            let entries = self.format.decode(raw.as_slice(), &self.path)?;
            debug!(path = %self.path.display(), count = entries.len(), "loaded entries");
            self.entries = Some(entries);
        }
        Ok(self.entries.as_deref().unwrap_or_default())
    }

    /// Entries read so far; empty until [`Store::load`] has run.
    pub fn entries(&self) -> &[Entry] {
        self.entries.as_deref().unwrap_or_default()
    }

    /// Append a new entry, refusing empty and duplicate words.
    pub fn add(&mut self, entry: Entry) -> Result<(), StoreError> {
        if entry.word.trim().is_empty() {
            return Err(StoreError::InvalidInput("word must not be empty".to_string()));
        }
        self.load()?;
        if self.entries().iter().any(|e| e.word == entry.word) {
            return Err(StoreError::AlreadyExists(entry.word));
        }
        let mut record = self.format.encode(&entry)?;
        if self.unterminated {
            record.insert(0, '\n');
        }
        self.file
            .write_all(record.as_bytes())
            .and_then(|()| self.file.flush())
            .map_err(|err| StoreError::io(&self.path, err))?;
        self.unterminated = false;
        debug!(word = %entry.word, path = %self.path.display(), "appended entry");
        if let Some(entries) = self.entries.as_mut() {
            entries.push(entry);
        }
        Ok(())
    }

    /// Entries whose word or tags contain `term`, ignoring case. Loads first if needed.
    pub fn search(&mut self, term: &str) -> Result<Vec<&Entry>, StoreError> {
        let entries = self.load()?;
        Ok(entries.iter().filter(|entry| entry.matches(term)).collect())
    }

    /// Remove the entry with exactly this word and rewrite the file.
    pub fn remove(&mut self, word: &str) -> Result<Entry, StoreError> {
        self.load()?;
        let entries = self.entries.get_or_insert_with(Vec::new);
        let idx = entries
            .iter()
            .position(|e| e.word == word)
            .ok_or_else(|| StoreError::NotFound(word.to_string()))?;

        let mut remaining = entries.clone();
        let removed = remaining.remove(idx);
        let mut buffer = String::new();
        for entry in &remaining {
            buffer.push_str(&self.format.encode(entry)?);
        }

        // Appends always land at the end, so truncating first rewrites the file.
        self.file
            .set_len(0)
            .and_then(|()| self.file.write_all(buffer.as_bytes()))
            .and_then(|()| self.file.flush())
            .map_err(|err| StoreError::io(&self.path, err))?;
        self.unterminated = false;
        debug!(word, path = %self.path.display(), remaining = remaining.len(), "rewrote store");
        self.entries = Some(remaining);
        Ok(removed)
    }

    /// Flush and release the file handle.
    pub fn close(self) -> Result<(), StoreError> {
        self.file
            .sync_all()
            .map_err(|err| StoreError::io(&self.path, err))?;
        debug!(path = %self.path.display(), "closed word store");
        Ok(())
    }
}
