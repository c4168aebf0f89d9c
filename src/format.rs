use std::fmt;
use std::io::{BufRead, ErrorKind};
use std::path::Path;

use crate::entry::{Entry, parse_tags};
use crate::error::StoreError;

const LINES_PER_RECORD: usize = 3;

/// On-disk layout of a word file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordFormat {
    /// Three lines per entry: word, description, comma-joined tags.
    #[default]
    Lines,
    /// One JSON object per line.
    Jsonl,
}

impl RecordFormat {
    /// Serialize one entry, including its trailing newline.
    pub fn encode(self, entry: &Entry) -> Result<String, StoreError> {
        match self {
            RecordFormat::Lines => encode_lines(entry),
            RecordFormat::Jsonl => {
                let mut line = serde_json::to_string(entry)
                    .map_err(|err| StoreError::InvalidInput(err.to_string()))?;
                line.push('\n');
                Ok(line)
            }
        }
    }

    /// Read every entry from `reader`. `path` only labels errors.
    pub fn decode<R: BufRead>(self, reader: R, path: &Path) -> Result<Vec<Entry>, StoreError> {
        let mut lines = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|err| match err.kind() {
                ErrorKind::InvalidData => StoreError::parse(path, idx + 1, "line is not valid UTF-8"),
                _ => StoreError::io(path, err),
            })?;
            lines.push(line);
        }
        match self {
            RecordFormat::Lines => decode_lines(&lines, path),
            RecordFormat::Jsonl => decode_jsonl(&lines, path),
        }
    }
}

fn encode_lines(entry: &Entry) -> Result<String, StoreError> {
    if has_line_break(&entry.word) || has_line_break(&entry.description) {
        return Err(StoreError::InvalidInput(
            "word and description must fit on a single line".to_string(),
        ));
    }
    if entry
        .tags
        .iter()
        .any(|tag| tag.contains(',') || has_line_break(tag))
    {
        return Err(StoreError::InvalidInput(
            "tags must not contain commas or line breaks".to_string(),
        ));
    }
    if entry.tags.iter().any(|tag| tag.trim() != tag) {
        return Err(StoreError::InvalidInput(
            "tags must not start or end with whitespace".to_string(),
        ));
    }
    // A blank tag line reads back as no tags at all.
    if entry.tags.len() == 1 && entry.tags[0].is_empty() {
        return Err(StoreError::InvalidInput(
            "a single empty tag cannot be stored in the lines format".to_string(),
        ));
    }
    Ok(format!(
        "{}\n{}\n{}\n",
        entry.word,
        entry.description,
        entry.tags.join(",")
    ))
}

fn decode_lines(lines: &[String], path: &Path) -> Result<Vec<Entry>, StoreError> {
    let mut entries = Vec::with_capacity(lines.len() / LINES_PER_RECORD);
    for (idx, record) in lines.chunks(LINES_PER_RECORD).enumerate() {
        let line_no = idx * LINES_PER_RECORD + 1;
        if record.len() < LINES_PER_RECORD {
            return Err(StoreError::parse(
                path,
                line_no,
                format!(
                    "truncated record: expected {} lines, found {}",
                    LINES_PER_RECORD,
                    record.len()
                ),
            ));
        }
        let entry = Entry::new(record[0].as_str(), record[1].as_str(), parse_tags(&record[2]));
        push_checked(&mut entries, entry, path, line_no)?;
    }
    Ok(entries)
}

fn decode_jsonl(lines: &[String], path: &Path) -> Result<Vec<Entry>, StoreError> {
    let mut entries = Vec::new();
    for (idx, raw) in lines.iter().enumerate() {
        if raw.trim().is_empty() {
            continue;
        }
        let entry: Entry = serde_json::from_str(raw)
            .map_err(|err| StoreError::parse(path, idx + 1, err.to_string()))?;
        push_checked(&mut entries, entry, path, idx + 1)?;
    }
    Ok(entries)
}

/// Reject records that would break the one-entry-per-word invariant.
fn push_checked(
    entries: &mut Vec<Entry>,
    entry: Entry,
    path: &Path,
    line: usize,
) -> Result<(), StoreError> {
    if entry.word.is_empty() {
        return Err(StoreError::parse(path, line, "record has an empty word"));
    }
    if entries.iter().any(|e| e.word == entry.word) {
        return Err(StoreError::parse(
            path,
            line,
            format!("duplicate word '{}'", entry.word),
        ));
    }
    entries.push(entry);
    Ok(())
}

fn has_line_break(value: &str) -> bool {
    value.contains('\n') || value.contains('\r')
}

impl fmt::Display for RecordFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordFormat::Lines => write!(f, "lines"),
            RecordFormat::Jsonl => write!(f, "jsonl"),
        }
    }
}
