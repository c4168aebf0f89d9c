//! Word lookup (`wordy search`).

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use wordy::Entry;

use crate::cli::common::StoreArgs;

/// Arguments for `wordy search`.
#[derive(Args, Debug)]
pub struct SearchArgs {
    #[command(flatten)]
    pub store: StoreArgs,
    /// Text to look for in words and tags (case-insensitive); lists everything when omitted.
    pub term: Option<String>,
    /// Only show words carrying this exact tag.
    #[arg(long)]
    pub tag: Option<String>,
    /// Print matches as a JSON array.
    #[arg(long)]
    pub json: bool,
}

pub fn handle<W: Write>(args: SearchArgs, output: &mut W) -> Result<()> {
    let config = args.store.config();
    let mut store = config
        .open_store()
        .with_context(|| format!("failed to open {}", config.path.display()))?;
    let term = args.term.as_deref().unwrap_or("");
    let matches: Vec<&Entry> = store
        .search(term)?
        .into_iter()
        .filter(|entry| args.tag.as_deref().map_or(true, |tag| entry.has_tag(tag)))
        .collect();

    if args.json {
        serde_json::to_writer_pretty(&mut *output, &matches)
            .context("failed to serialize matches")?;
        writeln!(output)?;
    } else if matches.is_empty() {
        writeln!(output, "No matching words.")?;
    } else {
        for entry in &matches {
            print_entry(output, entry)?;
        }
    }
    store.close()?;
    Ok(())
}

fn print_entry<W: Write>(output: &mut W, entry: &Entry) -> Result<()> {
    writeln!(output, "{}", entry.word)?;
    if !entry.description.is_empty() {
        writeln!(output, "    {}", entry.description)?;
    }
    if !entry.tags.is_empty() {
        writeln!(output, "    tags: {}", entry.tags.join(", "))?;
    }
    if let Some(added) = entry.added_at {
        writeln!(output, "    added: {}", added.format("%Y-%m-%d"))?;
    }
    Ok(())
}
