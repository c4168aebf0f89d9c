//! Interactive word entry (`wordy add`).

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;
use wordy::{Entry, parse_tags};

use crate::cli::common::StoreArgs;
use crate::cli::utils::prompt;

/// Arguments for `wordy add`.
#[derive(Args, Debug)]
pub struct AddArgs {
    #[command(flatten)]
    pub store: StoreArgs,
}

/// Prompt for a word, its description and tags, then append it.
pub fn handle<R: BufRead, W: Write>(args: AddArgs, input: &mut R, output: &mut W) -> Result<()> {
    let config = args.store.config();
    let mut store = config
        .open_store()
        .with_context(|| format!("failed to open {}", config.path.display()))?;
    store.load()?;

    let word = prompt(input, output, "Word: ")?.trim().to_string();
    let description = prompt(input, output, "Description: ")?.trim().to_string();
    let tags = parse_tags(&prompt(input, output, "Tag(s): ")?);

    let entry = Entry::new(word, description, tags).stamped();
    let word = entry.word.clone();
    let path = store.path().to_path_buf();
    store.add(entry)?;
    store.close()?;
    info!(word = %word, "word added");
    writeln!(output, "Added '{}' to {}", word, path.display())?;
    Ok(())
}
