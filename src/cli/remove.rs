//! Word removal (`wordy remove`).

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::{ArgAction, Args};
use tracing::info;
use wordy::StoreError;

use crate::cli::common::StoreArgs;
use crate::cli::utils::{confirm, prompt};

/// Arguments for `wordy remove`.
#[derive(Args, Debug)]
pub struct RemoveArgs {
    #[command(flatten)]
    pub store: StoreArgs,
    /// Word to remove; prompted for when omitted.
    pub word: Option<String>,
    /// Confirm before removing (`--confirm=false` to skip).
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = true,
        default_missing_value = "true"
    )]
    pub confirm: bool,
}

pub fn handle<R: BufRead, W: Write>(args: RemoveArgs, input: &mut R, output: &mut W) -> Result<()> {
    let config = args.store.config();
    let mut store = config
        .open_store()
        .with_context(|| format!("failed to open {}", config.path.display()))?;
    store.load()?;

    let word = match args.word {
        Some(word) => word.trim().to_string(),
        None => prompt(input, output, "Word: ")?.trim().to_string(),
    };
    if !store.entries().iter().any(|entry| entry.word == word) {
        return Err(StoreError::NotFound(word).into());
    }
    if args.confirm && !confirm(input, output, &format!("Remove '{}'?", word))? {
        writeln!(output, "Aborted.")?;
        return Ok(());
    }

    let path = store.path().to_path_buf();
    store.remove(&word)?;
    store.close()?;
    info!(word = %word, "word removed");
    writeln!(output, "Removed '{}' from {}", word, path.display())?;
    Ok(())
}
