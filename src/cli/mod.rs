//! Command-line interface wiring for the `wordy` binary.
//!
//! This module owns the clap definitions and delegates execution to one
//! submodule per command. Handlers take their input and output streams
//! explicitly so the interactive prompts can be driven from tests.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod add;
pub mod common;
pub mod logging;
pub mod remove;
pub mod search;
pub mod utils;

const ROOT_ABOUT: &str = "\
Wordy is a personal collection of words that you find interesting or useful in writing.
It helps you keep track of the words you add, filter through the existing words, and
tag the words to separate them into different categories.";

/// Parsed CLI entrypoint for the `wordy` binary.
#[derive(Parser, Debug)]
#[command(
    name = "wordy",
    version,
    about = "Personal collection of interesting words",
    long_about = ROOT_ABOUT,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Print debug logs to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Commands made available to end users.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new word.
    Add(add::AddArgs),
    /// Search existing words.
    Search(search::SearchArgs),
    /// Remove an existing word.
    Remove(remove::RemoveArgs),
}

/// Execute the requested command against the process stdin/stdout.
pub fn run(cli: Cli) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();
    dispatch(cli.command, &mut input, &mut output)
}

/// Execute a command with explicit streams.
pub fn dispatch<R: BufRead, W: Write>(command: Command, input: &mut R, output: &mut W) -> Result<()> {
    match command {
        Command::Add(args) => add::handle(args, input, output),
        Command::Search(args) => search::handle(args, output),
        Command::Remove(args) => remove::handle(args, input, output),
    }
}
