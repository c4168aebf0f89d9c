mod cli;

use clap::Parser;

use cli::Cli;
use cli::utils::normalize_legacy_flags;

fn main() {
    let cli = Cli::parse_from(normalize_legacy_flags(std::env::args_os()));
    cli::logging::init(cli.verbose);

    if let Err(err) = cli::run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
