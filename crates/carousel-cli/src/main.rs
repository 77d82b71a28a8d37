// this_file: crates/carousel-cli/src/main.rs

//! Carousel CLI: branded slide batches from plain text.

mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Render(args) => {
            init_logger(args.verbose, args.quiet);
            commands::render::run(args)?;
        },
        Commands::Post(args) => {
            init_logger(args.verbose, false);
            commands::post::run(args)?;
        },
        Commands::Info(args) => {
            init_logger(false, false);
            commands::info::run(args)?;
        },
    }

    Ok(())
}

/// Initialize logging based on verbosity flags.
fn init_logger(verbose: bool, quiet: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else if quiet {
        log::LevelFilter::Error
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}
