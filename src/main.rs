//! Deanchor - YAML anchor flattener
//!
//! A command line tool that reads a YAML document containing anchors, aliases
//! and merge keys and writes it back with every reference expanded into an
//! independent copy. Useful for consumers that reject aliases, such as GitHub
//! Actions workflow files.

use clap::Parser;

mod cli;
mod commands;
mod document;
mod error;
mod merge;
mod render;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render(args) => commands::render::run(args),
        Commands::Check(args) => commands::check::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
