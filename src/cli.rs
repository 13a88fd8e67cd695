//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::render::OutputFormat;

/// Deanchor - YAML anchor flattener
///
/// Resolve anchors, aliases and merge keys in a YAML document into fully
/// inlined values.
#[derive(Parser, Debug)]
#[command(
    name = "deanchor",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Resolve YAML anchors, aliases and merge keys into a flat document",
    long_about = "Deanchor reads a YAML document that uses anchors (&name), aliases (*name) \
                  and merge keys (<<) and writes it back with every reference expanded into \
                  an independent copy. Useful for tools that reject aliases, such as GitHub \
                  Actions workflow files.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  deanchor render templates/test.yml -o .github/workflows/test.yml\n    \
                  deanchor render config.yml\n    \
                  deanchor render config.yml --in-place\n    \
                  deanchor check config.yml"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a document with all anchors, aliases and merge keys resolved
    Render(RenderArgs),

    /// Check that a document parses and report unresolved merge keys
    Check(CheckArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the render command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Render to a file:\n    deanchor render templates/test.yml -o .github/workflows/test.yml\n\n\
                  Render to stdout:\n    deanchor render config.yml\n\n\
                  Rewrite the input file:\n    deanchor render config.yml --in-place\n\n\
                  Emit JSON instead of YAML:\n    deanchor render config.yml --format json")]
pub struct RenderArgs {
    /// Path to the source YAML document, relative to the current directory
    pub input: PathBuf,

    /// Destination path (defaults to stdout)
    #[arg(long, short = 'o', conflicts_with = "in_place")]
    pub output: Option<PathBuf>,

    /// Overwrite the input file with the rendered document
    #[arg(long)]
    pub in_place: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "yaml")]
    pub format: OutputFormat,
}

/// Arguments for the check command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Check a document:\n    deanchor check config.yml")]
pub struct CheckArgs {
    /// Path to the YAML document to check
    pub input: PathBuf,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    deanchor completions --shell bash > ~/.bash_completion.d/deanchor\n\n\
                  Generate zsh completions:\n    deanchor completions --shell zsh > ~/.zfunc/_deanchor\n\n\
                  Generate fish completions:\n    deanchor completions --shell fish > ~/.config/fish/completions/deanchor.fish")]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(long, value_enum)]
    pub shell: clap_complete::Shell,
}
