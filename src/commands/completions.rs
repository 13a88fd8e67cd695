//! Shell completions command

use clap::CommandFactory;

use crate::cli::{Cli, CompletionsArgs};
use crate::error::Result;

/// Generate completions for the requested shell on stdout
///
/// Shell validation happens at argument parsing time; by the time this runs
/// the shell is known good.
pub fn run(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(args.shell, &mut cmd, "deanchor", &mut std::io::stdout().lock());

    Ok(())
}
