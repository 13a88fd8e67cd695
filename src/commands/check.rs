//! Check command implementation

use console::Style;

use crate::cli::CheckArgs;
use crate::document;
use crate::error::Result;
use crate::merge;

/// Run check command
///
/// Parses the document the same way `render` does and reports whether it
/// still contains merge keys. Never writes any file.
pub fn run(args: CheckArgs) -> Result<()> {
    let value = document::load(&args.input)?;

    let status = if merge::contains_merge_keys(&value) {
        "well-formed, contains merge keys to resolve"
    } else {
        "well-formed, nothing to resolve"
    };

    println!(
        "{} {}: {}",
        Style::new().bold().green().apply_to("OK"),
        args.input.display(),
        status
    );

    Ok(())
}
