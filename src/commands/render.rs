//! Render command implementation

use console::Style;

use crate::cli::RenderArgs;
use crate::document;
use crate::error::Result;
use crate::render;

/// Run render command
pub fn run(args: RenderArgs) -> Result<()> {
    let resolved = render::render_file(&args.input)?;
    let content = render::serialize(&resolved, args.format)?;

    if args.in_place {
        document::write(&args.input, &content)?;
        println!(
            "{} {}",
            Style::new().bold().green().apply_to("Rendered"),
            args.input.display()
        );
    } else if let Some(output) = args.output {
        document::write(&output, &content)?;
        println!(
            "{} {} -> {}",
            Style::new().bold().green().apply_to("Rendered"),
            args.input.display(),
            output.display()
        );
    } else {
        print!("{content}");
    }

    Ok(())
}
