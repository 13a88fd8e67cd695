//! Version command implementation

use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    println!(
        "deanchor {} ({} build)",
        env!("CARGO_PKG_VERSION"),
        build_profile()
    );
    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_runs() {
        assert!(run().is_ok());
    }

    #[test]
    fn test_build_profile_known_value() {
        assert!(matches!(build_profile(), "debug" | "release"));
    }
}
