//! Anchor-resolving renderer
//!
//! The core pipeline: load a YAML document, expand every anchor, alias, and
//! merge key into concrete values, and serialize the flattened result. The
//! output contains no `&`, `*`, or `<<` markers; every formerly aliased node
//! is an independently owned copy of the referenced value.

use std::path::Path;

use serde_yaml::Value;

use crate::document;
use crate::error::Result;
use crate::merge;

/// Output serialization format for a rendered document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// YAML (default)
    #[default]
    Yaml,
    /// Pretty-printed JSON
    Json,
}

/// Render a YAML file into a fully resolved value tree
pub fn render_file(input: &Path) -> Result<Value> {
    let parsed = document::load(input)?;
    merge::resolve(parsed, &input.display().to_string())
}

/// Render YAML text into a fully resolved value tree
///
/// `source` names the document in error diagnostics.
pub fn render_str(text: &str, source: &str) -> Result<Value> {
    let parsed = document::parse_str(text, source)?;
    merge::resolve(parsed, source)
}

/// Serialize a resolved value tree in the requested format
pub fn serialize(value: &Value, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => document::to_yaml(value),
        OutputFormat::Json => document::to_json(value),
    }
}
