//! Command implementations for deanchor CLI

pub mod check;
pub mod completions;
pub mod render;
pub mod version;
