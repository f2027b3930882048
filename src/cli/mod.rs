//! Command-line interface definitions and helpers.
//!
//! This module contains CLI argument parsing, enums, and the command handler.

mod args;
mod commands;
mod enums;

pub use args::Args;
pub use commands::{resolve_options, run, run_with_output, RunError};
pub use enums::GlyphStyle;
