//! pbm2frame library crate.
//!
//! Converts plain-text PBM dumps of display frames into source code
//! literals for test fixtures. The modules are exposed for integration
//! testing.

pub mod cli;
pub mod codegen;
pub mod config;
pub mod convert;
pub mod glyphs;
pub mod pbm;
