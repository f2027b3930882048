//! Conversion command handler.

use std::io::{self, BufWriter, Write};

use super::args::Args;
use crate::config::{Config, ConfigError};
use crate::convert::{self, ConvertError, ConvertOptions, ConvertSummary};
use crate::glyphs::GlyphSet;

/// Errors that end a conversion run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Convert(#[from] ConvertError),
}

/// Merge command-line options over the config file.
///
/// Command-line values win, then config values, then built-in defaults.
pub fn resolve_options(args: &Args, config: &Config) -> Result<ConvertOptions, ConfigError> {
    let mut style = config.output_style();
    if let Some(declaration) = &args.declaration {
        style.declaration = declaration.clone();
    }
    if let Some(constructor) = &args.constructor {
        style.constructor = constructor.clone();
    }

    let glyphs = match args.glyphs {
        Some(g) => GlyphSet::from(g),
        None => config.glyph_set()?,
    };

    Ok(ConvertOptions { style, glyphs })
}

/// Run the conversion described by `args`, writing the literal to `out`.
pub fn run_with_output<W: Write>(args: &Args, out: W) -> Result<ConvertSummary, RunError> {
    eprintln!(
        "Reading PBM data from \"{}\" and generating code, variable name is \"{}\"",
        args.input_pbm.display(),
        args.test_frame_varname
    );

    let config = Config::load(args.config.as_deref())?;
    let options = resolve_options(args, &config)?;
    log::debug!("Using options: {:?}", options);

    let summary = convert::convert_file(&args.input_pbm, &args.test_frame_varname, &options, out)?;
    if summary.non_binary_rows > 0 {
        log::warn!(
            "{} of {} rows contained characters other than 0 and 1",
            summary.non_binary_rows,
            summary.rows
        );
    }
    Ok(summary)
}

/// Run the conversion with the literal going to stdout.
pub fn run(args: &Args) -> Result<ConvertSummary, RunError> {
    let stdout = io::stdout();
    run_with_output(args, BufWriter::new(stdout.lock()))
}
