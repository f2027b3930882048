//! PBM file to display frame literal conversion.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::codegen::{FrameLiteralWriter, OutputStyle};
use crate::glyphs::{self, GlyphSet};
use crate::pbm::DataRows;

/// Errors that can occur while converting a frame.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The input file does not exist or could not be opened.
    #[error("Could not find file \"{}\"", .path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Everything that shapes the generated literal apart from the frame itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    pub style: OutputStyle,
    pub glyphs: GlyphSet,
}

/// Summary of a finished conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertSummary {
    /// Number of row literals emitted.
    pub rows: usize,
    /// Rows that contained characters other than `0` and `1`.
    pub non_binary_rows: usize,
}

/// Convert the PBM file at `path` and write the literal to `out`.
///
/// If the file cannot be opened nothing is written to `out`.
pub fn convert_file<W: Write>(
    path: &Path,
    name: &str,
    options: &ConvertOptions,
    out: W,
) -> Result<ConvertSummary, ConvertError> {
    let file = File::open(path).map_err(|e| ConvertError::InputNotFound {
        path: path.to_path_buf(),
        source: e,
    })?;
    log::debug!("Opened {}", path.display());

    convert_reader(BufReader::new(file), name, options, out)
}

/// Convert PBM text from `reader` and write the literal to `out`.
///
/// The opening line is written before the first row is read. Rows are
/// substituted and written one at a time.
pub fn convert_reader<R: BufRead, W: Write>(
    reader: R,
    name: &str,
    options: &ConvertOptions,
    out: W,
) -> Result<ConvertSummary, ConvertError> {
    let mut writer = FrameLiteralWriter::begin(out, &options.style, name)?;
    let mut non_binary_rows = 0;

    for row in DataRows::new(reader) {
        let row = row?;
        if !glyphs::is_binary_row(&row) {
            non_binary_rows += 1;
            log::warn!(
                "Row {} contains non-pixel characters, copying them unchanged: {:?}",
                writer.rows_written(),
                row
            );
        }
        writer.write_row(&options.glyphs.map_row(&row))?;
    }

    let rows = writer.rows_written();
    writer.finish()?;
    log::debug!("Wrote {} rows for {}", rows, name);

    Ok(ConvertSummary {
        rows,
        non_binary_rows,
    })
}
