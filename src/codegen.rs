//! Emits a display frame as a source code literal.
//!
//! The generated text has the shape
//!
//! ```text
//! val name = makeDisplayFrame(arrayOf(
//!     "row1",
//!     "row2"
//! ))
//! ```
//!
//! Rows are written as soon as they are handed over. The separator for a
//! row is written in front of it, so no trailing comma is ever produced.

use std::io::{self, Write};

pub const DEFAULT_DECLARATION: &str = "val";
pub const DEFAULT_CONSTRUCTOR: &str = "makeDisplayFrame";
pub const DEFAULT_INDENT: &str = "    ";

/// Wrapper text around the row literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputStyle {
    /// Keyword in front of the identifier (e.g. `val`). Empty for none.
    pub declaration: String,
    /// Function the row array is passed to.
    pub constructor: String,
    /// Prefix of every row line.
    pub indent: String,
}

impl Default for OutputStyle {
    fn default() -> Self {
        Self {
            declaration: DEFAULT_DECLARATION.to_string(),
            constructor: DEFAULT_CONSTRUCTOR.to_string(),
            indent: DEFAULT_INDENT.to_string(),
        }
    }
}

impl OutputStyle {
    /// Opening line without its newline.
    pub fn opening_line(&self, name: &str) -> String {
        if self.declaration.is_empty() {
            format!("{} = {}(arrayOf(", name, self.constructor)
        } else {
            format!(
                "{} {} = {}(arrayOf(",
                self.declaration, name, self.constructor
            )
        }
    }
}

/// Incremental writer for one frame literal.
pub struct FrameLiteralWriter<'a, W: Write> {
    out: W,
    style: &'a OutputStyle,
    rows_written: usize,
}

impl<'a, W: Write> FrameLiteralWriter<'a, W> {
    /// Write the opening line and return a writer ready for rows.
    pub fn begin(mut out: W, style: &'a OutputStyle, name: &str) -> io::Result<Self> {
        writeln!(out, "{}", style.opening_line(name))?;
        Ok(Self {
            out,
            style,
            rows_written: 0,
        })
    }

    /// Write one already-substituted row.
    ///
    /// The row is emitted verbatim between double quotes.
    pub fn write_row(&mut self, row: &str) -> io::Result<()> {
        if self.rows_written > 0 {
            self.out.write_all(b",\n")?;
        }
        write!(self.out, "{}\"{}\"", self.style.indent, row)?;
        self.rows_written += 1;
        Ok(())
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Close the literal and hand the underlying writer back.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.write_all(b"\n))\n")?;
        self.out.flush()?;
        Ok(self.out)
    }
}
