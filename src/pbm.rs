//! Streaming access to the pixel rows of a plain-text PBM file.
//!
//! Only the narrow subset produced by frame dumps is understood: the first
//! line is the magic number, the second the `width height` pair, and every
//! following line holds one row of `0`/`1` pixels. Neither header line is
//! parsed or validated.

use std::io::{self, BufRead};

/// Number of header lines preceding the pixel rows.
pub const HEADER_LINES: usize = 2;

/// Iterator over the data rows of a PBM document.
///
/// Header lines are consumed and discarded on the first call to `next`.
/// Each yielded row has its leading and trailing whitespace stripped. Rows
/// are read lazily, one line at a time.
pub struct DataRows<R> {
    lines: io::Lines<R>,
    header_skipped: bool,
}

impl<R: BufRead> DataRows<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            header_skipped: false,
        }
    }

    fn skip_header(&mut self) -> io::Result<()> {
        for index in 0..HEADER_LINES {
            match self.lines.next() {
                Some(line) => {
                    let line = line?;
                    log::debug!("Skipping PBM header line {}: {:?}", index, line.trim());
                }
                None => break,
            }
        }
        self.header_skipped = true;
        Ok(())
    }
}

impl<R: BufRead> Iterator for DataRows<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.header_skipped {
            if let Err(e) = self.skip_header() {
                return Some(Err(e));
            }
        }

        self.lines
            .next()
            .map(|line| line.map(|l| l.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn rows(input: &str) -> Vec<String> {
        DataRows::new(Cursor::new(input))
            .collect::<io::Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_skips_two_header_lines() {
        assert_eq!(rows("P1\n3 2\n010\n101\n"), vec!["010", "101"]);
    }

    #[test]
    fn test_header_only_yields_nothing() {
        assert!(rows("P1\n3 0\n").is_empty());
    }

    #[test]
    fn test_short_input_yields_nothing() {
        assert!(rows("").is_empty());
        assert!(rows("P1\n").is_empty());
    }

    #[test]
    fn test_missing_trailing_newline() {
        assert_eq!(rows("P1\n2 1\n01"), vec!["01"]);
    }

    #[test]
    fn test_strips_surrounding_whitespace() {
        assert_eq!(rows("P1\n3 2\n  010 \t\r\n101\r\n"), vec!["010", "101"]);
    }

    #[test]
    fn test_lone_carriage_return_is_not_a_line_break() {
        // Only `\n` and `\r\n` end a line, so an old Mac style file reads
        // as a single header line.
        assert!(rows("P1\r3 2\r010\r101\r").is_empty());
    }

    #[test]
    fn test_headers_are_not_validated() {
        assert_eq!(rows("whatever\nnot dimensions\n11\n"), vec!["11"]);
    }

    #[test]
    fn test_blank_data_lines_are_kept() {
        assert_eq!(rows("P1\n2 3\n01\n\n10\n"), vec!["01", "", "10"]);
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let input: &[u8] = b"P1\n2 1\n0\xff\n";
        let mut it = DataRows::new(input);
        assert!(it.next().unwrap().is_err());
    }
}
