//! Pixel to glyph substitution for display frame rows.

/// Glyph for a set pixel in the default block style (Unicode full block).
pub const BLOCK_GLYPH: char = '█';

/// Glyph for a set pixel in the plain ASCII style.
pub const ASCII_GLYPH: char = '#';

/// Glyph for an unset pixel.
pub const BLANK_GLYPH: char = ' ';

/// Pair of glyphs a PBM row is rendered with.
///
/// `0` pixels become `unset`, `1` pixels become `set`. Anything else in the
/// row is passed through untouched, so malformed input still produces
/// output instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphSet {
    pub set: char,
    pub unset: char,
}

impl Default for GlyphSet {
    fn default() -> Self {
        Self::BLOCKS
    }
}

impl GlyphSet {
    /// Full block for set pixels, space for unset ones.
    pub const BLOCKS: GlyphSet = GlyphSet {
        set: BLOCK_GLYPH,
        unset: BLANK_GLYPH,
    };

    /// `#` for set pixels, space for unset ones.
    pub const ASCII: GlyphSet = GlyphSet {
        set: ASCII_GLYPH,
        unset: BLANK_GLYPH,
    };

    pub fn new(set: char, unset: char) -> Self {
        Self { set, unset }
    }

    /// Map one pixel character to its glyph.
    #[inline]
    pub fn map_pixel(&self, pixel: char) -> char {
        match pixel {
            '0' => self.unset,
            '1' => self.set,
            other => other,
        }
    }

    /// Substitute every pixel of a row.
    ///
    /// The output has exactly as many characters as the input.
    pub fn map_row(&self, row: &str) -> String {
        row.chars().map(|c| self.map_pixel(c)).collect()
    }

    /// Reverse [`GlyphSet::map_row`], turning glyphs back into `0`/`1`.
    ///
    /// Only exact for rows that were purely binary before mapping, and only
    /// when `set != unset`.
    pub fn unmap_row(&self, row: &str) -> String {
        row.chars()
            .map(|c| {
                if c == self.set {
                    '1'
                } else if c == self.unset {
                    '0'
                } else {
                    c
                }
            })
            .collect()
    }
}

/// Returns true if the row consists only of `0` and `1` pixels.
pub fn is_binary_row(row: &str) -> bool {
    row.chars().all(|c| c == '0' || c == '1')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_blocks() {
        assert_eq!(GlyphSet::default(), GlyphSet::BLOCKS);
        assert_eq!(GlyphSet::default().set, '█');
        assert_eq!(GlyphSet::default().unset, ' ');
    }

    #[test]
    fn test_map_row_blocks() {
        assert_eq!(GlyphSet::BLOCKS.map_row("010"), " █ ");
        assert_eq!(GlyphSet::BLOCKS.map_row("101"), "█ █");
    }

    #[test]
    fn test_map_row_ascii() {
        assert_eq!(GlyphSet::ASCII.map_row("0110"), " ## ");
    }

    #[test]
    fn test_map_row_keeps_char_length() {
        let row = "0011100101011111000";
        let mapped = GlyphSet::BLOCKS.map_row(row);
        assert_eq!(mapped.chars().count(), row.chars().count());
        assert!(!mapped.contains('0'));
        assert!(!mapped.contains('1'));
    }

    #[test]
    fn test_map_row_passes_through_unknown_chars() {
        assert_eq!(GlyphSet::BLOCKS.map_row("0x1"), " x█");
        assert_eq!(GlyphSet::BLOCKS.map_row("0 1"), "  █");
    }

    #[test]
    fn test_map_row_empty() {
        assert_eq!(GlyphSet::BLOCKS.map_row(""), "");
    }

    #[test]
    fn test_unmap_row_restores_binary_row() {
        let row = "1001011";
        let mapped = GlyphSet::BLOCKS.map_row(row);
        assert_eq!(GlyphSet::BLOCKS.unmap_row(&mapped), row);

        let mapped = GlyphSet::ASCII.map_row(row);
        assert_eq!(GlyphSet::ASCII.unmap_row(&mapped), row);
    }

    #[test]
    fn test_custom_glyphs() {
        let glyphs = GlyphSet::new('*', '.');
        assert_eq!(glyphs.map_row("0110"), ".**.");
        assert_eq!(glyphs.unmap_row(".**."), "0110");
    }

    #[test]
    fn test_is_binary_row() {
        assert!(is_binary_row("010101"));
        assert!(is_binary_row(""));
        assert!(!is_binary_row("0102"));
        assert!(!is_binary_row("01 0"));
    }
}
