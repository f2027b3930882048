//! CLI enum types for glyph selection.

use clap::ValueEnum;

use crate::glyphs::GlyphSet;

/// Glyphs used for set and unset pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum GlyphStyle {
    /// Full block for set pixels, space for unset ones
    #[default]
    Blocks,
    /// `#` for set pixels, space for unset ones
    Ascii,
}

impl From<GlyphStyle> for GlyphSet {
    fn from(g: GlyphStyle) -> Self {
        match g {
            GlyphStyle::Blocks => GlyphSet::BLOCKS,
            GlyphStyle::Ascii => GlyphSet::ASCII,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_style_to_glyph_set() {
        assert_eq!(GlyphSet::from(GlyphStyle::Blocks), GlyphSet::BLOCKS);
        assert_eq!(GlyphSet::from(GlyphStyle::Ascii), GlyphSet::ASCII);
    }

    #[test]
    fn test_glyph_style_default() {
        assert_eq!(GlyphStyle::default(), GlyphStyle::Blocks);
    }
}
