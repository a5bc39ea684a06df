use ab_glyph::{Font as _, GlyphId};

use crate::font::LoadedFont;

/// Glyph metrics needed to measure a run of text.
///
/// All values are in font design units. Implementations must be immutable
/// once constructed so they can be shared across threads.
pub trait FontMetrics {
    /// Size of the font's design grid. Always positive.
    fn units_per_em(&self) -> f32;

    fn glyph_id(&self, ch: char) -> GlyphId;

    /// One glyph per character, in order. No ligature substitution.
    fn glyphs_for_str(&self, text: &str) -> Vec<GlyphId> {
        text.chars().map(|ch| self.glyph_id(ch)).collect()
    }

    /// Horizontal advance, or `None` for glyphs that do not define one.
    fn advance_width(&self, glyph: GlyphId) -> Option<f32>;

    /// Pair adjustment between two adjacent glyphs, `0.0` when the pair is not kerned.
    fn kerning(&self, first: GlyphId, second: GlyphId) -> f32;
}

impl FontMetrics for LoadedFont {
    fn units_per_em(&self) -> f32 {
        self.units_per_em
    }

    fn glyph_id(&self, ch: char) -> GlyphId {
        self.font.glyph_id(ch)
    }

    fn advance_width(&self, glyph: GlyphId) -> Option<f32> {
        Some(self.font.h_advance_unscaled(glyph))
    }

    fn kerning(&self, first: GlyphId, second: GlyphId) -> f32 {
        self.font.kern_unscaled(first, second)
    }
}
