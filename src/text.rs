use crate::metrics::FontMetrics;
use crate::pt::Pt;

/// Measures the rendered width of `text` at `font_size`.
///
/// The width is the sum of every glyph's advance plus the kerning between
/// each adjacent pair, scaled from design units by `font_size / units_per_em`.
/// Glyphs without an advance contribute nothing. Kerning may be negative.
///
/// An empty string or a zero font size measures zero.
///
/// # Example
/// ```no_run
/// # use glyphwrap::{GlyphWrapper, Pt};
/// let mut wrapper = GlyphWrapper::default();
/// wrapper.load_sync().unwrap();
/// let width = wrapper.compute_width("Lorem ipsum dolor sit amet", 12.0).unwrap();
/// assert!(width.approx_eq(Pt::from(165.3046875), 1e-4));
/// ```
pub fn compute_width<F: FontMetrics + ?Sized>(font: &F, text: &str, font_size: Pt) -> Pt {
    let glyphs = font.glyphs_for_str(text);
    let scale = font_size.as_f32() / font.units_per_em();

    let mut width = 0.0f32;
    let mut prev = None;

    for glyph in glyphs {
        if let Some(p) = prev {
            width += font.kerning(p, glyph) * scale;
        }
        if let Some(advance) = font.advance_width(glyph) {
            width += advance * scale;
        }
        prev = Some(glyph);
    }

    Pt::from(width)
}
