//! Word boundary detection between horizontally adjacent glyphs.
//!
//! Page-description formats rarely paint space characters; word boundaries
//! are mostly encoded as horizontal gaps. The classifier predicts where the
//! next word would start if the two glyphs were separated by a space, and
//! emits a separator when the current glyph begins past that point:
//!
//! ```text
//! expected_start = prev.right + 0.5 * spacing
//! separator      = expected_start < cur.x
//! ```
//!
//! where `spacing` is the font's declared space width when available (the
//! average of both glyphs' space widths when each font declares one), and
//! the glyph's own width otherwise.

use crate::glyph::Glyph;

/// Fraction of the estimated space width a gap must reach before it counts
/// as a word boundary.
pub const WORD_GAP_RATIO: f32 = 0.5;

/// Effective word spacing for a glyph: the font's declared space width when
/// positive, the glyph's own width otherwise.
pub fn word_spacing(glyph: &Glyph) -> f32 {
    if glyph.space_width > 0.0 {
        glyph.space_width
    } else {
        glyph.width
    }
}

/// Decide whether a word separator belongs between `prev` and `cur`.
///
/// No separator is emitted when the previous glyph carries no text or
/// already ends with a space.
///
/// # Examples
///
/// ```
/// use textweave::layout::spacing::needs_word_separator;
/// use textweave::Glyph;
///
/// let a = Glyph::new("A", 0.0, 0.0, 6.0, 10.0, 10.0);
/// // Flush against "A": same word
/// let tight = Glyph::new("B", 6.0, 0.0, 6.0, 10.0, 10.0);
/// assert!(!needs_word_separator(&a, &tight));
/// // Two space-widths away: separate words
/// let far = Glyph::new("B", 18.0, 0.0, 6.0, 10.0, 10.0);
/// assert!(needs_word_separator(&a, &far));
/// ```
pub fn needs_word_separator(prev: &Glyph, cur: &Glyph) -> bool {
    let spacing = if prev.space_width <= 0.0 {
        word_spacing(cur)
    } else {
        (word_spacing(cur) + word_spacing(prev)) / 2.0
    };
    let expected_start = prev.right() + WORD_GAP_RATIO * spacing;

    expected_start < cur.x && !prev.text.is_empty() && !prev.text.ends_with(' ')
}
