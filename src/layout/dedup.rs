//! Duplicate glyph suppression.
//!
//! Some renderers fake bold text by painting the same glyph two or three
//! times at almost the same position. The deduplicator keeps a per-page
//! history of accepted glyph positions keyed by glyph text and rejects any
//! repaint that lands within a small tolerance of an already accepted one.

use crate::glyph::Glyph;
use std::collections::HashMap;

/// Filter that suppresses repeated paints of the same glyph.
///
/// The history is scoped to one page; build a fresh deduplicator per page.
///
/// # Examples
///
/// ```
/// use textweave::layout::dedup::GlyphDeduplicator;
/// use textweave::Glyph;
///
/// let mut dedup = GlyphDeduplicator::new(true);
/// let g = Glyph::new("A", 100.0, 50.0, 9.0, 12.0, 12.0);
/// assert!(dedup.accept(&g));
/// // The fake-bold overstrike lands a fraction of a point away
/// let overstrike = Glyph::new("A", 100.4, 50.4, 9.0, 12.0, 12.0);
/// assert!(!dedup.accept(&overstrike));
/// ```
#[derive(Debug)]
pub struct GlyphDeduplicator {
    enabled: bool,
    seen: HashMap<String, Vec<(f32, f32)>>,
}

impl GlyphDeduplicator {
    /// Create a deduplicator. When `enabled` is false every glyph is
    /// accepted and no history is kept.
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            seen: HashMap::new(),
        }
    }

    /// Decide whether `glyph` is a fresh paint.
    ///
    /// Returns `false` when an already accepted glyph with the same text
    /// lies within the tolerance of both the x and y position. Accepted
    /// glyphs are recorded; suppressed ones are not, so running the filter
    /// over its own output suppresses nothing further.
    pub fn accept(&mut self, glyph: &Glyph) -> bool {
        if !self.enabled {
            return true;
        }

        let tolerance = Self::tolerance(glyph);
        let positions = self.seen.entry(glyph.text.clone()).or_default();
        let duplicate = positions
            .iter()
            .any(|&(x, y)| (glyph.x - x).abs() < tolerance && (glyph.y - y).abs() < tolerance);
        if duplicate {
            return false;
        }
        positions.push((glyph.x, glyph.y));
        true
    }

    /// Positional tolerance for one glyph: a third of its average
    /// per-character advance.
    fn tolerance(glyph: &Glyph) -> f32 {
        let chars = glyph.text.chars().count().max(1) as f32;
        glyph.width / chars / 3.0
    }
}
