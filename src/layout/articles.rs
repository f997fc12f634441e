//! Article routing: assigning glyphs to bead regions.
//!
//! A page may declare ordered rectangular "beads" (newspaper-style columns
//! or article threads). The router distributes glyphs into `2R + 1` ordered
//! buckets for `R` beads: bucket `2i + 1` holds the text inside bead `i`,
//! and the even buckets hold the stray text before, between, and after the
//! beads, ordered by reading position. Routing is total and stable: every
//! glyph lands in exactly one bucket and emission order is preserved within
//! a bucket.

use crate::geometry::{Point, Rect};
use crate::glyph::Glyph;

/// Distributes glyphs into per-article buckets.
///
/// # Examples
///
/// ```
/// use textweave::geometry::Rect;
/// use textweave::layout::articles::ArticleRouter;
/// use textweave::Glyph;
///
/// let beads = vec![Rect::new(0.0, 0.0, 100.0, 400.0)];
/// let mut router = ArticleRouter::new(&beads, true);
/// router.route(Glyph::new("a", 50.0, 50.0, 6.0, 10.0, 10.0));
/// router.route(Glyph::new("b", 200.0, 50.0, 6.0, 10.0, 10.0));
///
/// let articles = router.into_articles();
/// assert_eq!(articles.len(), 3); // before, inside, after
/// assert_eq!(articles[1][0].text, "a");
/// assert_eq!(articles[2][0].text, "b");
/// ```
#[derive(Debug)]
pub struct ArticleRouter {
    beads: Vec<Rect>,
    buckets: Vec<Vec<Glyph>>,
}

impl ArticleRouter {
    /// Create a router for one page's bead rectangles.
    ///
    /// Bead rectangles are normalized on entry so either-handed coordinates
    /// are accepted. When `separate_by_articles` is false (or the page has
    /// no beads) all glyphs go to a single bucket.
    pub fn new(beads: &[Rect], separate_by_articles: bool) -> Self {
        let beads: Vec<Rect> = if separate_by_articles {
            beads.iter().map(Rect::normalized).collect()
        } else {
            Vec::new()
        };
        let buckets = vec![Vec::new(); 2 * beads.len() + 1];
        Self { beads, buckets }
    }

    /// Route one glyph into its bucket.
    pub fn route(&mut self, glyph: Glyph) {
        let bucket = self.bucket_for(&glyph);
        self.buckets[bucket].push(glyph);
    }

    /// Consume the router, yielding the buckets in reading order.
    pub fn into_articles(self) -> Vec<Vec<Glyph>> {
        self.buckets
    }

    /// Select the bucket for a glyph's top-left point.
    ///
    /// Containment wins over everything; otherwise the first bead (in
    /// reading order) that the point precedes — left of, above, or both —
    /// claims the gap bucket just before it, and a point past every bead
    /// falls into the trailing gap bucket.
    fn bucket_for(&self, glyph: &Glyph) -> usize {
        if self.beads.is_empty() {
            return 0;
        }

        let p = Point::new(glyph.x, glyph.y);
        for (i, bead) in self.beads.iter().enumerate() {
            if bead.contains_point(&p) {
                return 2 * i + 1;
            }
        }
        for (i, bead) in self.beads.iter().enumerate() {
            if p.x < bead.left || p.y < bead.top {
                log::trace!(
                    "glyph {:?} at ({}, {}) precedes bead {}",
                    glyph.text,
                    p.x,
                    p.y,
                    i
                );
                return 2 * i;
            }
        }
        2 * self.beads.len()
    }
}
