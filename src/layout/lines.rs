//! Line assembly: grouping consecutive glyphs into lines.
//!
//! A line is the maximal contiguous run of glyphs that pass the same-line
//! test against their predecessor, plus superscript/subscript glyphs that
//! overlap the line band vertically. Lines are assembled lazily from a seed
//! index and are not persisted beyond one predictor or segmenter step.

use crate::glyph::Glyph;

/// Two glyphs are co-linear when their vertical centers differ by less than
/// this fraction of the previous glyph's height.
pub const SAME_LINE_CENTER_RATIO: f32 = 0.25;

/// A superscript or subscript may extend this fraction of the line height
/// beyond the line band and still count as a continuation.
pub const SCRIPT_OVERLAP_RATIO: f32 = 0.6;

/// A maximal run of co-linear glyphs, identified by index range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    /// Index of the first member glyph
    pub start: usize,
    /// Index one past the last member glyph
    pub end: usize,
    /// Smallest top edge among co-linear members
    pub top: f32,
    /// Largest bottom edge among co-linear members
    pub bottom: f32,
    /// Smallest left edge among all members
    pub left: f32,
    /// Largest right edge among all members
    pub right: f32,
    /// Largest glyph height among all members
    pub height: f32,
}

impl Line {
    /// Number of member glyphs. Never zero: a line always contains at
    /// least its seed glyph.
    pub fn len(&self) -> usize {
        self.end - self.start
    }
}

/// Same-line test between a glyph and its predecessor.
///
/// True when the y positions match exactly, or when the vertical centers
/// differ by less than a quarter of the predecessor's height.
pub fn same_line(cur: &Glyph, prev: &Glyph) -> bool {
    if cur.y == prev.y {
        return true;
    }
    (cur.vertical_center() - prev.vertical_center()).abs()
        < SAME_LINE_CENTER_RATIO * prev.height
}

/// Superscript continuation test: the glyph sits raised, within
/// `[top - 0.6 * line_height, bottom]`, and still overlaps the line band.
fn is_superscript(glyph: &Glyph, line: &Line) -> bool {
    glyph.top() >= line.top - SCRIPT_OVERLAP_RATIO * line.height
        && glyph.bottom() <= line.bottom
        && glyph.bottom() > line.top
}

/// Subscript continuation test: the glyph sits lowered, within
/// `[top, bottom + 0.6 * line_height]`, and still overlaps the line band.
/// Without the overlap requirement a following line that merely touches
/// the band would be swallowed into this one.
fn is_subscript(glyph: &Glyph, line: &Line) -> bool {
    glyph.top() >= line.top
        && glyph.bottom() <= line.bottom + SCRIPT_OVERLAP_RATIO * line.height
        && glyph.top() < line.bottom
}

/// Assemble the line seeded at `start`.
///
/// Extends the run while each glyph is co-linear with its predecessor or is
/// a superscript/subscript continuation of the line assembled so far.
/// Continuations widen the line and contribute to its height but do not
/// move the vertical band, so a run of baseline glyphs after a script
/// glyph still belongs to the same line.
///
/// # Panics
///
/// Panics if `start` is out of bounds; callers always seed from a valid
/// cursor.
pub fn assemble(glyphs: &[Glyph], start: usize) -> Line {
    let seed = &glyphs[start];
    let mut line = Line {
        start,
        end: start + 1,
        top: seed.top(),
        bottom: seed.bottom(),
        left: seed.x,
        right: seed.right(),
        height: seed.height,
    };

    for i in start + 1..glyphs.len() {
        let glyph = &glyphs[i];
        let prev = &glyphs[i - 1];
        if same_line(glyph, prev) {
            line.top = line.top.min(glyph.top());
            line.bottom = line.bottom.max(glyph.bottom());
        } else if !is_superscript(glyph, &line) && !is_subscript(glyph, &line) {
            break;
        }
        line.left = line.left.min(glyph.x);
        line.right = line.right.max(glyph.right());
        line.height = line.height.max(glyph.height);
        line.end = i + 1;
    }

    line
}
