//! Block prediction: estimating the shape of the next structural block.
//!
//! The segmenter cannot know a block's margins or line spacing before
//! reading it, so it predicts them from a short look-ahead window of lines.
//! The window is collected in two passes (a loose pass guarded against
//! column jumps, then a strict vertical-adjacency trim), and the left and
//! right margins are estimated as the statistical mode of the window's line
//! extents using a coarse bucket histogram.

use crate::glyph::Glyph;
use crate::layout::lines::{self, Line};

/// Tolerated overshoot of a line gap relative to the estimated spacing,
/// tuned empirically at 27%.
pub const LINE_SPACING_MARGIN: f32 = 0.27;

/// Bucket width as a fraction of the estimated line spacing.
pub const BUCKET_WIDTH_RATIO: f32 = 0.1;

/// The segmenter's expectation for the next structural block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// Expected distance between consecutive line tops
    pub line_spacing: f32,
    /// Expected line height
    pub line_height: f32,
    /// Most common left extent among sampled lines
    pub left: f32,
    /// Most common right extent among sampled lines
    pub right: f32,
    /// Fraction of the requested window whose left margin fell in the
    /// modal bucket, in `[0, 1]`
    pub quality: f32,
}

/// Vertical adjacency test between two line tops.
///
/// With the top-down y convention used throughout this crate, the next line
/// must start strictly below the previous one and within `1.27 * spacing`
/// of it.
pub fn vertically_adjacent(cur_top: f32, prev_top: f32, spacing: f32) -> bool {
    cur_top > prev_top && cur_top < prev_top + (1.0 + LINE_SPACING_MARGIN) * spacing
}

/// Coarse histogram for mode estimation over noisy margin samples.
///
/// A sample joins the first bucket whose representative value lies within
/// one bucket width; otherwise it opens a new bucket and becomes that
/// bucket's representative. The best bucket is the most populated one,
/// earliest-opened winning ties.
#[derive(Debug)]
struct Buckets {
    width: f32,
    buckets: Vec<Bucket>,
}

#[derive(Debug)]
struct Bucket {
    representative: f32,
    count: usize,
}

impl Buckets {
    fn new(width: f32) -> Self {
        Self {
            width,
            buckets: Vec::new(),
        }
    }

    fn add(&mut self, value: f32) {
        for bucket in &mut self.buckets {
            if (value - bucket.representative).abs() <= self.width {
                bucket.count += 1;
                return;
            }
        }
        self.buckets.push(Bucket {
            representative: value,
            count: 1,
        });
    }

    /// Representative value and member count of the most populated bucket.
    fn best(&self) -> Option<(f32, usize)> {
        let mut best: Option<&Bucket> = None;
        for bucket in &self.buckets {
            if best.map_or(true, |b| bucket.count > b.count) {
                best = Some(bucket);
            }
        }
        best.map(|b| (b.representative, b.count))
    }
}

/// Predict the next block's shape from up to `depth` lines starting at
/// `start`.
///
/// Never fails: with a single-line window the spacing defaults to that
/// line's own height, the margins to its extents, and the quality to
/// `1 / depth`. An out-of-range `start` yields a zeroed prediction.
pub fn predict(glyphs: &[Glyph], start: usize, depth: usize) -> Prediction {
    if start >= glyphs.len() || depth == 0 {
        return Prediction {
            line_spacing: 0.0,
            line_height: 0.0,
            left: 0.0,
            right: 0.0,
            quality: 0.0,
        };
    }

    // First pass: collect the window, stopping at any gap that falls
    // outside the running spacing estimate (a column jump, not a line).
    let mut window: Vec<Line> = Vec::with_capacity(depth);
    let mut gaps: Vec<f32> = Vec::with_capacity(depth);
    let mut estimate = 0.0;
    let mut cursor = start;
    while window.len() < depth && cursor < glyphs.len() {
        let line = lines::assemble(glyphs, cursor);
        if let Some(prev) = window.last() {
            let gap = (line.top - prev.top).abs();
            if gap >= (1.0 + LINE_SPACING_MARGIN) * estimate {
                break;
            }
            gaps.push(gap);
            estimate = gaps.iter().sum::<f32>() / gaps.len() as f32;
        } else {
            estimate = line.height;
        }
        cursor = line.end;
        window.push(line);
    }

    let (spacing, _) = window_stats(&window, &gaps);

    // Second pass: trim lines that are not strictly adjacent under the
    // first-pass spacing; they belong to a different block.
    let mut kept = 1;
    while kept < window.len()
        && vertically_adjacent(window[kept].top, window[kept - 1].top, spacing)
    {
        kept += 1;
    }
    window.truncate(kept);
    gaps.truncate(kept.saturating_sub(1));

    let (line_spacing, line_height) = window_stats(&window, &gaps);

    let bucket_width = BUCKET_WIDTH_RATIO * line_spacing;
    let mut lefts = Buckets::new(bucket_width);
    let mut rights = Buckets::new(bucket_width);
    for line in &window {
        lefts.add(line.left);
        rights.add(line.right);
    }

    // The window always holds at least the seed line, so both histograms
    // are populated.
    let (left, left_count) = lefts.best().unwrap_or((0.0, 0));
    let (right, _) = rights.best().unwrap_or((0.0, 0));

    let prediction = Prediction {
        line_spacing,
        line_height,
        left,
        right,
        quality: left_count as f32 / depth as f32,
    };
    log::debug!(
        "predicted block at glyph {}: spacing {:.2}, height {:.2}, left {:.2}, right {:.2}, quality {:.2}",
        start,
        prediction.line_spacing,
        prediction.line_height,
        prediction.left,
        prediction.right,
        prediction.quality
    );
    prediction
}

/// Mean line spacing and mean line height over a window.
///
/// A single-line window reports the line's own height as its spacing.
fn window_stats(window: &[Line], gaps: &[f32]) -> (f32, f32) {
    let spacing = if gaps.is_empty() {
        window.first().map(|l| l.height).unwrap_or(0.0)
    } else {
        gaps.iter().sum::<f32>() / gaps.len() as f32
    };
    let height = window.iter().map(|l| l.height).sum::<f32>() / window.len().max(1) as f32;
    (spacing, height)
}
