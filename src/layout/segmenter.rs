//! The region segmentation state machine.
//!
//! Consumes one article's glyphs in order and narrates the inferred
//! structure to an [`EventSink`]: regions (paragraphs and headings), line
//! separators within a region, and word separators within a line. The
//! decisions lean on the line assembler, the block predictor, and the word
//! spacing classifier; the segmenter itself owns the break logic and the
//! growable bounding block.
//!
//! Coordinates are top-down: a cursor that moves above the accumulated
//! block's top edge signals a jump to a new column.

use crate::config::EngineConfig;
use crate::events::EventSink;
use crate::glyph::{Glyph, Style};
use crate::layout::lines;
use crate::layout::predictor::{self, vertically_adjacent};
use crate::layout::spacing::needs_word_separator;

/// A line may drift from the predicted left margin by this fraction of the
/// predicted line spacing before it counts as indented or outdented.
pub const INDENT_MARGIN_RATIO: f32 = 0.2;

/// Hysteresis bound for prediction replacement: a candidate prediction
/// whose quality deviates from the current one by more than this relative
/// amount, in the worse direction, is rejected.
pub const PREDICTION_DEVIATION_LIMIT: f32 = 0.4;

/// A growable bounding box over the glyphs of one structural unit.
#[derive(Debug, Clone)]
pub struct BasicBlock {
    /// Left edge
    pub left: f32,
    /// Top edge
    pub top: f32,
    /// Right edge
    pub right: f32,
    /// Bottom edge
    pub bottom: f32,
    /// Number of lines consumed into the block
    pub line_count: usize,
    /// Accumulated text, kept for debugging
    pub text: String,
}

impl BasicBlock {
    /// Start an empty block anchored at a glyph's position.
    pub fn starting_at(glyph: &Glyph) -> Self {
        Self {
            left: glyph.x,
            top: glyph.y,
            right: glyph.x,
            bottom: glyph.y,
            line_count: 0,
            text: String::new(),
        }
    }

    /// Grow the block to cover one more glyph.
    pub fn grow(&mut self, glyph: &Glyph) {
        self.left = self.left.min(glyph.x);
        self.top = self.top.min(glyph.top());
        self.right = self.right.max(glyph.right());
        self.bottom = self.bottom.max(glyph.bottom());
        self.text.push_str(&glyph.text);
    }

    /// Record that a new line has been consumed into the block.
    pub fn start_line(&mut self) {
        self.line_count += 1;
    }

    /// Enforce `top <= bottom` and `left <= right`, swapping edges that
    /// arrived either-handed.
    ///
    /// Blocks built through [`starting_at`] and [`grow`] are normalized by
    /// construction; this is for callers that restore a block from stored
    /// geometry measured on a bottom-up axis.
    ///
    /// [`starting_at`]: BasicBlock::starting_at
    /// [`grow`]: BasicBlock::grow
    pub fn normalize(&mut self) {
        if self.top > self.bottom {
            std::mem::swap(&mut self.top, &mut self.bottom);
        }
        if self.left > self.right {
            std::mem::swap(&mut self.left, &mut self.right);
        }
    }
}

/// The per-article segmentation state machine.
///
/// All state lives on the stack for the duration of one [`segment`] call;
/// nothing survives between articles or pages.
///
/// [`segment`]: RegionSegmenter::segment
#[derive(Debug)]
pub struct RegionSegmenter<'a> {
    config: &'a EngineConfig,
}

impl<'a> RegionSegmenter<'a> {
    /// Create a segmenter over a configuration.
    pub fn new(config: &'a EngineConfig) -> Self {
        Self { config }
    }

    /// Segment one article's glyphs, emitting events to `sink`.
    ///
    /// An empty article is a no-op. The segmentation itself cannot fail;
    /// heuristic misjudgments are approximations, not errors.
    pub fn segment<E: EventSink>(&self, glyphs: &[Glyph], sink: &mut E) {
        let Some(first) = glyphs.first() else {
            return;
        };
        let depth = self.config.lookahead_depth;
        let threshold = self.config.heading_font_size;

        let mut style = Style::Page;
        let mut new_region = true;
        let mut prediction = predictor::predict(glyphs, 0, depth);
        let mut block = BasicBlock::starting_at(first);
        let mut cursor = 0;

        while cursor < glyphs.len() {
            let line = lines::assemble(glyphs, cursor);
            let line_style = Style::classify(&glyphs[cursor], threshold);

            if new_region || line_style != style {
                if style != Style::Page {
                    sink.end_region(style);
                }
                sink.start_region(line_style);
                new_region = false;
            }
            style = line_style;

            // Consume the line glyph by glyph.
            block.start_line();
            let mut prev: Option<&Glyph> = None;
            for glyph in &glyphs[line.start..line.end] {
                if let Some(prev) = prev {
                    if needs_word_separator(prev, glyph) {
                        sink.word_separator();
                    }
                }
                block.grow(glyph);
                sink.write_character(glyph);
                prev = Some(glyph);
            }
            cursor = line.end;

            let Some(next_glyph) = glyphs.get(cursor) else {
                break;
            };

            // Break decision: does the next line continue this region?
            let next_line = lines::assemble(glyphs, cursor);
            let margin = INDENT_MARGIN_RATIO * prediction.line_spacing;
            let column_switch = next_glyph.y < block.top;
            let left_indented = next_glyph.x > prediction.left + margin;
            let left_outdented = next_glyph.x < prediction.left - margin;
            let adjacent = vertically_adjacent(next_line.top, line.top, prediction.line_spacing);
            let style_changed = Style::classify(next_glyph, threshold) != style;

            if !column_switch && !left_indented && !left_outdented && adjacent && !style_changed {
                sink.line_separator();
                continue;
            }

            log::debug!(
                "region break at glyph {}: column_switch={} indented={} outdented={} adjacent={} style_changed={}",
                cursor,
                column_switch,
                left_indented,
                left_outdented,
                adjacent,
                style_changed
            );
            new_region = true;
            block = BasicBlock::starting_at(next_glyph);

            // Replace the prediction, with hysteresis when the break is
            // purely a failed adjacency: a significantly worse candidate
            // would flap the margins on short gaps, so keep the old one.
            let candidate = predictor::predict(glyphs, cursor, depth);
            let adjacency_only =
                !column_switch && !left_indented && !left_outdented && !style_changed;
            if !(adjacency_only && significantly_worse(candidate.quality, prediction.quality)) {
                prediction = candidate;
            }
        }

        if style != Style::Page {
            sink.end_region(style);
        }
    }
}

/// Quality comparison for prediction hysteresis: true when the relative
/// deviation exceeds the limit and the candidate is the worse of the two.
fn significantly_worse(candidate: f32, current: f32) -> bool {
    let total = candidate + current;
    if total <= 0.0 {
        return false;
    }
    (candidate - current).abs() / total > PREDICTION_DEVIATION_LIMIT && candidate < current
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{Event, RecordingSink};

    fn glyph(text: &str, x: f32, y: f32, size: f32) -> Glyph {
        Glyph::new(text, x, y, size * 0.6, size, size)
    }

    /// Lay out a string as one line of glyphs starting at (x, y).
    fn line_of(text: &str, x: f32, y: f32, size: f32) -> Vec<Glyph> {
        let width = size * 0.6;
        text.chars()
            .enumerate()
            .map(|(i, c)| glyph(&c.to_string(), x + i as f32 * width, y, size))
            .collect()
    }

    fn segment_all(glyphs: &[Glyph]) -> Vec<Event> {
        let config = EngineConfig::default();
        let mut sink = RecordingSink::new();
        RegionSegmenter::new(&config).segment(glyphs, &mut sink);
        sink.events
    }

    fn count(events: &[Event], wanted: &Event) -> usize {
        events.iter().filter(|e| *e == wanted).count()
    }

    #[test]
    fn test_empty_article_is_noop() {
        assert!(segment_all(&[]).is_empty());
    }

    #[test]
    fn test_single_line_single_region() {
        let glyphs = line_of("abc", 0.0, 0.0, 10.0);
        let events = segment_all(&glyphs);

        assert_eq!(
            events.first(),
            Some(&Event::StartRegion {
                style: Style::Paragraph
            })
        );
        assert_eq!(
            events.last(),
            Some(&Event::EndRegion {
                style: Style::Paragraph
            })
        );
        assert_eq!(count(&events, &Event::LineSeparator), 0);
    }

    #[test]
    fn test_uniform_lines_one_paragraph() {
        // Five 10pt lines at 12pt spacing: one region, four line separators
        let mut glyphs = Vec::new();
        for i in 0..5 {
            glyphs.extend(line_of("hello", 0.0, i as f32 * 12.0, 10.0));
        }
        let events = segment_all(&glyphs);

        assert_eq!(
            count(
                &events,
                &Event::StartRegion {
                    style: Style::Paragraph
                }
            ),
            1
        );
        assert_eq!(
            count(
                &events,
                &Event::EndRegion {
                    style: Style::Paragraph
                }
            ),
            1
        );
        assert_eq!(count(&events, &Event::LineSeparator), 4);
    }

    #[test]
    fn test_style_change_forces_region_break() {
        // A 20pt line then a 10pt line, geometrically one block
        let mut glyphs = line_of("Big", 0.0, 0.0, 20.0);
        glyphs.extend(line_of("small", 0.0, 24.0, 10.0));
        let events = segment_all(&glyphs);

        let boundary: Vec<&Event> = events
            .iter()
            .filter(|e| {
                matches!(e, Event::StartRegion { .. })
                    || matches!(e, Event::EndRegion { .. })
                    || matches!(e, Event::LineSeparator)
            })
            .collect();
        assert_eq!(
            boundary,
            vec![
                &Event::StartRegion {
                    style: Style::Heading
                },
                &Event::EndRegion {
                    style: Style::Heading
                },
                &Event::StartRegion {
                    style: Style::Paragraph
                },
                &Event::EndRegion {
                    style: Style::Paragraph
                },
            ]
        );
    }

    #[test]
    fn test_column_switch_forces_region_break() {
        // Three lines down the page, then a jump back up: a new column,
        // even though style and margins are compatible.
        let mut glyphs = Vec::new();
        for i in 0..3 {
            glyphs.extend(line_of("col", 0.0, 100.0 + i as f32 * 12.0, 10.0));
        }
        glyphs.extend(line_of("col", 0.0, 0.0, 10.0));
        let events = segment_all(&glyphs);

        assert_eq!(
            count(
                &events,
                &Event::StartRegion {
                    style: Style::Paragraph
                }
            ),
            2
        );
        assert_eq!(count(&events, &Event::LineSeparator), 2);
    }

    #[test]
    fn test_indented_line_starts_new_region() {
        let mut glyphs = Vec::new();
        for i in 0..3 {
            glyphs.extend(line_of("body", 0.0, i as f32 * 12.0, 10.0));
        }
        // Indented by 10pt; the allowance is 0.2 * 12 = 2.4pt
        glyphs.extend(line_of("body", 10.0, 36.0, 10.0));
        let events = segment_all(&glyphs);

        assert_eq!(
            count(
                &events,
                &Event::StartRegion {
                    style: Style::Paragraph
                }
            ),
            2
        );
    }

    #[test]
    fn test_word_separator_within_line() {
        // "ab cd" with a two-glyph-width gap between b and c
        let mut glyphs = line_of("ab", 0.0, 0.0, 10.0);
        glyphs.extend(line_of("cd", 24.0, 0.0, 10.0));
        let events = segment_all(&glyphs);

        assert_eq!(count(&events, &Event::WordSeparator), 1);
        assert_eq!(count(&events, &Event::LineSeparator), 0);
    }

    #[test]
    fn test_block_grows_and_normalizes() {
        let mut block = BasicBlock::starting_at(&glyph("a", 10.0, 10.0, 10.0));
        block.grow(&glyph("a", 10.0, 10.0, 10.0));
        block.grow(&glyph("b", 16.0, 10.0, 10.0));
        assert_eq!(block.left, 10.0);
        assert_eq!(block.right, 22.0);
        assert_eq!(block.top, 10.0);
        assert_eq!(block.bottom, 20.0);
        assert_eq!(block.text, "ab");

        let mut flipped = BasicBlock::starting_at(&glyph("a", 0.0, 0.0, 10.0));
        flipped.top = 30.0;
        flipped.bottom = 10.0;
        flipped.normalize();
        assert!(flipped.top <= flipped.bottom);
    }

    #[test]
    fn test_significantly_worse() {
        // Deviation |0.1-0.9|/1.0 = 0.8 > 0.4, candidate worse
        assert!(significantly_worse(0.1, 0.9));
        // Better candidate is never rejected
        assert!(!significantly_worse(0.9, 0.1));
        // Small deviation passes
        assert!(!significantly_worse(0.5, 0.6));
        assert!(!significantly_worse(0.0, 0.0));
    }
}
