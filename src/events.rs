//! The event sink interface and reference sink implementations.
//!
//! The layout engine does not build a document tree; it narrates the
//! structure it infers as a stream of callbacks on an [`EventSink`]. Sinks
//! are the only polymorphic seam in the pipeline — the engine's algorithmic
//! steps are fixed, only the consumer varies.

use crate::glyph::{Glyph, Style};
use serde::{Deserialize, Serialize};

/// Consumer of the structured event stream.
///
/// All methods default to no-ops so a sink only implements the callbacks it
/// cares about. For a fixed glyph sequence and configuration the engine
/// delivers an identical event sequence on every run.
pub trait EventSink {
    /// Called once before any other event.
    fn start_document(&mut self) {}

    /// Called once after all pages have been processed.
    fn end_document(&mut self) {}

    /// Called when a page begins. `first` and `last` describe the page
    /// range being processed, `current` the page at hand (all 1-based).
    fn start_page(&mut self, first: u32, last: u32, current: u32) {
        let _ = (first, last, current);
    }

    /// Called when a page ends.
    fn end_page(&mut self, first: u32, last: u32, current: u32) {
        let _ = (first, last, current);
    }

    /// Called when a new structural region (paragraph or heading) opens.
    fn start_region(&mut self, style: Style) {
        let _ = style;
    }

    /// Called when the current structural region closes.
    fn end_region(&mut self, style: Style) {
        let _ = style;
    }

    /// Called between two lines of the same region.
    fn line_separator(&mut self) {}

    /// Called between two glyphs judged to belong to different words.
    fn word_separator(&mut self) {}

    /// Called for every glyph, in reading order.
    fn write_character(&mut self, glyph: &Glyph) {
        let _ = glyph;
    }
}

/// A sink that flattens the event stream into plain text.
///
/// Word separators become spaces, line separators newlines, and each closed
/// region is followed by a newline.
///
/// # Examples
///
/// ```
/// use textweave::{EventSink, Glyph, PlainTextSink, Style};
///
/// let mut sink = PlainTextSink::new();
/// sink.start_region(Style::Paragraph);
/// sink.write_character(&Glyph::new("H", 0.0, 0.0, 6.0, 10.0, 10.0));
/// sink.write_character(&Glyph::new("i", 6.0, 0.0, 3.0, 10.0, 10.0));
/// sink.end_region(Style::Paragraph);
/// assert_eq!(sink.text(), "Hi\n");
/// ```
#[derive(Debug, Default)]
pub struct PlainTextSink {
    text: String,
}

impl PlainTextSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The text accumulated so far.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the sink, returning the accumulated text.
    pub fn into_text(self) -> String {
        self.text
    }
}

impl EventSink for PlainTextSink {
    fn end_region(&mut self, _style: Style) {
        self.text.push('\n');
    }

    fn line_separator(&mut self) {
        self.text.push('\n');
    }

    fn word_separator(&mut self) {
        self.text.push(' ');
    }

    fn write_character(&mut self, glyph: &Glyph) {
        self.text.push_str(&glyph.text);
    }
}

/// One recorded sink callback.
///
/// Serializable so event traces can be dumped as JSON and compared in tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// `start_document()` was called
    StartDocument,
    /// `end_document()` was called
    EndDocument,
    /// `start_page(first, last, current)` was called
    StartPage {
        /// First page of the processed range
        first: u32,
        /// Last page of the processed range
        last: u32,
        /// The page that just started
        current: u32,
    },
    /// `end_page(first, last, current)` was called
    EndPage {
        /// First page of the processed range
        first: u32,
        /// Last page of the processed range
        last: u32,
        /// The page that just ended
        current: u32,
    },
    /// `start_region(style)` was called
    StartRegion {
        /// Style of the opened region
        style: Style,
    },
    /// `end_region(style)` was called
    EndRegion {
        /// Style of the closed region
        style: Style,
    },
    /// `line_separator()` was called
    LineSeparator,
    /// `word_separator()` was called
    WordSeparator,
    /// `write_character(glyph)` was called
    WriteCharacter {
        /// Text of the written glyph
        text: String,
    },
}

/// A sink that records every callback as an [`Event`].
///
/// The primary tool for asserting on exact event sequences in tests.
#[derive(Debug, Default)]
pub struct RecordingSink {
    /// The recorded events, in delivery order.
    pub events: Vec<Event>,
}

impl RecordingSink {
    /// Create an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventSink for RecordingSink {
    fn start_document(&mut self) {
        self.events.push(Event::StartDocument);
    }

    fn end_document(&mut self) {
        self.events.push(Event::EndDocument);
    }

    fn start_page(&mut self, first: u32, last: u32, current: u32) {
        self.events.push(Event::StartPage {
            first,
            last,
            current,
        });
    }

    fn end_page(&mut self, first: u32, last: u32, current: u32) {
        self.events.push(Event::EndPage {
            first,
            last,
            current,
        });
    }

    fn start_region(&mut self, style: Style) {
        self.events.push(Event::StartRegion { style });
    }

    fn end_region(&mut self, style: Style) {
        self.events.push(Event::EndRegion { style });
    }

    fn line_separator(&mut self) {
        self.events.push(Event::LineSeparator);
    }

    fn word_separator(&mut self) {
        self.events.push(Event::WordSeparator);
    }

    fn write_character(&mut self, glyph: &Glyph) {
        self.events.push(Event::WriteCharacter {
            text: glyph.text.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph(text: &str, x: f32) -> Glyph {
        Glyph::new(text, x, 0.0, 6.0, 10.0, 10.0)
    }

    #[test]
    fn test_plain_text_sink() {
        let mut sink = PlainTextSink::new();
        sink.start_document();
        sink.start_region(Style::Paragraph);
        sink.write_character(&glyph("a", 0.0));
        sink.word_separator();
        sink.write_character(&glyph("b", 12.0));
        sink.line_separator();
        sink.write_character(&glyph("c", 0.0));
        sink.end_region(Style::Paragraph);
        sink.end_document();

        assert_eq!(sink.text(), "a b\nc\n");
    }

    #[test]
    fn test_recording_sink_order() {
        let mut sink = RecordingSink::new();
        sink.start_document();
        sink.start_page(1, 2, 1);
        sink.start_region(Style::Heading);
        sink.write_character(&glyph("T", 0.0));
        sink.end_region(Style::Heading);
        sink.end_page(1, 2, 1);
        sink.end_document();

        assert_eq!(
            sink.events,
            vec![
                Event::StartDocument,
                Event::StartPage {
                    first: 1,
                    last: 2,
                    current: 1
                },
                Event::StartRegion {
                    style: Style::Heading
                },
                Event::WriteCharacter {
                    text: "T".to_string()
                },
                Event::EndRegion {
                    style: Style::Heading
                },
                Event::EndPage {
                    first: 1,
                    last: 2,
                    current: 1
                },
                Event::EndDocument,
            ]
        );
    }

    #[test]
    fn test_event_serialization() {
        let event = Event::StartRegion {
            style: Style::Heading,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("start_region"));
        assert!(json.contains("heading"));

        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
