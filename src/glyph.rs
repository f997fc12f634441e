//! The glyph model: one positioned character with geometry and font data.
//!
//! Glyphs are what a page-description interpreter emits: "draw text at
//! (x, y) with this size". They are immutable once produced; the layout
//! engine only reads them. Coordinates are top-down (y grows toward the
//! page bottom) and `y` is the glyph's top edge.

use serde::{Deserialize, Serialize};

fn default_scale() -> f32 {
    1.0
}

/// One positioned character (or ligature) as emitted by the interpreter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Glyph {
    /// The text painted by this glyph. Usually a single character, but
    /// ligatures and multi-character codes occur.
    pub text: String,
    /// Left edge x-coordinate
    pub x: f32,
    /// Top edge y-coordinate
    pub y: f32,
    /// Advance width
    pub width: f32,
    /// Glyph height
    pub height: f32,
    /// Nominal font size in points
    pub font_size: f32,
    /// Horizontal render scale applied by the interpreter
    #[serde(default = "default_scale")]
    pub x_scale: f32,
    /// Vertical render scale applied by the interpreter
    #[serde(default = "default_scale")]
    pub y_scale: f32,
    /// Width of the font's space glyph, or `<= 0` when the font does not
    /// declare one. Used for word boundary detection.
    #[serde(default)]
    pub space_width: f32,
}

impl Glyph {
    /// Create a glyph with unit render scale and no declared space width.
    ///
    /// # Examples
    ///
    /// ```
    /// use textweave::Glyph;
    ///
    /// let g = Glyph::new("A", 10.0, 20.0, 6.0, 10.0, 10.0);
    /// assert_eq!(g.text, "A");
    /// assert_eq!(g.right(), 16.0);
    /// assert_eq!(g.bottom(), 30.0);
    /// ```
    pub fn new(
        text: impl Into<String>,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        font_size: f32,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            width,
            height,
            font_size,
            x_scale: 1.0,
            y_scale: 1.0,
            space_width: 0.0,
        }
    }

    /// Set the render scales.
    pub fn with_scale(mut self, x_scale: f32, y_scale: f32) -> Self {
        self.x_scale = x_scale;
        self.y_scale = y_scale;
        self
    }

    /// Set the font's declared space width.
    pub fn with_space_width(mut self, space_width: f32) -> Self {
        self.space_width = space_width;
        self
    }

    /// Top edge y-coordinate.
    pub fn top(&self) -> f32 {
        self.y
    }

    /// Bottom edge y-coordinate.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Right edge x-coordinate.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Vertical center of the glyph.
    pub fn vertical_center(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Effective font size after vertical render scaling.
    pub fn effective_font_size(&self) -> f32 {
        self.font_size * self.y_scale
    }
}

/// Structural style of a region.
///
/// `Page` is the segmenter's "no region open" state; only `Paragraph` and
/// `Heading` ever reach an event sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    /// No structural region open (page level)
    Page,
    /// Body text
    Paragraph,
    /// Heading text, recognized by effective font size
    Heading,
}

impl Style {
    /// Classify a glyph as heading or paragraph text.
    ///
    /// A glyph is heading text when its effective font size (nominal size
    /// times vertical render scale) exceeds `heading_font_size`.
    ///
    /// # Examples
    ///
    /// ```
    /// use textweave::{Glyph, Style};
    ///
    /// let title = Glyph::new("T", 0.0, 0.0, 12.0, 20.0, 20.0);
    /// let body = Glyph::new("b", 0.0, 30.0, 6.0, 10.0, 10.0);
    ///
    /// assert_eq!(Style::classify(&title, 14.0), Style::Heading);
    /// assert_eq!(Style::classify(&body, 14.0), Style::Paragraph);
    /// ```
    pub fn classify(glyph: &Glyph, heading_font_size: f32) -> Style {
        if glyph.effective_font_size() > heading_font_size {
            Style::Heading
        } else {
            Style::Paragraph
        }
    }
}
