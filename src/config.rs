//! Configuration for the layout engine.

/// Layout engine configuration.
///
/// The defaults reproduce the reference behavior: duplicate suppression and
/// article routing enabled, all pages processed, headings recognized above
/// 14pt effective font size, and a ten-line look-ahead window for block
/// prediction.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Suppress repeated paints of the same glyph at (almost) the same
    /// position. Some renderers overstrike a glyph to fake bold text.
    pub suppress_duplicate_overlapping_text: bool,

    /// Route glyphs into per-article buckets using the page's bead
    /// rectangles. When disabled, all glyphs form a single implicit article
    /// in emission order.
    pub separate_by_articles: bool,

    /// First page to process (1-based).
    pub start_page: u32,

    /// Last page to process (inclusive). Defaults to "all".
    pub end_page: u32,

    /// Effective font size (`font_size * y_scale`) above which a glyph is
    /// classified as heading text.
    pub heading_font_size: f32,

    /// Number of lines the block predictor looks ahead when estimating
    /// margins, line spacing, and line height.
    pub lookahead_depth: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            suppress_duplicate_overlapping_text: true,
            separate_by_articles: true,
            start_page: 1,
            end_page: u32::MAX,
            heading_font_size: 14.0,
            lookahead_depth: 10,
        }
    }

    /// Enable or disable duplicate glyph suppression.
    pub fn with_duplicate_suppression(mut self, enable: bool) -> Self {
        self.suppress_duplicate_overlapping_text = enable;
        self
    }

    /// Enable or disable bead-based article routing.
    pub fn with_article_separation(mut self, enable: bool) -> Self {
        self.separate_by_articles = enable;
        self
    }

    /// Set the page range to process (1-based, inclusive).
    pub fn with_page_range(mut self, start: u32, end: u32) -> Self {
        self.start_page = start;
        self.end_page = end;
        self
    }

    /// Set the heading font size threshold.
    pub fn with_heading_font_size(mut self, size: f32) -> Self {
        self.heading_font_size = size;
        self
    }

    /// Set the predictor look-ahead depth.
    pub fn with_lookahead_depth(mut self, depth: usize) -> Self {
        self.lookahead_depth = depth;
        self
    }
}
