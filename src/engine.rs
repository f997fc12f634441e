//! The document-level driver.
//!
//! [`LayoutEngine`] owns the per-document traversal: it applies the
//! configured page range, pulls each page's glyphs through deduplication
//! and article routing, hands every article to the region segmenter, and
//! frames the event stream with document and page events. All per-page and
//! per-article state is rebuilt from scratch, so nothing leaks between
//! pages or documents.

use crate::config::EngineConfig;
use crate::error::{Error, Result};
use crate::events::EventSink;
use crate::geometry::Rect;
use crate::glyph::Glyph;
use crate::layout::articles::ArticleRouter;
use crate::layout::dedup::GlyphDeduplicator;
use crate::layout::segmenter::RegionSegmenter;
use serde::{Deserialize, Serialize};

/// Producer of ordered glyphs, page by page.
///
/// This is the crate's external boundary: page enumeration, decryption,
/// font metric lookup, and content-stream interpretation all live behind
/// it. Glyphs arrive in content-stream emission order.
pub trait GlyphSource {
    /// Number of pages the source can produce.
    fn page_count(&self) -> u32;

    /// Position the source at `page` (1-based) and return the page's bead
    /// rectangles, in reading order. Pages without explicit articles
    /// return an empty list.
    fn begin_page(&mut self, page: u32) -> Result<Vec<Rect>>;

    /// Produce the next glyph of the current page, or `None` at the end
    /// of the page.
    fn next_glyph(&mut self) -> Result<Option<Glyph>>;
}

/// One page of an in-memory glyph document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageGlyphs {
    /// Glyphs in emission order
    pub glyphs: Vec<Glyph>,
    /// Bead rectangles in reading order
    #[serde(default)]
    pub beads: Vec<Rect>,
}

/// A [`GlyphSource`] over pages already held in memory.
///
/// Used by tests and the dump tool; real documents implement
/// [`GlyphSource`] directly over their page interpreter.
#[derive(Debug, Default)]
pub struct InMemorySource {
    pages: Vec<PageGlyphs>,
    current: Option<usize>,
    cursor: usize,
}

impl InMemorySource {
    /// Create a source over a list of pages.
    pub fn new(pages: Vec<PageGlyphs>) -> Self {
        Self {
            pages,
            current: None,
            cursor: 0,
        }
    }
}

impl GlyphSource for InMemorySource {
    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    fn begin_page(&mut self, page: u32) -> Result<Vec<Rect>> {
        let index = (page as usize)
            .checked_sub(1)
            .filter(|&i| i < self.pages.len())
            .ok_or_else(|| Error::GlyphSource {
                page,
                reason: "page out of range".to_string(),
            })?;
        self.current = Some(index);
        self.cursor = 0;
        Ok(self.pages[index].beads.clone())
    }

    fn next_glyph(&mut self) -> Result<Option<Glyph>> {
        let Some(index) = self.current else {
            return Ok(None);
        };
        let glyphs = &self.pages[index].glyphs;
        if self.cursor >= glyphs.len() {
            return Ok(None);
        }
        let glyph = glyphs[self.cursor].clone();
        self.cursor += 1;
        Ok(Some(glyph))
    }
}

/// Drives the full pipeline over a document.
///
/// # Examples
///
/// ```
/// use textweave::{EngineConfig, Glyph, InMemorySource, LayoutEngine, PageGlyphs, PlainTextSink};
///
/// let glyphs = vec![
///     Glyph::new("H", 0.0, 0.0, 6.0, 10.0, 10.0),
///     Glyph::new("i", 6.0, 0.0, 3.0, 10.0, 10.0),
/// ];
/// let mut source = InMemorySource::new(vec![PageGlyphs { glyphs, beads: vec![] }]);
/// let mut sink = PlainTextSink::new();
/// LayoutEngine::new(EngineConfig::default()).process(&mut source, &mut sink)?;
/// assert_eq!(sink.text().trim(), "Hi");
/// # Ok::<(), textweave::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct LayoutEngine {
    config: EngineConfig,
}

impl LayoutEngine {
    /// Create an engine over a configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Process a document: pull every page in the configured range from
    /// `source` and deliver the inferred structure to `sink`.
    ///
    /// Input-layer errors abort the document immediately; no further sink
    /// events are delivered after a failure. A document whose page range
    /// clamps to empty still frames itself with document events.
    pub fn process<S: GlyphSource, E: EventSink>(&self, source: &mut S, sink: &mut E) -> Result<()> {
        if self.config.start_page > self.config.end_page {
            return Err(Error::InvalidPageRange {
                start: self.config.start_page,
                end: self.config.end_page,
            });
        }
        let first = self.config.start_page.max(1);
        let last = self.config.end_page.min(source.page_count());

        sink.start_document();
        for page in first..=last {
            let articles = self.collect_page(source, page)?;
            log::debug!("page {}: {} article buckets", page, articles.len());

            sink.start_page(first, last, page);
            let segmenter = RegionSegmenter::new(&self.config);
            for article in &articles {
                segmenter.segment(article, sink);
            }
            sink.end_page(first, last, page);
        }
        sink.end_document();
        Ok(())
    }

    /// Read one page fully: deduplicate and route its glyphs.
    ///
    /// The page is drained before any page event is emitted, so a source
    /// failure mid-page leaves the sink untouched for that page.
    fn collect_page<S: GlyphSource>(&self, source: &mut S, page: u32) -> Result<Vec<Vec<Glyph>>> {
        let beads = source.begin_page(page)?;
        let mut dedup = GlyphDeduplicator::new(self.config.suppress_duplicate_overlapping_text);
        let mut router = ArticleRouter::new(&beads, self.config.separate_by_articles);
        while let Some(glyph) = source.next_glyph()? {
            if dedup.accept(&glyph) {
                router.route(glyph);
            }
        }
        Ok(router.into_articles())
    }
}
