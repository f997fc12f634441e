//! Layout inference algorithms.
//!
//! This module holds the pipeline that turns an ordered glyph stream into
//! logical document structure:
//! - Duplicate glyph suppression (fake-bold overstrikes)
//! - Article routing into bead regions
//! - Line assembly with superscript/subscript continuations
//! - Statistical block prediction (margins, spacing, height)
//! - Word boundary detection
//! - The region segmentation state machine

pub mod articles;
pub mod dedup;
pub mod lines;
pub mod predictor;
pub mod segmenter;
pub mod spacing;

// Re-export main types
pub use articles::ArticleRouter;
pub use dedup::GlyphDeduplicator;
pub use lines::{assemble, same_line, Line};
pub use predictor::{predict, vertically_adjacent, Prediction};
pub use segmenter::{BasicBlock, RegionSegmenter};
pub use spacing::{needs_word_separator, word_spacing};
