//! Error types for the layout engine.
//!
//! This module defines all error types that can occur while driving the
//! layout inference pipeline. The segmentation heuristics themselves never
//! fail; every error here originates at the input layer (the glyph source)
//! or in the surrounding tooling.

/// Result type alias for layout engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while processing a glyph document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The glyph source failed while producing a page's glyphs.
    ///
    /// Source errors are fatal for the current document: processing aborts
    /// immediately and no further sink events are delivered.
    #[error("Glyph source failed on page {page}: {reason}")]
    GlyphSource {
        /// Page number (1-based) being read when the source failed
        page: u32,
        /// Reason reported by the source
        reason: String,
    },

    /// The configured page range is empty or inverted.
    #[error("Invalid page range: start page {start} is after end page {end}")]
    InvalidPageRange {
        /// First page requested (1-based)
        start: u32,
        /// Last page requested (inclusive)
        end: u32,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed glyph document (JSON input to the dump tool)
    #[error("Invalid glyph document: {0}")]
    InvalidDocument(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_source_error() {
        let err = Error::GlyphSource {
            page: 3,
            reason: "stream truncated".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("page 3"));
        assert!(msg.contains("stream truncated"));
    }

    #[test]
    fn test_invalid_page_range_error() {
        let err = Error::InvalidPageRange { start: 10, end: 2 };
        let msg = format!("{}", err);
        assert!(msg.contains("10"));
        assert!(msg.contains("2"));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
