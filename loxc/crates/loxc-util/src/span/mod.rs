//! Span module - Source location tracking.
//!
//! This module provides types for representing source code locations,
//! including byte offsets, line/column information, and file identification.
//!
//! # Examples
//!
//! ```
//! use loxc_util::span::{FileId, Span};
//!
//! // A span covering the lexeme `print` at the start of a file
//! let span = Span::new(0, 5, 1, 1);
//! assert_eq!(span.len(), 5);
//!
//! // The same span, tagged with the file it came from
//! let span = span.with_file_id(FileId(0));
//! ```

mod source_map;

pub use source_map::SourceFile;

/// A unique identifier for a source text
///
/// The driver numbers the texts it scans: one per script, one per prompt
/// line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(pub usize);

impl FileId {
    /// A dummy FileId for spans produced outside the driver
    pub const DUMMY: FileId = FileId(0);
}

impl Default for FileId {
    #[inline]
    fn default() -> Self {
        Self::DUMMY
    }
}

/// Source location span
///
/// A `Span` represents a range in source code, identified by:
/// - Byte offsets (`start` inclusive, `end` exclusive)
/// - Line and column of the first character (1-based)
/// - File ID of the scanned text
///
/// # Examples
///
/// ```
/// use loxc_util::span::Span;
///
/// let span = Span::new(10, 20, 2, 5);
/// assert_eq!(span.len(), 10);
/// assert!(!span.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
    /// File identifier
    pub file_id: FileId,
}

impl Span {
    /// Dummy span for diagnostics with no source location
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
        file_id: FileId::DUMMY,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
            file_id: FileId::DUMMY,
        }
    }

    /// Returns true if the span covers no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Length of the span in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Tag the span with the file it belongs to.
    #[inline]
    pub fn with_file_id(mut self, file_id: FileId) -> Self {
        self.file_id = file_id;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_file_id_default() {
        assert_eq!(FileId::default(), FileId::DUMMY);
        assert_eq!(FileId::DUMMY.0, 0);
    }

    #[test]
    fn test_span_new() {
        let span = Span::new(10, 20, 1, 5);
        assert_eq!(span.start, 10);
        assert_eq!(span.end, 20);
        assert_eq!(span.line, 1);
        assert_eq!(span.column, 5);
        assert_eq!(span.file_id, FileId::DUMMY);
    }

    #[test]
    fn test_span_is_empty() {
        assert!(Span::new(4, 4, 1, 5).is_empty());
        assert!(!Span::new(4, 5, 1, 5).is_empty());
    }

    #[test]
    fn test_span_with_file_id() {
        let span = Span::new(1, 2, 1, 1).with_file_id(FileId(7));
        assert_eq!(span.file_id, FileId(7));
    }

    #[test]
    fn test_span_dummy() {
        assert_eq!(Span::default(), Span::DUMMY);
        assert!(Span::DUMMY.is_empty());
    }

    #[quickcheck]
    fn prop_len_matches_offsets(start: u16, width: u8) -> bool {
        let start = start as usize;
        let span = Span::new(start, start + width as usize, 1, 1);
        span.len() == width as usize && span.is_empty() == (width == 0)
    }

    #[quickcheck]
    fn prop_file_id_keeps_position(start: u16, width: u8, file: u8) -> bool {
        let span = Span::new(start as usize, start as usize + width as usize, 3, 7);
        let tagged = span.with_file_id(FileId(file as usize));
        tagged.file_id == FileId(file as usize)
            && Span { file_id: FileId::DUMMY, ..tagged } == span
    }
}
