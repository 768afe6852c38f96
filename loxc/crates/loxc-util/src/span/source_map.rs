//! Source texts with precomputed line starts.
//!
//! The driver wraps every text it scans (a script file, or one line typed at
//! the prompt) so diagnostics can quote the offending source line. A
//! `SourceFile` lives only as long as its report.

use std::sync::Arc;

use super::FileId;
use crate::error::{SourceError, SourceResult};

/// A source text with its name and precomputed line starts
///
/// # Examples
///
/// ```
/// use loxc_util::span::SourceFile;
///
/// let file = SourceFile::new(0, "hello.lox", "print \"hi\";\nvar x;");
/// assert_eq!(file.name(), "hello.lox");
/// assert_eq!(file.line_at(2), Some("var x;"));
/// ```
#[derive(Clone)]
pub struct SourceFile {
    id: FileId,
    name: String,
    content: Arc<str>,
    /// Byte offset of the first character of each line
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(id: usize, name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            id: FileId(id),
            name: name.into(),
            content,
            line_starts,
        }
    }

    fn line_starts(content: &str) -> Arc<[usize]> {
        let mut line_starts = vec![0];
        line_starts.extend(
            content
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        line_starts.into()
    }

    /// Get the file identifier
    #[inline]
    pub fn id(&self) -> FileId {
        self.id
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get a specific source line (1-indexed), without its line terminator.
    pub fn line_at(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }
        let start = *self.line_starts.get(line - 1)?;
        let end = self
            .line_starts
            .get(line)
            .copied()
            .unwrap_or(self.content.len());

        Some(self.content[start..end].trim_end_matches(['\n', '\r']))
    }

    /// Extract a substring from the file content with bounds checking
    ///
    /// # Errors
    ///
    /// Fails when the range is inverted, out of bounds, or splits a
    /// multi-byte character.
    ///
    /// # Examples
    ///
    /// ```
    /// use loxc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new(0, "main.lox", "var answer = 42;");
    /// assert_eq!(file.extract_range(4, 10).unwrap(), "answer");
    /// assert!(file.extract_range(10, 4).is_err());
    /// ```
    pub fn extract_range(&self, start: usize, end: usize) -> SourceResult<&str> {
        if start > end {
            return Err(SourceError::InvalidSpan { start, end });
        }
        if end > self.content.len() {
            return Err(SourceError::SpanOutOfBounds {
                file_len: self.content.len(),
                span_start: start,
                span_end: end,
            });
        }
        self.content
            .get(start..end)
            .ok_or(SourceError::NotCharBoundary { start, end })
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("lines", &self.line_starts.len())
            .finish()
    }
}
