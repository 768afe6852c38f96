//! loxc-util - Shared Foundation Types
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! Types shared by the Lox scanner and the `lox` driver:
//!
//! - [`span`]: byte ranges with line/column information, plus the
//!   [`SourceFile`] a diagnostic quotes its snippet from.
//! - [`diagnostic`]: diagnostic codes, a fluent builder and the [`Handler`]
//!   that collects diagnostics until the driver reports them.
//! - [`error`]: failures reading a range out of a source file.
//!
//! REPORT FORMAT:
//! --------------
//! Every diagnostic header reads `[line N] Error: message`. When the driver
//! has the source text it appends a snippet:
//!
//! ```text
//! [line 1] Error: Unexpected character '@'.
//!   1 | var a = @;
//!     |         ^
//! ```
//!
//! # Examples
//!
//! ```
//! use loxc_util::{Diagnostic, Handler, SourceFile, Span};
//!
//! let file = SourceFile::new(0, "main.lox", "var a = @;");
//! let span = Span::new(8, 9, 1, 9).with_file_id(file.id());
//! assert_eq!(file.extract_range(span.start, span.end).unwrap(), "@");
//!
//! let handler = Handler::new();
//! handler.emit_diagnostic(Diagnostic::new("Unexpected character '@'.", span));
//! assert_eq!(handler.error_count(), 1);
//! ```

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, SourceSnippet};
pub use error::{SourceError, SourceResult};
pub use span::{FileId, SourceFile, Span};

// Re-export commonly used types
pub use rustc_hash::FxHashMap;

static_assertions::assert_impl_all!(Span: Send, Sync, Copy);
static_assertions::assert_impl_all!(SourceFile: Send, Sync);
