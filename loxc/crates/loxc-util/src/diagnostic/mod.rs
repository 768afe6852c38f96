//! Diagnostic module - Error reporting infrastructure.
//!
//! This module provides types for creating, formatting, and reporting
//! diagnostics raised while scanning Lox source.
//!
//! # Examples
//!
//! ```
//! use loxc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! handler.emit_diagnostic(
//!     DiagnosticBuilder::error("Unexpected character '@'.")
//!         .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!         .span(Span::new(0, 1, 1, 1))
//!         .build(),
//! );
//!
//! assert_eq!(handler.error_count(), 1);
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

pub use crate::span::Span;
use std::cell::RefCell;
use std::fmt;

/// An error report with its location
///
/// `span` is where the offending text starts. `line` is the line the report
/// is filed under; it defaults to `span.line` but may be later, e.g. an
/// unterminated string is reported at the end of input.
///
/// `Display` renders only the header line. Use [`Diagnostic::render`] for
/// the full report including snippets, notes and help.
///
/// # Examples
///
/// ```
/// use loxc_util::diagnostic::{Diagnostic, Span};
///
/// let diag = Diagnostic::new("Unterminated string.", Span::new(0, 3, 2, 1));
/// assert_eq!(diag.line, 2);
/// assert_eq!(diag.to_string(), "[line 2] Error: Unterminated string.");
/// ```
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Line shown in the header (1-based, 0 for none)
    pub line: u32,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
    /// Source code snippets for display
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    /// Create a diagnostic reported at the line where `span` starts
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
            line: span.line,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Add a source snippet
    pub fn with_snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    /// Render the full report: header, snippets, then notes and help.
    ///
    /// # Examples
    ///
    /// ```
    /// use loxc_util::diagnostic::{DiagnosticBuilder, SourceSnippet, Span};
    ///
    /// let diag = DiagnosticBuilder::error("Unexpected character '@'.")
    ///     .span(Span::new(0, 1, 1, 1))
    ///     .help("remove this character")
    ///     .build()
    ///     .with_snippet(SourceSnippet::new("@", 1, 1, 2, None::<String>));
    /// let report = diag.render();
    /// assert!(report.starts_with("[line 1] Error: Unexpected character '@'."));
    /// assert!(report.ends_with("= help: remove this character"));
    /// ```
    pub fn render(&self) -> String {
        let mut out = self.to_string();
        for snippet in &self.snippets {
            out.push('\n');
            out.push_str(&snippet.format());
        }
        for note in &self.notes {
            out.push_str("\n    = note: ");
            out.push_str(note);
        }
        for help in &self.helps {
            out.push_str("\n    = help: ");
            out.push_str(help);
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line > 0 {
            write!(f, "[line {}] ", self.line)?;
        }
        write!(f, "Error: {}", self.message)
    }
}

/// Handler for collecting and reporting diagnostics
///
/// # Examples
///
/// ```
/// use loxc_util::diagnostic::{Diagnostic, Handler, Span};
///
/// let handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::new("Unterminated string.", Span::DUMMY));
/// assert_eq!(handler.error_count(), 1);
///
/// for diag in handler.take_diagnostics() {
///     eprintln!("{}", diag.render());
/// }
/// assert_eq!(handler.error_count(), 0);
/// ```
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Get the number of errors not yet taken
    pub fn error_count(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    /// Drain the collected diagnostics, leaving the handler empty
    pub fn take_diagnostics(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}
