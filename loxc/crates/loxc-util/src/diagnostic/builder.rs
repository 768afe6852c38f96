//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, and the [`SourceSnippet`] quoted under a
//! report.

use super::{Diagnostic, DiagnosticCode, Span};

/// A source code snippet for display in diagnostics
///
/// Contains the source line affected by the diagnostic, with a caret range
/// under the offending columns.
///
/// # Examples
///
/// ```
/// use loxc_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::new("var x = @;", 1, 9, 10, Some("here"));
/// assert!(snippet.format().contains("^ here"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (1-based, in characters)
    pub start_column: usize,
    /// Column where the issue ends (1-based, exclusive)
    pub end_column: usize,
    /// Optional label to display under the highlighted range
    pub label: Option<String>,
}

impl SourceSnippet {
    /// Create a new source snippet
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
        label: Option<impl Into<String>>,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
            label: label.map(Into::into),
        }
    }

    /// Format the snippet for display
    ///
    /// Returns the source line with a gutter, followed by a caret line
    /// pointing to the highlighted range. Tabs before the range are copied
    /// into the caret line so the caret lines up however wide a tab renders.
    pub fn format(&self) -> String {
        let width = self.line_number.to_string().len().max(3);
        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);

        let mut result = format!("{:>width$} | {}\n", self.line_number, self.line);
        result.push_str(&format!("{:>width$} | ", ""));

        let mut chars = self.line.chars();
        for _ in 0..underline_start {
            result.push(match chars.next() {
                Some('\t') => '\t',
                _ => ' ',
            });
        }
        result.push_str(&"^".repeat(underline_len));

        if let Some(ref label) = self.label {
            result.push(' ');
            result.push_str(label);
        }

        result
    }
}

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use loxc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Span};
///
/// let diag = DiagnosticBuilder::error("Unterminated string.")
///     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
///     .span(Span::new(0, 4, 1, 1))
///     .help("add a closing `\"`")
///     .build();
/// assert_eq!(diag.to_string(), "[line 1] Error: Unterminated string.");
/// ```
pub struct DiagnosticBuilder {
    message: String,
    span: Span,
    line: Option<u32>,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
}

impl DiagnosticBuilder {
    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            span: Span::DUMMY,
            line: None,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Report under `line` instead of the line where the span starts
    pub fn line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    /// Add a note to the diagnostic
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion to the diagnostic
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            message: self.message,
            span: self.span,
            line: self.line.unwrap_or(self.span.line),
            code: self.code,
            notes: self.notes,
            helps: self.helps,
            snippets: Vec::new(),
        }
    }
}
