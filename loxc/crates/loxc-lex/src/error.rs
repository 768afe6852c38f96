//! Lexical errors.
//!
//! Errors never stop a scan; they are collected in source order and handed
//! back next to the tokens.

use loxc_util::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Span};
use thiserror::Error;

/// What went wrong while scanning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    /// A character that starts no token.
    #[error("Unexpected character '{0}'.")]
    UnexpectedCharacter(char),

    /// A string literal reaching the end of input without a closing quote.
    #[error("Unterminated string.")]
    UnterminatedString,
}

impl LexErrorKind {
    /// Diagnostic code for this kind of error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexErrorKind::UnexpectedCharacter(_) => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            LexErrorKind::UnterminatedString => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
        }
    }
}

/// A lexical error with its location.
///
/// `line` is the scanner's line when the error was recorded. For an
/// unterminated string that is the last line of the input, while `span`
/// still points at the opening quote.
///
/// # Example
///
/// ```
/// use loxc_lex::{scan, LexErrorKind};
///
/// let scan = scan("@");
/// let error = &scan.errors[0];
/// assert_eq!(error.kind, LexErrorKind::UnexpectedCharacter('@'));
/// assert_eq!(error.to_string(), "[line 1] Error: Unexpected character '@'.");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("[line {line}] Error: {kind}")]
pub struct LexError {
    /// Line at which the error was recorded (1-based).
    pub line: u32,
    /// The error category.
    pub kind: LexErrorKind,
    /// Offending source range.
    pub span: Span,
}

impl LexError {
    /// Creates a lexical error.
    pub fn new(kind: LexErrorKind, line: u32, span: Span) -> Self {
        Self { line, kind, span }
    }

    /// The human readable message, without location.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Diagnostic code for this error.
    pub fn code(&self) -> DiagnosticCode {
        self.kind.code()
    }

    /// Lowers the error into a [`Diagnostic`] reported at `line`.
    ///
    /// The diagnostic keeps `span` as recorded, so it still points at the
    /// start of the offending text.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let builder = DiagnosticBuilder::error(self.message())
            .code(self.code())
            .span(self.span)
            .line(self.line);

        match self.kind {
            LexErrorKind::UnterminatedString => builder
                .note(format!("string starts on line {}", self.span.line))
                .help("add a closing `\"`")
                .build(),
            LexErrorKind::UnexpectedCharacter(_) => builder.build(),
        }
    }
}

/// All errors of a failed scan, in source order.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("scan failed with {} error(s)", .0.len())]
pub struct ScanErrors(pub Vec<LexError>);

impl ScanErrors {
    /// The individual errors.
    pub fn errors(&self) -> &[LexError] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            LexErrorKind::UnexpectedCharacter('#').to_string(),
            "Unexpected character '#'."
        );
        assert_eq!(LexErrorKind::UnterminatedString.to_string(), "Unterminated string.");
    }

    #[test]
    fn test_display_includes_line() {
        let error = LexError::new(LexErrorKind::UnterminatedString, 4, Span::new(3, 9, 2, 1));
        assert_eq!(error.to_string(), "[line 4] Error: Unterminated string.");
        assert_eq!(error.message(), "Unterminated string.");
    }

    #[test]
    fn test_to_diagnostic() {
        let error = LexError::new(LexErrorKind::UnterminatedString, 4, Span::new(3, 9, 2, 1));
        let diag = error.to_diagnostic();
        assert_eq!(diag.code, Some(DiagnosticCode::E_LEXER_UNTERMINATED_STRING));
        assert_eq!(diag.to_string(), "[line 4] Error: Unterminated string.");
        assert_eq!(diag.line, 4);
        assert_eq!(diag.span, Span::new(3, 9, 2, 1));
        assert_eq!(diag.notes, vec!["string starts on line 2"]);

        let error = LexError::new(LexErrorKind::UnexpectedCharacter('@'), 1, Span::new(0, 1, 1, 1));
        let diag = error.to_diagnostic();
        assert_eq!(diag.code, Some(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR));
        assert!(diag.helps.is_empty());
    }

    #[test]
    fn test_scan_errors_display() {
        let errors = ScanErrors(vec![
            LexError::new(LexErrorKind::UnexpectedCharacter('@'), 1, Span::DUMMY),
            LexError::new(LexErrorKind::UnterminatedString, 1, Span::DUMMY),
        ]);
        assert_eq!(errors.to_string(), "scan failed with 2 error(s)");
        assert_eq!(errors.errors().len(), 2);
    }
}
