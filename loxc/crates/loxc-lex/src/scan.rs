//! Whole-input scanning.

use crate::error::{LexError, ScanErrors};
use crate::lexer::Lexer;
use crate::token::Token;

/// The outcome of scanning one source text.
///
/// `tokens` is never empty and ends with exactly one `Eof` token, even when
/// errors were recorded.
#[derive(Clone, Debug, PartialEq)]
pub struct Scan<'a> {
    /// Tokens in source order, `Eof` last.
    pub tokens: Vec<Token<'a>>,
    /// Errors in source order.
    pub errors: Vec<LexError>,
}

impl<'a> Scan<'a> {
    /// Returns true if no lexical error was recorded.
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Converts the scan into a `Result`, dropping the tokens on failure.
    ///
    /// # Errors
    ///
    /// Returns every recorded error when the scan was not clean.
    ///
    /// # Example
    ///
    /// ```
    /// use loxc_lex::scan;
    ///
    /// assert_eq!(scan("1 + 2").into_result().unwrap().len(), 4);
    /// assert_eq!(scan("1 @ 2").into_result().unwrap_err().errors().len(), 1);
    /// ```
    pub fn into_result(self) -> Result<Vec<Token<'a>>, ScanErrors> {
        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(ScanErrors(self.errors))
        }
    }
}

/// Scans `source` into tokens and errors.
///
/// # Example
///
/// ```
/// use loxc_lex::{scan, TokenKind};
///
/// let scan = scan("var a = 1;");
/// assert!(scan.is_ok());
/// assert_eq!(scan.tokens.len(), 6);
/// assert_eq!(scan.tokens[5].kind, TokenKind::Eof);
/// ```
pub fn scan(source: &str) -> Scan<'_> {
    Lexer::new(source).scan_tokens()
}
