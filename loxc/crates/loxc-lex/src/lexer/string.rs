//! String literal lexing.
//!
//! Lox strings have no escape sequences and may span lines.

use crate::error::LexErrorKind;
use crate::token::{Literal, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal. The opening quote has already been consumed.
    ///
    /// Newlines inside the literal advance the line counter, so the emitted
    /// token carries the line of the closing quote. Reaching the end of input
    /// records [`LexErrorKind::UnterminatedString`] and emits nothing.
    ///
    /// # Returns
    ///
    /// `Some(Token)` of kind `String` with the text between the quotes as its
    /// literal, or `None` for an unterminated string.
    pub(crate) fn lex_string(&mut self) -> Option<Token<'a>> {
        self.cursor.advance_while(|c| c != '"');

        if self.cursor.is_at_end() {
            self.report_error(LexErrorKind::UnterminatedString);
            return None;
        }

        // The closing quote.
        self.cursor.advance();

        let lexeme = self.cursor.slice_from(self.token_start);
        let text = lexeme.get(1..lexeme.len() - 1).unwrap_or_default();
        Some(self.make_token(TokenKind::String, Literal::Str(text)))
    }
}
