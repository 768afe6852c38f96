//! Identifier and keyword lexing.

use crate::chars::is_alpha_numeric;
use crate::token::{keyword_from_ident, Literal, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword. The first character has already been
    /// consumed.
    ///
    /// Identifiers match `[A-Za-z_][A-Za-z0-9_]*`. A reserved word only wins
    /// when it is the whole lexeme, so `classic` is an identifier.
    pub(crate) fn lex_identifier(&mut self) -> Token<'a> {
        self.cursor.advance_while(is_alpha_numeric);

        let text = self.cursor.slice_from(self.token_start);
        let kind = keyword_from_ident(text).unwrap_or(TokenKind::Identifier);

        self.make_token(kind, Literal::None)
    }
}
