//! Operator lexing.
//!
//! This module handles the operators that may be followed by `=`. The first
//! character has already been consumed; the longest match always wins and
//! produces exactly one token.

use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Handles: `!`, `!=`
    pub(crate) fn lex_bang(&mut self) -> TokenKind {
        if self.cursor.match_char('=') {
            TokenKind::BangEqual
        } else {
            TokenKind::Bang
        }
    }

    /// Handles: `=`, `==`
    pub(crate) fn lex_equal(&mut self) -> TokenKind {
        if self.cursor.match_char('=') {
            TokenKind::EqualEqual
        } else {
            TokenKind::Equal
        }
    }

    /// Handles: `<`, `<=`
    pub(crate) fn lex_less(&mut self) -> TokenKind {
        if self.cursor.match_char('=') {
            TokenKind::LessEqual
        } else {
            TokenKind::Less
        }
    }

    /// Handles: `>`, `>=`
    pub(crate) fn lex_greater(&mut self) -> TokenKind {
        if self.cursor.match_char('=') {
            TokenKind::GreaterEqual
        } else {
            TokenKind::Greater
        }
    }
}
