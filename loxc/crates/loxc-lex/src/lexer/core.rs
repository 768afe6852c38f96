//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its core methods.

use loxc_util::Span;
use tracing::{debug, trace};

use crate::chars::{is_alpha, is_digit};
use crate::cursor::Cursor;
use crate::error::{LexError, LexErrorKind};
use crate::scan::Scan;
use crate::token::{Literal, Token, TokenKind};

/// Lexer for the Lox programming language.
///
/// The lexer transforms source code text into a stream of tokens. Errors are
/// recorded and scanning resumes with the next character, so one pass
/// always reaches the end of the input.
///
/// # Example
///
/// ```
/// use loxc_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("1 != 2");
/// assert_eq!(lexer.next_token().kind, TokenKind::Number);
/// assert_eq!(lexer.next_token().kind, TokenKind::BangEqual);
/// assert_eq!(lexer.next_token().kind, TokenKind::Number);
/// assert_eq!(lexer.next_token().kind, TokenKind::Eof);
/// assert_eq!(lexer.next_token().kind, TokenKind::Eof);
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Starting position of the current token (byte offset).
    pub(crate) token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,

    /// Errors recorded so far, in source order.
    errors: Vec<LexError>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            errors: Vec::new(),
        }
    }

    /// Scans the whole input.
    ///
    /// The returned token list always ends with exactly one `Eof` token.
    pub fn scan_tokens(mut self) -> Scan<'a> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.is_eof();
            tokens.push(token);
            if done {
                break;
            }
        }

        debug!(
            tokens = tokens.len(),
            errors = self.errors.len(),
            lines = self.cursor.line(),
            "scan finished"
        );

        Scan {
            tokens,
            errors: self.errors,
        }
    }

    /// Returns the next token from the source code.
    ///
    /// Whitespace and comments are skipped and characters that start no
    /// token are reported, so this only ever returns a real token or `Eof`.
    /// Once the input is exhausted every call returns `Eof`.
    pub fn next_token(&mut self) -> Token<'a> {
        loop {
            self.skip_whitespace_and_comments();

            self.token_start = self.cursor.position();
            self.token_start_line = self.cursor.line();
            self.token_start_column = self.cursor.column();

            if self.cursor.is_at_end() {
                return Token::eof(self.cursor.line(), self.token_span());
            }

            if let Some(token) = self.lex_token() {
                return token;
            }
        }
    }

    /// Consumes one lexeme. Returns `None` when the lexeme was an error.
    fn lex_token(&mut self) -> Option<Token<'a>> {
        let c = self.cursor.bump()?;

        let kind = match c {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            '-' => TokenKind::Minus,
            '+' => TokenKind::Plus,
            ';' => TokenKind::Semicolon,
            '*' => TokenKind::Star,
            // `//` never reaches here: comments are trivia.
            '/' => TokenKind::Slash,
            '!' => self.lex_bang(),
            '=' => self.lex_equal(),
            '<' => self.lex_less(),
            '>' => self.lex_greater(),
            '"' => return self.lex_string(),
            c if is_digit(c) => return Some(self.lex_number()),
            c if is_alpha(c) => return Some(self.lex_identifier()),
            c => {
                self.report_error(LexErrorKind::UnexpectedCharacter(c));
                return None;
            },
        };

        Some(self.make_token(kind, Literal::None))
    }

    /// Builds a token from the current lexeme.
    pub(crate) fn make_token(&self, kind: TokenKind, literal: Literal<'a>) -> Token<'a> {
        Token::new(
            kind,
            self.cursor.slice_from(self.token_start),
            literal,
            self.cursor.line(),
            self.token_span(),
        )
    }

    /// Records a lexical error covering the current lexeme.
    pub(crate) fn report_error(&mut self, kind: LexErrorKind) {
        let error = LexError::new(kind, self.cursor.line(), self.token_span());
        trace!(line = error.line, column = error.span.column, "{}", kind);
        self.errors.push(error);
    }

    fn token_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Errors recorded so far.
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}
