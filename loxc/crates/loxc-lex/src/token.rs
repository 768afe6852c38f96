//! Token definitions for the Lox language.
//!
//! A [`Token`] borrows its lexeme from the scanned source, so a token
//! stream lives exactly as long as the text it was produced from.

use std::fmt;

use lazy_static::lazy_static;
use loxc_util::{FxHashMap, Span};
use serde::{Serialize, Serializer};

/// The classification of a token.
///
/// # Example
///
/// ```
/// use loxc_lex::TokenKind;
///
/// assert_eq!(TokenKind::BangEqual.name(), "BANG_EQUAL");
/// assert_eq!(TokenKind::Eof.to_string(), "EOF");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    // Single-character tokens.
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `-`
    Minus,
    /// `+`
    Plus,
    /// `;`
    Semicolon,
    /// `/`
    Slash,
    /// `*`
    Star,

    // One or two character tokens.
    /// `!`
    Bang,
    /// `!=`
    BangEqual,
    /// `=`
    Equal,
    /// `==`
    EqualEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,

    // Literals.
    /// A name that is not a keyword
    Identifier,
    /// A string literal
    String,
    /// A number literal
    Number,

    // Keywords.
    /// `and`
    And,
    /// `class`
    Class,
    /// `else`
    Else,
    /// `false`
    False,
    /// `fun`
    Fun,
    /// `for`
    For,
    /// `if`
    If,
    /// `nil`
    Nil,
    /// `or`
    Or,
    /// `print`
    Print,
    /// `return`
    Return,
    /// `super`
    Super,
    /// `this`
    This,
    /// `true`
    True,
    /// `var`
    Var,
    /// `while`
    While,

    /// End of input
    Eof,
}

impl TokenKind {
    /// Upper snake case name, as printed by the driver.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Minus => "MINUS",
            TokenKind::Plus => "PLUS",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Slash => "SLASH",
            TokenKind::Star => "STAR",
            TokenKind::Bang => "BANG",
            TokenKind::BangEqual => "BANG_EQUAL",
            TokenKind::Equal => "EQUAL",
            TokenKind::EqualEqual => "EQUAL_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::And => "AND",
            TokenKind::Class => "CLASS",
            TokenKind::Else => "ELSE",
            TokenKind::False => "FALSE",
            TokenKind::Fun => "FUN",
            TokenKind::For => "FOR",
            TokenKind::If => "IF",
            TokenKind::Nil => "NIL",
            TokenKind::Or => "OR",
            TokenKind::Print => "PRINT",
            TokenKind::Return => "RETURN",
            TokenKind::Super => "SUPER",
            TokenKind::This => "THIS",
            TokenKind::True => "TRUE",
            TokenKind::Var => "VAR",
            TokenKind::While => "WHILE",
            TokenKind::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The value carried by a literal token.
///
/// Strings borrow the text between the quotes; no escape processing takes
/// place.
///
/// Serializes as `null`, a string, or a number. A number too large for
/// `f64` has no JSON form and serializes as its `Display` text, `"inf"`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Literal<'a> {
    /// No literal value (operators, identifiers, keywords, `Eof`).
    None,
    /// A string literal without its quotes.
    Str(&'a str),
    /// A number literal.
    Number(f64),
}

impl Literal<'_> {
    /// Returns true if there is no literal value.
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Literal::None)
    }
}

impl Serialize for Literal<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Literal::None => serializer.serialize_none(),
            Literal::Str(text) => serializer.serialize_str(text),
            Literal::Number(value) if value.is_finite() => serializer.serialize_f64(value),
            Literal::Number(value) => serializer.collect_str(&value),
        }
    }
}

impl fmt::Display for Literal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::None => f.write_str("null"),
            Literal::Str(text) => f.write_str(text),
            Literal::Number(value) => write!(f, "{}", value),
        }
    }
}

/// A classified lexeme.
///
/// `line` is the line the scanner was on when the token was emitted; for a
/// string spanning several lines that is the line of the closing quote.
/// `span` records where the lexeme starts.
///
/// # Example
///
/// ```
/// use loxc_lex::{scan, Literal, TokenKind};
///
/// let scan = scan("\"hi\"");
/// let token = &scan.tokens[0];
/// assert_eq!(token.kind, TokenKind::String);
/// assert_eq!(token.lexeme, "\"hi\"");
/// assert_eq!(token.literal, Literal::Str("hi"));
/// assert_eq!(token.to_string(), "STRING \"hi\" hi");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Token<'a> {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// The exact source text of the token.
    pub lexeme: &'a str,
    /// Literal value, if any.
    pub literal: Literal<'a>,
    /// Line at emission (1-based).
    pub line: u32,
    /// Byte range and start position of the lexeme.
    #[serde(skip)]
    pub span: Span,
}

impl<'a> Token<'a> {
    /// Creates a token.
    pub fn new(kind: TokenKind, lexeme: &'a str, literal: Literal<'a>, line: u32, span: Span) -> Self {
        Self {
            kind,
            lexeme,
            literal,
            line,
            span,
        }
    }

    /// Creates the end-of-input token.
    pub fn eof(line: u32, span: Span) -> Self {
        Self::new(TokenKind::Eof, "", Literal::None, line, span)
    }

    /// Returns true for the end-of-input token.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.kind, self.lexeme, self.literal)
    }
}

lazy_static! {
    static ref KEYWORDS: FxHashMap<&'static str, TokenKind> = {
        let mut map = FxHashMap::default();
        map.insert("and", TokenKind::And);
        map.insert("class", TokenKind::Class);
        map.insert("else", TokenKind::Else);
        map.insert("false", TokenKind::False);
        map.insert("for", TokenKind::For);
        map.insert("fun", TokenKind::Fun);
        map.insert("if", TokenKind::If);
        map.insert("nil", TokenKind::Nil);
        map.insert("or", TokenKind::Or);
        map.insert("print", TokenKind::Print);
        map.insert("return", TokenKind::Return);
        map.insert("super", TokenKind::Super);
        map.insert("this", TokenKind::This);
        map.insert("true", TokenKind::True);
        map.insert("var", TokenKind::Var);
        map.insert("while", TokenKind::While);
        map
    };
}

/// Looks up a reserved word. Only an exact, whole-lexeme match counts.
///
/// # Example
///
/// ```
/// use loxc_lex::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("class"), Some(TokenKind::Class));
/// assert_eq!(keyword_from_ident("classic"), None);
/// assert_eq!(keyword_from_ident("Class"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    KEYWORDS.get(ident).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_table_is_complete() {
        let words = [
            "and", "class", "else", "false", "for", "fun", "if", "nil", "or", "print",
            "return", "super", "this", "true", "var", "while",
        ];
        for word in words {
            let kind = keyword_from_ident(word).unwrap();
            assert_eq!(kind.name(), word.to_ascii_uppercase());
        }
        assert_eq!(KEYWORDS.len(), words.len());
    }

    #[test]
    fn test_literal_display() {
        assert_eq!(Literal::None.to_string(), "null");
        assert_eq!(Literal::Str("a b").to_string(), "a b");
        assert_eq!(Literal::Number(123.0).to_string(), "123");
        assert_eq!(Literal::Number(123.45).to_string(), "123.45");
    }

    #[test]
    fn test_token_display() {
        let token = Token::new(TokenKind::Number, "1.5", Literal::Number(1.5), 1, Span::DUMMY);
        assert_eq!(token.to_string(), "NUMBER 1.5 1.5");

        let eof = Token::eof(3, Span::DUMMY);
        assert!(eof.is_eof());
        assert_eq!(eof.to_string(), "EOF  null");
    }

    #[test]
    fn test_kind_serializes_as_name() {
        for kind in [TokenKind::LeftParen, TokenKind::GreaterEqual, TokenKind::Eof] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.name()));
        }
    }

    #[test]
    fn test_token_serializes_without_span() {
        let token = Token::new(TokenKind::String, "\"hi\"", Literal::Str("hi"), 2, Span::new(0, 4, 2, 1));
        let json = serde_json::to_value(token).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "kind": "STRING",
                "lexeme": "\"hi\"",
                "literal": "hi",
                "line": 2
            })
        );

        let none = serde_json::to_value(Token::eof(1, Span::DUMMY)).unwrap();
        assert!(none["literal"].is_null());
    }

    #[test]
    fn test_literal_serialization() {
        assert_eq!(serde_json::to_string(&Literal::None).unwrap(), "null");
        assert_eq!(serde_json::to_string(&Literal::Str("a\"b")).unwrap(), r#""a\"b""#);
        assert_eq!(serde_json::to_string(&Literal::Number(1.5)).unwrap(), "1.5");
        assert_eq!(serde_json::to_string(&Literal::Number(7.0)).unwrap(), "7.0");
    }

    #[test]
    fn test_overflowing_number_is_not_null() {
        let json = serde_json::to_string(&Literal::Number(f64::INFINITY)).unwrap();
        assert_eq!(json, r#""inf""#);
        assert_ne!(json, serde_json::to_string(&Literal::None).unwrap());
    }
}
