//! Number literal lexing.

use crate::chars::is_digit;
use crate::token::{Literal, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal. The first digit has already been consumed.
    ///
    /// # Number Formats
    ///
    /// - Integer: `42`, `007`
    /// - Fraction: `3.14`
    ///
    /// A `.` is only part of the number when a digit follows it, so `3.`
    /// yields `Number(3)` and leaves the `.` for the next token. There is no
    /// sign, exponent or radix prefix.
    pub(crate) fn lex_number(&mut self) -> Token<'a> {
        self.cursor.advance_while(is_digit);

        if self.cursor.current_char() == '.' && is_digit(self.cursor.peek_char(1)) {
            self.cursor.advance();
            self.cursor.advance_while(is_digit);
        }

        // Digit runs with an optional fraction always parse.
        let value = self
            .cursor
            .slice_from(self.token_start)
            .parse::<f64>()
            .unwrap_or_default();

        self.make_token(TokenKind::Number, Literal::Number(value))
    }
}

#[cfg(test)]
mod tests {
    use crate::{scan, Literal, TokenKind};

    #[test]
    fn test_integer() {
        let scan = scan("123");
        assert_eq!(scan.tokens[0].kind, TokenKind::Number);
        assert_eq!(scan.tokens[0].literal, Literal::Number(123.0));
        assert_eq!(scan.tokens[0].lexeme, "123");
    }

    #[test]
    fn test_fraction() {
        let scan = scan("123.45");
        assert_eq!(scan.tokens.len(), 2);
        assert_eq!(scan.tokens[0].literal, Literal::Number(123.45));
        assert_eq!(scan.tokens[0].lexeme, "123.45");
    }

    #[test]
    fn test_trailing_dot_is_separate() {
        let scan = scan("123.");
        let kinds: Vec<_> = scan.tokens.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TokenKind::Number, TokenKind::Dot, TokenKind::Eof]);
        assert_eq!(scan.tokens[0].literal, Literal::Number(123.0));
        assert_eq!(scan.tokens[1].lexeme, ".");
    }

    #[test]
    fn test_method_call_on_number() {
        let scan = scan("3.abs");
        let kinds: Vec<_> = scan.tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Number, TokenKind::Dot, TokenKind::Identifier, TokenKind::Eof]
        );
    }

    #[test]
    fn test_leading_dot_is_not_a_number() {
        let scan = scan(".5");
        assert_eq!(scan.tokens[0].kind, TokenKind::Dot);
        assert_eq!(scan.tokens[1].literal, Literal::Number(5.0));
    }

    #[test]
    fn test_no_sign_in_literal() {
        let scan = scan("-7");
        assert_eq!(scan.tokens[0].kind, TokenKind::Minus);
        assert_eq!(scan.tokens[1].literal, Literal::Number(7.0));
    }

    #[test]
    fn test_second_fraction_starts_new_token() {
        let scan = scan("1.2.3");
        let lexemes: Vec<_> = scan.tokens.iter().map(|t| t.lexeme).collect();
        assert_eq!(lexemes, vec!["1.2", ".", "3", ""]);
    }

    #[test]
    fn test_property_digit_runs() {
        use proptest::prelude::*;

        proptest!(|(int in "[0-9]{1,15}", frac in proptest::option::of("[0-9]{1,6}"))| {
            let source = match &frac {
                Some(frac) => format!("{int}.{frac}"),
                None => int.clone(),
            };
            let scan = scan(&source);
            prop_assert_eq!(scan.tokens.len(), 2);
            prop_assert_eq!(scan.tokens[0].lexeme, source.as_str());
            let expected: f64 = source.parse().unwrap();
            prop_assert_eq!(scan.tokens[0].literal, Literal::Number(expected));
        });
    }
}
