//! loxc-lex - Lexical Analyzer for the Lox Programming Language
//!
//! This crate turns Lox source text into a flat, ordered sequence of
//! classified tokens for a later parsing stage.
//!
//! # Overview
//!
//! The scanner is a hand-written state machine with at most two characters
//! of lookahead. It never stops early: characters that start no token and
//! strings missing their closing quote are recorded as [`LexError`]s and
//! scanning resumes, so a single pass reports every problem in the input.
//!
//! # Example Usage
//!
//! ```
//! use loxc_lex::{scan, Lexer, TokenKind};
//!
//! let source = "var x = 42;";
//!
//! // Scan everything at once
//! let result = scan(source);
//! assert!(result.is_ok());
//! assert_eq!(result.tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
//!
//! // Or get tokens one at a time
//! let mut lexer = Lexer::new(source);
//! assert_eq!(lexer.next_token().kind, TokenKind::Var);
//!
//! // Or iterate (the iterator stops before `Eof`)
//! assert_eq!(Lexer::new(source).count(), 5);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions and the keyword table
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`chars`] - Character classes
//! - [`error`] - Lexical errors
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `and`, `class`, `else`, `false`, `for`, `fun`, `if`, `nil`, `or`,
//! `print`, `return`, `super`, `this`, `true`, `var`, `while`
//!
//! ## Identifiers
//!
//! Pattern: `[a-zA-Z_][a-zA-Z0-9_]*`
//!
//! ## Literals
//!
//! - Numbers: `42`, `3.14` (always `f64`)
//! - Strings: `"text"` (may span lines, no escapes)
//!
//! ## Operators and punctuation
//!
//! `( ) { } , . - + ; * /` and `! != = == < <= > >=`
//!
//! ## Comments
//!
//! `// to end of line`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod error;
pub mod lexer;
mod scan;
pub mod token;

mod edge_cases;

pub use cursor::Cursor;
pub use error::{LexError, LexErrorKind, ScanErrors};
pub use lexer::Lexer;
pub use scan::{scan, Scan};
pub use token::{keyword_from_ident, Literal, Token, TokenKind};

static_assertions::assert_impl_all!(Token<'static>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Scan<'static>: Send, Sync);
static_assertions::assert_impl_all!(LexError: Send, Sync, std::error::Error);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hello_world_program() {
        let source = r#"
            print "Hello, Lox!";
        "#;
        let result = scan(source);

        let rendered: Vec<String> = result.tokens.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec![
                "PRINT print null",
                "STRING \"Hello, Lox!\" Hello, Lox!",
                "SEMICOLON ; null",
                "EOF  null",
            ]
        );
    }

    #[test]
    fn test_fibonacci_program() {
        let source = r#"
            fun fib(n) {
                if (n <= 1) return n;
                return fib(n - 2) + fib(n - 1);
            }

            for (var i = 0; i < 20; i = i + 1) {
                print fib(i);
            }
        "#;
        let result = scan(source);
        assert!(result.is_ok());

        let kinds: Vec<_> = result.tokens.iter().map(|t| t.kind).collect();
        assert!(kinds.contains(&TokenKind::Fun));
        assert!(kinds.contains(&TokenKind::LessEqual));
        assert!(kinds.contains(&TokenKind::For));
        assert!(kinds.contains(&TokenKind::Var));
        assert_eq!(kinds.iter().filter(|&&k| k == TokenKind::Return).count(), 2);
        assert_eq!(result.tokens.last().unwrap().line, 10);
    }

    #[test]
    fn test_class_program() {
        let source = r#"
            class Breakfast < Meal {
                init(meat) {
                    this.meat = meat;
                    super.init();
                }
            }
            var b = nil; // nothing yet
        "#;
        let result = scan(source);
        assert!(result.is_ok());

        let idents: Vec<_> = result
            .tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Identifier)
            .map(|t| t.lexeme)
            .collect();
        assert_eq!(idents, vec!["Breakfast", "Meal", "init", "meat", "meat", "meat", "init", "b"]);
    }

    #[test]
    fn test_errors_do_not_hide_later_tokens() {
        let result = scan("var a = 1 | 2;\nprint a;\n\"oops");
        assert_eq!(result.errors.len(), 2);
        assert_eq!(result.errors[0].line, 1);
        assert_eq!(result.errors[1].line, 3);
        assert!(result.tokens.iter().any(|t| t.kind == TokenKind::Print && t.line == 2));
    }
}
