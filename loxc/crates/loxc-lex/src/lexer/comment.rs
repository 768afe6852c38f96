//! Whitespace and comment skipping.
//!
//! Lox has only line comments. Spaces, tabs and carriage returns are
//! discarded; newlines are discarded and advance the line counter through
//! the cursor.

use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips whitespace and comments before the next token.
    pub(crate) fn skip_whitespace_and_comments(&mut self) {
        loop {
            if self.cursor.is_at_end() {
                return;
            }

            match self.cursor.current_char() {
                ' ' | '\t' | '\r' | '\n' => {
                    self.cursor.advance();
                },
                '/' if self.cursor.peek_char(1) == '/' => {
                    self.skip_line_comment();
                },
                _ => return,
            }
        }
    }

    /// Skips a line comment up to, not including, the newline.
    fn skip_line_comment(&mut self) {
        self.cursor.advance_while(|c| c != '\n');
    }
}
