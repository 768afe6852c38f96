//! Common types and utilities for lox commands.
//!
//! The [`Session`] owns everything one invocation needs to report on a
//! scan: the diagnostic handler and the output streams. Scanned texts are
//! not kept; each one lives only until its report is written.

use std::io::Write;

use clap::ValueEnum;
use loxc_lex::{scan, LexError, LexErrorKind, Token};
use loxc_util::{Handler, SourceFile, SourceSnippet};
use serde::{Deserialize, Serialize};

use crate::error::Result;

// ============================================================================
// Output Format
// ============================================================================

/// How tokens are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `KIND lexeme literal`, one token per line
    #[default]
    Plain,
    /// One JSON object per line
    Json,
}

/// Settings shared by both modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputOptions {
    /// Token format.
    pub format: OutputFormat,
    /// Quote the offending source line under each diagnostic.
    pub snippets: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Plain,
            snippets: true,
        }
    }
}

// ============================================================================
// Session
// ============================================================================

/// Scans texts and reports tokens to `out` and diagnostics to `err`.
pub struct Session<W: Write, E: Write> {
    options: OutputOptions,
    handler: Handler,
    /// Texts scanned so far; numbers the next one.
    scanned: usize,
    out: W,
    err: E,
}

impl<W: Write, E: Write> Session<W, E> {
    /// Create a session writing to the given streams.
    pub fn new(options: OutputOptions, out: W, err: E) -> Self {
        Self {
            options,
            handler: Handler::new(),
            scanned: 0,
            out,
            err,
        }
    }

    /// Scan `source`, print its tokens and report its errors.
    ///
    /// # Returns
    /// * `Result<usize>` - The number of lexical errors found
    pub fn scan_and_report(&mut self, name: &str, source: &str) -> Result<usize> {
        let file = SourceFile::new(self.scanned, name, source);
        self.scanned += 1;
        let scan = scan(file.content());

        tracing::debug!(
            file = file.name(),
            tokens = scan.tokens.len(),
            errors = scan.errors.len(),
            "scanned"
        );

        for token in &scan.tokens {
            self.write_token(token)?;
        }
        self.out.flush()?;

        for error in &scan.errors {
            let mut diagnostic = error.to_diagnostic();
            diagnostic.span = diagnostic.span.with_file_id(file.id());
            if self.options.snippets {
                if let Some(snippet) = snippet_for(&file, error) {
                    diagnostic = diagnostic.with_snippet(snippet);
                }
            }
            self.handler.emit_diagnostic(diagnostic);
        }

        let errors = self.handler.error_count();
        for diagnostic in self.handler.take_diagnostics() {
            writeln!(self.err, "{}", diagnostic.render())?;
        }
        self.err.flush()?;

        Ok(errors)
    }

    /// Write raw text to the token stream.
    pub fn write_out(&mut self, text: &str) -> Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    fn write_token(&mut self, token: &Token<'_>) -> Result<()> {
        match self.options.format {
            OutputFormat::Plain => writeln!(self.out, "{}", token)?,
            OutputFormat::Json => {
                let json = serde_json::to_string(token)?;
                writeln!(self.out, "{}", json)?;
            },
        }
        Ok(())
    }
}

/// Build the snippet quoting the line where `error` starts.
///
/// The caret covers the offending text, clipped to its first line. Columns
/// count characters; tabs are lined up by the snippet itself.
fn snippet_for(file: &SourceFile, error: &LexError) -> Option<SourceSnippet> {
    let line_number = error.span.line as usize;
    let line = file.line_at(line_number)?;
    let text = file.extract_range(error.span.start, error.span.end).ok()?;
    let width = text.lines().next().map_or(0, |first| first.chars().count());

    let start_column = error.span.column as usize;
    let label = match error.kind {
        LexErrorKind::UnexpectedCharacter(_) => "unexpected character",
        LexErrorKind::UnterminatedString => "string starts here",
    };

    Some(SourceSnippet::new(
        line,
        line_number,
        start_column,
        start_column + width,
        Some(label),
    ))
}
