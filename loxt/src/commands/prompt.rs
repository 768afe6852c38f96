//! Prompt command implementation.
//!
//! Reads standard input one line at a time. Every line is scanned on its
//! own, and a line with errors does not end the session.

use std::io::{BufRead, Write};

use crate::commands::common::{OutputOptions, Session};
use crate::commands::traits::Command;
use crate::error::Result;

/// Arguments for the prompt command.
pub struct PromptArgs<R: BufRead, W: Write, E: Write> {
    /// Line source.
    pub input: R,
    /// Token stream; the prompt is printed here too.
    pub out: W,
    /// Diagnostic stream.
    pub err: E,
    /// Text printed before each line.
    pub prompt: String,
    /// Output settings.
    pub options: OutputOptions,
}

/// What happened during a prompt session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PromptSummary {
    /// Lines read.
    pub lines: usize,
    /// Lines that had at least one lexical error.
    pub lines_with_errors: usize,
}

/// Prompt command handler.
pub struct PromptCommand<R: BufRead, W: Write, E: Write> {
    input: R,
    prompt: String,
    session: Session<W, E>,
}

impl<R: BufRead, W: Write, E: Write> Command for PromptCommand<R, W, E> {
    type Args = PromptArgs<R, W, E>;
    type Output = PromptSummary;

    fn new(args: Self::Args) -> Self {
        Self {
            input: args.input,
            prompt: args.prompt,
            session: Session::new(args.options, args.out, args.err),
        }
    }

    fn execute(&mut self) -> Result<Self::Output> {
        let mut summary = PromptSummary::default();
        let mut line = String::new();

        loop {
            self.session.write_out(&self.prompt)?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }

            summary.lines += 1;
            let name = format!("<prompt:{}>", summary.lines);
            if self.session.scan_and_report(&name, &line)? > 0 {
                summary.lines_with_errors += 1;
            }
        }

        tracing::debug!(
            command = Self::name(),
            lines = summary.lines,
            lines_with_errors = summary.lines_with_errors,
            "prompt closed"
        );
        Ok(summary)
    }

    fn name() -> &'static str {
        "prompt"
    }
}

/// Run the interactive prompt until end of input.
pub fn run_prompt<R: BufRead, W: Write, E: Write>(args: PromptArgs<R, W, E>) -> Result<PromptSummary> {
    let mut command = PromptCommand::new(args);
    command.execute()
}
