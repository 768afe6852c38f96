//! Run command implementation.
//!
//! Scans one script, prints its tokens and reports every lexical error.

use std::io::Write;

use crate::commands::common::{OutputOptions, Session};
use crate::commands::traits::Command;
use crate::error::{LoxError, Result};

/// Arguments for the run command.
#[derive(Debug)]
pub struct RunArgs<W: Write, E: Write> {
    /// Name the script is reported under.
    pub name: String,
    /// Script contents.
    pub source: String,
    /// Output settings.
    pub options: OutputOptions,
    /// Token stream.
    pub out: W,
    /// Diagnostic stream.
    pub err: E,
}

/// Run command handler.
pub struct RunCommand<W: Write, E: Write> {
    name: String,
    source: String,
    session: Session<W, E>,
}

impl<W: Write, E: Write> Command for RunCommand<W, E> {
    type Args = RunArgs<W, E>;
    type Output = ();

    fn new(args: Self::Args) -> Self {
        Self {
            name: args.name,
            source: args.source,
            session: Session::new(args.options, args.out, args.err),
        }
    }

    fn execute(&mut self) -> Result<Self::Output> {
        tracing::debug!(
            command = Self::name(),
            script = %self.name,
            bytes = self.source.len(),
            "starting"
        );

        let errors = self.session.scan_and_report(&self.name, &self.source)?;
        if errors > 0 {
            return Err(LoxError::Scan(errors));
        }
        Ok(())
    }

    fn name() -> &'static str {
        "run"
    }
}

/// Scan a script.
///
/// # Errors
/// * `LoxError::Scan` - The script contained lexical errors; they have
///   already been written to `err`.
pub fn run_script<W: Write, E: Write>(args: RunArgs<W, E>) -> Result<()> {
    let mut command = RunCommand::new(args);
    command.execute()
}
