//! Command trait for the lox CLI.

use crate::error::Result;

/// Standard command trait that all lox commands implement.
///
/// # Type Parameters
/// * `Args` - The arguments type for this command
/// * `Output` - The output type returned by this command
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance with the given arguments.
    fn new(args: Self::Args) -> Self;

    /// Execute the command.
    ///
    /// Commands write to the streams they were given, so execution needs
    /// mutable access.
    fn execute(&mut self) -> Result<Self::Output>;

    /// Get the command name.
    fn name() -> &'static str;
}
