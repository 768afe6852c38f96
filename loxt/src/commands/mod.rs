//! Command modules for the lox CLI.
//!
//! `run` scans a whole script, `prompt` scans standard input line by line.
//! Both share the reporting session in [`common`].

pub mod common;
pub mod traits;

pub mod prompt;
pub mod run;

pub use prompt::{run_prompt, PromptArgs};
pub use run::{run_script, RunArgs};
