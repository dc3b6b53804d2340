//! Money Extras - Command Line Interface
//!
//! Argument definitions and command implementations for the `money-extras`
//! binary. Commands return serializable reports so they can be tested and
//! rendered as text or JSON.

pub mod cli;
pub mod commands;
pub mod error;

pub use cli::{Cli, Command, Formula, OutputFormat};
pub use error::{CliError, CliResult};
