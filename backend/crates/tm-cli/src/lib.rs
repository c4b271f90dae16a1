//! tm-cli library
//!
//! Argument parsing, command execution and logger setup for the `tm` binary.
//! Exposed as a library so commands can be driven from tests.

pub mod cli;
pub mod commands;
pub mod error;
pub mod input;
pub mod logger;
pub mod runner;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result};
pub use runner::{error_body, run};

/// Successful run
pub const EXIT_OK: u8 = 0;
/// Bad input, bad config or a contract violation
pub const EXIT_FAILURE: u8 = 1;
/// The update was rejected with validation issues
pub const EXIT_REJECTED: u8 = 2;
