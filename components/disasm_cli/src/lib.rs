//! PHSB disassembler CLI library
//!
//! Provides argument parsing and the [`Converter`] driving `phsb-disasm`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod converter;
pub mod error;

pub use cli::Cli;
pub use converter::{summary_lines, Conversion, Converter};
pub use error::{CliError, CliResult};
