//! Command-line arguments

use std::path::{Path, PathBuf};

use clap::Parser;

/// Convert a Phasor bytecode module (.phsb) to PHIR text (.phir)
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "phsb-disasm", version)]
#[command(about = "Convert Phasor bytecode (.phsb) to IR text (.phir)", long_about = None)]
pub struct Cli {
    /// Bytecode module to disassemble
    pub input: PathBuf,

    /// Output file; without one the IR is printed to stdout
    pub output: Option<PathBuf>,

    /// Output file (alternative to the positional OUTPUT)
    #[arg(short = 'o', long = "output", value_name = "FILE", conflicts_with = "output")]
    pub output_file: Option<PathBuf>,

    /// Do not print the conversion summary
    #[arg(short = 'n', long)]
    pub nologo: bool,
}

impl Cli {
    /// Create arguments for converting `input` to stdout
    pub fn with_input(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
            output_file: None,
            nologo: false,
        }
    }

    /// Output path from either the positional argument or `--output`
    pub fn output_path(&self) -> Option<&Path> {
        self.output_file.as_deref().or(self.output.as_deref())
    }
}
