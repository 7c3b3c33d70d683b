//! Conversion driver
//!
//! Reads a module from disk, disassembles it, and delivers the text either
//! to a file (with a short summary) or to the console.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use bytecode_system::{Module, ModuleSummary};
use tracing::{debug, info};

use crate::cli::Cli;
use crate::error::{CliError, CliResult};

/// The result of disassembling one module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// PHIR text, without a trailing newline
    pub text: String,
    /// Section sizes of the decoded module
    pub summary: ModuleSummary,
}

/// Converts one `.phsb` file to PHIR
#[derive(Debug, Clone)]
pub struct Converter {
    input: PathBuf,
    output: Option<PathBuf>,
    nologo: bool,
}

impl Converter {
    /// Create a converter that prints to the console
    ///
    /// # Example
    /// ```
    /// use disasm_cli::Converter;
    ///
    /// let converter = Converter::new("program.phsb").with_output(Some("program.phir".into()));
    /// assert!(converter.output().is_some());
    /// ```
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
            nologo: false,
        }
    }

    /// Build a converter from parsed arguments
    pub fn from_cli(cli: &Cli) -> Self {
        Self::new(cli.input.clone())
            .with_output(cli.output_path().map(Path::to_path_buf))
            .with_nologo(cli.nologo)
    }

    /// Write the IR to `output` instead of the console
    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    /// Suppress the summary printed after a file conversion
    pub fn with_nologo(mut self, nologo: bool) -> Self {
        self.nologo = nologo;
        self
    }

    /// Input path
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Output path, if writing to a file
    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    /// Read and decode the input module
    pub fn load(&self) -> CliResult<Module> {
        let bytes = fs::read(&self.input).map_err(|source| CliError::Read {
            path: self.input.clone(),
            source,
        })?;
        debug!(path = %self.input.display(), len = bytes.len(), "read module");
        Ok(Module::from_bytes(&bytes)?)
    }

    /// Decode the input and render it as PHIR
    pub fn run(&self) -> CliResult<Conversion> {
        let module = self.load()?;
        Ok(Conversion {
            text: disassembler::disassemble(&module),
            summary: module.summary(),
        })
    }

    /// Run the conversion and deliver its output.
    ///
    /// With an output path the IR is written there and, unless `nologo` is
    /// set, a summary goes to `console`. Otherwise the IR itself is written
    /// to `console`.
    pub fn execute<W: Write>(&self, console: &mut W) -> CliResult<()> {
        let conversion = self.run()?;

        match &self.output {
            Some(path) => {
                fs::write(path, &conversion.text).map_err(|source| CliError::Write {
                    path: path.clone(),
                    source,
                })?;
                info!(path = %path.display(), "wrote PHIR");
                if !self.nologo {
                    for line in summary_lines(&self.input, path, &conversion.summary) {
                        writeln!(console, "{line}")?;
                    }
                }
            }
            None => writeln!(console, "{}", conversion.text)?,
        }
        Ok(())
    }
}

/// Summary printed after converting `input` into `output`
pub fn summary_lines(input: &Path, output: &Path, summary: &ModuleSummary) -> Vec<String> {
    vec![
        format!("Converted {} -> {}", input.display(), output.display()),
        format!("  Constants:   {}", summary.constants),
        format!("  Variables:   {}", summary.variables),
        format!("  Functions:   {}", summary.functions),
        format!("  Instructions: {}", summary.instructions),
    ]
}
