//! phsb-disasm
//!
//! Entry point for the disassembler. Parses CLI arguments and delegates to
//! the Converter.

use clap::Parser as ClapParser;
use disasm_cli::{Cli, Converter};
use tracing_subscriber::{fmt, EnvFilter};

fn init_logging() {
    // PHSB_LOG takes precedence over RUST_LOG; default to warnings only
    let filter = EnvFilter::try_from_env("PHSB_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let converter = Converter::from_cli(&cli);
    let stdout = std::io::stdout();
    if let Err(e) = converter.execute(&mut stdout.lock()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
