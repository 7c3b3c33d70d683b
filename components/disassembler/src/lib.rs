//! PHIR disassembler
//!
//! Turns a decoded [`bytecode_system::Module`] into PHIR, the line-oriented
//! text form of a Phasor program. Operands that refer to constants,
//! variables or functions are annotated with the value or name they
//! resolve to.
//!
//! # Example
//!
//! ```no_run
//! use bytecode_system::Module;
//!
//! let bytes = std::fs::read("program.phsb").unwrap();
//! let module = Module::from_bytes(&bytes).unwrap();
//! println!("{}", disassembler::disassemble(&module));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod emit;
pub mod escape;
pub mod float;

pub use emit::{disassemble, mnemonic_for_byte, Emitter, COMMENT_COLUMN, FORMAT_HEADER};
pub use escape::{escape_string, unescape_string};
pub use float::format_float;
