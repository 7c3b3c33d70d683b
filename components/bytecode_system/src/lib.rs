//! Phasor bytecode module format
//!
//! This crate decodes compiled `.phsb` modules into an immutable in-memory
//! [`Module`] and carries the static opcode metadata needed to interpret
//! instruction operands.
//!
//! # Features
//!
//! - Opcode table with per-position operand kinds for all 115 opcodes
//! - Strict reader: magic, version, CRC-32 and section order are checked
//! - Reverse symbol lookup for variable slots and function addresses
//!
//! # Example
//!
//! ```no_run
//! use bytecode_system::Module;
//!
//! let bytes = std::fs::read("program.phsb").unwrap();
//! let module = Module::from_bytes(&bytes).unwrap();
//!
//! for (address, instruction) in module.instructions().iter().enumerate() {
//!     println!("{address}: {}", instruction.opcode);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod constant;
pub mod error;
pub mod instruction;
pub mod module;
pub mod opcode;
pub mod reader;
pub mod symbols;

// Re-export main types at crate root
pub use constant::{Constant, ConstantTag};
pub use error::{DecodeError, DecodeResult, ErrorKind};
pub use instruction::{Instruction, ENCODED_LEN, OPERAND_SLOTS};
pub use module::{
    ConstantPool, FunctionTable, Header, Module, ModuleSummary, Section, VariableTable,
    HEADER_LEN, MAGIC, VERSION,
};
pub use opcode::{Opcode, OperandKind, RegisterId};
pub use reader::{module_checksum, ByteReader, ModuleReader};
pub use symbols::{SymbolResolver, SymbolTable};
