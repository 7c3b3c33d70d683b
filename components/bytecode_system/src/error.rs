//! Decode error types
//!
//! Every failure while reading a module is fatal: the reader returns one
//! [`DecodeError`] and no module.

use thiserror::Error;

use crate::module::Section;

/// Broad classification of a [`DecodeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Wrong magic number or unsupported format version
    FormatMismatch,
    /// Recorded checksum does not match the payload
    IntegrityFailure,
    /// A section id byte is not the section expected at that position
    StructuralMismatch,
    /// Unrecognized constant type tag or opcode byte
    UnknownTag,
    /// Input ended early or a string payload is not valid UTF-8
    Truncation,
}

/// Error produced while decoding a binary module.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The first four bytes are not the PHSB magic number
    #[error("invalid magic number: 0x{found:08X}")]
    BadMagic {
        /// Magic value read from the header
        found: u32,
    },

    /// The header carries a version other than the supported one
    #[error("incompatible version: 0x{found:08X}")]
    UnsupportedVersion {
        /// Version value read from the header
        found: u32,
    },

    /// CRC-32 of the payload differs from the header
    #[error("checksum mismatch: header records 0x{expected:08X}, payload hashes to 0x{actual:08X}")]
    ChecksumMismatch {
        /// Checksum recorded in the header
        expected: u32,
        /// Checksum computed over the payload
        actual: u32,
    },

    /// A section begins with the wrong id byte
    #[error("expected {expected} section, found section id 0x{found:02X}")]
    UnexpectedSection {
        /// Section required at this position
        expected: Section,
        /// Id byte actually read
        found: u8,
    },

    /// A constant pool entry has an unrecognized type tag
    #[error("unknown value type {tag} for constant {index}")]
    UnknownConstantTag {
        /// Raw tag byte
        tag: u8,
        /// Position of the constant in the pool
        index: u32,
    },

    /// An instruction has an unrecognized opcode byte
    #[error("unknown opcode {byte} at instruction {address}")]
    UnknownOpcode {
        /// Raw opcode byte
        byte: u8,
        /// Position of the instruction in the stream
        address: u32,
    },

    /// Fewer bytes remain than the current read needs
    #[error("unexpected end of bytecode at offset {offset}: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEof {
        /// Byte offset of the short read
        offset: usize,
        /// Bytes the read required
        needed: usize,
        /// Bytes left in the buffer
        remaining: usize,
    },

    /// A string payload is not valid UTF-8
    #[error("invalid UTF-8 in string at offset {offset}")]
    InvalidUtf8 {
        /// Byte offset of the string payload
        offset: usize,
    },
}

impl DecodeError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DecodeError::BadMagic { .. } | DecodeError::UnsupportedVersion { .. } => {
                ErrorKind::FormatMismatch
            }
            DecodeError::ChecksumMismatch { .. } => ErrorKind::IntegrityFailure,
            DecodeError::UnexpectedSection { .. } => ErrorKind::StructuralMismatch,
            DecodeError::UnknownConstantTag { .. } | DecodeError::UnknownOpcode { .. } => {
                ErrorKind::UnknownTag
            }
            DecodeError::UnexpectedEof { .. } | DecodeError::InvalidUtf8 { .. } => {
                ErrorKind::Truncation
            }
        }
    }
}

/// Result type for decode operations
pub type DecodeResult<T> = Result<T, DecodeError>;
