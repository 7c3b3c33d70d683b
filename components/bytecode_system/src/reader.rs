//! Binary module decoder
//!
//! [`ModuleReader`] walks a `.phsb` image front to back: header, checksum,
//! then the four sections in file order. The first problem found aborts the
//! read; a partially decoded module is never returned.

use tracing::{debug, trace};

use crate::constant::{Constant, ConstantTag};
use crate::error::{DecodeError, DecodeResult};
use crate::instruction::{Instruction, ENCODED_LEN, OPERAND_SLOTS};
use crate::module::{
    ConstantPool, FunctionTable, Header, Module, Section, VariableTable, HEADER_LEN, MAGIC,
    VERSION,
};
use crate::opcode::Opcode;

/// CRC-32 (ISO-HDLC) of a module payload, the bytes following the header
pub fn module_checksum(payload: &[u8]) -> u32 {
    crc32fast::hash(payload)
}

/// Bounds-checked little-endian cursor over a byte slice
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> ByteReader<'a> {
    /// Create a cursor at the start of `bytes`
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    /// Current byte offset
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Bytes not yet consumed
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.offset
    }

    fn take(&mut self, len: usize) -> DecodeResult<&'a [u8]> {
        let remaining = self.remaining();
        if len > remaining {
            return Err(DecodeError::UnexpectedEof {
                offset: self.offset,
                needed: len,
                remaining,
            });
        }
        let slice = &self.bytes[self.offset..self.offset + len];
        self.offset += len;
        Ok(slice)
    }

    fn take_array<const N: usize>(&mut self) -> DecodeResult<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    /// Read a `u8`
    pub fn read_u8(&mut self) -> DecodeResult<u8> {
        Ok(self.take(1)?[0])
    }

    /// Read a little-endian `u16`
    pub fn read_u16(&mut self) -> DecodeResult<u16> {
        self.take_array().map(u16::from_le_bytes)
    }

    /// Read a little-endian `u32`
    pub fn read_u32(&mut self) -> DecodeResult<u32> {
        self.take_array().map(u32::from_le_bytes)
    }

    /// Read a little-endian `i32`
    pub fn read_i32(&mut self) -> DecodeResult<i32> {
        self.take_array().map(i32::from_le_bytes)
    }

    /// Read a little-endian `i64`
    pub fn read_i64(&mut self) -> DecodeResult<i64> {
        self.take_array().map(i64::from_le_bytes)
    }

    /// Read a little-endian IEEE 754 `f64`
    pub fn read_f64(&mut self) -> DecodeResult<f64> {
        self.take_array().map(f64::from_le_bytes)
    }

    /// Read a `u16` length-prefixed UTF-8 string
    pub fn read_string(&mut self) -> DecodeResult<String> {
        let len = usize::from(self.read_u16()?);
        let start = self.offset;
        let bytes = self.take(len)?;
        std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|_| DecodeError::InvalidUtf8 { offset: start })
    }

    /// Capacity for `count` entries of at least `min_len` bytes each,
    /// capped by what the remaining input could hold
    fn bounded_capacity(&self, count: u32, min_len: usize) -> usize {
        let count = usize::try_from(count).unwrap_or(usize::MAX);
        count.min(self.remaining() / min_len.max(1))
    }
}

/// Decoder for a complete module image
#[derive(Debug, Clone)]
pub struct ModuleReader<'a> {
    bytes: &'a [u8],
    cursor: ByteReader<'a>,
}

impl<'a> ModuleReader<'a> {
    /// Create a reader over a whole file image
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            cursor: ByteReader::new(bytes),
        }
    }

    /// Decode the image into a [`Module`]
    pub fn read_module(mut self) -> DecodeResult<Module> {
        let header = self.read_header()?;

        let payload = &self.bytes[HEADER_LEN..];
        let actual = module_checksum(payload);
        if actual != header.checksum {
            return Err(DecodeError::ChecksumMismatch {
                expected: header.checksum,
                actual,
            });
        }
        debug!(
            payload_len = payload.len(),
            checksum = header.checksum,
            "header verified"
        );

        let constants = self.read_constants()?;
        let variables = self.read_variables()?;
        let functions = self.read_functions()?;
        let instructions = self.read_instructions()?;

        if self.cursor.remaining() > 0 {
            debug!(
                trailing = self.cursor.remaining(),
                "ignoring bytes after instruction section"
            );
        }

        Ok(Module::new(
            header,
            constants,
            variables,
            functions,
            instructions,
        ))
    }

    fn read_header(&mut self) -> DecodeResult<Header> {
        let magic = self.cursor.read_u32()?;
        if magic != MAGIC {
            return Err(DecodeError::BadMagic { found: magic });
        }

        let version = self.cursor.read_u32()?;
        if version != VERSION {
            return Err(DecodeError::UnsupportedVersion { found: version });
        }

        let flags = self.cursor.read_u32()?;
        let checksum = self.cursor.read_u32()?;

        Ok(Header {
            magic,
            version,
            flags,
            checksum,
        })
    }

    fn expect_section(&mut self, expected: Section) -> DecodeResult<()> {
        let found = self.cursor.read_u8()?;
        if found != expected.id() {
            return Err(DecodeError::UnexpectedSection { expected, found });
        }
        Ok(())
    }

    fn read_constants(&mut self) -> DecodeResult<ConstantPool> {
        self.expect_section(Section::Constants)?;
        let count = self.cursor.read_u32()?;
        debug!(count, "reading constants section");

        let mut constants = Vec::with_capacity(self.cursor.bounded_capacity(count, 1));
        for index in 0..count {
            constants.push(self.read_constant(index)?);
        }
        Ok(ConstantPool::new(constants))
    }

    fn read_constant(&mut self, index: u32) -> DecodeResult<Constant> {
        let tag = self.cursor.read_u8()?;
        let tag =
            ConstantTag::from_byte(tag).ok_or(DecodeError::UnknownConstantTag { tag, index })?;

        let constant = match tag {
            ConstantTag::Null => Constant::Null,
            ConstantTag::Bool => Constant::Bool(self.cursor.read_u8()? != 0),
            ConstantTag::Int => Constant::Int(self.cursor.read_i64()?),
            ConstantTag::Float => Constant::Float(self.cursor.read_f64()?),
            ConstantTag::String => Constant::String(self.cursor.read_string()?),
        };
        Ok(constant)
    }

    fn read_variables(&mut self) -> DecodeResult<VariableTable> {
        self.expect_section(Section::Variables)?;
        let count = self.cursor.read_u32()?;
        let next_free = self.cursor.read_i32()?;
        debug!(count, next_free, "reading variables section");

        let mut variables = VariableTable::new(next_free);
        for _ in 0..count {
            let name = self.cursor.read_string()?;
            let index = self.cursor.read_i32()?;
            variables.insert(name, index);
        }
        Ok(variables)
    }

    fn read_functions(&mut self) -> DecodeResult<FunctionTable> {
        self.expect_section(Section::Functions)?;
        let count = self.cursor.read_u32()?;
        debug!(count, "reading functions section");

        let mut functions = FunctionTable::new();
        for _ in 0..count {
            let name = self.cursor.read_string()?;
            let address = self.cursor.read_i32()?;
            functions.insert(name, address);
        }
        Ok(functions)
    }

    fn read_instructions(&mut self) -> DecodeResult<Vec<Instruction>> {
        self.expect_section(Section::Instructions)?;
        let count = self.cursor.read_u32()?;
        debug!(count, "reading instructions section");

        let capacity = self.cursor.bounded_capacity(count, ENCODED_LEN);
        let mut instructions = Vec::with_capacity(capacity);
        for address in 0..count {
            let byte = self.cursor.read_u8()?;
            let opcode =
                Opcode::from_byte(byte).ok_or(DecodeError::UnknownOpcode { byte, address })?;

            let mut slots = [0i32; OPERAND_SLOTS];
            for slot in &mut slots {
                *slot = self.cursor.read_i32()?;
            }

            trace!(address, %opcode, ?slots, "decoded instruction");
            instructions.push(Instruction::new(opcode, slots));
        }
        Ok(instructions)
    }
}
