//! Bytecode instruction representation
//!
//! Every instruction occupies the same number of bytes on disk: one opcode
//! byte followed by five little-endian `i32` operand slots. Only the first
//! [`Opcode::operand_count`] slots carry meaning.

use crate::opcode::{Opcode, OperandKind};

/// Number of operand slots stored per instruction
pub const OPERAND_SLOTS: usize = 5;

/// Encoded size of one instruction in bytes
pub const ENCODED_LEN: usize = 1 + OPERAND_SLOTS * 4;

/// A single decoded instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// The opcode for this instruction
    pub opcode: Opcode,
    /// Raw operand slots, including padding
    pub slots: [i32; OPERAND_SLOTS],
}

impl Instruction {
    /// Create an instruction from its opcode and raw slots
    pub fn new(opcode: Opcode, slots: [i32; OPERAND_SLOTS]) -> Self {
        Self { opcode, slots }
    }

    /// Create an instruction with the given meaningful operands; the
    /// remaining slots are zeroed.
    pub fn with_operands(opcode: Opcode, operands: &[i32]) -> Self {
        let mut slots = [0; OPERAND_SLOTS];
        for (slot, value) in slots.iter_mut().zip(operands) {
            *slot = *value;
        }
        Self { opcode, slots }
    }

    /// The meaningful operand values
    pub fn operands(&self) -> &[i32] {
        &self.slots[..self.opcode.operand_count()]
    }

    /// Meaningful operands paired with their kinds
    pub fn typed_operands(&self) -> impl Iterator<Item = (OperandKind, i32)> + '_ {
        self.operands()
            .iter()
            .enumerate()
            .map(|(position, value)| (self.opcode.operand_kind(position), *value))
    }
}
