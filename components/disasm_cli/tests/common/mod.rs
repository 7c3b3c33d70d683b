//! Shared fixtures for CLI tests

#![allow(dead_code)]

use bytecode_system::{module_checksum, Opcode, Section, MAGIC, VERSION};

/// Image of: constants [42], variable x at slot 0, and
/// PUSH_CONST 0 / STORE_VAR 0 / LOAD_VAR 0 / PRINT
pub fn program_image() -> Vec<u8> {
    let mut payload = vec![Section::Constants.id()];
    payload.extend_from_slice(&1u32.to_le_bytes());
    payload.push(2);
    payload.extend_from_slice(&42i64.to_le_bytes());

    payload.push(Section::Variables.id());
    payload.extend_from_slice(&1u32.to_le_bytes());
    payload.extend_from_slice(&1i32.to_le_bytes());
    payload.extend_from_slice(&1u16.to_le_bytes());
    payload.push(b'x');
    payload.extend_from_slice(&0i32.to_le_bytes());

    payload.push(Section::Functions.id());
    payload.extend_from_slice(&0u32.to_le_bytes());

    payload.push(Section::Instructions.id());
    let program = [
        (Opcode::PushConst, 0i32),
        (Opcode::StoreVar, 0),
        (Opcode::LoadVar, 0),
        (Opcode::Print, 0),
    ];
    payload.extend_from_slice(&(program.len() as u32).to_le_bytes());
    for (opcode, operand) in program {
        payload.push(opcode.byte());
        payload.extend_from_slice(&operand.to_le_bytes());
        payload.extend_from_slice(&[0u8; 16]);
    }

    let mut bytes = Vec::new();
    bytes.extend_from_slice(&MAGIC.to_le_bytes());
    bytes.extend_from_slice(&VERSION.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());
    bytes.extend_from_slice(&module_checksum(&payload).to_le_bytes());
    bytes.extend_from_slice(&payload);
    bytes
}

/// Expected PHIR for [`program_image`]
pub const PROGRAM_PHIR: &str = "\
.PHIR 3.0.0
.CONSTANTS 1
INT 42
.VARIABLES 1 1
x 0
.INSTRUCTIONS 4
PUSH_CONST 0                            ; const[0]=42
STORE_VAR 0                             ; var=x
LOAD_VAR 0                              ; var=x
PRINT";
