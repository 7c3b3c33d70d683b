//! Contract compliance tests for bytecode_system
//! Verifies the public surface other components depend on

use bytecode_system::{
    module_checksum, Constant, ConstantTag, DecodeError, ErrorKind, Module, Opcode, OperandKind,
    Section, ENCODED_LEN, HEADER_LEN, MAGIC, VERSION,
};

/// Minimal valid image: four empty sections in file order
fn empty_image() -> Vec<u8> {
    let mut payload = Vec::new();
    for section in Section::FILE_ORDER {
        payload.push(section.id());
        payload.extend_from_slice(&0u32.to_le_bytes());
        if section == Section::Variables {
            payload.extend_from_slice(&0i32.to_le_bytes());
        }
    }

    let mut bytes = Vec::new();
    bytes.extend_from_slice(&MAGIC.to_le_bytes());
    bytes.extend_from_slice(&VERSION.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());
    bytes.extend_from_slice(&module_checksum(&payload).to_le_bytes());
    bytes.extend_from_slice(&payload);
    bytes
}

#[test]
fn test_contract_format_constants() {
    assert_eq!(MAGIC, 0x4253_4850);
    assert_eq!(VERSION, 0x0300_0000);
    assert_eq!(HEADER_LEN, 16);
    assert_eq!(ENCODED_LEN, 21);
}

#[test]
fn test_contract_section_ids() {
    assert_eq!(Section::Constants.id(), 0x01);
    assert_eq!(Section::Variables.id(), 0x02);
    assert_eq!(Section::Instructions.id(), 0x03);
    assert_eq!(Section::Functions.id(), 0x04);
    assert_eq!(
        Section::FILE_ORDER,
        [
            Section::Constants,
            Section::Variables,
            Section::Functions,
            Section::Instructions,
        ]
    );
}

#[test]
fn test_contract_constant_tags() {
    assert_eq!(Constant::Null.tag() as u8, 0);
    assert_eq!(Constant::Bool(false).tag() as u8, 1);
    assert_eq!(Constant::Int(0).tag() as u8, 2);
    assert_eq!(Constant::Float(0.0).tag() as u8, 3);
    assert_eq!(Constant::String(String::new()).tag() as u8, 4);
    assert_eq!(ConstantTag::from_byte(5), None);
}

#[test]
fn test_contract_checksum_is_crc32_iso_hdlc() {
    // Standard check value for CRC-32/ISO-HDLC
    assert_eq!(module_checksum(b"123456789"), 0xCBF4_3926);
    assert_eq!(module_checksum(b""), 0);
}

#[test]
fn test_contract_empty_module_decodes() {
    let module = Module::from_bytes(&empty_image()).unwrap();
    assert!(module.constants().is_empty());
    assert!(module.variables().is_empty());
    assert!(module.functions().is_empty());
    assert!(module.instructions().is_empty());
}

#[test]
fn test_contract_every_checksum_byte_is_checked() {
    let image = empty_image();
    for offset in 12..16 {
        let mut corrupted = image.clone();
        corrupted[offset] ^= 0xFF;
        let err = Module::from_bytes(&corrupted).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IntegrityFailure);
    }
}

#[test]
fn test_contract_every_magic_byte_is_checked() {
    let image = empty_image();
    for offset in 0..4 {
        let mut corrupted = image.clone();
        corrupted[offset] = corrupted[offset].wrapping_add(1);
        assert!(matches!(
            Module::from_bytes(&corrupted),
            Err(DecodeError::BadMagic { .. })
        ));
    }
}

#[test]
fn test_contract_operand_kinds_match_arity() {
    assert_eq!(Opcode::ALL.len(), 115);
    for opcode in Opcode::ALL {
        let arity = opcode.operand_count();
        assert!(arity <= 3, "{opcode} has arity {arity}");
        for position in 0..arity {
            assert_ne!(
                opcode.operand_kind(position),
                OperandKind::None,
                "{opcode} operand {position}"
            );
        }
        for position in arity..5 {
            assert_eq!(opcode.operand_kind(position), OperandKind::None);
        }
    }
}
