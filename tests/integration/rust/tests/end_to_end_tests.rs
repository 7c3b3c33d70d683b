//! End-to-end tests: binary image -> Module -> PHIR text

use bytecode_system::{Constant, Module, Opcode};
use disassembler::disassemble;
use indoc::indoc;
use integration_tests::ModuleImage;
use pretty_assertions::assert_eq;

fn store_and_print() -> ModuleImage {
    ModuleImage::new()
        .constant(Constant::Int(42))
        .next_free(1)
        .variable("x", 0)
        .instruction(Opcode::PushConst, &[0])
        .instruction(Opcode::StoreVar, &[0])
        .instruction(Opcode::LoadVar, &[0])
        .instruction(Opcode::Print, &[])
}

#[test]
fn test_e2e_store_and_print() {
    let module = Module::from_bytes(&store_and_print().build()).unwrap();

    let expected = indoc! {r#"
        .PHIR 3.0.0
        .CONSTANTS 1
        INT 42
        .VARIABLES 1 1
        x 0
        .INSTRUCTIONS 4
        PUSH_CONST 0                            ; const[0]=42
        STORE_VAR 0                             ; var=x
        LOAD_VAR 0                              ; var=x
        PRINT"#};
    assert_eq!(disassemble(&module), expected);
}

#[test]
fn test_e2e_register_program_with_functions() {
    let image = ModuleImage::new()
        .constant(Constant::String("Hello, world! This is Phasor.".into()))
        .constant(Constant::Float(0.5))
        .constant(Constant::Int(10))
        .next_free(2)
        .variable("limit", 1)
        .variable("greeting", 0)
        .function("greet", 7)
        .function("main", 0)
        .instruction(Opcode::LoadConstR, &[0, 0])
        .instruction(Opcode::StoreVarR, &[0, 0])
        .instruction(Opcode::LoadConstR, &[1, 2])
        .instruction(Opcode::StoreVarR, &[1, 1])
        .instruction(Opcode::Call, &[7])
        .instruction(Opcode::Halt, &[])
        .instruction(Opcode::True, &[])
        .instruction(Opcode::LoadVarR, &[2, 0])
        .instruction(Opcode::PrintR, &[2]);
    let module = Module::from_bytes(&image.build()).unwrap();

    let expected = indoc! {r#"
        .PHIR 3.0.0
        .CONSTANTS 3
        STRING "Hello, world! This is Phasor."
        FLOAT 0.5
        INT 10
        .VARIABLES 2 2
        greeting 0
        limit 1
        .FUNCTIONS 2
        main 0
        greet 7
        .INSTRUCTIONS 9
        LOAD_CONST_R r0, 0                      ; const[0]="Hello, world! This i..."
        STORE_VAR_R 0, r0                       ; var=greeting
        LOAD_CONST_R r1, 2                      ; const[2]=10
        STORE_VAR_R 1, r1                       ; var=limit
        CALL 7                                  ; func=greet
        HALT
        TRUE
        LOAD_VAR_R r2, 0                        ; var=greeting
        PRINT_R r2"#};
    assert_eq!(disassemble(&module), expected);
}

#[test]
fn test_e2e_output_is_deterministic() {
    let image = store_and_print()
        .variable("y", 0)
        .variable("a", 3)
        .function("f", 2)
        .function("e", 2)
        .build();

    let first = disassemble(&Module::from_bytes(&image).unwrap());
    for _ in 0..5 {
        assert_eq!(disassemble(&Module::from_bytes(&image).unwrap()), first);
    }
}

#[test]
fn test_e2e_out_of_range_constant_index() {
    let image = ModuleImage::new()
        .constant(Constant::Int(1))
        .instruction(Opcode::PushConst, &[7])
        .instruction(Opcode::LoadConstR, &[0, -4])
        .build();
    let text = disassemble(&Module::from_bytes(&image).unwrap());

    assert!(text.ends_with("PUSH_CONST 7\nLOAD_CONST_R r0, -4"));
}

#[test]
fn test_e2e_padding_slots_do_not_leak() {
    let image = ModuleImage::new()
        .raw_instruction(Opcode::Pop.byte(), [9, 9, 9, 9, 9])
        .raw_instruction(Opcode::Mov.byte(), [1, 2, 3, 4, 5])
        .build();
    let text = disassemble(&Module::from_bytes(&image).unwrap());

    assert!(text.ends_with(".INSTRUCTIONS 2\nPOP\nMOV r1, r2"));
}

#[test]
fn test_e2e_header_flags_are_kept() {
    let image = store_and_print().flags(0xA5).build();
    let module = Module::from_bytes(&image).unwrap();

    assert_eq!(module.header().flags, 0xA5);
    assert_eq!(module.summary().instructions, 4);
}

#[test]
fn test_e2e_all_opcodes_decode_and_render() {
    let mut image = ModuleImage::new();
    for opcode in Opcode::ALL {
        image = image.instruction(opcode, &[1, 2, 3]);
    }
    let module = Module::from_bytes(&image.build()).unwrap();
    let text = disassemble(&module);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[3], ".INSTRUCTIONS 115");
    for (line, opcode) in lines[4..].iter().zip(Opcode::ALL) {
        let mnemonic = line.split(' ').next().unwrap();
        assert_eq!(mnemonic, opcode.mnemonic());
    }
}

#[test]
fn test_e2e_duplicate_symbols_follow_read_order() {
    let image = ModuleImage::new()
        .next_free(6)
        .variable("a", 3)
        .variable("b", 3)
        .variable("a", 3)
        .variable("c", 0)
        .variable("c", 5)
        .function("g", 2)
        .function("f", 2)
        .instruction(Opcode::LoadVar, &[3])
        .instruction(Opcode::LoadVar, &[0])
        .instruction(Opcode::Call, &[2]);
    let module = Module::from_bytes(&image.build()).unwrap();

    let expected = indoc! {r#"
        .PHIR 3.0.0
        .CONSTANTS 0
        .VARIABLES 3 6
        a 3
        b 3
        c 5
        .FUNCTIONS 2
        g 2
        f 2
        .INSTRUCTIONS 3
        LOAD_VAR 3                              ; var=a
        LOAD_VAR 0                              ; var=c
        CALL 2                                  ; func=f"#};
    assert_eq!(disassemble(&module), expected);
}

#[test]
fn test_e2e_float_constants() {
    let image = ModuleImage::new()
        .constant(Constant::Float(1e16))
        .constant(Constant::Float(1e-5))
        .constant(Constant::Float(f64::NAN))
        .constant(Constant::Float(-0.25));
    let module = Module::from_bytes(&image.build()).unwrap();

    let text = disassemble(&module);
    assert!(text.contains("FLOAT 1e+16\nFLOAT 1e-05\nFLOAT nan\nFLOAT -0.25\n"));
}
