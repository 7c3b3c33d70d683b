//! CLI pipeline tests: parsed arguments -> Converter -> files on disk

use std::fs;

use bytecode_system::{Constant, ErrorKind, Opcode};
use clap::Parser as ClapParser;
use disasm_cli::{Cli, CliError, Converter};
use integration_tests::ModuleImage;
use tempfile::TempDir;

fn hello_image() -> Vec<u8> {
    ModuleImage::new()
        .constant(Constant::String("hello".into()))
        .instruction(Opcode::PushConst, &[0])
        .instruction(Opcode::Print, &[])
        .instruction(Opcode::Halt, &[])
        .build()
}

#[test]
fn test_pipeline_positional_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("hello.phsb");
    let output = dir.path().join("hello.phir");
    fs::write(&input, hello_image()).unwrap();

    let cli = Cli::try_parse_from([
        "phsb-disasm",
        input.to_str().unwrap(),
        output.to_str().unwrap(),
    ])
    .unwrap();
    let mut console = Vec::new();
    Converter::from_cli(&cli).execute(&mut console).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.starts_with(".PHIR 3.0.0\n.CONSTANTS 1\nSTRING \"hello\""));
    assert!(text.ends_with("PRINT\nHALT"));
    let console = String::from_utf8(console).unwrap();
    assert!(console.contains("  Constants:   1"));
    assert!(console.contains("  Instructions: 3"));
}

#[test]
fn test_pipeline_nologo_with_flag_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("hello.phsb");
    let output = dir.path().join("out.phir");
    fs::write(&input, hello_image()).unwrap();

    let cli = Cli::try_parse_from([
        "phsb-disasm",
        "-n",
        "--output",
        output.to_str().unwrap(),
        input.to_str().unwrap(),
    ])
    .unwrap();
    let mut console = Vec::new();
    Converter::from_cli(&cli).execute(&mut console).unwrap();

    assert!(console.is_empty());
    assert!(fs::read_to_string(&output).unwrap().contains("const[0]=\"hello\""));
}

#[test]
fn test_pipeline_file_and_console_agree() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("hello.phsb");
    let output = dir.path().join("hello.phir");
    fs::write(&input, hello_image()).unwrap();

    let mut console = Vec::new();
    Converter::new(&input).execute(&mut console).unwrap();
    Converter::new(&input)
        .with_output(Some(output.clone()))
        .with_nologo(true)
        .execute(&mut Vec::new())
        .unwrap();

    let from_console = String::from_utf8(console).unwrap();
    assert_eq!(from_console.trim_end_matches('\n'), fs::read_to_string(&output).unwrap());
}

#[test]
fn test_pipeline_version_mismatch_reported() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("old.phsb");
    fs::write(&input, ModuleImage::new().version(0x0200_0000).build()).unwrap();

    let err = Converter::new(&input).run().unwrap_err();
    match &err {
        CliError::Decode(e) => assert_eq!(e.kind(), ErrorKind::FormatMismatch),
        other => panic!("expected decode error, got {other:?}"),
    }
    assert_eq!(
        err.to_string(),
        "invalid bytecode: incompatible version: 0x02000000"
    );
}
