//! PHIR text emission
//!
//! Output is fully determined by the module: sections appear in a fixed
//! order, table entries are sorted, and lines are joined with `\n` without a
//! trailing newline.

use std::borrow::Cow;

use bytecode_system::{Constant, Instruction, Module, Opcode, OperandKind, RegisterId};

use crate::escape::escape_string;
use crate::float::format_float;

/// First line of every PHIR document
pub const FORMAT_HEADER: &str = ".PHIR 3.0.0";

/// Column at which instruction comments start
pub const COMMENT_COLUMN: usize = 40;

/// Characters of a string constant shown in a comment
pub const PREVIEW_CHARS: usize = 20;

/// Render a decoded module as PHIR text.
pub fn disassemble(module: &Module) -> String {
    Emitter::new(module).emit()
}

/// Mnemonic for a raw opcode byte, or `UNKNOWN_<byte>` when the byte is not
/// a defined opcode
pub fn mnemonic_for_byte(byte: u8) -> Cow<'static, str> {
    match Opcode::from_byte(byte) {
        Some(opcode) => Cow::Borrowed(opcode.mnemonic()),
        None => Cow::Owned(format!("UNKNOWN_{byte}")),
    }
}

/// Text emitter over a borrowed module
#[derive(Debug, Clone, Copy)]
pub struct Emitter<'m> {
    module: &'m Module,
}

impl<'m> Emitter<'m> {
    /// Create an emitter for `module`
    pub fn new(module: &'m Module) -> Self {
        Self { module }
    }

    /// Produce the full PHIR document
    pub fn emit(&self) -> String {
        let mut lines = vec![FORMAT_HEADER.to_string()];
        self.emit_constants(&mut lines);
        self.emit_variables(&mut lines);
        self.emit_functions(&mut lines);
        self.emit_instructions(&mut lines);
        lines.join("\n")
    }

    fn emit_constants(&self, lines: &mut Vec<String>) {
        let constants = self.module.constants();
        lines.push(format!(".CONSTANTS {}", constants.len()));
        lines.extend(constants.iter().map(constant_line));
    }

    fn emit_variables(&self, lines: &mut Vec<String>) {
        let variables = self.module.variables();
        lines.push(format!(
            ".VARIABLES {} {}",
            variables.len(),
            variables.next_free()
        ));
        lines.extend(
            variables
                .sorted()
                .into_iter()
                .map(|(name, index)| format!("{name} {index}")),
        );
    }

    fn emit_functions(&self, lines: &mut Vec<String>) {
        let functions = self.module.functions();
        if functions.is_empty() {
            return;
        }
        lines.push(format!(".FUNCTIONS {}", functions.len()));
        lines.extend(
            functions
                .sorted()
                .into_iter()
                .map(|(name, address)| format!("{name} {address}")),
        );
    }

    fn emit_instructions(&self, lines: &mut Vec<String>) {
        let instructions = self.module.instructions();
        lines.push(format!(".INSTRUCTIONS {}", instructions.len()));
        lines.extend(instructions.iter().map(|inst| self.instruction_line(inst)));
    }

    /// One instruction line, with its symbol comment if any operand resolves
    pub fn instruction_line(&self, instruction: &Instruction) -> String {
        let mut line = instruction.opcode.mnemonic().to_string();

        let operands: Vec<String> = instruction
            .typed_operands()
            .map(|(kind, value)| match kind {
                OperandKind::Register => RegisterId(value).to_string(),
                _ => value.to_string(),
            })
            .collect();
        if !operands.is_empty() {
            line.push(' ');
            line.push_str(&operands.join(", "));
        }

        let comment = instruction
            .typed_operands()
            .filter_map(|(kind, value)| self.annotate(kind, value))
            .last();
        if let Some(comment) = comment {
            append_comment(&mut line, &comment);
        }
        line
    }

    fn annotate(&self, kind: OperandKind, value: i32) -> Option<String> {
        match kind {
            OperandKind::ConstantIndex => match self.module.constants().get(value)? {
                Constant::String(s) => Some(format!(
                    "const[{value}]=\"{}\"",
                    escape_string(&preview(s))
                )),
                Constant::Int(n) => Some(format!("const[{value}]={n}")),
                _ => None,
            },
            OperandKind::VariableIndex => self
                .module
                .variable_name(value)
                .map(|name| format!("var={name}")),
            OperandKind::FunctionIndex => self
                .module
                .function_name(value)
                .map(|name| format!("func={name}")),
            _ => None,
        }
    }
}

fn constant_line(constant: &Constant) -> String {
    match constant {
        Constant::Null => "NULL".to_string(),
        Constant::Bool(b) => format!("BOOL {b}"),
        Constant::Int(n) => format!("INT {n}"),
        Constant::Float(f) => format!("FLOAT {}", format_float(*f)),
        Constant::String(s) => format!("STRING \"{}\"", escape_string(s)),
    }
}

/// Pad `line` to the comment column (at least one space) and add `; comment`
fn append_comment(line: &mut String, comment: &str) {
    let width = line.chars().count();
    let pad = COMMENT_COLUMN.saturating_sub(width).max(1);
    line.extend(std::iter::repeat(' ').take(pad));
    line.push_str("; ");
    line.push_str(comment);
}

/// Leading characters of `s`, with `...` appended when it was cut
fn preview(s: &str) -> Cow<'_, str> {
    match s.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => Cow::Owned(format!("{}...", &s[..cut])),
        None => Cow::Borrowed(s),
    }
}
