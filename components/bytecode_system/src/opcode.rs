//! Phasor VM opcodes and their operand metadata
//!
//! The instruction set mixes two calling conventions: stack-style opcodes
//! that take at most one symbolic operand, and register-style opcodes
//! (suffixed `_R`) that address virtual machine registers directly.
//! Every opcode is classified into exactly one arity bucket, and each
//! meaningful operand slot has a fixed [`OperandKind`].

use std::fmt;

/// Register identifier for register-style operands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegisterId(pub i32);

impl fmt::Display for RegisterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.0)
    }
}

/// Semantic role of an instruction operand slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandKind {
    /// Slot is padding for this opcode
    None,
    /// Plain integer immediate (jump offsets, struct indices, ...)
    Integer,
    /// Virtual machine register
    Register,
    /// Index into the constant pool
    ConstantIndex,
    /// Index into the variable table
    VariableIndex,
    /// Entry address of a function
    FunctionIndex,
}

/// Phasor VM opcode. The discriminant is the on-disk opcode byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Opcode {
    // Stack operations
    /// Push constant from constant pool
    PushConst,
    /// Pop top of stack
    Pop,

    // Arithmetic operations
    /// Integer addition
    IAdd,
    /// Integer subtraction
    ISubtract,
    /// Integer multiplication
    IMultiply,
    /// Integer division
    IDivide,
    /// Integer remainder
    IModulo,
    /// Float addition
    FlAdd,
    /// Float subtraction
    FlSubtract,
    /// Float multiplication
    FlMultiply,
    /// Float division
    FlDivide,
    /// Float remainder
    FlModulo,
    /// Square root
    Sqrt,
    /// Power
    Pow,
    /// Natural logarithm
    Log,
    /// Exponential
    Exp,
    /// Sine
    Sin,
    /// Cosine
    Cos,
    /// Tangent
    Tan,

    // Unary operations
    /// Arithmetic negation
    Negate,
    /// Logical negation
    Not,

    // Logical operations
    /// Integer logical and
    IAnd,
    /// Integer logical or
    IOr,
    /// Float logical and
    FlAnd,
    /// Float logical or
    FlOr,

    // Comparison operations
    /// Integer equality
    IEqual,
    /// Integer inequality
    INotEqual,
    /// Integer less than
    ILessThan,
    /// Integer greater than
    IGreaterThan,
    /// Integer less than or equal
    ILessEqual,
    /// Integer greater than or equal
    IGreaterEqual,
    /// Float equality
    FlEqual,
    /// Float inequality
    FlNotEqual,
    /// Float less than
    FlLessThan,
    /// Float greater than
    FlGreaterThan,
    /// Float less than or equal
    FlLessEqual,
    /// Float greater than or equal
    FlGreaterEqual,

    // Control flow
    /// Unconditional jump
    Jump,
    /// Jump if top of stack is false
    JumpIfFalse,
    /// Jump if top of stack is true
    JumpIfTrue,
    /// Backwards jump (loops)
    JumpBack,

    // Variable operations
    /// Pop top of stack into a variable slot
    StoreVar,
    /// Push a variable slot onto the stack
    LoadVar,

    // I/O and control
    /// Pop and print to stdout
    Print,
    /// Pop and print to stderr
    PrintError,
    /// Read a line from stdin and push it
    ReadLine,
    /// Import the module named by a constant
    Import,
    /// Stop execution
    Halt,
    /// Call the native function named by a constant
    CallNative,
    /// Call a user function
    Call,
    /// Run the system command named by a constant
    System,
    /// Run a system command and push its stdout
    SystemOut,
    /// Run a system command and push its stderr
    SystemErr,
    /// Return from function
    Return,

    // Literal values
    /// Push true
    True,
    /// Push false
    False,
    /// Push null
    NullVal,

    // String operations
    /// Push length of a string
    Len,
    /// Push character at index
    CharAt,
    /// Push substring
    Substr,

    // Struct operations
    /// Create a struct named by a constant
    NewStruct,
    /// Read a struct field by name
    GetField,
    /// Write a struct field by name
    SetField,
    /// Create a struct instance from struct metadata
    NewStructInstanceStatic,
    /// Read a struct field by static offset
    GetFieldStatic,
    /// Write a struct field by static offset
    SetFieldStatic,

    // Register data movement
    /// Copy register to register
    Mov,
    /// Load constant into register
    LoadConstR,
    /// Load variable into register
    LoadVarR,
    /// Store register into variable
    StoreVarR,
    /// Push register onto stack
    PushR,
    /// Push two registers onto stack
    Push2R,
    /// Pop stack into register
    PopR,
    /// Pop two values into registers
    Pop2R,

    // Register arithmetic
    /// Integer addition on registers
    IAddR,
    /// Integer subtraction on registers
    ISubR,
    /// Integer multiplication on registers
    IMulR,
    /// Integer division on registers
    IDivR,
    /// Integer remainder on registers
    IModR,
    /// Float addition on registers
    FlAddR,
    /// Float subtraction on registers
    FlSubR,
    /// Float multiplication on registers
    FlMulR,
    /// Float division on registers
    FlDivR,
    /// Float remainder on registers
    FlModR,
    /// Square root of a register
    SqrtR,
    /// Power on registers
    PowR,
    /// Natural logarithm of a register
    LogR,
    /// Exponential of a register
    ExpR,
    /// Sine of a register
    SinR,
    /// Cosine of a register
    CosR,
    /// Tangent of a register
    TanR,

    // Register logic and comparisons
    /// Integer logical and on registers
    IAndR,
    /// Integer logical or on registers
    IOrR,
    /// Integer equality on registers
    IEqR,
    /// Integer inequality on registers
    INeR,
    /// Integer less than on registers
    ILtR,
    /// Integer greater than on registers
    IGtR,
    /// Integer less than or equal on registers
    ILeR,
    /// Integer greater than or equal on registers
    IGeR,
    /// Float logical and on registers
    FlAndR,
    /// Float logical or on registers
    FlOrR,
    /// Float equality on registers
    FlEqR,
    /// Float inequality on registers
    FlNeR,
    /// Float less than on registers
    FlLtR,
    /// Float greater than on registers
    FlGtR,
    /// Float less than or equal on registers
    FlLeR,
    /// Float greater than or equal on registers
    FlGeR,

    // Register unary operations
    /// Negate a register
    NegR,
    /// Logical not of a register
    NotR,

    // Register I/O
    /// Print a register to stdout
    PrintR,
    /// Print a register to stderr
    PrintErrorR,
    /// Read a line into a register
    ReadLineR,
    /// Run the shell command held in a register
    SystemR,
    /// Run a shell command and capture stdout into a register
    SystemOutR,
    /// Run a shell command and capture stderr into a register
    SystemErrR,
}

impl Opcode {
    /// Every opcode, ordered by byte value.
    pub const ALL: [Opcode; 115] = [
        Opcode::PushConst,
        Opcode::Pop,
        Opcode::IAdd,
        Opcode::ISubtract,
        Opcode::IMultiply,
        Opcode::IDivide,
        Opcode::IModulo,
        Opcode::FlAdd,
        Opcode::FlSubtract,
        Opcode::FlMultiply,
        Opcode::FlDivide,
        Opcode::FlModulo,
        Opcode::Sqrt,
        Opcode::Pow,
        Opcode::Log,
        Opcode::Exp,
        Opcode::Sin,
        Opcode::Cos,
        Opcode::Tan,
        Opcode::Negate,
        Opcode::Not,
        Opcode::IAnd,
        Opcode::IOr,
        Opcode::FlAnd,
        Opcode::FlOr,
        Opcode::IEqual,
        Opcode::INotEqual,
        Opcode::ILessThan,
        Opcode::IGreaterThan,
        Opcode::ILessEqual,
        Opcode::IGreaterEqual,
        Opcode::FlEqual,
        Opcode::FlNotEqual,
        Opcode::FlLessThan,
        Opcode::FlGreaterThan,
        Opcode::FlLessEqual,
        Opcode::FlGreaterEqual,
        Opcode::Jump,
        Opcode::JumpIfFalse,
        Opcode::JumpIfTrue,
        Opcode::JumpBack,
        Opcode::StoreVar,
        Opcode::LoadVar,
        Opcode::Print,
        Opcode::PrintError,
        Opcode::ReadLine,
        Opcode::Import,
        Opcode::Halt,
        Opcode::CallNative,
        Opcode::Call,
        Opcode::System,
        Opcode::SystemOut,
        Opcode::SystemErr,
        Opcode::Return,
        Opcode::True,
        Opcode::False,
        Opcode::NullVal,
        Opcode::Len,
        Opcode::CharAt,
        Opcode::Substr,
        Opcode::NewStruct,
        Opcode::GetField,
        Opcode::SetField,
        Opcode::NewStructInstanceStatic,
        Opcode::GetFieldStatic,
        Opcode::SetFieldStatic,
        Opcode::Mov,
        Opcode::LoadConstR,
        Opcode::LoadVarR,
        Opcode::StoreVarR,
        Opcode::PushR,
        Opcode::Push2R,
        Opcode::PopR,
        Opcode::Pop2R,
        Opcode::IAddR,
        Opcode::ISubR,
        Opcode::IMulR,
        Opcode::IDivR,
        Opcode::IModR,
        Opcode::FlAddR,
        Opcode::FlSubR,
        Opcode::FlMulR,
        Opcode::FlDivR,
        Opcode::FlModR,
        Opcode::SqrtR,
        Opcode::PowR,
        Opcode::LogR,
        Opcode::ExpR,
        Opcode::SinR,
        Opcode::CosR,
        Opcode::TanR,
        Opcode::IAndR,
        Opcode::IOrR,
        Opcode::IEqR,
        Opcode::INeR,
        Opcode::ILtR,
        Opcode::IGtR,
        Opcode::ILeR,
        Opcode::IGeR,
        Opcode::FlAndR,
        Opcode::FlOrR,
        Opcode::FlEqR,
        Opcode::FlNeR,
        Opcode::FlLtR,
        Opcode::FlGtR,
        Opcode::FlLeR,
        Opcode::FlGeR,
        Opcode::NegR,
        Opcode::NotR,
        Opcode::PrintR,
        Opcode::PrintErrorR,
        Opcode::ReadLineR,
        Opcode::SystemR,
        Opcode::SystemOutR,
        Opcode::SystemErrR,
    ];

    /// Returns the opcode byte value.
    pub const fn byte(self) -> u8 {
        self as u8
    }

    /// Parses an opcode from its byte value.
    pub fn from_byte(byte: u8) -> Option<Self> {
        Self::ALL.get(usize::from(byte)).copied()
    }

    /// Looks up an opcode by its text mnemonic.
    pub fn from_mnemonic(mnemonic: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.mnemonic() == mnemonic)
    }

    /// Text mnemonic used in the IR format
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::PushConst => "PUSH_CONST",
            Opcode::Pop => "POP",
            Opcode::IAdd => "IADD",
            Opcode::ISubtract => "ISUBTRACT",
            Opcode::IMultiply => "IMULTIPLY",
            Opcode::IDivide => "IDIVIDE",
            Opcode::IModulo => "IMODULO",
            Opcode::FlAdd => "FLADD",
            Opcode::FlSubtract => "FLSUBTRACT",
            Opcode::FlMultiply => "FLMULTIPLY",
            Opcode::FlDivide => "FLDIVIDE",
            Opcode::FlModulo => "FLMODULO",
            Opcode::Sqrt => "SQRT",
            Opcode::Pow => "POW",
            Opcode::Log => "LOG",
            Opcode::Exp => "EXP",
            Opcode::Sin => "SIN",
            Opcode::Cos => "COS",
            Opcode::Tan => "TAN",
            Opcode::Negate => "NEGATE",
            Opcode::Not => "NOT",
            Opcode::IAnd => "IAND",
            Opcode::IOr => "IOR",
            Opcode::FlAnd => "FLAND",
            Opcode::FlOr => "FLOR",
            Opcode::IEqual => "IEQUAL",
            Opcode::INotEqual => "INOT_EQUAL",
            Opcode::ILessThan => "ILESS_THAN",
            Opcode::IGreaterThan => "IGREATER_THAN",
            Opcode::ILessEqual => "ILESS_EQUAL",
            Opcode::IGreaterEqual => "IGREATER_EQUAL",
            Opcode::FlEqual => "FLEQUAL",
            Opcode::FlNotEqual => "FLNOT_EQUAL",
            Opcode::FlLessThan => "FLLESS_THAN",
            Opcode::FlGreaterThan => "FLGREATER_THAN",
            Opcode::FlLessEqual => "FLLESS_EQUAL",
            Opcode::FlGreaterEqual => "FLGREATER_EQUAL",
            Opcode::Jump => "JUMP",
            Opcode::JumpIfFalse => "JUMP_IF_FALSE",
            Opcode::JumpIfTrue => "JUMP_IF_TRUE",
            Opcode::JumpBack => "JUMP_BACK",
            Opcode::StoreVar => "STORE_VAR",
            Opcode::LoadVar => "LOAD_VAR",
            Opcode::Print => "PRINT",
            Opcode::PrintError => "PRINTERROR",
            Opcode::ReadLine => "READLINE",
            Opcode::Import => "IMPORT",
            Opcode::Halt => "HALT",
            Opcode::CallNative => "CALL_NATIVE",
            Opcode::Call => "CALL",
            Opcode::System => "SYSTEM",
            Opcode::SystemOut => "SYSTEM_OUT",
            Opcode::SystemErr => "SYSTEM_ERR",
            Opcode::Return => "RETURN",
            Opcode::True => "TRUE",
            Opcode::False => "FALSE",
            Opcode::NullVal => "NULL_VAL",
            Opcode::Len => "LEN",
            Opcode::CharAt => "CHAR_AT",
            Opcode::Substr => "SUBSTR",
            Opcode::NewStruct => "NEW_STRUCT",
            Opcode::GetField => "GET_FIELD",
            Opcode::SetField => "SET_FIELD",
            Opcode::NewStructInstanceStatic => "NEW_STRUCT_INSTANCE_STATIC",
            Opcode::GetFieldStatic => "GET_FIELD_STATIC",
            Opcode::SetFieldStatic => "SET_FIELD_STATIC",
            Opcode::Mov => "MOV",
            Opcode::LoadConstR => "LOAD_CONST_R",
            Opcode::LoadVarR => "LOAD_VAR_R",
            Opcode::StoreVarR => "STORE_VAR_R",
            Opcode::PushR => "PUSH_R",
            Opcode::Push2R => "PUSH2_R",
            Opcode::PopR => "POP_R",
            Opcode::Pop2R => "POP2_R",
            Opcode::IAddR => "IADD_R",
            Opcode::ISubR => "ISUB_R",
            Opcode::IMulR => "IMUL_R",
            Opcode::IDivR => "IDIV_R",
            Opcode::IModR => "IMOD_R",
            Opcode::FlAddR => "FLADD_R",
            Opcode::FlSubR => "FLSUB_R",
            Opcode::FlMulR => "FLMUL_R",
            Opcode::FlDivR => "FLDIV_R",
            Opcode::FlModR => "FLMOD_R",
            Opcode::SqrtR => "SQRT_R",
            Opcode::PowR => "POW_R",
            Opcode::LogR => "LOG_R",
            Opcode::ExpR => "EXP_R",
            Opcode::SinR => "SIN_R",
            Opcode::CosR => "COS_R",
            Opcode::TanR => "TAN_R",
            Opcode::IAndR => "IAND_R",
            Opcode::IOrR => "IOR_R",
            Opcode::IEqR => "IEQ_R",
            Opcode::INeR => "INE_R",
            Opcode::ILtR => "ILT_R",
            Opcode::IGtR => "IGT_R",
            Opcode::ILeR => "ILE_R",
            Opcode::IGeR => "IGE_R",
            Opcode::FlAndR => "FLAND_R",
            Opcode::FlOrR => "FLOR_R",
            Opcode::FlEqR => "FLEQ_R",
            Opcode::FlNeR => "FLNE_R",
            Opcode::FlLtR => "FLLT_R",
            Opcode::FlGtR => "FLGT_R",
            Opcode::FlLeR => "FLLE_R",
            Opcode::FlGeR => "FLGE_R",
            Opcode::NegR => "NEG_R",
            Opcode::NotR => "NOT_R",
            Opcode::PrintR => "PRINT_R",
            Opcode::PrintErrorR => "PRINTERROR_R",
            Opcode::ReadLineR => "READLINE_R",
            Opcode::SystemR => "SYSTEM_R",
            Opcode::SystemOutR => "SYSTEM_OUT_R",
            Opcode::SystemErrR => "SYSTEM_ERR_R",
        }
    }

    /// Number of meaningful operand slots (0 to 3)
    pub fn operand_count(self) -> usize {
        match self {
            Opcode::Pop
            | Opcode::IAdd
            | Opcode::ISubtract
            | Opcode::IMultiply
            | Opcode::IDivide
            | Opcode::IModulo
            | Opcode::FlAdd
            | Opcode::FlSubtract
            | Opcode::FlMultiply
            | Opcode::FlDivide
            | Opcode::FlModulo
            | Opcode::Sqrt
            | Opcode::Pow
            | Opcode::Log
            | Opcode::Exp
            | Opcode::Sin
            | Opcode::Cos
            | Opcode::Tan
            | Opcode::Negate
            | Opcode::Not
            | Opcode::IAnd
            | Opcode::IOr
            | Opcode::FlAnd
            | Opcode::FlOr
            | Opcode::IEqual
            | Opcode::INotEqual
            | Opcode::ILessThan
            | Opcode::IGreaterThan
            | Opcode::ILessEqual
            | Opcode::IGreaterEqual
            | Opcode::FlEqual
            | Opcode::FlNotEqual
            | Opcode::FlLessThan
            | Opcode::FlGreaterThan
            | Opcode::FlLessEqual
            | Opcode::FlGreaterEqual
            | Opcode::Print
            | Opcode::PrintError
            | Opcode::ReadLine
            | Opcode::Halt
            | Opcode::Return
            | Opcode::True
            | Opcode::False
            | Opcode::NullVal
            | Opcode::Len
            | Opcode::CharAt
            | Opcode::Substr => 0,

            Opcode::PushConst
            | Opcode::Jump
            | Opcode::JumpIfFalse
            | Opcode::JumpIfTrue
            | Opcode::JumpBack
            | Opcode::StoreVar
            | Opcode::LoadVar
            | Opcode::Import
            | Opcode::CallNative
            | Opcode::Call
            | Opcode::System
            | Opcode::SystemOut
            | Opcode::SystemErr
            | Opcode::PushR
            | Opcode::PopR
            | Opcode::PrintR
            | Opcode::PrintErrorR
            | Opcode::ReadLineR
            | Opcode::SystemR
            | Opcode::SystemOutR
            | Opcode::SystemErrR
            | Opcode::NewStruct
            | Opcode::GetField
            | Opcode::SetField
            | Opcode::NewStructInstanceStatic => 1,

            Opcode::Mov
            | Opcode::LoadConstR
            | Opcode::LoadVarR
            | Opcode::StoreVarR
            | Opcode::SqrtR
            | Opcode::LogR
            | Opcode::ExpR
            | Opcode::SinR
            | Opcode::CosR
            | Opcode::TanR
            | Opcode::NegR
            | Opcode::NotR
            | Opcode::Push2R
            | Opcode::Pop2R
            | Opcode::GetFieldStatic
            | Opcode::SetFieldStatic => 2,

            Opcode::IAddR
            | Opcode::ISubR
            | Opcode::IMulR
            | Opcode::IDivR
            | Opcode::IModR
            | Opcode::FlAddR
            | Opcode::FlSubR
            | Opcode::FlMulR
            | Opcode::FlDivR
            | Opcode::FlModR
            | Opcode::PowR
            | Opcode::IAndR
            | Opcode::IOrR
            | Opcode::IEqR
            | Opcode::INeR
            | Opcode::ILtR
            | Opcode::IGtR
            | Opcode::ILeR
            | Opcode::IGeR
            | Opcode::FlAndR
            | Opcode::FlOrR
            | Opcode::FlEqR
            | Opcode::FlNeR
            | Opcode::FlLtR
            | Opcode::FlGtR
            | Opcode::FlLeR
            | Opcode::FlGeR => 3,
        }
    }

    /// Semantic kind of the operand at `position`.
    ///
    /// Positions at or past [`operand_count`](Self::operand_count) are
    /// padding and resolve to [`OperandKind::None`].
    pub fn operand_kind(self, position: usize) -> OperandKind {
        if position >= self.operand_count() {
            return OperandKind::None;
        }

        match self {
            Opcode::PushConst | Opcode::Import | Opcode::CallNative | Opcode::System => {
                OperandKind::ConstantIndex
            }
            Opcode::StoreVar | Opcode::LoadVar => OperandKind::VariableIndex,
            Opcode::Call => OperandKind::FunctionIndex,

            Opcode::LoadConstR if position == 0 => OperandKind::Register,
            Opcode::LoadConstR => OperandKind::ConstantIndex,
            Opcode::LoadVarR if position == 0 => OperandKind::Register,
            Opcode::LoadVarR => OperandKind::VariableIndex,
            Opcode::StoreVarR if position == 0 => OperandKind::VariableIndex,
            Opcode::StoreVarR => OperandKind::Register,

            Opcode::Mov
            | Opcode::NegR
            | Opcode::NotR
            | Opcode::SqrtR
            | Opcode::LogR
            | Opcode::ExpR
            | Opcode::SinR
            | Opcode::CosR
            | Opcode::TanR
            | Opcode::PushR
            | Opcode::PopR
            | Opcode::PrintR
            | Opcode::PrintErrorR
            | Opcode::ReadLineR
            | Opcode::SystemR
            | Opcode::Push2R
            | Opcode::Pop2R
            | Opcode::SystemOutR
            | Opcode::SystemErrR => OperandKind::Register,

            Opcode::IAddR
            | Opcode::ISubR
            | Opcode::IMulR
            | Opcode::IDivR
            | Opcode::IModR
            | Opcode::FlAddR
            | Opcode::FlSubR
            | Opcode::FlMulR
            | Opcode::FlDivR
            | Opcode::FlModR
            | Opcode::PowR
            | Opcode::IAndR
            | Opcode::IOrR
            | Opcode::IEqR
            | Opcode::INeR
            | Opcode::ILtR
            | Opcode::IGtR
            | Opcode::ILeR
            | Opcode::IGeR
            | Opcode::FlAndR
            | Opcode::FlOrR
            | Opcode::FlEqR
            | Opcode::FlNeR
            | Opcode::FlLtR
            | Opcode::FlGtR
            | Opcode::FlLeR
            | Opcode::FlGeR => OperandKind::Register,

            Opcode::Jump
            | Opcode::JumpIfFalse
            | Opcode::JumpIfTrue
            | Opcode::JumpBack
            | Opcode::SystemOut
            | Opcode::SystemErr
            | Opcode::NewStruct
            | Opcode::GetField
            | Opcode::SetField
            | Opcode::NewStructInstanceStatic
            | Opcode::GetFieldStatic
            | Opcode::SetFieldStatic => OperandKind::Integer,

            Opcode::Pop
            | Opcode::IAdd
            | Opcode::ISubtract
            | Opcode::IMultiply
            | Opcode::IDivide
            | Opcode::IModulo
            | Opcode::FlAdd
            | Opcode::FlSubtract
            | Opcode::FlMultiply
            | Opcode::FlDivide
            | Opcode::FlModulo
            | Opcode::Sqrt
            | Opcode::Pow
            | Opcode::Log
            | Opcode::Exp
            | Opcode::Sin
            | Opcode::Cos
            | Opcode::Tan
            | Opcode::Negate
            | Opcode::Not
            | Opcode::IAnd
            | Opcode::IOr
            | Opcode::FlAnd
            | Opcode::FlOr
            | Opcode::IEqual
            | Opcode::INotEqual
            | Opcode::ILessThan
            | Opcode::IGreaterThan
            | Opcode::ILessEqual
            | Opcode::IGreaterEqual
            | Opcode::FlEqual
            | Opcode::FlNotEqual
            | Opcode::FlLessThan
            | Opcode::FlGreaterThan
            | Opcode::FlLessEqual
            | Opcode::FlGreaterEqual
            | Opcode::Print
            | Opcode::PrintError
            | Opcode::ReadLine
            | Opcode::Halt
            | Opcode::Return
            | Opcode::True
            | Opcode::False
            | Opcode::NullVal
            | Opcode::Len
            | Opcode::CharAt
            | Opcode::Substr => OperandKind::None,
        }
    }

    /// Check if this opcode transfers control to a raw instruction offset
    pub fn is_jump(self) -> bool {
        matches!(
            self,
            Opcode::Jump | Opcode::JumpIfFalse | Opcode::JumpIfTrue | Opcode::JumpBack
        )
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
