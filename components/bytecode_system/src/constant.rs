//! Constant pool values
//!
//! Constants are literal values referenced by index from instructions.

/// On-disk type tag of a constant pool entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ConstantTag {
    /// No payload
    Null = 0,
    /// One byte, nonzero is true
    Bool = 1,
    /// Little-endian `i64`
    Int = 2,
    /// Little-endian IEEE 754 `f64`
    Float = 3,
    /// `u16` length followed by UTF-8 bytes
    String = 4,
}

impl ConstantTag {
    /// Parses a tag from its byte value.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(ConstantTag::Null),
            1 => Some(ConstantTag::Bool),
            2 => Some(ConstantTag::Int),
            3 => Some(ConstantTag::Float),
            4 => Some(ConstantTag::String),
            _ => None,
        }
    }
}

/// A constant pool value
#[derive(Debug, Clone, PartialEq)]
pub enum Constant {
    /// Null
    Null,
    /// Boolean
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// IEEE 754 double
    Float(f64),
    /// UTF-8 text, at most 65535 bytes
    String(String),
}

impl Constant {
    /// The on-disk tag for this value
    pub fn tag(&self) -> ConstantTag {
        match self {
            Constant::Null => ConstantTag::Null,
            Constant::Bool(_) => ConstantTag::Bool,
            Constant::Int(_) => ConstantTag::Int,
            Constant::Float(_) => ConstantTag::Float,
            Constant::String(_) => ConstantTag::String,
        }
    }
}
