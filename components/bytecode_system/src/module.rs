//! Decoded module - the in-memory form of a `.phsb` file
//!
//! A [`Module`] owns every table read from the file and is immutable once
//! built. Symbol lookups used for annotation go through the module; each
//! table records its reverse index as entries are inserted.

use std::fmt;

use crate::constant::Constant;
use crate::error::DecodeResult;
use crate::instruction::Instruction;
use crate::reader::ModuleReader;
use crate::symbols::SymbolTable;

/// Magic number: the bytes `PHSB` read as a little-endian u32
pub const MAGIC: u32 = 0x4253_4850;

/// Supported format version (3.0.0.0)
pub const VERSION: u32 = 0x0300_0000;

/// Size of the fixed file header in bytes
pub const HEADER_LEN: usize = 16;

/// Section identifiers, in the order they are declared by the format.
///
/// On disk the sections appear as constants, variables, functions,
/// instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Section {
    /// Constant pool
    Constants = 0x01,
    /// Variable table
    Variables = 0x02,
    /// Instruction stream
    Instructions = 0x03,
    /// Function table
    Functions = 0x04,
}

impl Section {
    /// Sections in the order they are stored on disk
    pub const FILE_ORDER: [Section; 4] = [
        Section::Constants,
        Section::Variables,
        Section::Functions,
        Section::Instructions,
    ];

    /// Id byte that opens the section
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Lowercase section name
    pub fn name(self) -> &'static str {
        match self {
            Section::Constants => "constants",
            Section::Variables => "variables",
            Section::Instructions => "instructions",
            Section::Functions => "functions",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fixed 16-byte file header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Magic number, always [`MAGIC`] in a decoded module
    pub magic: u32,
    /// Format version, always [`VERSION`] in a decoded module
    pub version: u32,
    /// Producer flags; currently unused
    pub flags: u32,
    /// CRC-32 of every byte after the header
    pub checksum: u32,
}

impl Header {
    /// Header for the supported format with the given payload checksum
    pub fn new(checksum: u32) -> Self {
        Self {
            magic: MAGIC,
            version: VERSION,
            flags: 0,
            checksum,
        }
    }
}

/// Ordered constant pool
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstantPool {
    constants: Vec<Constant>,
}

impl ConstantPool {
    /// Wrap a list of constants
    pub fn new(constants: Vec<Constant>) -> Self {
        Self { constants }
    }

    /// Constant at an operand index; negative or out-of-range gives `None`
    pub fn get(&self, index: i32) -> Option<&Constant> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.constants.get(i))
    }

    /// Number of constants
    pub fn len(&self) -> usize {
        self.constants.len()
    }

    /// Check if the pool is empty
    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }

    /// Constants in pool order
    pub fn iter(&self) -> std::slice::Iter<'_, Constant> {
        self.constants.iter()
    }
}

/// Variable names and their slot indices
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableTable {
    symbols: SymbolTable,
    next_free: i32,
}

impl VariableTable {
    /// Empty table with the producer's next free slot
    pub fn new(next_free: i32) -> Self {
        Self {
            symbols: SymbolTable::new(),
            next_free,
        }
    }

    /// Build a table from `(name, index)` pairs
    pub fn from_entries<I>(next_free: i32, entries: I) -> Self
    where
        I: IntoIterator<Item = (String, i32)>,
    {
        Self {
            symbols: entries.into_iter().collect(),
            next_free,
        }
    }

    /// Bind a name to a slot; a repeated name moves to the new slot
    pub fn insert(&mut self, name: String, index: i32) {
        self.symbols.insert(name, index);
    }

    /// Next free slot as recorded by the producer
    pub fn next_free(&self) -> i32 {
        self.next_free
    }

    /// Slot bound to `name`
    pub fn index_of(&self, name: &str) -> Option<i32> {
        self.symbols.get(name)
    }

    /// Number of variables
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Entries ordered by slot index, equal slots in first-read order
    pub fn sorted(&self) -> Vec<(&str, i32)> {
        self.symbols.sorted_by_value()
    }

    pub(crate) fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }
}

/// Function names and their entry addresses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionTable {
    symbols: SymbolTable,
}

impl FunctionTable {
    /// Empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(name, address)` pairs
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, i32)>,
    {
        Self {
            symbols: entries.into_iter().collect(),
        }
    }

    /// Bind a name to an entry address
    pub fn insert(&mut self, name: String, address: i32) {
        self.symbols.insert(name, address);
    }

    /// Entry address of `name`
    pub fn address_of(&self, name: &str) -> Option<i32> {
        self.symbols.get(name)
    }

    /// Number of functions
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Entries ordered by address, equal addresses in first-read order
    pub fn sorted(&self) -> Vec<(&str, i32)> {
        self.symbols.sorted_by_value()
    }

    pub(crate) fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }
}

/// Section sizes of a module
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModuleSummary {
    /// Number of constants
    pub constants: usize,
    /// Number of variables
    pub variables: usize,
    /// Number of functions
    pub functions: usize,
    /// Number of instructions
    pub instructions: usize,
}

/// A fully decoded bytecode module
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    header: Header,
    constants: ConstantPool,
    variables: VariableTable,
    functions: FunctionTable,
    instructions: Vec<Instruction>,
}

impl Module {
    /// Assemble a module from its tables
    pub fn new(
        header: Header,
        constants: ConstantPool,
        variables: VariableTable,
        functions: FunctionTable,
        instructions: Vec<Instruction>,
    ) -> Self {
        Self {
            header,
            constants,
            variables,
            functions,
            instructions,
        }
    }

    /// Decode a complete `.phsb` image
    pub fn from_bytes(bytes: &[u8]) -> DecodeResult<Self> {
        ModuleReader::new(bytes).read_module()
    }

    /// File header
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Constant pool
    pub fn constants(&self) -> &ConstantPool {
        &self.constants
    }

    /// Variable table
    pub fn variables(&self) -> &VariableTable {
        &self.variables
    }

    /// Function table
    pub fn functions(&self) -> &FunctionTable {
        &self.functions
    }

    /// Instruction stream; an instruction's address is its position
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Name of the variable stored in slot `index`
    pub fn variable_name(&self, index: i32) -> Option<&str> {
        self.variables.symbols().name_of(index)
    }

    /// Name of the function entered at `address`
    pub fn function_name(&self, address: i32) -> Option<&str> {
        self.functions.symbols().name_of(address)
    }

    /// Section sizes
    pub fn summary(&self) -> ModuleSummary {
        ModuleSummary {
            constants: self.constants.len(),
            variables: self.variables.len(),
            functions: self.functions.len(),
            instructions: self.instructions.len(),
        }
    }
}
