//! Name tables and the reverse symbol index
//!
//! Variables and functions are both stored as name → integer tables. Each
//! table also feeds a [`SymbolResolver`], the integer → name index used to
//! annotate disassembly. The resolver is updated on every insert, so it
//! reflects the order entries were read rather than the final table.

use std::collections::HashMap;

/// Name → integer mapping that keeps first-insertion order.
///
/// Re-inserting an existing name replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    entries: Vec<(String, i32)>,
    positions: HashMap<String, usize>,
    resolver: SymbolResolver,
}

impl SymbolTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a name, and bind `value` back to it
    pub fn insert(&mut self, name: String, value: i32) {
        self.resolver.bind(value, name.clone());
        match self.positions.get(&name) {
            Some(&pos) => self.entries[pos].1 = value,
            None => {
                self.positions.insert(name.clone(), self.entries.len());
                self.entries.push((name, value));
            }
        }
    }

    /// Value bound to `name`
    pub fn get(&self, name: &str) -> Option<i32> {
        self.positions.get(name).map(|&pos| self.entries[pos].1)
    }

    /// Name most recently bound to `value`
    pub fn name_of(&self, value: i32) -> Option<&str> {
        self.resolver.resolve(value)
    }

    /// Number of distinct names
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> + '_ {
        self.entries.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Entries ordered by value; equal values keep insertion order
    pub fn sorted_by_value(&self) -> Vec<(&str, i32)> {
        let mut sorted: Vec<_> = self.iter().collect();
        sorted.sort_by_key(|&(_, value)| value);
        sorted
    }
}

impl FromIterator<(String, i32)> for SymbolTable {
    fn from_iter<I: IntoIterator<Item = (String, i32)>>(iter: I) -> Self {
        let mut table = SymbolTable::new();
        for (name, value) in iter {
            table.insert(name, value);
        }
        table
    }
}

/// Reverse lookup from a variable index or function address to a name.
///
/// Every binding is recorded, so a value keeps resolving to a name even
/// after that name is rebound elsewhere. The last binding of a value wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolResolver {
    names: HashMap<i32, String>,
}

impl SymbolResolver {
    /// Create an empty resolver
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `value` to `name`, replacing any earlier binding of `value`
    pub fn bind(&mut self, value: i32, name: String) {
        self.names.insert(value, name);
    }

    /// Name bound to `value`
    pub fn resolve(&self, value: i32) -> Option<&str> {
        self.names.get(&value).map(String::as_str)
    }
}
