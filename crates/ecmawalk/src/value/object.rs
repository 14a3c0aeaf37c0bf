//! Object-like value payloads: plain objects and regular expressions

use indexmap::IndexMap;

use super::Value;

/// A plain object with named properties.
///
/// Uses IndexMap to preserve insertion order for predictable display.
#[derive(Debug, Clone, Default)]
pub struct ObjectValue {
    /// Own properties in insertion order
    pub properties: IndexMap<String, Value>,
}

impl ObjectValue {
    /// Create an empty object
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property (builder pattern)
    pub fn with_property(mut self, name: impl Into<String>, value: Value) -> Self {
        self.properties.insert(name.into(), value);
        self
    }

    /// Get an own property by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// Number of own properties
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether the object has no own properties
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// A regular expression value. The pattern is carried, never compiled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegexValue {
    /// Pattern source
    pub pattern: String,

    /// Flag letters
    pub flags: String,
}

impl RegexValue {
    /// Create a regex value
    pub fn new(pattern: impl Into<String>, flags: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            flags: flags.into(),
        }
    }

    /// Check whether a flag letter is set
    pub fn has_flag(&self, flag: char) -> bool {
        self.flags.contains(flag)
    }
}
