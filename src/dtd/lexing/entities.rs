//! Parameter-entity substitution table
//!
//! One table per lexing session. The parser fills it as it meets
//! `<!ENTITY % name "value">` declarations; the lexer reads it whenever it matches a
//! `%name;` reference.

use crate::dtd::error::CheckError;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterEntities {
    values: HashMap<String, String>,
}

impl ParameterEntities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects values that would reopen a quoted context once spliced back into a line.
    pub fn validate(name: &str, value: &str) -> Result<(), CheckError> {
        if value.contains('"') {
            return Err(CheckError::InvalidEntityValue {
                name: name.to_string(),
                value: value.to_string(),
            });
        }
        Ok(())
    }

    /// Adds or replaces a definition; a redeclared name takes the newer value.
    pub fn register(&mut self, name: &str, value: &str) -> Result<(), CheckError> {
        Self::validate(name, value)?;
        self.values.insert(name.to_string(), value.to_string());
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
