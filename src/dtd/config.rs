//! Check options
//!
//! Options can be built in code, or loaded from a YAML file such as:
//!
//!     substitute_parameter_entities: true
//!     verbose: false
//!
//! Missing keys take their defaults. Unknown keys are rejected so that typos don't go
//! unnoticed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckOptions {
    /// Expand `%name;` references to internal parameter entities while lexing
    pub substitute_parameter_entities: bool,
    /// Emit a trace event for every token the parser consumes
    pub verbose: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        CheckOptions {
            substitute_parameter_entities: true,
            verbose: false,
        }
    }
}

impl CheckOptions {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        // an empty document deserializes to unit, not to a map
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|err| ConfigError::Parse(err.to_string()))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|err| ConfigError::Io(format!("{}: {}", path.display(), err)))?;
        Self::from_yaml_str(&content)
    }
}

/// Errors that can occur while loading options
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Io(String),
    Parse(String),
}

impl std::error::Error for ConfigError {}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "Unable to read options: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Invalid options: {}", msg),
        }
    }
}
