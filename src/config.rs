use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::split::WHITESPACE;
use crate::value::Value;

/// Run configuration: separators and seed variables.
///
/// Read once when a run starts; the context never sees later changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Input field separator (FS). `" "` or `""` split on whitespace runs.
    pub field_separator: String,
    /// Output field separator (OFS), used by `Context::format`.
    pub output_separator: String,
    /// Variables seeded into the context before setup runs.
    pub variables: HashMap<String, Value>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_separator: WHITESPACE.to_string(),
            output_separator: WHITESPACE.to_string(),
            variables: HashMap::new(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field_separator(mut self, fs: impl Into<String>) -> Self {
        self.field_separator = fs.into();
        self
    }

    pub fn output_separator(mut self, ofs: impl Into<String>) -> Self {
        self.output_separator = ofs.into();
        self
    }

    pub fn variable(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    /// FS with an empty value mapped to the whitespace default.
    pub(crate) fn effective_fs(&self) -> &str {
        non_empty_or_default(&self.field_separator)
    }

    /// OFS with an empty value mapped to a single space.
    pub(crate) fn effective_ofs(&self) -> &str {
        non_empty_or_default(&self.output_separator)
    }
}

fn non_empty_or_default(sep: &str) -> &str {
    if sep.is_empty() { WHITESPACE } else { sep }
}

/// Parse a `name=value` assignment as given to `-v`.
///
/// The value's type is inferred with [`Value::parse`].
pub fn parse_assignment(assignment: &str) -> Result<(String, Value)> {
    match assignment.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), Value::parse(value)))
        }
        _ => Err(Error::invalid_assignment(assignment)),
    }
}
