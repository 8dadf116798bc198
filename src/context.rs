use std::collections::HashMap;
use std::fmt::Display;

use crate::split::{FieldSplitter, WHITESPACE};
use crate::value::Value;

/// Per-run state handed to every program hook.
///
/// `fields[0]` is the whole record (`$0`), `fields[1..]` are `$1`, `$2`, ...
/// The engine owns the context for the length of one run and lends it out
/// mutably to each hook call.
#[derive(Debug, Clone)]
pub struct Context {
    /// Current record followed by its fields
    pub(crate) fields: Vec<String>,
    /// Record number (NR), 1-based once the first record is read
    pub(crate) nr: u64,
    /// Number of fields (NF), not counting `$0`
    pub(crate) nf: usize,
    /// Input field separator (FS)
    fs: String,
    /// Output field separator (OFS)
    ofs: String,
    /// Record separator (RS); input is always split on newlines
    rs: String,
    /// User variables, live for the whole run
    variables: HashMap<String, Value>,
    splitter: FieldSplitter,
}

impl Context {
    pub fn new(fs: &str, ofs: &str) -> Self {
        Self {
            fields: Vec::new(),
            nr: 0,
            nf: 0,
            fs: fs.to_string(),
            ofs: ofs.to_string(),
            rs: "\n".to_string(),
            variables: HashMap::new(),
            splitter: FieldSplitter::new(fs),
        }
    }

    /// Context holding a prebuilt field array, mostly useful for exercising a
    /// program's hooks directly.
    pub fn with_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ctx = Self::default();
        ctx.fields = fields.into_iter().map(Into::into).collect();
        ctx.nf = ctx.fields.len().saturating_sub(1);
        ctx
    }

    /// Replace the current record and split it into fields.
    pub(crate) fn set_record(&mut self, record: &str) {
        self.fields.clear();
        self.fields.push(record.to_string());
        self.nf = self.splitter.split_into(record, &mut self.fields);
    }

    /// Field at `index`; 0 is the whole record. Out-of-range and negative
    /// indices read as the empty string.
    #[inline]
    pub fn field(&self, index: isize) -> &str {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.fields.get(i))
            .map_or("", String::as_str)
    }

    /// Assign field `index`, growing the field array with empty fields as
    /// needed. Negative indices are ignored.
    ///
    /// NF is recomputed from the array length only. Assigning `$0` replaces
    /// the record text but does not resplit it, so `$1..$NF` keep their
    /// previous values.
    pub fn set_field(&mut self, index: isize, value: impl Into<String>) {
        let Ok(index) = usize::try_from(index) else {
            return;
        };
        if self.fields.len() <= index {
            self.fields.resize(index + 1, String::new());
        }
        self.fields[index] = value.into();
        self.nf = self.fields.len() - 1;
    }

    pub fn var(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    pub fn var_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.variables.get_mut(name)
    }

    pub fn set_var(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.variables.insert(name.into(), value.into());
    }

    /// Join the display form of `values` with OFS.
    pub fn format<I>(&self, values: I) -> String
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let mut out = String::new();
        for (i, value) in values.into_iter().enumerate() {
            if i > 0 {
                out.push_str(&self.ofs);
            }
            out.push_str(&value.to_string());
        }
        out
    }

    #[inline]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    #[inline]
    pub fn nr(&self) -> u64 {
        self.nr
    }

    #[inline]
    pub fn nf(&self) -> usize {
        self.nf
    }

    pub fn fs(&self) -> &str {
        &self.fs
    }

    /// Splitting mode derived from FS
    pub fn splitter(&self) -> &FieldSplitter {
        &self.splitter
    }

    pub fn ofs(&self) -> &str {
        &self.ofs
    }

    pub fn rs(&self) -> &str {
        &self.rs
    }

    pub fn variables(&self) -> &HashMap<String, Value> {
        &self.variables
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new(WHITESPACE, WHITESPACE)
    }
}
