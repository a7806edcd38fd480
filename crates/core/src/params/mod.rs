//! Name/value parameters supplied by the host and the lookups over them

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub mod keys;

/// A single `(name, value)` entry. Several entries may share a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub value: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl FromStr for Parameter {
    type Err = Error;

    /// Parses `NAME=VALUE`. Only the first `=` separates; the value may contain more.
    fn from_str(s: &str) -> Result<Self> {
        match s.split_once('=') {
            Some((name, value)) if !name.trim().is_empty() => {
                Ok(Parameter::new(name.trim(), value))
            }
            _ => Err(Error::InvalidParameter(s.to_string())),
        }
    }
}

/// Ordered, immutable-by-convention collection of parameters.
///
/// Order matters for two things: last-wins lookup and the emission order of
/// repeatable entries such as `variable`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSet {
    entries: Vec<Parameter>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The parameters a freshly created action starts with.
    pub fn defaults() -> Self {
        [
            ("test source", "${CUSTOM_RESOURCES}/"),
            ("listener", "${CUSTOM_RESOURCES}/RecordingListener.py"),
            ("output directory", "<path to create output>"),
            ("test", "<name or simple pattern>"),
            ("variable", "name:value"),
        ]
        .into_iter()
        .collect()
    }

    pub fn push(&mut self, parameter: Parameter) {
        self.entries.push(parameter);
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(Parameter::new(name, value));
        self
    }

    pub fn extend(&mut self, other: ParameterSet) {
        self.entries.extend(other.entries);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value of the last entry named exactly `key`.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|p| p.name == key)
            .map(|p| p.value.as_str())
    }

    /// Value of the last entry named exactly `key`, or `default` when absent.
    pub fn get<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.lookup(key).unwrap_or(default)
    }

    /// Every value whose name matches `key` after trimming and ignoring
    /// case, in input order.
    pub fn collect_all(&self, key: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|p| p.name.trim().eq_ignore_ascii_case(key))
            .map(|p| p.value.as_str())
            .collect()
    }

    /// Permissive boolean: only a case-insensitive `true` counts. Whitespace is not trimmed.
    pub fn flag(&self, key: &str) -> bool {
        self.lookup(key)
            .is_some_and(|v| v.eq_ignore_ascii_case("true"))
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, value)| Parameter::new(name, value))
                .collect(),
        }
    }
}

impl From<Vec<Parameter>> for ParameterSet {
    fn from(entries: Vec<Parameter>) -> Self {
        Self { entries }
    }
}

/// `[flag, value]` when `value` is present and differs from `sentinel`, else nothing.
///
/// A `None` sentinel only suppresses absent values.
pub fn option_if_present(flag: &str, value: Option<&str>, sentinel: Option<&str>) -> Vec<String> {
    match value {
        Some(v) if Some(v) != sentinel => vec![flag.to_string(), v.to_string()],
        _ => Vec::new(),
    }
}
