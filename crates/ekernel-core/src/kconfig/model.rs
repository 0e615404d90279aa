//! Parsed kernel configuration types.
//!
//! Collections use `BTreeMap` so iteration is always ordered by option name.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Value of a single kernel build option.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ConfigValue {
    /// `CONFIG_X=y`
    Enabled,
    /// `CONFIG_X="text"`, stored without the surrounding quotes
    Str(String),
    /// `CONFIG_X=64`, an all-digit value
    Int(i64),
    /// Any other token, e.g. `m`, `n` or `0x1000`
    Symbol(String),
    /// `# CONFIG_X is not set`
    NotSet,
}

impl ConfigValue {
    /// Classify the raw right-hand side of a `NAME=VALUE` line.
    pub fn parse(raw: &str) -> Self {
        if raw == "y" {
            return ConfigValue::Enabled;
        }
        if let Some(inner) = raw
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
        {
            return ConfigValue::Str(unescape(inner));
        }
        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(n) = raw.parse::<i64>() {
                return ConfigValue::Int(n);
            }
        }
        ConfigValue::Symbol(raw.to_string())
    }

    /// True for `NotSet`
    pub fn is_not_set(&self) -> bool {
        matches!(self, ConfigValue::NotSet)
    }
}

/// Undo Kconfig string escaping (`\"` and `\\`).
fn unescape(inner: &str) -> String {
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(next @ ('"' | '\\')) => out.push(next),
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Inverse of [`unescape`].
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '"' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Enabled => f.write_str("y"),
            ConfigValue::Str(s) => write!(f, "\"{}\"", escape(s)),
            ConfigValue::Int(n) => write!(f, "{}", n),
            ConfigValue::Symbol(token) => f.write_str(token),
            ConfigValue::NotSet => f.write_str("not set"),
        }
    }
}

/// A single named option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigOption {
    pub name: String,
    pub value: ConfigValue,
}

impl ConfigOption {
    pub fn new(name: impl Into<String>, value: ConfigValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// The fully parsed content of one `.config` file.
///
/// Option names are unique; inserting an existing name replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigSnapshot {
    options: BTreeMap<String, ConfigValue>,
}

impl ConfigSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an option, returning the value it replaced.
    pub fn insert(&mut self, option: ConfigOption) -> Option<ConfigValue> {
        self.options.insert(option.name, option.value)
    }

    /// Look up an option value by name.
    pub fn get(&self, name: &str) -> Option<&ConfigValue> {
        self.options.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }

    /// Number of distinct options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Iterate options in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.options.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Option names in name order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.options.keys().map(|k| k.as_str())
    }
}

impl FromIterator<ConfigOption> for ConfigSnapshot {
    fn from_iter<I: IntoIterator<Item = ConfigOption>>(iter: I) -> Self {
        let mut snapshot = ConfigSnapshot::new();
        for option in iter {
            snapshot.insert(option);
        }
        snapshot
    }
}
