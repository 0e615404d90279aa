//! Config diff output types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`.
//! Lists are sorted by option name for deterministic serialization.

use crate::kconfig::ConfigValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The classified delta between an old and a new snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ConfigDiff {
    /// Options present in new only, with their new value
    pub added: Vec<DiffEntry>,
    /// Options present in old only, with their old value
    pub removed: Vec<DiffEntry>,
    /// Options present in both with differing values
    pub changed: BTreeMap<String, ValueChange>,
    /// Options present in both with identical values
    pub unchanged_count: usize,
    /// Distinct options excluded by ignore patterns
    pub ignored_count: usize,
}

/// An option that exists on one side of the diff only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiffEntry {
    pub name: String,
    pub value: ConfigValue,
}

/// Old/new values for a changed option.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValueChange {
    pub old: ConfigValue,
    pub new: ConfigValue,
}

impl ConfigDiff {
    /// True when nothing was added, removed or changed.
    pub fn has_no_changes(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }

    /// Names of added options, in order.
    pub fn added_names(&self) -> Vec<&str> {
        self.added.iter().map(|e| e.name.as_str()).collect()
    }

    /// Names of removed options, in order.
    pub fn removed_names(&self) -> Vec<&str> {
        self.removed.iter().map(|e| e.name.as_str()).collect()
    }

    /// Names of changed options, in order.
    pub fn changed_names(&self) -> Vec<&str> {
        self.changed.keys().map(|k| k.as_str()).collect()
    }
}
