//! Newly introduced options
//!
//! `make listnewconfig` prints one `NAME=VALUE` line for every option that is
//! new in a source tree relative to the copied config. The list is kept in
//! output order, which follows the Kconfig menu structure.

use crate::kconfig::parser::is_option_name;
use serde::{Deserialize, Serialize};

/// One `NAME=VALUE` entry of a new-options listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOption {
    pub name: String,
    /// Default value as printed by `make`, unparsed
    pub value: String,
}

/// The ordered output of `make listnewconfig`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOptions {
    pub entries: Vec<NewOption>,
}

impl NewOptions {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Parse `make listnewconfig` output, skipping lines that are not assignments.
pub fn parse_new_options(text: &str) -> NewOptions {
    let entries = text
        .lines()
        .filter_map(|line| line.trim().split_once('='))
        .filter(|(name, _)| is_option_name(name))
        .map(|(name, value)| NewOption {
            name: name.to_string(),
            value: value.to_string(),
        })
        .collect();
    NewOptions { entries }
}

/// Render the terminal listing, one indented `NAME = VALUE` line per option.
pub fn render_new_options(options: &NewOptions) -> String {
    options
        .entries
        .iter()
        .map(|opt| format!("   {} = {}\n", opt.name, opt.value))
        .collect()
}
