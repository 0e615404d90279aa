//! Config diff computation engine.
//!
//! The core entry point is [`compute_diff`], a pure function of two
//! snapshots. [`diff_config_files`] adds reading and parsing on top.

use crate::diff::model::{ConfigDiff, DiffEntry, ValueChange};
use crate::errors::Result;
use crate::kconfig::{read_config_file, ConfigSnapshot, ConfigSource, ParseMode};
use crate::{log_op_end, log_op_error, log_op_start};
use std::collections::BTreeMap;
use std::path::Path;

/// Options controlling which names take part in a diff
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffOptions {
    /// Substrings; an option whose name contains any of them is skipped
    pub ignore: Vec<String>,
}

impl DiffOptions {
    pub fn with_ignore(mut self, pattern: impl Into<String>) -> Self {
        self.ignore.push(pattern.into());
        self
    }

    /// True if `name` matches an ignore pattern.
    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignore
            .iter()
            .any(|pattern| !pattern.is_empty() && name.contains(pattern.as_str()))
    }
}

/// Compute the diff between two snapshots with default options.
///
/// # Example
/// ```
/// use ekernel_core::diff::compute_diff;
/// use ekernel_core::kconfig::{parse_config_str, ParseMode};
///
/// let old = parse_config_str("CONFIG_FOO=y\n", ParseMode::Lenient).unwrap();
/// let new = parse_config_str("CONFIG_FOO=y\nCONFIG_BAR=y\n", ParseMode::Lenient).unwrap();
/// let diff = compute_diff(&old, &new);
/// assert_eq!(diff.added_names(), vec!["CONFIG_BAR"]);
/// assert_eq!(diff.unchanged_count, 1);
/// ```
pub fn compute_diff(old: &ConfigSnapshot, new: &ConfigSnapshot) -> ConfigDiff {
    compute_diff_with(old, new, &DiffOptions::default())
}

/// Compute the diff between two snapshots.
///
/// `added = new − old`, `removed = old − new`; names in both are either
/// `changed` or counted as unchanged. Both snapshots iterate in name order,
/// so every output list is sorted without an extra pass.
pub fn compute_diff_with(
    old: &ConfigSnapshot,
    new: &ConfigSnapshot,
    options: &DiffOptions,
) -> ConfigDiff {
    let mut added = Vec::new();
    let mut removed = Vec::new();
    let mut changed = BTreeMap::new();
    let mut unchanged_count = 0;
    let mut ignored_count = 0;

    for (name, old_value) in old.iter() {
        if options.is_ignored(name) {
            ignored_count += 1;
            continue;
        }
        match new.get(name) {
            None => removed.push(DiffEntry {
                name: name.to_string(),
                value: old_value.clone(),
            }),
            Some(new_value) if new_value != old_value => {
                changed.insert(
                    name.to_string(),
                    ValueChange {
                        old: old_value.clone(),
                        new: new_value.clone(),
                    },
                );
            }
            Some(_) => unchanged_count += 1,
        }
    }

    for (name, new_value) in new.iter() {
        if old.contains(name) {
            continue;
        }
        if options.is_ignored(name) {
            ignored_count += 1;
            continue;
        }
        added.push(DiffEntry {
            name: name.to_string(),
            value: new_value.clone(),
        });
    }

    ConfigDiff {
        added,
        removed,
        changed,
        unchanged_count,
        ignored_count,
    }
}

/// Read, parse and diff two config files.
///
/// # Errors
/// * `Read` - either file is missing or unreadable (the old file is read first)
/// * `Parse` - strict mode rejected a line
pub fn diff_config_files(
    source: &dyn ConfigSource,
    old_path: &Path,
    new_path: &Path,
    mode: ParseMode,
    options: &DiffOptions,
) -> Result<ConfigDiff> {
    log_op_start!(
        "diff_config_files",
        old = %old_path.display(),
        new = %new_path.display()
    );
    let start = std::time::Instant::now();

    let result = diff_config_files_impl(source, old_path, new_path, mode, options).map_err(|e| {
        log_op_error!(
            "diff_config_files",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "diff_config_files",
        duration_ms = start.elapsed().as_millis() as u64,
        added_len = result.added.len(),
        removed_len = result.removed.len(),
        changed_len = result.changed.len(),
        unchanged_count = result.unchanged_count
    );

    Ok(result)
}

fn diff_config_files_impl(
    source: &dyn ConfigSource,
    old_path: &Path,
    new_path: &Path,
    mode: ParseMode,
    options: &DiffOptions,
) -> Result<ConfigDiff> {
    let old = read_config_file(source, old_path, mode)?;
    let new = read_config_file(source, new_path, mode)?;
    Ok(compute_diff_with(&old, &new, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kconfig::{ConfigOption, ConfigValue};

    fn snapshot(entries: &[(&str, ConfigValue)]) -> ConfigSnapshot {
        entries
            .iter()
            .map(|(name, value)| ConfigOption::new(*name, value.clone()))
            .collect()
    }

    #[test]
    fn test_ignore_pattern_matching() {
        let options = DiffOptions::default().with_ignore("CC_VERSION");
        assert!(options.is_ignored("CONFIG_CC_VERSION_TEXT"));
        assert!(options.is_ignored("CONFIG_GCC_VERSION"));
        assert!(!options.is_ignored("CONFIG_CC_IS_GCC"));
    }

    #[test]
    fn test_empty_pattern_ignores_nothing() {
        let options = DiffOptions::default().with_ignore("");
        assert!(!options.is_ignored("CONFIG_A"));
    }

    #[test]
    fn test_ignored_options_are_excluded_everywhere() {
        let old = snapshot(&[
            ("CONFIG_GCC_VERSION", ConfigValue::Int(120200)),
            ("CONFIG_A", ConfigValue::Enabled),
        ]);
        let new = snapshot(&[
            ("CONFIG_GCC_VERSION", ConfigValue::Int(130200)),
            ("CONFIG_CC_VERSION_TEXT", ConfigValue::Str("gcc 13".into())),
            ("CONFIG_A", ConfigValue::Enabled),
        ]);
        let options = DiffOptions::default().with_ignore("CC_VERSION");
        let diff = compute_diff_with(&old, &new, &options);
        assert!(diff.has_no_changes());
        assert_eq!(diff.unchanged_count, 1);
        assert_eq!(diff.ignored_count, 2);
    }

    #[test]
    fn test_output_lists_sorted() {
        let old = snapshot(&[
            ("CONFIG_Z", ConfigValue::Enabled),
            ("CONFIG_M", ConfigValue::Enabled),
            ("CONFIG_B", ConfigValue::Enabled),
        ]);
        let new = snapshot(&[
            ("CONFIG_Y", ConfigValue::Enabled),
            ("CONFIG_C", ConfigValue::Enabled),
            ("CONFIG_M", ConfigValue::NotSet),
        ]);
        let diff = compute_diff(&old, &new);
        assert_eq!(diff.added_names(), vec!["CONFIG_C", "CONFIG_Y"]);
        assert_eq!(diff.removed_names(), vec!["CONFIG_B", "CONFIG_Z"]);
        assert_eq!(diff.changed_names(), vec!["CONFIG_M"]);
    }
}
