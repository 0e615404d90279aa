//! Change report renderer.
//!
//! Turns a [`ConfigDiff`] into commit-message-ready text: a version summary
//! line, one section per non-empty category and a closing unchanged count.

use crate::diff::model::ConfigDiff;
use crate::kconfig::KernelVersion;
use serde::{Deserialize, Serialize};

/// Line emitted when no option was added, removed or changed.
pub const NO_CHANGES_LINE: &str = "no configuration changes";

/// The versions on both sides of a config diff
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionChange {
    pub old: String,
    pub new: String,
}

impl VersionChange {
    pub fn new(old: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            old: old.into(),
            new: new.into(),
        }
    }

    /// `upgrade` when moving to another `major.minor` series, else `update`.
    ///
    /// Versions that do not parse are treated as an update.
    pub fn verb(&self) -> &'static str {
        match (
            KernelVersion::parse(&self.old),
            KernelVersion::parse(&self.new),
        ) {
            (Ok(old), Ok(new)) if new.is_upgrade_from(&old) => "upgrade",
            _ => "update",
        }
    }

    /// True when both sides carry the same version label.
    pub fn is_same_kernel(&self) -> bool {
        self.old == self.new
    }

    /// One-line summary, e.g. `kernel update: 6.1.12-gentoo -> 6.1.19-gentoo`
    pub fn summary_line(&self) -> String {
        format!("kernel {}: {} -> {}", self.verb(), self.old, self.new)
    }
}

/// Render the full report for `diff`.
///
/// # Example
/// ```
/// use ekernel_core::diff::ConfigDiff;
/// use ekernel_core::render::{render_report, VersionChange};
///
/// let text = render_report(&ConfigDiff::default(), &VersionChange::new("6.1.1", "6.1.2"));
/// assert_eq!(
///     text,
///     "kernel update: 6.1.1 -> 6.1.2\n\nno configuration changes\n\nunchanged: 0 option(s)\n"
/// );
/// ```
pub fn render_report(diff: &ConfigDiff, version_change: &VersionChange) -> String {
    let mut out = version_change.summary_line();
    out.push('\n');
    push_changes(&mut out, diff);
    out
}

/// Append the category sections and the unchanged count.
///
/// Every section is preceded by a blank line.
pub(crate) fn push_changes(out: &mut String, diff: &ConfigDiff) {
    if diff.has_no_changes() {
        out.push('\n');
        out.push_str(NO_CHANGES_LINE);
        out.push('\n');
    }

    if !diff.added.is_empty() {
        out.push_str("\nadded:\n");
        for entry in &diff.added {
            out.push_str(&format!("* {} = {}\n", entry.name, entry.value));
        }
    }

    if !diff.removed.is_empty() {
        out.push_str("\nremoved:\n");
        for entry in &diff.removed {
            out.push_str(&format!("* {}\n", entry.name));
        }
    }

    if !diff.changed.is_empty() {
        out.push_str("\nchanged:\n");
        for (name, change) in &diff.changed {
            out.push_str(&format!("* {} = {} -> {}\n", name, change.old, change.new));
        }
    }

    out.push_str(&format!("\nunchanged: {} option(s)\n", diff.unchanged_count));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_release_is_update() {
        let change = VersionChange::new("6.1.12-gentoo", "6.1.19-gentoo");
        assert_eq!(
            change.summary_line(),
            "kernel update: 6.1.12-gentoo -> 6.1.19-gentoo"
        );
    }

    #[test]
    fn test_new_series_is_upgrade() {
        let change = VersionChange::new("6.1.19-gentoo", "6.6.1-gentoo");
        assert_eq!(change.verb(), "upgrade");
    }

    #[test]
    fn test_unparseable_versions_fall_back_to_update() {
        let change = VersionChange::new("old", "new");
        assert_eq!(change.summary_line(), "kernel update: old -> new");
    }
}
