//! Commit message composer.
//!
//! Builds the complete message body used when committing a kernel config:
//! summary line, optional operator note, the options `make listnewconfig`
//! reported and the change report.
//!
//! The summary line depends on what happened to the config:
//!
//! - first commit: `kernel 6.1.12-gentoo`
//! - new kernel: `kernel update: 6.1.12-gentoo -> 6.1.19-gentoo`
//! - same kernel, edited config: `updated kernel config`

use crate::diff::model::ConfigDiff;
use crate::kconfig::NewOptions;
use crate::render::report::{push_changes, VersionChange};

#[derive(Debug, Clone, PartialEq)]
enum Subject {
    /// No previous config is known
    Initial { version: String },
    /// A previous config was diffed against the new one
    Update {
        version_change: VersionChange,
        diff: ConfigDiff,
    },
    /// The config was edited without moving to another kernel
    Edit { diff: ConfigDiff },
}

/// Summary line for [`CommitMessage::config_edit`].
pub const CONFIG_EDIT_LINE: &str = "updated kernel config";

/// A renderable commit message
///
/// # Example
/// ```
/// use ekernel_core::diff::ConfigDiff;
/// use ekernel_core::render::{CommitMessage, VersionChange};
///
/// let message = CommitMessage::update(VersionChange::new("6.1.1", "6.1.2"), ConfigDiff::default())
///     .with_note("routine bump");
/// assert!(message.render().starts_with("kernel update: 6.1.1 -> 6.1.2\n\nroutine bump\n"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CommitMessage {
    subject: Subject,
    note: Option<String>,
    new_options: Option<NewOptions>,
}

impl CommitMessage {
    /// Message for a config that has no predecessor, e.g. a first install.
    pub fn initial(version: impl Into<String>) -> Self {
        Self {
            subject: Subject::Initial {
                version: version.into(),
            },
            note: None,
            new_options: None,
        }
    }

    /// Message for a config diffed against its predecessor.
    pub fn update(version_change: VersionChange, diff: ConfigDiff) -> Self {
        Self {
            subject: Subject::Update {
                version_change,
                diff,
            },
            note: None,
            new_options: None,
        }
    }

    /// Message for a config edited in place, within the same kernel.
    pub fn config_edit(diff: ConfigDiff) -> Self {
        Self {
            subject: Subject::Edit { diff },
            note: None,
            new_options: None,
        }
    }

    /// [`config_edit`](Self::config_edit) when both sides name the same
    /// kernel, otherwise [`update`](Self::update).
    pub fn for_change(version_change: VersionChange, diff: ConfigDiff) -> Self {
        if version_change.is_same_kernel() {
            Self::config_edit(diff)
        } else {
            Self::update(version_change, diff)
        }
    }

    /// True for messages that only describe a config edit.
    pub fn is_config_edit(&self) -> bool {
        matches!(self.subject, Subject::Edit { .. })
    }

    /// Attach a free-form note. Blank notes are dropped.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        let note = note.into();
        let trimmed = note.trim();
        self.note = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    /// Attach the `make listnewconfig` entries. Empty lists are dropped.
    pub fn with_new_options(mut self, new_options: NewOptions) -> Self {
        self.new_options = (!new_options.is_empty()).then_some(new_options);
        self
    }

    pub fn render(&self) -> String {
        let mut out = match &self.subject {
            Subject::Initial { version } => format!("kernel {}\n", version),
            Subject::Update { version_change, .. } => {
                format!("{}\n", version_change.summary_line())
            }
            Subject::Edit { .. } => format!("{}\n", CONFIG_EDIT_LINE),
        };

        if let Some(note) = &self.note {
            out.push('\n');
            out.push_str(note);
            out.push('\n');
        }

        if let Some(new_options) = &self.new_options {
            out.push_str("\nnew:\n");
            for opt in &new_options.entries {
                out.push_str(&format!("* {} = {}\n", opt.name, opt.value));
            }
        }

        match &self.subject {
            Subject::Update { diff, .. } | Subject::Edit { diff } => push_changes(&mut out, diff),
            Subject::Initial { .. } => {}
        }

        out
    }
}
