//! Text rendering for config diffs and commit messages.

pub mod commit_message;
pub mod report;

pub use commit_message::{CommitMessage, CONFIG_EDIT_LINE};
pub use report::{render_report, VersionChange, NO_CHANGES_LINE};
