//! ekernel core - kernel config diffing and commit message generation
//!
//! This crate provides:
//! - Parsing of kernel `.config` files into typed snapshots
//! - A deterministic diff engine classifying options as added, removed,
//!   changed or unchanged
//! - Report and commit message rendering
//! - Kernel version handling and `make listnewconfig` listings
//! - Settings, the structured error facility and the logging facility

pub mod diff;
pub mod errors;
pub mod kconfig;
pub mod logging_facility;
pub mod render;
pub mod settings;

pub use ekernel_core_types::schema;

// Re-export commonly used types
pub use diff::{compute_diff, compute_diff_with, diff_config_files, ConfigDiff, DiffOptions};
pub use errors::{ExError, ExErrorKind, KconfigError, Result};
pub use kconfig::{
    parse_config_str, read_config_file, ConfigSnapshot, ConfigValue, KernelVersion, ParseMode,
};
pub use render::{render_report, CommitMessage, VersionChange};
pub use settings::Settings;
