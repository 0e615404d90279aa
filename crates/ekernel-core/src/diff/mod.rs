//! Config snapshot diff engine.
//!
//! Compares an old and a new [`ConfigSnapshot`](crate::kconfig::ConfigSnapshot)
//! and produces a [`ConfigDiff`] classifying every option as added, removed,
//! changed or unchanged.
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce identical diffs; all lists are
//!   sorted by option name.
//! - **Disjointness**: a name is in at most one of `added`, `removed`, `changed`.
//! - **Purity**: [`compute_diff`] performs no I/O.

pub mod engine;
pub mod model;

pub use engine::{compute_diff, compute_diff_with, diff_config_files, DiffOptions};
pub use model::{ConfigDiff, DiffEntry, ValueChange};
