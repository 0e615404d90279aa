//! Kernel version strings
//!
//! Versions appear in source directory names (`linux-6.1.12-gentoo-r1`) and in
//! the header comment that `make` writes at the top of every `.config`:
//!
//! ```text
//! #
//! # Automatically generated file; DO NOT EDIT.
//! # Linux/x86 6.1.12-gentoo Kernel Configuration
//! #
//! ```

use crate::errors::{KconfigError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of leading lines searched for the configuration header.
const HEADER_SCAN_LINES: usize = 8;

/// A `major.minor.patch[-local]` kernel version
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct KernelVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    /// Suffix after the numeric part without the leading dash, e.g. `gentoo-r1`
    pub local: Option<String>,
}

impl KernelVersion {
    /// Find the first `X.Y.Z[-local]` in `text`.
    ///
    /// # Errors
    /// * `InvalidVersion` - no dotted triple is present
    ///
    /// # Example
    /// ```
    /// use ekernel_core::kconfig::KernelVersion;
    ///
    /// let v = KernelVersion::parse("linux-6.1.12-gentoo-r1").unwrap();
    /// assert_eq!((v.major, v.minor, v.patch), (6, 1, 12));
    /// assert_eq!(v.local.as_deref(), Some("gentoo-r1"));
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        text.split(|c: char| c.is_whitespace() || c == '/')
            .flat_map(|word| word.char_indices().map(move |(i, _)| &word[i..]))
            .find_map(parse_at)
            .ok_or_else(|| KconfigError::InvalidVersion {
                input: text.to_string(),
            })
    }

    /// Read the version from the `Linux/<arch> X.Y.Z Kernel Configuration` header.
    ///
    /// Returns `None` when the header is missing from the first lines.
    pub fn from_config_header(text: &str) -> Option<Self> {
        text.lines()
            .take(HEADER_SCAN_LINES)
            .filter_map(|line| line.strip_prefix('#'))
            .map(str::trim)
            .filter(|line| line.starts_with("Linux") && line.ends_with("Kernel Configuration"))
            .find_map(|line| Self::parse(line).ok())
    }

    /// The numeric part without local suffix, e.g. `6.1.12`
    pub fn base_version(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.patch)
    }

    /// True when `self` belongs to a different `major.minor` series than `previous`.
    pub fn is_upgrade_from(&self, previous: &KernelVersion) -> bool {
        (self.major, self.minor) != (previous.major, previous.minor)
    }
}

/// Parse a version starting exactly at the beginning of `s`.
fn parse_at(s: &str) -> Option<KernelVersion> {
    if !s.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    let (numeric, rest) = match s.find(|c: char| !(c.is_ascii_digit() || c == '.')) {
        Some(end) => s.split_at(end),
        None => (s, ""),
    };

    let mut parts = numeric.split('.');
    let major = parts.next()?.parse().ok()?;
    let minor = parts.next()?.parse().ok()?;
    let patch = parts.next()?.parse().ok()?;

    let local = rest
        .strip_prefix('-')
        .map(|suffix| {
            suffix
                .split(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
                .next()
                .unwrap_or_default()
                .trim_end_matches('-')
                .to_string()
        })
        .filter(|suffix| !suffix.is_empty());

    Some(KernelVersion {
        major,
        minor,
        patch,
        local,
    })
}

impl fmt::Display for KernelVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(local) = &self.local {
            write!(f, "-{}", local)?;
        }
        Ok(())
    }
}
