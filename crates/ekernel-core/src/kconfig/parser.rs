//! Kernel `.config` parser
//!
//! Turns raw config text into a [`ConfigSnapshot`]. Recognized lines:
//!
//! - `NAME=VALUE` assigns a typed value
//! - `# NAME is not set` records an explicit unset state
//!
//! Blank lines and other comments are discarded. Anything else is skipped in
//! [`ParseMode::Lenient`] and rejected in [`ParseMode::Strict`].

use crate::errors::{KconfigError, Result};
use crate::kconfig::model::{ConfigOption, ConfigSnapshot, ConfigValue};
use crate::kconfig::source::ConfigSource;
use crate::{log_op_end, log_op_error, log_op_start};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How unrecognized lines are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseMode {
    /// Skip unrecognized lines silently
    #[default]
    Lenient,
    /// Fail on the first unrecognized non-comment line
    Strict,
}

/// Classification of one input line.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Assignment { name: &'a str, raw: &'a str },
    NotSet { name: &'a str },
    Comment,
    Blank,
    Unrecognized,
}

/// Option names are non-empty runs of ASCII alphanumerics and `_`.
pub fn is_option_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

fn classify(line: &str) -> Line<'_> {
    let line = line.trim();
    if line.is_empty() {
        return Line::Blank;
    }
    if let Some(comment) = line.strip_prefix('#') {
        let name = comment
            .trim_start()
            .strip_suffix(" is not set")
            .filter(|name| is_option_name(name));
        return match name {
            Some(name) => Line::NotSet { name },
            None => Line::Comment,
        };
    }
    match line.split_once('=') {
        Some((name, raw)) if is_option_name(name) => Line::Assignment { name, raw },
        _ => Line::Unrecognized,
    }
}

/// Parse config text into a snapshot.
///
/// Duplicate names resolve to the last occurrence.
///
/// # Errors
/// * `Parse` - only in [`ParseMode::Strict`], for the first unrecognized line
///
/// # Example
/// ```
/// use ekernel_core::kconfig::parser::{parse_config_str, ParseMode};
/// use ekernel_core::kconfig::ConfigValue;
///
/// let snapshot = parse_config_str("CONFIG_A=y\n# CONFIG_B is not set\n", ParseMode::Lenient).unwrap();
/// assert_eq!(snapshot.get("CONFIG_A"), Some(&ConfigValue::Enabled));
/// assert_eq!(snapshot.get("CONFIG_B"), Some(&ConfigValue::NotSet));
/// ```
pub fn parse_config_str(text: &str, mode: ParseMode) -> Result<ConfigSnapshot> {
    let mut snapshot = ConfigSnapshot::new();

    for (index, line) in text.lines().enumerate() {
        let option = match classify(line) {
            Line::Assignment { name, raw } => ConfigOption::new(name, ConfigValue::parse(raw)),
            Line::NotSet { name } => ConfigOption::new(name, ConfigValue::NotSet),
            Line::Comment | Line::Blank => continue,
            Line::Unrecognized => {
                if mode == ParseMode::Strict {
                    return Err(KconfigError::Parse {
                        line: index + 1,
                        content: line.to_string(),
                    });
                }
                tracing::trace!(line = index + 1, "skipping unrecognized config line");
                continue;
            }
        };

        let name = option.name.clone();
        if let Some(previous) = snapshot.insert(option) {
            tracing::debug!(
                option = %name,
                line = index + 1,
                previous = %previous,
                "duplicate option definition overrides earlier value"
            );
        }
    }

    Ok(snapshot)
}

/// Read and parse the config file at `path` through `source`.
///
/// # Errors
/// * `Read` - the file is missing or unreadable
/// * `Parse` - strict mode rejected a line
pub fn read_config_file(
    source: &dyn ConfigSource,
    path: &Path,
    mode: ParseMode,
) -> Result<ConfigSnapshot> {
    log_op_start!("read_config_file", path = %path.display());
    let start = std::time::Instant::now();

    let result = source
        .read_to_string(path)
        .and_then(|text| parse_config_str(&text, mode))
        .map_err(|e| {
            log_op_error!(
                "read_config_file",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                path = %path.display()
            );
            e
        })?;

    log_op_end!(
        "read_config_file",
        duration_ms = start.elapsed().as_millis() as u64,
        option_count = result.len()
    );

    Ok(result)
}
