use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias using KconfigError
pub type Result<T> = std::result::Result<T, KconfigError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing and log correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input
    /// A config file (or settings file) is missing or unreadable
    Read,
    /// A line was rejected by strict parsing
    Parse,
    /// A version string does not contain `X.Y.Z`
    InvalidVersion,

    // Settings
    /// The settings file is not valid TOML or has unexpected fields
    Config,

    // Output
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::Read => "ERR_READ",
            ExErrorKind::Parse => "ERR_PARSE",
            ExErrorKind::InvalidVersion => "ERR_INVALID_VERSION",
            ExErrorKind::Config => "ERR_CONFIG",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling plus optional
/// context (operation, file path, line number) for diagnostics.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<PathBuf>,
    line: Option<usize>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            line: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add file path context
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add 1-based line number context
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the file path context, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Get the line number context, if any
    pub fn line(&self) -> Option<usize> {
        self.line
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }
        if let Some(line) = self.line {
            write!(f, " (line: {})", line)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for config parsing, diffing and rendering
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KconfigError {
    /// Config file missing or unreadable
    #[error("Failed to read {}: {message}", path.display())]
    Read { path: PathBuf, message: String },

    /// Unrecognized line rejected in strict mode
    #[error("Unrecognized config line {line}: {content}")]
    Parse { line: usize, content: String },

    /// Settings file malformed
    #[error("Invalid settings: {message}")]
    Config { message: String },

    /// No `X.Y.Z` version found
    #[error("Invalid kernel version: {input}")]
    InvalidVersion { input: String },

    /// JSON output could not be produced
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<KconfigError> for ExError {
    fn from(err: KconfigError) -> Self {
        match err {
            KconfigError::Read { path, message } => ExError::new(ExErrorKind::Read)
                .with_path(path)
                .with_message(format!("Failed to read config: {}", message)),

            KconfigError::Parse { line, content } => ExError::new(ExErrorKind::Parse)
                .with_line(line)
                .with_message(format!("Unrecognized config line: {}", content)),

            KconfigError::Config { message } => ExError::new(ExErrorKind::Config)
                .with_message(format!("Invalid settings: {}", message)),

            KconfigError::InvalidVersion { input } => ExError::new(ExErrorKind::InvalidVersion)
                .with_message(format!("Invalid kernel version: {}", input)),

            KconfigError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for KconfigError {
    fn from(err: serde_json::Error) -> Self {
        KconfigError::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes_are_unique() {
        let kinds = [
            ExErrorKind::Read,
            ExErrorKind::Parse,
            ExErrorKind::InvalidVersion,
            ExErrorKind::Config,
            ExErrorKind::Serialization,
        ];
        let mut codes: Vec<&str> = kinds.iter().map(|k| k.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), kinds.len());
    }

    #[test]
    fn test_display_includes_context() {
        let err = ExError::new(ExErrorKind::Read)
            .with_op("read_config_file")
            .with_path("/usr/src/linux/.config")
            .with_message("No such file or directory");
        let text = err.to_string();
        assert!(text.starts_with("[ERR_READ]"));
        assert!(text.contains("read_config_file"));
        assert!(text.contains("/usr/src/linux/.config"));
    }

    #[test]
    fn test_display_includes_line() {
        let err: ExError = KconfigError::Parse {
            line: 7,
            content: "garbage".to_string(),
        }
        .into();
        let err = err.with_op("parse_config_str");
        assert_eq!(err.op(), Some("parse_config_str"));
        assert_eq!(
            err.to_string(),
            "[ERR_PARSE] in operation 'parse_config_str': Unrecognized config line: garbage (line: 7)"
        );
    }
}
