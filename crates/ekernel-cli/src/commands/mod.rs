//! Subcommands and the argument groups they share

pub mod diff;
pub mod message;
pub mod new_options;

use clap::Args;
use ekernel_core::kconfig::{ConfigSource, KernelVersion};
use ekernel_core::settings::{Settings, DEFAULT_SETTINGS_FILE};
use std::path::{Path, PathBuf};

/// Placeholder used when no version can be determined for a config.
const UNKNOWN_VERSION: &str = "unknown";

/// Parsing and filtering flags, layered over the settings file
#[derive(Debug, Args)]
pub struct SettingsArgs {
    /// Settings file (default: ./ekernel.toml when present)
    #[arg(long = "config", value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Fail on unrecognized config lines instead of skipping them
    #[arg(long)]
    pub strict: bool,

    /// Additional option name fragment to exclude from the diff
    #[arg(long, value_name = "PATTERN")]
    pub ignore: Vec<String>,

    /// Do not exclude any options, including the default compiler version noise
    #[arg(long)]
    pub no_ignore: bool,
}

impl SettingsArgs {
    /// Load the settings file and apply command-line overrides.
    pub fn resolve(&self) -> Result<Settings, Box<dyn std::error::Error>> {
        let path = self
            .settings
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE));
        if self.settings.is_some() && !path.exists() {
            return Err(format!("settings file not found: {}", path.display()).into());
        }

        let mut settings = Settings::load(&path)?;
        if self.strict {
            settings.strict = true;
        }
        if self.no_ignore {
            settings.ignore.clear();
        }
        settings.ignore.extend(self.ignore.iter().cloned());
        Ok(settings)
    }
}

/// Explicit version labels for the report header
#[derive(Debug, Args)]
pub struct VersionArgs {
    /// Version of the old config (default: read from its header)
    #[arg(long, value_name = "VERSION")]
    pub old_version: Option<String>,

    /// Version of the new config (default: read from its header)
    #[arg(long, value_name = "VERSION")]
    pub new_version: Option<String>,
}

/// Best-effort version for the config at `path`.
///
/// Tries the `.config` header first, then the enclosing source directory
/// name (`linux-6.1.12-gentoo`).
pub fn detect_version(source: &dyn ConfigSource, path: &Path) -> Option<KernelVersion> {
    let from_header = source
        .read_to_string(path)
        .ok()
        .and_then(|text| KernelVersion::from_config_header(&text));

    from_header.or_else(|| {
        path.parent()
            .and_then(Path::file_name)
            .and_then(|name| name.to_str())
            .and_then(|name| KernelVersion::parse(name).ok())
    })
}

/// Use the explicit label if given, else detect, else `unknown`.
pub fn version_label(
    explicit: Option<&str>,
    source: &dyn ConfigSource,
    path: &Path,
) -> String {
    explicit
        .map(str::to_string)
        .or_else(|| detect_version(source, path).map(|v| v.to_string()))
        .unwrap_or_else(|| UNKNOWN_VERSION.to_string())
}

/// Write `text` to `output` or stdout.
pub fn emit(text: &str, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => {
            std::fs::write(path, text)?;
            eprintln!("✓ Written to {}", path.display());
        }
        None => print!("{}", text),
    }
    Ok(())
}
