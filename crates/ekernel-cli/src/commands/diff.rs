//! Diff command
//!
//! Usage: ekernel diff <OLD> <NEW> [--json] [--output <FILE>]

use super::{emit, version_label, SettingsArgs, VersionArgs};
use clap::Args;
use ekernel_core::diff::{diff_config_files, ConfigDiff};
use ekernel_core::kconfig::FsConfigSource;
use ekernel_core::render::{render_report, VersionChange};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Previous kernel config
    pub old: PathBuf,

    /// New kernel config
    pub new: PathBuf,

    #[command(flatten)]
    pub versions: VersionArgs,

    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Print the structured diff as JSON instead of the text report
    #[arg(long)]
    pub json: bool,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Serialize)]
struct DiffOutput<'a> {
    version_change: &'a VersionChange,
    diff: &'a ConfigDiff,
}

/// Execute diff command
pub fn execute(args: DiffArgs) -> Result<(), Box<dyn std::error::Error>> {
    let settings = args.settings.resolve()?;
    let source = FsConfigSource;

    let diff = diff_config_files(
        &source,
        &args.old,
        &args.new,
        settings.parse_mode(),
        &settings.diff_options(),
    )?;

    let version_change = VersionChange::new(
        version_label(args.versions.old_version.as_deref(), &source, &args.old),
        version_label(args.versions.new_version.as_deref(), &source, &args.new),
    );

    let text = if args.json {
        let mut json = serde_json::to_string_pretty(&DiffOutput {
            version_change: &version_change,
            diff: &diff,
        })?;
        json.push('\n');
        json
    } else {
        render_report(&diff, &version_change)
    };

    emit(&text, args.output.as_deref())
}
