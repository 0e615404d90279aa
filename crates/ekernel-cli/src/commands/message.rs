//! Commit message command
//!
//! Usage: ekernel message [--old <OLD>] <NEW> [-m <NOTE>] [--new-options <FILE>]

use super::{emit, version_label, SettingsArgs, VersionArgs};
use clap::Args;
use ekernel_core::diff::diff_config_files;
use ekernel_core::kconfig::{parse_new_options, ConfigSource, FsConfigSource, NewOptions};
use ekernel_core::render::{CommitMessage, VersionChange};
use std::path::{Path, PathBuf};

/// File `make listnewconfig` output is stored in, next to the new config.
const NEW_OPTIONS_FILE: &str = ".newoptions";

#[derive(Debug, Args)]
pub struct MessageArgs {
    /// New kernel config
    pub new: PathBuf,

    /// Previous kernel config (e.g. `.config.old`); omit for a first commit
    #[arg(long)]
    pub old: Option<PathBuf>,

    /// Additional information for the commit message
    #[arg(short = 'm', long = "message", value_name = "NOTE")]
    pub note: Option<String>,

    /// `make listnewconfig` output (default: .newoptions beside NEW when present)
    #[arg(long, value_name = "FILE", requires = "old")]
    pub new_options: Option<PathBuf>,

    #[command(flatten)]
    pub versions: VersionArgs,

    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute message command
pub fn execute(args: MessageArgs) -> Result<(), Box<dyn std::error::Error>> {
    let settings = args.settings.resolve()?;
    let source = FsConfigSource;
    let new_version = version_label(args.versions.new_version.as_deref(), &source, &args.new);

    let mut message = match &args.old {
        Some(old) => {
            let diff = diff_config_files(
                &source,
                old,
                &args.new,
                settings.parse_mode(),
                &settings.diff_options(),
            )?;
            let old_version = version_label(args.versions.old_version.as_deref(), &source, old);
            let message =
                CommitMessage::for_change(VersionChange::new(old_version, new_version), diff);
            // A leftover .newoptions does not belong to an in-place edit
            if message.is_config_edit() && args.new_options.is_none() {
                message
            } else {
                match load_new_options(&source, &args)? {
                    Some(new_options) => message.with_new_options(new_options),
                    None => message,
                }
            }
        }
        None => {
            // Still surface a missing or unreadable new config
            source.read_to_string(&args.new)?;
            CommitMessage::initial(new_version)
        }
    };

    if let Some(note) = &args.note {
        message = message.with_note(note.as_str());
    }

    emit(&message.render(), args.output.as_deref())
}

/// Read an explicit new-options file, or the conventional one if it exists.
fn load_new_options(
    source: &dyn ConfigSource,
    args: &MessageArgs,
) -> Result<Option<NewOptions>, Box<dyn std::error::Error>> {
    let path = match &args.new_options {
        Some(path) => path.clone(),
        None => {
            let candidate = args
                .new
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .join(NEW_OPTIONS_FILE);
            if !candidate.exists() {
                tracing::debug!(path = %candidate.display(), "no new-options listing");
                return Ok(None);
            }
            candidate
        }
    };
    let text = source.read_to_string(&path)?;
    Ok(Some(parse_new_options(&text)))
}
