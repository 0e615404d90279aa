//! New options command
//!
//! Usage: ekernel new-options <FILE>

use clap::Args;
use ekernel_core::kconfig::{parse_new_options, render_new_options, ConfigSource, FsConfigSource};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct NewOptionsArgs {
    /// `make listnewconfig` output, usually `<src>/.newoptions`
    pub path: PathBuf,
}

/// Execute new-options command
pub fn execute(args: NewOptionsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let text = FsConfigSource.read_to_string(&args.path)?;
    print!("{}", render_new_options(&parse_new_options(&text)));
    Ok(())
}
