//! ekernel CLI
//!
//! Command-line interface for kernel config diffs and commit messages

use clap::{Parser, Subcommand};
use ekernel_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "ekernel")]
#[command(about = "ekernel - Kernel config diffs and commit messages", long_about = None)]
struct Cli {
    /// Emit debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Render the change report between two configs
    Diff(commands::diff::DiffArgs),
    /// Render a complete commit message for a config change
    Message(commands::message::MessageArgs),
    /// List options reported by `make listnewconfig`
    NewOptions(commands::new_options::NewOptionsArgs),
}

fn main() {
    let cli = Cli::parse();

    logging_facility::init(if cli.verbose {
        Profile::Development
    } else {
        Profile::Production
    });

    let result = match cli.command {
        Commands::Diff(args) => commands::diff::execute(args),
        Commands::Message(args) => commands::message::execute(args),
        Commands::NewOptions(args) => commands::new_options::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
