//! Kernel configuration files.
//!
//! Parsing of `.config` files into snapshots, new-option listings and the
//! kernel version strings found in headers and source directory names.

pub mod model;
pub mod new_options;
pub mod parser;
pub mod source;
pub mod version;

pub use model::{ConfigOption, ConfigSnapshot, ConfigValue};
pub use new_options::{parse_new_options, render_new_options, NewOption, NewOptions};
pub use parser::{parse_config_str, read_config_file, ParseMode};
pub use source::{ConfigSource, FsConfigSource, MemoryConfigSource};
pub use version::KernelVersion;
