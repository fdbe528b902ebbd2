//! Configuration for a report run.
//!
//! [`file`] loads the optional TOML config file; [`RunOptions`] is the
//! effective configuration after CLI arguments have been layered on top.

pub mod file;

use std::path::PathBuf;

pub use file::FileConfig;

/// Effective options for a single run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Read the clipboard before falling back to the positional argument
    pub use_clipboard: bool,

    /// Directory under which the report folder is created
    pub output_root: PathBuf,

    /// Show a progress bar while sizing entries
    pub verbose: bool,

    /// Emit a JSON summary instead of human-readable messages
    pub json: bool,
}
