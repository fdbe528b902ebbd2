//! # dir-tree
//!
//! List the files and folders directly under a directory together with their
//! sizes, and write the listing as a small Markdown report.
//!
//! The target directory is taken from the clipboard when it holds an existing
//! path, otherwise from the first command-line argument. The report for
//! `/data/photos/2024` is written to `./PHOTOS/2024.md`.
//!
//! ## Modules
//!
//! - [`utils`]: size measurement and formatting
//! - [`lister`]: per-entry size listing of one directory
//! - [`input`]: target path resolution (clipboard, then argument)
//! - [`report`]: output location and report file writing
//! - [`config`]: config file and effective run options
//! - [`error`]: the [`DirTreeError`] type

pub mod config;
pub mod error;
pub mod input;
pub mod lister;
pub mod report;
pub mod utils;

pub use config::{FileConfig, RunOptions};
pub use error::DirTreeError;
pub use input::{ClipboardSource, InputOrigin, InputSource, StaticSource};
pub use lister::{SizeEntry, SizeReport};
pub use report::{OutputLocation, ReportSummary};
