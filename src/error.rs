//! Error types returned by the library.
//!
//! Every fallible operation in `dir-tree` returns a [`DirTreeError`]. Only the
//! binary's entry point turns these into a message on stderr and a non-zero
//! exit code, so all error paths stay testable.

use std::path::PathBuf;

use snafu::Snafu;

/// Convenience alias for results carrying a [`DirTreeError`].
pub type Result<T, E = DirTreeError> = std::result::Result<T, E>;

/// Everything that can stop a report from being produced.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum DirTreeError {
    /// The target directory could not be listed.
    #[snafu(display("Path not found: {}", path.display()))]
    PathNotFound {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The positional argument was the only candidate and it does not exist.
    #[snafu(display("Argument path does not exist: {}", path.display()))]
    ArgumentPathMissing { path: PathBuf },

    #[snafu(display("No valid input path found (clipboard or argument)."))]
    NoInputPath,

    #[snafu(display("Failed to create output directory {}: {source}", path.display()))]
    CreateOutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Failed to write report to {}: {source}", path.display()))]
    WriteReport {
        path: PathBuf,
        source: std::io::Error,
    },
}
