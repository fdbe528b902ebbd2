//! Size measurement and formatting utilities.
//!
//! This module measures how many bytes a file or directory occupies and
//! renders byte counts as short human-readable strings ("1.50 MB").

use std::{fs, path::Path};

use walkdir::WalkDir;

/// Units used by [`format_size`], smallest first. Each step is a factor of 1024.
const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Calculate the total size of a directory and all its contents, in bytes.
///
/// Recursively traverses the directory tree using `walkdir` and sums the sizes
/// of all regular files found. Errors for individual entries (permission denied,
/// broken symlinks, etc.) are silently skipped so the function always returns a
/// result. Links to files count with the size of their target; links to
/// directories are not descended into.
///
/// Returns `0` if the path does not exist or cannot be traversed at the root level.
#[must_use]
pub fn calculate_dir_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .into_iter()
        .filter_map(Result::ok)
        .filter_map(|entry| {
            if entry.file_type().is_file() {
                entry.metadata().ok()
            } else if entry.path_is_symlink() {
                fs::metadata(entry.path()).ok().filter(fs::Metadata::is_file)
            } else {
                None
            }
        })
        .map(|metadata| metadata.len())
        .sum()
}

/// Size of `path` in bytes.
///
/// Regular files report their length, directories the recursive sum of every
/// regular file below them. Missing paths and anything that is neither a file
/// nor a directory count as `0`; existence checks are left to the caller.
#[must_use]
pub fn get_size(path: &Path) -> u64 {
    let Ok(metadata) = path.metadata() else {
        return 0;
    };

    if metadata.is_file() {
        metadata.len()
    } else if metadata.is_dir() {
        calculate_dir_size(path)
    } else {
        0
    }
}

/// Format a byte count with two decimals and the largest fitting unit.
///
/// The value is divided by 1024 until it drops below 1024 or the last unit
/// (`TB`) is reached.
///
/// # Examples
///
/// ```
/// # use dir_tree::utils::format_size;
/// assert_eq!(format_size(0), "0.00 B");
/// assert_eq!(format_size(1536), "1.50 KB");
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64) -> String {
    let mut size = bytes as f64;

    for unit in &UNITS[..UNITS.len() - 1] {
        if size < 1024.0 {
            return format!("{size:.2} {unit}");
        }
        size /= 1024.0;
    }

    format!("{size:.2} {}", UNITS[UNITS.len() - 1])
}
