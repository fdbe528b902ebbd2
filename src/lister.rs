//! Listing of a directory's immediate entries together with their sizes.
//!
//! [`build_report`] measures every entry directly under a directory and
//! [`SizeReport::to_lines`] renders the result as the Markdown-flavoured
//! listing that ends up in the report file:
//!
//! ```text
//! # project
//! - Cargo.toml
//!     - 1.20 KB
//! - src
//!     - 48.00 KB
//! ```

use std::{
    ffi::OsString,
    fs,
    path::{Component, Path, PathBuf},
};

use indicatif::ProgressBar;
use snafu::ResultExt;

use crate::{
    error::{PathNotFoundSnafu, Result},
    utils::{format_size, get_size},
};

/// One immediate child of the listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeEntry {
    /// File or directory name, without any leading path.
    pub name: String,

    /// Size in bytes (recursive for directories).
    pub size: u64,

    /// `size` rendered by [`format_size`].
    pub formatted_size: String,
}

/// Sizes of every entry directly under a directory, sorted by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeReport {
    /// Basename of the listed directory, used as the report heading.
    pub name: String,

    /// Entries in ascending name order.
    pub entries: Vec<SizeEntry>,
}

impl SizeReport {
    /// Sum of all entry sizes in bytes.
    #[must_use]
    pub fn total_size(&self) -> u64 {
        self.entries.iter().map(|e| e.size).sum()
    }

    /// Render the report as text lines, without trailing newlines.
    ///
    /// The first line is `# <name>`; each entry contributes `- <entry>` followed
    /// by an indented `    - <size>` line.
    #[must_use]
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(1 + self.entries.len() * 2);
        lines.push(format!("# {}", self.name));

        for entry in &self.entries {
            lines.push(format!("- {}", entry.name));
            lines.push(format!("    - {}", entry.formatted_size));
        }

        lines
    }
}

/// Produce the rendered listing for `path`.
///
/// # Errors
///
/// Returns [`DirTreeError::PathNotFound`](crate::DirTreeError::PathNotFound)
/// if the directory cannot be read.
pub fn list_directory(path: &Path) -> Result<Vec<String>> {
    Ok(build_report(path)?.to_lines())
}

/// Measure every entry directly under `path`.
///
/// # Errors
///
/// Returns [`DirTreeError::PathNotFound`](crate::DirTreeError::PathNotFound)
/// if the directory cannot be read.
pub fn build_report(path: &Path) -> Result<SizeReport> {
    build_report_with_progress(path, &ProgressBar::hidden())
}

/// Like [`build_report`], advancing `progress` once per measured entry.
///
/// The bar's length is set to the number of entries before sizing starts.
///
/// # Errors
///
/// Returns [`DirTreeError::PathNotFound`](crate::DirTreeError::PathNotFound)
/// if the directory cannot be read.
pub fn build_report_with_progress(path: &Path, progress: &ProgressBar) -> Result<SizeReport> {
    let mut names: Vec<OsString> = fs::read_dir(path)
        .context(PathNotFoundSnafu { path })?
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.file_name())
        .collect();
    names.sort();

    progress.set_length(names.len() as u64);

    let entries = names
        .into_iter()
        .map(|file_name| {
            let name = file_name.to_string_lossy().into_owned();
            progress.set_message(name.clone());
            let size = get_size(&path.join(&file_name));
            progress.inc(1);

            SizeEntry {
                formatted_size: format_size(size),
                name,
                size,
            }
        })
        .collect();

    Ok(SizeReport {
        name: base_name(path),
        entries,
    })
}

/// Basename of `path` after lexical normalisation.
///
/// Trailing separators, `.` components and `name/..` pairs are resolved first,
/// so `foo/bar/`, `foo/bar/.` and `foo/bar/baz/..` all yield `bar`. The current
/// directory `.` yields `"."`, and a bare root such as `/` yields an empty name.
#[must_use]
pub fn base_name(path: &Path) -> String {
    component_name(normalize(path).components().next_back())
}

/// Name of the directory containing `path`, after lexical normalisation.
///
/// Empty when the normalised path has a single component or sits directly
/// under the root.
#[must_use]
pub fn parent_name(path: &Path) -> String {
    let normalized = normalize(path);
    let mut components = normalized.components();
    components.next_back();
    component_name(components.next_back())
}

fn component_name(component: Option<Component<'_>>) -> String {
    match component {
        Some(Component::Normal(name)) => name.to_string_lossy().into_owned(),
        Some(Component::CurDir) => ".".to_string(),
        Some(Component::ParentDir) => "..".to_string(),
        Some(Component::RootDir | Component::Prefix(_)) | None => String::new(),
    }
}

/// Resolve `.` and `..` lexically, without touching the filesystem.
///
/// A `..` cancels the preceding name, is dropped directly under the root, and
/// is kept when it leads a relative path. An empty result becomes `.`.
pub(crate) fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            _ => parts.push(component),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}
