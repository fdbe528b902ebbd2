//! Writing the size listing to its report file.
//!
//! The report for a target such as `/data/photos/2024` is written to
//! `<output root>/PHOTOS/2024.md`: the folder is the upper-cased name of the
//! target's parent directory and the file is named after the target itself.

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use indicatif::ProgressBar;
use serde::Serialize;
use snafu::ResultExt;

use crate::{
    error::{CreateOutputDirSnafu, Result, WriteReportSnafu},
    lister::{SizeReport, base_name, build_report_with_progress, parent_name},
    utils::format_size,
};

/// Where a report for a given target is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLocation {
    /// Folder holding the report, created on demand.
    pub dir: PathBuf,

    /// Full path of the report file inside `dir`.
    pub file: PathBuf,
}

impl OutputLocation {
    /// Derive the output location for `target` beneath `output_root`.
    ///
    /// Only the textual form of `target` is used; nothing is read from disk.
    /// `.` and `..` components are resolved lexically first. A target without
    /// a parent name (e.g. `photos` or `.`) puts the report directly in
    /// `output_root`.
    #[must_use]
    pub fn derive(target: &Path, output_root: &Path) -> Self {
        let parent = parent_name(target).to_uppercase();

        let dir = if parent.is_empty() {
            output_root.to_path_buf()
        } else {
            output_root.join(parent)
        };
        let file = dir.join(format!("{}.md", base_name(target)));

        Self { dir, file }
    }
}

/// Outcome of a successful report run.
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    /// The directory that was listed.
    pub target: String,

    /// The report file that was written.
    pub output_path: String,

    /// Number of entries in the listing.
    pub entries: usize,

    /// Combined size of all entries in bytes.
    pub total_size: u64,

    /// `total_size` in the same format used inside the report.
    pub total_size_formatted: String,
}

impl ReportSummary {
    #[must_use]
    pub fn new(target: &Path, location: &OutputLocation, report: &SizeReport) -> Self {
        let total_size = report.total_size();

        Self {
            target: target.display().to_string(),
            output_path: location.file.display().to_string(),
            entries: report.entries.len(),
            total_size,
            total_size_formatted: format_size(total_size),
        }
    }
}

/// Measure `target` and write its listing beneath `output_root`.
///
/// # Errors
///
/// Returns an error if the output folder cannot be created, the target cannot
/// be listed, or the report file cannot be written.
pub fn write_report(target: &Path, output_root: &Path) -> Result<ReportSummary> {
    write_report_with_progress(target, output_root, &ProgressBar::hidden())
}

/// Like [`write_report`], reporting per-entry progress on `progress`.
///
/// The output folder is created before the target is listed, so it exists even
/// when listing fails. An existing report file is overwritten.
///
/// # Errors
///
/// Returns an error if the output folder cannot be created, the target cannot
/// be listed, or the report file cannot be written.
pub fn write_report_with_progress(
    target: &Path,
    output_root: &Path,
    progress: &ProgressBar,
) -> Result<ReportSummary> {
    let location = OutputLocation::derive(target, output_root);

    fs::create_dir_all(&location.dir).context(CreateOutputDirSnafu {
        path: &location.dir,
    })?;

    let report = build_report_with_progress(target, progress)?;
    write_lines(&location.file, &report.to_lines())?;

    Ok(ReportSummary::new(target, &location, &report))
}

/// Write `lines` to `path`, each terminated by `\n`.
fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    let file = File::create(path).context(WriteReportSnafu { path })?;
    let mut writer = BufWriter::new(file);

    for line in lines {
        writeln!(writer, "{line}").context(WriteReportSnafu { path })?;
    }

    writer.flush().context(WriteReportSnafu { path })
}
