//! Resolution of the target path.
//!
//! The target comes from one of two places, checked in a fixed order:
//!
//! 1. the text currently on the clipboard, if it names an existing path;
//! 2. the first positional command-line argument.
//!
//! The clipboard is reached through the [`InputSource`] trait so tests (and
//! `--no-clipboard`) can supply fixed text instead of touching the system
//! clipboard.

use std::path::{Path, PathBuf};

use crate::error::{ArgumentPathMissingSnafu, NoInputPathSnafu, Result};

/// Something that can supply a candidate path as text.
pub trait InputSource {
    /// Read the current text, or `None` if nothing is available.
    fn read_text(&mut self) -> Option<String>;
}

/// Reads text from the system clipboard.
///
/// Any clipboard failure (no display server, non-text content, ...) is
/// treated as an empty clipboard.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClipboardSource;

impl InputSource for ClipboardSource {
    fn read_text(&mut self) -> Option<String> {
        arboard::Clipboard::new()
            .and_then(|mut clipboard| clipboard.get_text())
            .ok()
    }
}

/// A fixed piece of text, or nothing at all.
#[derive(Debug, Default, Clone)]
pub struct StaticSource(Option<String>);

impl StaticSource {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(Some(text.into()))
    }

    /// A source that never yields any text.
    #[must_use]
    pub const fn empty() -> Self {
        Self(None)
    }
}

impl InputSource for StaticSource {
    fn read_text(&mut self) -> Option<String> {
        self.0.clone()
    }
}

/// Where the resolved target path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOrigin {
    Clipboard,
    Argument,
}

/// Pick the target path from clipboard text and positional arguments.
///
/// `cli_args` are the positional arguments only (no program name); just the
/// first one is considered. Clipboard text is trimmed before use and wins
/// whenever it names an existing path, even if the argument is valid too.
///
/// # Errors
///
/// - [`DirTreeError::ArgumentPathMissing`](crate::DirTreeError::ArgumentPathMissing)
///   if the clipboard is unusable and the first argument does not exist.
/// - [`DirTreeError::NoInputPath`](crate::DirTreeError::NoInputPath) if the
///   clipboard is unusable and no argument was given.
pub fn resolve_input_path(clipboard_content: &str, cli_args: &[String]) -> Result<PathBuf> {
    let arg = cli_args.first().map(Path::new);
    resolve(Some(clipboard_content), arg).map(|(path, _)| path)
}

/// Read `source` once and resolve the target path against `arg`.
///
/// Returns the path together with the [`InputOrigin`] that supplied it.
///
/// # Errors
///
/// Same conditions as [`resolve_input_path`].
pub fn resolve_from_source(
    source: &mut dyn InputSource,
    arg: Option<&Path>,
) -> Result<(PathBuf, InputOrigin)> {
    let text = source.read_text();
    resolve(text.as_deref(), arg)
}

fn resolve(clipboard: Option<&str>, arg: Option<&Path>) -> Result<(PathBuf, InputOrigin)> {
    if let Some(text) = clipboard.map(str::trim)
        && !text.is_empty()
        && Path::new(text).exists()
    {
        return Ok((PathBuf::from(text), InputOrigin::Clipboard));
    }

    match arg {
        Some(path) if path.exists() => Ok((path.to_path_buf(), InputOrigin::Argument)),
        Some(path) => ArgumentPathMissingSnafu { path }.fail(),
        None => NoInputPathSnafu.fail(),
    }
}
