//! Command-line interface definition and argument parsing.
//!
//! This module defines all command-line arguments and options using the
//! [clap](https://docs.rs/clap/) library.
//!
//! Helper methods on [`Cli`] accept a [`FileConfig`] reference so that config-file
//! values act as defaults that CLI arguments can override (layered config).

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use dir_tree::config::RunOptions;
use dir_tree::config::file::{FileConfig, expand_tilde};

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inspect or initialise the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Subcommands for `config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the effective configuration (file values + defaults for unset keys)
    Show,
    /// Write a default config.toml if none exists yet
    Init,
    /// Print the path to the config file
    Path,
}

/// Main command-line interface structure.
///
/// Helper methods accept a [`FileConfig`] reference so that config-file values act as
/// defaults when the corresponding CLI argument is not provided.
#[derive(Parser, Debug)]
#[command(name = "dir-tree")]
#[command(
    about = "Write the sizes of everything directly under a directory to a Markdown report"
)]
#[command(version)]
pub struct Cli {
    /// Subcommand (e.g. `config`)
    #[command(subcommand)]
    pub subcommand: Option<Commands>,

    /// Directory to report on when the clipboard does not hold an existing path.
    /// Only the first PATH is used; write `./config` for a directory named `config`
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Ignore the clipboard and use PATH only
    #[arg(long)]
    no_clipboard: bool,

    /// Create the report folder under this directory instead of the current one
    #[arg(short = 'o', long)]
    output_root: Option<PathBuf>,

    /// Output a single JSON summary instead of human-readable messages
    #[arg(long)]
    json: bool,

    /// Show a progress bar while entries are being sized
    #[arg(short = 'v', long)]
    verbose: bool,
}

impl Cli {
    /// Whether `--json` structured output mode is enabled.
    #[must_use]
    pub const fn json(&self) -> bool {
        self.json
    }

    /// The first positional path, if any. Later positionals are ignored.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.paths.first().map(PathBuf::as_path)
    }

    /// Resolve the effective run options.
    ///
    /// - **use_clipboard**: `--no-clipboard` > config file > `true`
    /// - **output_root**: CLI > config file (tilde-expanded) > `cwd`
    /// - **verbose**: CLI flag `||` config value `||` `false`
    #[must_use]
    pub fn run_options(&self, config: &FileConfig, cwd: &Path) -> RunOptions {
        let output_root = self
            .output_root
            .clone()
            .or_else(|| config.output_root.as_deref().map(expand_tilde))
            .unwrap_or_else(|| cwd.to_path_buf());

        RunOptions {
            use_clipboard: !self.no_clipboard && config.use_clipboard.unwrap_or(true),
            output_root,
            verbose: self.verbose || config.verbose.unwrap_or(false),
            json: self.json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let args = Cli::parse_from(["dir-tree"]);
        let options = args.run_options(&FileConfig::default(), Path::new("/work"));

        assert!(args.path().is_none());
        assert!(args.subcommand.is_none());
        assert!(options.use_clipboard);
        assert_eq!(options.output_root, PathBuf::from("/work"));
        assert!(!options.verbose);
        assert!(!options.json);
    }

    #[test]
    fn test_positional_path() {
        let args = Cli::parse_from(["dir-tree", "/data/photos"]);

        assert_eq!(args.path(), Some(Path::new("/data/photos")));
    }

    #[test]
    fn test_flags() {
        let args = Cli::parse_from([
            "dir-tree",
            "--no-clipboard",
            "--json",
            "-v",
            "-o",
            "/reports",
            "some/dir",
        ]);
        let options = args.run_options(&FileConfig::default(), Path::new("/work"));

        assert!(!options.use_clipboard);
        assert!(options.json);
        assert!(options.verbose);
        assert_eq!(options.output_root, PathBuf::from("/reports"));
        assert_eq!(args.path(), Some(Path::new("some/dir")));
    }

    #[test]
    fn test_config_file_values_apply_when_cli_silent() {
        let config = FileConfig {
            use_clipboard: Some(false),
            output_root: Some(PathBuf::from("/from-config")),
            verbose: Some(true),
        };
        let args = Cli::parse_from(["dir-tree"]);
        let options = args.run_options(&config, Path::new("/work"));

        assert!(!options.use_clipboard);
        assert!(options.verbose);
        assert_eq!(options.output_root, PathBuf::from("/from-config"));
    }

    #[test]
    fn test_cli_overrides_config_output_root() {
        let config = FileConfig {
            output_root: Some(PathBuf::from("/from-config")),
            ..FileConfig::default()
        };
        let args = Cli::parse_from(["dir-tree", "--output-root", "/from-cli"]);
        let options = args.run_options(&config, Path::new("/work"));

        assert_eq!(options.output_root, PathBuf::from("/from-cli"));
    }

    #[test]
    fn test_no_clipboard_flag_beats_config() {
        let config = FileConfig {
            use_clipboard: Some(true),
            ..FileConfig::default()
        };
        let args = Cli::parse_from(["dir-tree", "--no-clipboard"]);

        assert!(!args.run_options(&config, Path::new(".")).use_clipboard);
    }

    #[test]
    fn test_config_subcommands() {
        let args = Cli::parse_from(["dir-tree", "config", "path"]);

        assert!(matches!(
            args.subcommand,
            Some(Commands::Config {
                command: ConfigCommand::Path
            })
        ));
    }

    #[test]
    fn test_extra_positionals_ignored() {
        let args = Cli::try_parse_from(["dir-tree", "p/q", "extra", "more"]).unwrap();

        assert_eq!(args.path(), Some(Path::new("p/q")));
    }

    #[test]
    fn test_dot_slash_config_is_a_path() {
        let args = Cli::parse_from(["dir-tree", "./config"]);

        assert!(args.subcommand.is_none());
        assert_eq!(args.path(), Some(Path::new("./config")));
    }
}
