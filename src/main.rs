//! # dir-tree
//!
//! A small CLI that lists everything directly under a directory together with
//! its size and writes the listing to a Markdown file.
//!
//! The target directory is the path currently on the clipboard, or the first
//! argument when the clipboard does not name an existing path. The report for
//! `/data/photos/2024` lands in `./PHOTOS/2024.md`.
//!
//! ## Usage
//!
//! ```bash
//! # Copy a path to the clipboard, then:
//! dir-tree
//!
//! # Or pass the directory explicitly
//! dir-tree --no-clipboard ~/Downloads
//!
//! # Machine-readable summary
//! dir-tree --json ~/Downloads
//! ```

mod cli;

use anyhow::{Context, Ok, Result, bail};
use clap::Parser;
use cli::{Cli, Commands, ConfigCommand};
use colored::Colorize;
use dir_tree::{
    ClipboardSource, InputOrigin, InputSource, RunOptions, StaticSource,
    config::FileConfig,
    input::resolve_from_source,
    report::{ReportSummary, write_report_with_progress},
};
use indicatif::{ProgressBar, ProgressStyle};
use std::process::exit;

/// Entry point for the dir-tree application.
///
/// Errors from [`inner_main`] are printed to stderr and turned into exit code 1.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("{} {err}", "Error:".red());

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// Parses arguments, layers them over the config file, resolves the target
/// path and writes the report.
///
/// # Errors
///
/// Returns errors from target resolution, directory listing, report writing
/// or JSON serialization.
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    if let Some(Commands::Config { command }) = &args.subcommand {
        return handle_config_command(command);
    }

    let file_config = load_config(args.json());
    let cwd = std::env::current_dir().context("Failed to determine the current directory")?;
    let options = args.run_options(&file_config, &cwd);

    let mut source: Box<dyn InputSource> = if options.use_clipboard {
        Box::new(ClipboardSource)
    } else {
        Box::new(StaticSource::empty())
    };

    let (target, origin) = resolve_from_source(source.as_mut(), args.path())?;

    if !options.json {
        let label = match origin {
            InputOrigin::Clipboard => "Using clipboard path:",
            InputOrigin::Argument => "Using argument path:",
        };
        println!("{} {}", label.cyan(), target.display());
    }

    let progress = progress_bar(&options);
    let summary = write_report_with_progress(&target, &options.output_root, &progress)?;
    progress.finish_and_clear();

    print_summary(&summary, &options)
}

/// A per-entry progress bar, hidden unless running verbosely.
fn progress_bar(options: &RunOptions) -> ProgressBar {
    if options.json || !options.verbose {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(0);
    if let std::result::Result::Ok(style) = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
    {
        pb.set_style(style.progress_chars("█▉▊▋▌▍▎▏  "));
    }
    pb
}

/// Print the run result in JSON or human-readable form.
fn print_summary(summary: &ReportSummary, options: &RunOptions) -> Result<()> {
    if options.json {
        println!("{}", serde_json::to_string_pretty(summary)?);
    } else {
        if options.verbose {
            println!(
                "{} {} entries, {} total",
                "Measured".bold(),
                summary.entries,
                summary.total_size_formatted
            );
        }
        println!("{} {}", "Output written to:".green(), summary.output_path);
    }
    Ok(())
}

// ── Config subcommand ────────────────────────────────────────────────

/// Default config file template written by `config init`.
const CONFIG_TEMPLATE: &str = r#"# dir-tree configuration
# All values shown are their defaults. Uncomment and change as needed.

# Read the clipboard before falling back to the path argument
# use_clipboard = true

# Directory under which the report folder is created
# (defaults to the current working directory when not set)
# output_root = "~/reports"

# Show a progress bar while entries are being sized
# verbose = false
"#;

/// Dispatch a `config` subcommand.
fn handle_config_command(cmd: &ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Path => match FileConfig::config_path() {
            Some(path) => println!("{}", path.display()),
            None => bail!("Could not determine the config directory on this platform"),
        },
        ConfigCommand::Show => show_config()?,
        ConfigCommand::Init => init_config()?,
    }
    Ok(())
}

/// Print the effective configuration (file values merged with defaults).
fn show_config() -> Result<()> {
    let path = FileConfig::config_path();

    let (file_exists, config) = match &path {
        Some(p) if p.exists() => (true, FileConfig::load()?),
        _ => (false, FileConfig::default()),
    };

    match &path {
        Some(p) if file_exists => println!("Config file: {} (found)", p.display()),
        Some(p) => println!(
            "Config file: {} (not found - showing defaults)",
            p.display()
        ),
        None => println!("Config file: (cannot determine path on this platform)"),
    }

    println!();
    println!("{}", format_config(&config));
    Ok(())
}

/// Format a [`FileConfig`] as a human-readable table, showing defaults for `None` fields.
fn format_config(config: &FileConfig) -> String {
    fn show_bool(val: Option<bool>, default: bool) -> String {
        val.map_or_else(|| format!("{default}  (default)"), |v| v.to_string())
    }

    let output_root = config.output_root.as_ref().map_or_else(
        || "(current directory)  (default)".to_string(),
        |p| format!("\"{}\"", p.display()),
    );

    format!(
        "\
use_clipboard = {use_clipboard}
output_root   = {output_root}
verbose       = {verbose}",
        use_clipboard = show_bool(config.use_clipboard, true),
        verbose = show_bool(config.verbose, false),
    )
}

/// Write a default config template to the config file path if it does not exist yet.
fn init_config() -> Result<()> {
    let Some(path) = FileConfig::config_path() else {
        bail!("Could not determine the config directory on this platform");
    };

    if path.exists() {
        println!("Config file already exists at: {}", path.display());
        println!("Remove it first if you want to regenerate it.");
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create config directory {}", parent.display())
        })?;
    }

    std::fs::write(&path, CONFIG_TEMPLATE)
        .with_context(|| format!("Failed to write config file {}", path.display()))?;

    println!("Config file written to: {}", path.display());
    Ok(())
}

/// Load the configuration file, falling back to defaults on failure.
fn load_config(json_mode: bool) -> FileConfig {
    match FileConfig::load() {
        std::result::Result::Ok(config) => config,
        Err(e) => {
            if !json_mode {
                eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
            }
            FileConfig::default()
        }
    }
}
