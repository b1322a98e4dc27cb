//! CLI argument definitions for the `plotter` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use plotter_window::ScreenSize;

#[derive(Parser)]
#[command(
    name = "plotter",
    version,
    about = "Plotter Studio - manage drawing-machine controller preferences",
    long_about = "Inspect and edit the preferences a Plotter Studio desktop session keeps:\n\
                  the recent files menu and the main window geometry."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Preferences file (default: platform config directory).
    #[arg(long = "prefs", value_name = "PATH", global = true)]
    pub prefs: Option<PathBuf>,

    /// Label of the recent files menu.
    #[arg(long = "menu", value_name = "LABEL", default_value = "Reopen", global = true)]
    pub menu: String,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Manage the recent files menu.
    #[command(subcommand)]
    Recent(RecentCommand),

    /// Inspect or store the main window geometry.
    #[command(subcommand)]
    Window(WindowCommand),
}

#[derive(Subcommand)]
pub enum RecentCommand {
    /// Show the menu entries, most recent first.
    List,

    /// Add files; the last one becomes the most recent.
    Add {
        #[arg(value_name = "PATH", required = true)]
        paths: Vec<String>,
    },

    /// Remove a file from the menu.
    Remove {
        #[arg(value_name = "PATH")]
        path: String,
    },

    /// Choose the menu entry at INDEX (0 = most recent).
    Open {
        #[arg(value_name = "INDEX")]
        index: usize,
    },

    /// Remove every entry.
    Clear,
}

#[derive(Subcommand)]
pub enum WindowCommand {
    /// Show the geometry the window would be restored with.
    Show {
        /// Screen size the window must fit on.
        #[arg(long = "screen", value_name = "WxH", default_value = "1920x1080", value_parser = parse_screen)]
        screen: ScreenSize,
    },

    /// Store a window geometry.
    Save(SaveWindowArgs),
}

#[derive(Args)]
pub struct SaveWindowArgs {
    #[arg(long = "width")]
    pub width: i64,

    #[arg(long = "height")]
    pub height: i64,

    #[arg(long = "x", allow_negative_numbers = true)]
    pub x: i64,

    #[arg(long = "y", allow_negative_numbers = true)]
    pub y: i64,

    #[arg(long = "fullscreen")]
    pub fullscreen: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn parse_screen(value: &str) -> Result<ScreenSize, String> {
    let (width, height) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{value}'"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<i64>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| format!("invalid screen dimension '{part}'"))
    };
    Ok(ScreenSize::new(parse(width)?, parse(height)?))
}
