//! Plotter Studio preferences CLI.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use plotter_cli::commands::{
    add_recent, clear_recent, list_recent, open_recent, open_store, remove_recent,
    resolve_prefs_path, save_window, show_window,
};
use plotter_cli::logging::{LogConfig, LogFormat, init_logging};
use plotter_window::WindowGeometry;
use tracing::level_filters::LevelFilter;

mod cli;
mod summary;

use crate::cli::{
    Cli, Command, LogFormatArg, LogLevelArg, RecentCommand, SaveWindowArgs, WindowCommand,
};
use crate::summary::{print_recent, print_window};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            tracing::error!("{error:#}");
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<()> {
    let prefs_path = resolve_prefs_path(cli.prefs.as_deref());
    let store = open_store(&prefs_path)?;
    let label = cli.menu.as_str();

    match &cli.command {
        Command::Recent(RecentCommand::List) => print_recent(&list_recent(&store, label)?),
        Command::Recent(RecentCommand::Add { paths }) => {
            print_recent(&add_recent(&store, label, paths)?);
        }
        Command::Recent(RecentCommand::Remove { path }) => {
            print_recent(&remove_recent(&store, label, path)?);
        }
        Command::Recent(RecentCommand::Open { index }) => {
            let path = open_recent(&store, label, *index)?;
            println!("Opening {path}");
        }
        Command::Recent(RecentCommand::Clear) => {
            clear_recent(&store, label)?;
            println!("Cleared recent files for menu '{label}'");
        }
        Command::Window(WindowCommand::Show { screen }) => {
            print_window(&show_window(&store, *screen)?);
        }
        Command::Window(WindowCommand::Save(args)) => {
            let geometry = geometry_from_args(args);
            save_window(&store, &geometry)?;
            print_window(&geometry);
        }
    }
    Ok(())
}

fn geometry_from_args(args: &SaveWindowArgs) -> WindowGeometry {
    WindowGeometry {
        width: args.width,
        height: args.height,
        x: args.x,
        y: args.y,
        fullscreen: args.fullscreen,
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
