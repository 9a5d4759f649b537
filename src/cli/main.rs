//! Command-line interface entry point for `zenflow`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use zenflow::config::Config;
use zenflow::info;
use zenflow::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};

fn main() {
    let args = Cli::parse();

    // The stored config is what `config` subcommands edit and save; overrides
    // only go into the effective copy used for this run
    let mut stored = Config::load();
    let defaults = Config::from_defaults();
    let config = stored.with_overrides(&args.to_config_overrides());

    // CLI flag overrides config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| Level::parse(&config.logging.level))
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // File logging: CLI flag wins, otherwise config logging.file if set
    let config_log_path = config.log_file_path();

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            info!("File logging initialized at: {display_path}");
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut stored, &defaults);
        }
        Command::Bmi { .. } => {
            commands::bmi::run(&config, verbose);
        }
        Command::Report { output, format, .. } => {
            commands::report::run(&config, output.as_deref(), &format);
        }
    }
}
