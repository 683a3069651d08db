//! Command-line interface entry point for `FindMyCgpa`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use find_my_cgpa::config::Config;
use find_my_cgpa::core::session::Session;
use find_my_cgpa::logger::{self, enable_debug, enable_verbose, init_file_logging, set_level, Level};
use find_my_cgpa::{debug, info};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse::<Level>().ok())
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
    let config_log_path = Some(&config.logging.file)
        .filter(|f| !f.is_empty())
        .map(PathBuf::from);

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        if init_file_logging(log_path) {
            info!("File logging initialized at: {}", log_path.display());
        } else {
            eprintln!(
                "✗ Failed to initialize file logging at: {}",
                log_path.display()
            );
        }
    }
    debug!("findmycgpa v{} running at level {}", find_my_cgpa::get_version(), logger::level());

    match args.command {
        Command::Calculate {
            input,
            grading,
            convert,
        } => commands::calculate::run(&input, &grading, convert, &config),
        Command::Convert { value, from } => {
            commands::convert::run(&value, from.as_deref(), &config)
        }
        Command::Grades { grading } => commands::grades::run(&grading, &config),
        Command::Report {
            input,
            grading,
            output,
            format,
            title,
        } => {
            let options = commands::report::ReportOptions {
                input: &input,
                grading: &grading,
                output: output.as_deref(),
                format: &format,
                title: title.as_deref(),
            };
            commands::report::run(&options, &config)
        }
        Command::Shell { grading } => match commands::resolve_grading(&grading, &config) {
            Ok((scheme, scale)) => {
                commands::shell::run(Session::new(scheme, scale));
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("{err}");
                ExitCode::FAILURE
            }
        },
        Command::Config { subcommand } => commands::config::run(subcommand, &mut config, &defaults),
    }
}
