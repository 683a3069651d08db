//! CLI argument definitions for `FindMyCgpa`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use find_my_cgpa::config::ConfigOverrides;
use find_my_cgpa::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `logger::Level`
/// for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Level::from(*self))
    }
}

/// Grading options shared by the commands that look grades up
#[derive(Debug, Clone, Default, clap::Args)]
pub struct GradingArgs {
    /// Grading scale: 4.0 or 5.0 (defaults to config `scale`)
    #[arg(short, long, value_name = "SCALE")]
    pub scale: Option<String>,

    /// Grading scheme: plus-minus or letter (defaults to config `scheme`)
    #[arg(long, value_name = "SCHEME")]
    pub scheme: Option<String>,
}

/// Where a command reads its courses from
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CourseArgs {
    /// Courses as GRADE:CREDITS (e.g., A:3 B+:4 C:2)
    #[arg(value_name = "COURSES")]
    pub courses: Vec<String>,

    /// Read courses from a file (one GRADE,CREDITS per line)
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `scale`, `reports_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute a credit-weighted CGPA.
    ///
    /// Courses are given as GRADE:CREDITS arguments, read from --file, or both.
    Calculate {
        #[command(flatten)]
        input: CourseArgs,

        #[command(flatten)]
        grading: GradingArgs,

        /// Also convert the result to the other scale
        #[arg(short, long)]
        convert: bool,
    },
    /// Convert a CGPA between the 4.0 and 5.0 scales.
    Convert {
        /// CGPA value to convert
        #[arg(value_name = "CGPA", allow_negative_numbers = true)]
        value: String,

        /// Scale the value is on; the target is the other scale (defaults to config `scale`)
        #[arg(short, long, value_name = "SCALE")]
        from: Option<String>,
    },
    /// List the grade symbols and their point values.
    Grades {
        #[command(flatten)]
        grading: GradingArgs,
    },
    /// Generate a CGPA report.
    ///
    /// Computes the CGPA of the given courses and writes a Markdown or HTML
    /// summary with the per-course breakdown and the converted value.
    Report {
        #[command(flatten)]
        input: CourseArgs,

        #[command(flatten)]
        grading: GradingArgs,

        /// Output file path (optional; defaults to config `reports_dir`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report format: markdown (md) or html
        #[arg(long, value_name = "FORMAT", default_value = "html")]
        format: String,

        /// Report title (defaults to the course file name)
        #[arg(long, value_name = "TITLE")]
        title: Option<String>,
    },
    /// Start an interactive worksheet.
    ///
    /// Add and edit course rows, calculate, and convert line by line.
    /// Type `help` inside the shell for the list of commands.
    Shell {
        #[command(flatten)]
        grading: GradingArgs,
    },
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "findmycgpa",
    about = "Calculate and convert your CGPA",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config default grading scheme
    #[arg(long = "config-scheme", value_name = "SCHEME")]
    pub config_scheme: Option<String>,

    /// Override config default scale
    #[arg(long = "config-scale", value_name = "SCALE")]
    pub config_scale: Option<String>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// The short-form `--reports-dir` takes precedence over
    /// `--config-reports-dir` when both are provided. `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            scheme: self.config_scheme.clone(),
            scale: self.config_scale.clone(),
            reports_dir: self
                .reports_dir
                .as_ref()
                .or(self.config_reports_dir.as_ref())
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}
