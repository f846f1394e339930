//! Goroutine Trace CLI
//!
//! Reads a Go goroutine dump and prints it as readable trees, or exports
//! the parsed goroutines as JSON.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use goroutine_trace::commands::{
    display_version, execute_format, execute_inspect, validate_args, validate_report_file,
    FormatArgs, InspectArgs,
};

/// Goroutine Trace - readable Go goroutine dumps
#[derive(Parser, Debug)]
#[command(name = "gtrace")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a goroutine dump as trees
    Format {
        /// Dump file (reads stdin when omitted)
        input: Option<PathBuf>,

        /// Write the rendering to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Disable colors and text attributes
        #[arg(long)]
        no_color: bool,

        /// Keep full file paths and function names
        #[arg(long)]
        full: bool,

        /// Align function and file columns within each goroutine
        #[arg(long)]
        align: bool,

        /// Display width used to decide when to shorten function names
        #[arg(long)]
        width: Option<usize>,

        /// TOML theme file
        #[arg(long)]
        theme: Option<PathBuf>,
    },

    /// Export the parsed goroutines as JSON
    Inspect {
        /// Dump file (reads stdin when omitted)
        input: Option<PathBuf>,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Keep full file paths and function names
        #[arg(long)]
        full: bool,

        /// Display width used to decide when to shorten function names
        #[arg(long)]
        width: Option<usize>,
    },

    /// Validate a JSON report written by `inspect`
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Format {
            input,
            output,
            no_color,
            full,
            align,
            width,
            theme,
        } => {
            let args = FormatArgs {
                input,
                output,
                colorize: !no_color,
                simplify: !full,
                align_columns: align,
                width,
                theme,
            };

            validate_args(&args)?;
            execute_format(args)?;
        }

        Commands::Inspect {
            input,
            output,
            full,
            width,
        } => {
            execute_inspect(InspectArgs {
                input,
                output,
                simplify: !full,
                width,
            })?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
