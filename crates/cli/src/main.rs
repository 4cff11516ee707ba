// rollcall CLI - de-duplicated attendance rollups over exported meeting CSVs.

mod exit_codes;
mod render;
mod rollup;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use exit_codes::{EXIT_CONFIG, EXIT_RUNTIME, EXIT_SCHEMA, EXIT_SUCCESS};

#[derive(Parser)]
#[command(name = "rollcall")]
#[command(about = "De-duplicated attendance summaries from exported meeting CSVs")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize an exported attendance CSV
    #[command(after_help = "\
Examples:
  rollcall run meeting.csv
  rollcall run meeting.csv --config rollcall.toml --json
  rollcall run meeting.csv --ignore 'recording bot' --output rollup.json
  rollcall run meeting.csv --script marker.js")]
    Run {
        /// Path to the exported attendance CSV
        input: PathBuf,

        /// Path to a rollcall.toml config file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Drop participants whose name matches PATTERN
        /// (repeatable, case-insensitive, appended after config patterns)
        #[arg(long, value_name = "PATTERN")]
        ignore: Vec<String>,

        /// Output JSON to stdout instead of the human table
        #[arg(long)]
        json: bool,

        /// Write JSON output to file
        #[arg(long)]
        output: Option<PathBuf>,

        /// Write the roster marker script to file
        #[arg(long)]
        script: Option<PathBuf>,
    },

    /// Emit only the roster marker script for a CSV
    #[command(after_help = "\
Examples:
  rollcall script meeting.csv
  rollcall script meeting.csv --ignore 'recording bot' --output marker.js")]
    Script {
        /// Path to the exported attendance CSV
        input: PathBuf,

        /// Path to a rollcall.toml config file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Drop participants whose name matches PATTERN (repeatable)
        #[arg(long, value_name = "PATTERN")]
        ignore: Vec<String>,

        /// Write to file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Validate a rollcall.toml config without running
    #[command(after_help = "\
Examples:
  rollcall validate rollcall.toml")]
    Validate {
        /// Path to the config file
        config: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { input, config, ignore, json, output, script } => {
            rollup::cmd_run(input, config, ignore, json, output, script)
        }
        Commands::Script { input, config, ignore, output } => {
            rollup::cmd_script(input, config, ignore, output)
        }
        Commands::Validate { config } => rollup::cmd_validate(config),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn runtime(msg: impl Into<String>) -> Self {
        Self { code: EXIT_RUNTIME, message: msg.into(), hint: None }
    }

    /// Map an engine error to its exit code, with a hint for the common case
    /// of feeding a non-export CSV.
    pub fn engine(err: rollcall_engine::RollupError) -> Self {
        use rollcall_engine::RollupError;
        match &err {
            RollupError::SchemaMismatch { .. } => Self {
                code: EXIT_SCHEMA,
                message: err.to_string(),
                hint: Some("is this a raw attendance export? headers must match the six-column schema".to_string()),
            },
            RollupError::ConfigParse(_) | RollupError::PatternParse { .. } => Self {
                code: EXIT_CONFIG,
                message: err.to_string(),
                hint: None,
            },
            RollupError::Io(_) => Self {
                code: EXIT_RUNTIME,
                message: err.to_string(),
                hint: None,
            },
        }
    }
}
