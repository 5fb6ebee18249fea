//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use crate::config::GlobalConfig;
use crate::output::OutputMode;

/// checkup - Declarative completeness and compliance checks
#[derive(Parser, Debug)]
#[command(
    name = "checkup",
    version,
    about = "Declarative completeness and compliance checks",
    long_about = "Evaluate records and source text against a rule set.\n\n\
                  Rules declare what must be present (or absent) in a subject.\n\
                  Reports show what is missing, weighted by severity."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize a starter .checkup.toml in the current directory
    Init {
        /// Overwrite an existing rule set
        #[arg(short, long)]
        force: bool,
    },

    /// Check text files under a path against the rule set's pattern rules
    Check {
        /// Root directory to collect files from (default: current directory)
        path: Option<PathBuf>,

        /// Rule-set file (default: nearest .checkup.toml)
        #[arg(short, long)]
        rules: Option<PathBuf>,

        /// Run in CI mode (report failure through the error channel)
        #[arg(long)]
        ci: bool,
    },

    /// Check records from a JSON document against the rule set's field rules
    Records {
        /// JSON document holding an array of objects
        file: PathBuf,

        /// Rule-set file (default: nearest .checkup.toml)
        #[arg(short, long)]
        rules: Option<PathBuf>,

        /// Object key used as the subject identifier
        #[arg(long, default_value = "id")]
        id_field: String,

        /// Run in CI mode (report failure through the error channel)
        #[arg(long)]
        ci: bool,
    },

    /// Load, validate, and list the rule set
    Rules {
        /// Rule-set file (default: nearest .checkup.toml)
        #[arg(short, long)]
        rules: Option<PathBuf>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let config = GlobalConfig::load();
    if !config.output.color {
        colored::control::set_override(false);
    }

    let output_mode = if cli.json || config.output.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Init { force }) => commands::init(force, output_mode),
        Some(Command::Check { path, rules, ci }) => commands::check(path, rules, ci, output_mode),
        Some(Command::Records {
            file,
            rules,
            id_field,
            ci,
        }) => commands::records(&file, rules, &id_field, ci, output_mode),
        Some(Command::Rules { rules }) => commands::rules(rules, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("checkup v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("checkup v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'checkup --help' for usage");
                println!("Run 'checkup init' to get started");
            }
            Ok(())
        },
    }
}
