//! brst - developer tool for the BrightScript lexer.
//!
//! This is the main entry point for the brst CLI application.
//! It uses clap for argument parsing and dispatches to the command
//! handlers in [`commands`].

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::common::OutputFormat;
use commands::{run_check, run_tokens, CheckArgs, TokensArgs};
use config::Config;
use error::{BrstError, Result};

/// brst - drive the BrightScript lexer over source files
#[derive(Parser, Debug)]
#[command(name = "brst")]
#[command(author = "Brs Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Drive the BrightScript lexer over source files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "BRST_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "BRST_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "BRST_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the brst CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the token stream of a file
    Tokens(TokensCommand),

    /// Lex many files in parallel and report every lexical error
    ///
    /// Exits with a non-zero status when any file has errors.
    Check(CheckCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Source file to scan
    file: PathBuf,

    /// Output format (default: from config, else text)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Keep scanning after errors and report them all
    #[arg(short, long)]
    recover: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Source files to check
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Number of parallel jobs (default: from config, else one per core)
    #[arg(short, long)]
    jobs: Option<usize>,
}

fn main() {
    if let Err(e) = run(Cli::parse()) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Loads configuration, initializes logging and runs the selected command.
fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let verbose = cli.verbose || config.verbose;

    init_logging(verbose, cli.no_color)?;

    execute_command(cli.command, verbose, config)
}

/// Initialize the logging system.
///
/// Log output goes to stderr so it never mixes with token dumps.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| BrstError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command, letting flags override the config file.
fn execute_command(command: Commands, verbose: bool, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => run_tokens(TokensArgs {
            path: args.file,
            format: args.format.unwrap_or(config.output.format),
            recover: args.recover || config.lex.recover,
        }),
        Commands::Check(args) => run_check(CheckArgs {
            files: args.files,
            jobs: args.jobs.or(config.check.jobs),
            verbose,
        }),
    }
}
