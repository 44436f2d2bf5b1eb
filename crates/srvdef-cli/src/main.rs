//! # srvdef CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use srvdef_cli::list::{run_list, ListArgs};
use srvdef_cli::show::{run_all, run_show, AllArgs, ShowArgs};
use srvdef_cli::validate::{run_validate, ValidateArgs};
use srvdef_file::DEFAULT_FILEPATH;

/// Server definition file tool.
///
/// Validates a server definition file and resolves server and server group
/// nicknames into the servers an end-to-end test run targets.
#[derive(Parser, Debug)]
#[command(name = "srvdef", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the server definition file.
    #[arg(long, short = 'f', global = true, default_value = DEFAULT_FILEPATH)]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load the file and check it against the schema and its references.
    Validate(ValidateArgs),

    /// List the servers selected by a nickname, or by the file's default.
    List(ListArgs),

    /// Show a single server definition.
    Show(ShowArgs),

    /// List all servers in the file.
    All(AllArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(file = %cli.file.display(), "srvdef starting");

    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args, &cli.file),
        Commands::List(args) => run_list(&args, &cli.file),
        Commands::Show(args) => run_show(&args, &cli.file),
        Commands::All(args) => run_all(&args, &cli.file),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
