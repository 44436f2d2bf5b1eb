//! # List Subcommand
//!
//! Resolves the servers a test run would target: the servers of the
//! selected nickname (server or group), or of the file's default when no
//! nickname is given. Each server is one test execution.

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use clap::Args;

use srvdef_core::Nickname;
use srvdef_file::ServerSelection;

use crate::output::{write_servers, OutputFormat};

/// Arguments for the `srvdef list` subcommand.
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Nickname of the server or server group to test against.
    /// Default: the default server or server group of the file.
    #[arg(long, short = 's', value_name = "NICKNAME")]
    pub server: Option<Nickname>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Execute the list subcommand.
///
/// Returns exit code: 0 on success, 1 if the file is invalid or the
/// nickname is unknown.
pub fn run_list(args: &ListArgs, file: &Path) -> Result<u8> {
    let stdout = std::io::stdout();
    list_to(&mut stdout.lock(), args, file)
}

fn list_to(out: &mut impl Write, args: &ListArgs, file: &Path) -> Result<u8> {
    let selection = ServerSelection::new(file, args.server.clone());
    let Some(sdf) = crate::load_or_report(selection.file()) else {
        return Ok(1);
    };

    let servers = match selection.resolve_in(&sdf) {
        Ok(servers) => servers,
        Err(e) => {
            eprintln!("ERROR: {e}");
            return Ok(1);
        }
    };

    if servers.is_empty() {
        tracing::warn!(path = %file.display(), "no servers selected");
    }
    write_servers(out, &servers, args.format)?;
    Ok(0)
}
