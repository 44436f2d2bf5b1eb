//! # Validate Subcommand
//!
//! Loads a server definition file and runs every load-time check: YAML
//! syntax, schema, default and member references, and membership cycles.

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use clap::Args;

use srvdef_file::ServerDefinitionFile;

/// Arguments for the `srvdef validate` subcommand.
#[derive(Args, Debug, Default)]
pub struct ValidateArgs {
    /// Also print the resolved default servers.
    #[arg(long)]
    pub show_default: bool,
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 if the file is valid, 1 otherwise.
pub fn run_validate(args: &ValidateArgs, file: &Path) -> Result<u8> {
    let stdout = std::io::stdout();
    validate_to(&mut stdout.lock(), args, file)
}

fn validate_to(out: &mut impl Write, args: &ValidateArgs, file: &Path) -> Result<u8> {
    let sdf = match ServerDefinitionFile::open(file) {
        Ok(sdf) => sdf,
        Err(e) => {
            writeln!(out, "FAIL: {e}")?;
            return Ok(1);
        }
    };

    writeln!(
        out,
        "OK: {} ({} servers, {} groups)",
        file.display(),
        sdf.server_count(),
        sdf.group_count()
    )?;

    if args.show_default {
        match sdf.default_nickname() {
            Some(nickname) => {
                let servers = sdf.list_default_servers()?;
                let names: Vec<&str> = servers.iter().map(|sd| sd.nickname().as_str()).collect();
                writeln!(out, "default: {nickname} -> [{}]", names.join(", "))?;
            }
            None => writeln!(out, "default: none")?,
        }
    }

    Ok(0)
}
