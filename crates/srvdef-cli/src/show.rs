//! # Show and All Subcommands

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use clap::Args;

use crate::output::{write_server, write_servers, OutputFormat};

/// Arguments for the `srvdef show` subcommand.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Nickname of the server. Server groups are not accepted.
    pub nickname: String,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments for the `srvdef all` subcommand.
#[derive(Args, Debug, Default)]
pub struct AllArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Execute the show subcommand.
pub fn run_show(args: &ShowArgs, file: &Path) -> Result<u8> {
    let stdout = std::io::stdout();
    show_to(&mut stdout.lock(), args, file)
}

/// Execute the all subcommand.
pub fn run_all(args: &AllArgs, file: &Path) -> Result<u8> {
    let stdout = std::io::stdout();
    all_to(&mut stdout.lock(), args, file)
}

fn show_to(out: &mut impl Write, args: &ShowArgs, file: &Path) -> Result<u8> {
    let Some(sdf) = crate::load_or_report(file) else {
        return Ok(1);
    };
    match sdf.get_server(&args.nickname) {
        Ok(sd) => {
            write_server(out, &sd, args.format)?;
            Ok(0)
        }
        Err(e) => {
            eprintln!("ERROR: {e}");
            Ok(1)
        }
    }
}

fn all_to(out: &mut impl Write, args: &AllArgs, file: &Path) -> Result<u8> {
    let Some(sdf) = crate::load_or_report(file) else {
        return Ok(1);
    };
    write_servers(out, &sdf.list_all_servers(), args.format)?;
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use srvdef_core::ServerDefinition;

    const FILE: &str = "\
servers:
  zeta: {description: last, contact_name: Joe, details: {ip: 10.0.0.1}}
  alpha: {description: first, details: {}}
server_groups:
  grp1: {description: g1, members: [alpha]}
";

    fn fixture() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("server_definitions.yaml"), FILE).unwrap();
        dir
    }

    fn show(nickname: &str, format: OutputFormat) -> (u8, String) {
        let dir = fixture();
        let args = ShowArgs {
            nickname: nickname.to_string(),
            format,
        };
        let mut buf = Vec::new();
        let code = show_to(&mut buf, &args, &dir.path().join("server_definitions.yaml")).unwrap();
        (code, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn show_prints_attributes() {
        let (code, out) = show("zeta", OutputFormat::Text);
        assert_eq!(code, 0);
        assert!(out.contains("nickname:     zeta"), "{out}");
        assert!(out.contains("contact_name: Joe"), "{out}");
        assert!(out.contains(r#"details:      {"ip":"10.0.0.1"}"#), "{out}");
    }

    #[test]
    fn show_json_is_single_element_array() {
        let (code, out) = show("alpha", OutputFormat::Json);
        assert_eq!(code, 0);
        let parsed: Vec<ServerDefinition> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].description(), "first");
    }

    #[test]
    fn show_rejects_group_nickname() {
        let (code, out) = show("grp1", OutputFormat::Text);
        assert_eq!(code, 1);
        assert!(out.is_empty());
    }

    #[test]
    fn all_keeps_file_order() {
        let dir = fixture();
        let mut buf = Vec::new();
        let code = all_to(
            &mut buf,
            &AllArgs::default(),
            &dir.path().join("server_definitions.yaml"),
        )
        .unwrap();
        assert_eq!(code, 0);
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "server_definition=zeta  last\nserver_definition=alpha  first\n"
        );
    }
}
