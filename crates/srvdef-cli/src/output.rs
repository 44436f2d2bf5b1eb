//! # Output Formats
//!
//! Server definitions are printed as text lines (one per server, labelled
//! the way a test runner labels its executions), JSON, or YAML.

use std::io::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;

use srvdef_core::ServerDefinition;

/// How server definitions are printed.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One line per server: `server_definition=<nickname>  <description>`.
    #[default]
    Text,
    /// Pretty-printed JSON array.
    Json,
    /// YAML sequence.
    Yaml,
}

/// Write server definitions to `out` in the requested format.
pub fn write_servers(
    out: &mut impl Write,
    servers: &[ServerDefinition],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for sd in servers {
                writeln!(out, "{}  {}", sd.fixture_id(), sd.description())?;
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(servers)
                .context("failed to serialize server definitions as JSON")?;
            writeln!(out, "{json}")?;
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(servers)
                .context("failed to serialize server definitions as YAML")?;
            write!(out, "{yaml}")?;
        }
    }
    Ok(())
}

/// Write a single server definition with all of its attributes.
pub fn write_server(out: &mut impl Write, sd: &ServerDefinition, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "nickname:     {}", sd.nickname())?;
            writeln!(out, "description:  {}", sd.description())?;
            writeln!(out, "contact_name: {}", sd.contact_name().unwrap_or("-"))?;
            writeln!(out, "access_via:   {}", sd.access_via().unwrap_or("-"))?;
            let details = serde_json::to_string(sd.details())
                .context("failed to serialize server details")?;
            writeln!(out, "details:      {details}")?;
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Yaml => write_servers(out, std::slice::from_ref(sd), format),
    }
}
