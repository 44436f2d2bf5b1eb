//! # srvdef-schema: Structural Validation of Server Definition Files
//!
//! Rejects malformed server definition files before any semantic
//! interpretation happens.
//!
//! ## Document Loading (`yaml`)
//!
//! [`parse_document`] parses YAML text and converts it into a
//! `serde_json::Value` tree, which is what the JSON Schema validator
//! operates on.
//!
//! ## Schema Validation (`validate`)
//!
//! The structural contract lives as data in
//! `schemas/server-definition-file.schema.json` (JSON Schema draft-07) and
//! is embedded at compile time. [`ServerDefinitionSchema`] compiles it once
//! and reports the first [`Violation`] with a dotted element path such as
//! `server_groups.grp1.members.0`.
//!
//! ## Crate Policy
//!
//! - Depends only on `srvdef-core` internally.
//! - Validation is pure: the input document is never modified.

pub mod validate;
pub mod yaml;

pub use validate::{SchemaError, ServerDefinitionSchema, Violation, SERVER_DEFINITION_FILE_SCHEMA_NAME};
pub use yaml::{parse_document, yaml_to_json_value, DocumentError};
