//! # Schema Validation
//!
//! Checks a parsed server definition file against the JSON Schema
//! (draft-07) in `schemas/server-definition-file.schema.json`.
//!
//! ## Contract
//!
//! The top-level element is a mapping with:
//!
//! - `servers` (required): nickname → `{description, details, contact_name?, access_via?}`
//! - `server_groups` (optional): nickname → `{description, members: [string]}`
//! - `default` (optional): string
//!
//! Nicknames match `^[a-zA-Z0-9_]+$` and no additional properties are
//! permitted at any level except inside `details`, which is user-defined.
//!
//! ## Error Paths
//!
//! Violations carry the location of the failing element as an
//! [`ElementPath`]: the jsonschema crate reports JSON Pointers
//! (`/server_groups/grp1/members/0`), which are rendered as dotted paths
//! (`server_groups.grp1.members.0`). Only one violation is reported: the
//! one closest to the top of the document, the earliest found among equals.

use std::fmt;

use jsonschema::{Draft, Validator};
use serde_json::Value;
use thiserror::Error;

use srvdef_core::ElementPath;

/// File name of the server definition file schema under `schemas/`.
pub const SERVER_DEFINITION_FILE_SCHEMA_NAME: &str = "server-definition-file.schema.json";

const SERVER_DEFINITION_FILE_SCHEMA: &str =
    include_str!("../../../schemas/server-definition-file.schema.json");

/// The built-in schema could not be turned into a validator.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The embedded schema text is not valid JSON.
    #[error("schema '{schema_name}' is not valid JSON: {reason}")]
    InvalidJson {
        /// Schema file name.
        schema_name: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// The schema is valid JSON but not a valid JSON Schema.
    #[error("failed to compile schema '{schema_name}': {reason}")]
    CompileError {
        /// Schema file name.
        schema_name: String,
        /// Compiler diagnostic.
        reason: String,
    },
}

/// A single schema violation with structured context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Location of the violating element in the document.
    pub element: ElementPath,
    /// JSON Pointer into the schema to the keyword that failed.
    pub schema_path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl Violation {
    fn from_error(error: &jsonschema::ValidationError<'_>) -> Self {
        Self {
            element: ElementPath::from_json_pointer(&error.instance_path.to_string()),
            schema_path: error.schema_path.to_string(),
            message: error.to_string(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.element, self.message)
    }
}

/// Compiled validator for server definition files.
///
/// Compilation happens once in [`ServerDefinitionSchema::new`]; the
/// validator is `Send + Sync` and can be reused for any number of documents.
pub struct ServerDefinitionSchema {
    validator: Validator,
}

impl fmt::Debug for ServerDefinitionSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerDefinitionSchema")
            .field("schema", &SERVER_DEFINITION_FILE_SCHEMA_NAME)
            .finish_non_exhaustive()
    }
}

impl ServerDefinitionSchema {
    /// Compile the built-in server definition file schema.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] if the embedded schema is broken. This does
    /// not depend on any document and indicates a defect in the build.
    pub fn new() -> Result<Self, SchemaError> {
        let schema = Self::schema()?;

        let mut opts = jsonschema::options();
        opts.with_draft(Draft::Draft7);
        let validator = opts.build(&schema).map_err(|e| SchemaError::CompileError {
            schema_name: SERVER_DEFINITION_FILE_SCHEMA_NAME.to_string(),
            reason: e.to_string(),
        })?;

        tracing::trace!(schema = SERVER_DEFINITION_FILE_SCHEMA_NAME, "compiled schema");
        Ok(Self { validator })
    }

    /// The raw schema document.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidJson`] if the embedded text does not parse.
    pub fn schema() -> Result<Value, SchemaError> {
        serde_json::from_str(SERVER_DEFINITION_FILE_SCHEMA).map_err(|e| SchemaError::InvalidJson {
            schema_name: SERVER_DEFINITION_FILE_SCHEMA_NAME.to_string(),
            reason: e.to_string(),
        })
    }

    /// Quick conformance check.
    pub fn is_valid(&self, instance: &Value) -> bool {
        self.validator.is_valid(instance)
    }

    /// Validate a document, reporting its most relevant violation.
    ///
    /// The violation with the shortest element path wins; among equally
    /// deep violations the first one found is kept.
    ///
    /// # Errors
    ///
    /// Returns that [`Violation`] if the document does not conform.
    pub fn validate(&self, instance: &Value) -> Result<(), Violation> {
        match self
            .validator
            .iter_errors(instance)
            .map(|e| Violation::from_error(&e))
            .min_by_key(|v| v.element.segments().len())
        {
            Some(violation) => Err(violation),
            None => Ok(()),
        }
    }

    /// All violations of a document, in the order the validator found them.
    pub fn violations(&self, instance: &Value) -> Vec<Violation> {
        self.validator
            .iter_errors(instance)
            .map(|e| Violation::from_error(&e))
            .collect()
    }
}
