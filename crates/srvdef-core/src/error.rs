//! # Error Hierarchy
//!
//! Structured error types for server definition files, built with
//! `thiserror`. No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Three layers, each its own type or variant:
//!
//! - [`ServerDefinitionFileError::NotFound`]: the file cannot be opened.
//! - [`ServerDefinitionFileError::Format`]: the file exists but its content
//!   is broken (YAML syntax, schema, or cross references).
//! - [`LookupError`]: a query against a loaded file named a nickname that
//!   does not exist. The loaded file stays usable.

use thiserror::Error;

use crate::path::ElementPath;

/// Error while loading a server definition file.
#[derive(Error, Debug)]
pub enum ServerDefinitionFileError {
    /// The file does not exist or cannot be read (including permission errors).
    #[error("cannot open server definition file: {path}: {source}")]
    NotFound {
        /// Path of the file as given by the caller.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file content is invalid.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// The built-in schema could not be compiled; holds the schema error text.
    #[error("invalid server definition file schema (internal error): {0}")]
    Internal(String),
}

impl ServerDefinitionFileError {
    /// Path of the file the error refers to, if known.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::NotFound { path, .. } => Some(path),
            Self::Format(e) => Some(e.path()),
            Self::Internal(_) => None,
        }
    }
}

/// The content of a server definition file is invalid.
///
/// Only one violation is reported per file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The file is not well-formed YAML.
    #[error("invalid YAML syntax in server definition file {path}: {reason}")]
    Syntax {
        /// Path of the file.
        path: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// The document does not match the server definition file schema.
    #[error("invalid format in server definition file {path}: validation failed on {element}: {message}")]
    Schema {
        /// Path of the file.
        path: String,
        /// Location of the reported failing element.
        element: ElementPath,
        /// Description of the mismatch.
        message: String,
    },

    /// `default` names neither a server nor a server group.
    #[error("default nickname '{nickname}' not found in servers or groups in server definition file {path}")]
    UnknownDefault {
        /// Path of the file.
        path: String,
        /// The dangling default nickname.
        nickname: String,
    },

    /// A group member names neither a server nor a server group.
    #[error("nickname '{member}' in server group '{group}' not found in servers or groups in server definition file {path}")]
    UnknownMember {
        /// Path of the file.
        path: String,
        /// The group that lists the member.
        group: String,
        /// The dangling member nickname.
        member: String,
    },

    /// A server group contains itself, directly or through nested groups.
    #[error("server group '{group}' contains itself through its members ({}) in server definition file {path}", .cycle.join(" -> "))]
    MembershipCycle {
        /// Path of the file.
        path: String,
        /// The group at which the cycle was detected.
        group: String,
        /// Group nicknames along the cycle, starting and ending with `group`.
        cycle: Vec<String>,
    },
}

impl FormatError {
    /// Path of the file the error refers to.
    pub fn path(&self) -> &str {
        match self {
            Self::Syntax { path, .. }
            | Self::Schema { path, .. }
            | Self::UnknownDefault { path, .. }
            | Self::UnknownMember { path, .. }
            | Self::MembershipCycle { path, .. } => path,
        }
    }
}

/// A nickname was not found in a loaded server definition file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// No server with this nickname. Group nicknames are not servers.
    #[error("server with nickname '{nickname}' not found in server definition file {path}")]
    ServerNotFound {
        /// The requested nickname.
        nickname: String,
        /// Path of the file.
        path: String,
    },

    /// Neither a server nor a server group with this nickname.
    #[error("server or server group with nickname '{nickname}' not found in server definition file {path}")]
    NicknameNotFound {
        /// The requested nickname.
        nickname: String,
        /// Path of the file.
        path: String,
    },
}

impl LookupError {
    /// The nickname that was not found.
    pub fn nickname(&self) -> &str {
        match self {
            Self::ServerNotFound { nickname, .. } | Self::NicknameNotFound { nickname, .. } => {
                nickname
            }
        }
    }
}

/// Domain primitive validation failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The string is not a valid nickname.
    #[error("invalid nickname {0:?}: expected one or more ASCII letters, digits or underscores")]
    InvalidNickname(String),
}
