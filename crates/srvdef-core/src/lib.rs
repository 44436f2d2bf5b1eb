//! # srvdef-core: Foundational Types for Server Definition Files
//!
//! Defines the value types and errors shared by every crate in the
//! workspace. It depends on nothing internal.
//!
//! ## Key Types
//!
//! - [`Nickname`]: validated identifier of a server or server group
//!   (`^[a-zA-Z0-9_]+$`). No bare strings where a checked nickname is
//!   required.
//! - [`ServerDefinition`]: immutable record describing one server to run
//!   end-to-end tests against. The user-defined `details` payload is an
//!   opaque `serde_json::Value` tree.
//! - [`ElementPath`]: location of an element inside a definition file,
//!   rendered as a dotted path in error messages.
//!
//! ## Error Layers
//!
//! [`ServerDefinitionFileError`] covers everything that can go wrong while
//! loading a file (file access vs. content format), while [`LookupError`]
//! covers nickname misses against an already loaded file. Callers can
//! tell "the file is broken" apart from "the nickname does not exist".
//!
//! ## Crate Policy
//!
//! - No dependencies on other `srvdef-*` crates.
//! - No `unsafe` code.
//! - No `.unwrap()` outside tests.

pub mod error;
pub mod nickname;
pub mod path;
pub mod server;

pub use error::{FormatError, LookupError, ServerDefinitionFileError, ValidationError};
pub use nickname::Nickname;
pub use path::ElementPath;
pub use server::{ServerDefinition, FIXTURE_ID_PREFIX};
