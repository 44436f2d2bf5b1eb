//! # srvdef-file: Server Definition File Resolver
//!
//! Loads a server definition file once, checks it, and resolves nicknames
//! of servers and server groups into ordered lists of
//! [`ServerDefinition`](srvdef_core::ServerDefinition)s for end-to-end tests.
//!
//! ## Loading
//!
//! [`ServerDefinitionFile::open`] reads the YAML file, validates it with
//! `srvdef-schema`, fills in defaults for optional sections and checks all
//! cross references: the default and every group member must exist, and
//! no group may contain itself. The first problem found aborts loading.
//!
//! ## Queries
//!
//! - [`ServerDefinitionFile::get_server`]: one server by nickname.
//! - [`ServerDefinitionFile::list_servers`]: a server or an expanded group.
//! - [`ServerDefinitionFile::list_default_servers`]: the default selection.
//! - [`ServerDefinitionFile::list_all_servers`]: every server in file order.
//!
//! ## Test Runner Integration
//!
//! [`ServerSelection`] bundles the file path and the optional nickname a
//! test runner is configured with, and resolves them in one call.

pub mod file;
mod load;
mod membership;
pub mod selection;

pub use file::{ServerDefinitionFile, DEFAULT_FILEPATH};
pub use selection::{SelectionError, ServerSelection};
