//! # Server Definition Files
//!
//! [`ServerDefinitionFile`] owns one loaded, validated definition file and
//! answers nickname queries against it for its whole lifetime.
//!
//! ## File Format
//!
//! ```yaml
//! servers:                # Server definitions.
//!   SRV1:                 # Nickname of the server.
//!     description: TEXT   # Short description of the server.
//!     contact_name: TEXT  # Optional: technical contact for the server.
//!     access_via: TEXT    # Optional: network/firewall/proxy/VPN reminder.
//!     details: {...}      # User-defined details, such as the IP address.
//!
//! server_groups:          # Optional server groups.
//!   GRP1:                 # Nickname of the server group.
//!     description: TEXT   # Short description of the server group.
//!     members:            # Members: servers or other server groups.
//!       - SRV1
//!
//! default: GRP1           # Optional default server or server group.
//! ```
//!
//! ## Resolution
//!
//! A nickname is looked up among servers first, then among groups. A
//! group expands depth-first over its members in order; each server
//! appears once, at its first occurrence.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use srvdef_core::{LookupError, ServerDefinition, ServerDefinitionFileError};

use crate::load::{self, Definitions, ServerEntry};

/// File name used when no server definition file is configured.
pub const DEFAULT_FILEPATH: &str = "server_definitions.yaml";

/// A loaded and validated server definition file.
///
/// The file is read once, in [`ServerDefinitionFile::open`]. All queries
/// are read-only; reloading means opening a new instance.
#[derive(Debug, Clone)]
pub struct ServerDefinitionFile {
    filepath: PathBuf,
    definitions: Definitions,
}

impl ServerDefinitionFile {
    /// Load and validate the server definition file at `filepath`.
    ///
    /// # Errors
    ///
    /// - [`ServerDefinitionFileError::NotFound`] if the file cannot be read.
    /// - [`ServerDefinitionFileError::Format`] if the content is not valid
    ///   YAML, violates the schema, names an unknown default or group
    ///   member, or has a group that contains itself.
    pub fn open(filepath: impl AsRef<Path>) -> Result<Self, ServerDefinitionFileError> {
        let filepath = filepath.as_ref().to_path_buf();
        let definitions = load::load_file(&filepath)?;
        tracing::info!(
            path = %filepath.display(),
            servers = definitions.servers.len(),
            server_groups = definitions.server_groups.len(),
            "loaded server definition file"
        );
        Ok(Self {
            filepath,
            definitions,
        })
    }

    /// Validate server definitions given as YAML text.
    ///
    /// `filepath` is only used to identify the content in errors and
    /// lookups; nothing is read from it.
    ///
    /// # Errors
    ///
    /// Same as [`ServerDefinitionFile::open`], except that
    /// [`ServerDefinitionFileError::NotFound`] cannot occur.
    pub fn from_yaml(
        filepath: impl Into<PathBuf>,
        content: &str,
    ) -> Result<Self, ServerDefinitionFileError> {
        let filepath = filepath.into();
        let definitions = load::load_str(content, &filepath.display().to_string())?;
        Ok(Self {
            filepath,
            definitions,
        })
    }

    /// Path of the server definition file.
    pub fn filepath(&self) -> &Path {
        &self.filepath
    }

    /// Nickname of the default server or server group, if the file has one.
    pub fn default_nickname(&self) -> Option<&str> {
        self.definitions.default.as_deref()
    }

    /// Server nicknames in file order.
    pub fn server_nicknames(&self) -> impl Iterator<Item = &str> {
        self.definitions.servers.keys().map(String::as_str)
    }

    /// Server group nicknames in file order.
    pub fn group_nicknames(&self) -> impl Iterator<Item = &str> {
        self.definitions.server_groups.keys().map(String::as_str)
    }

    /// Number of servers.
    pub fn server_count(&self) -> usize {
        self.definitions.servers.len()
    }

    /// Number of server groups.
    pub fn group_count(&self) -> usize {
        self.definitions.server_groups.len()
    }

    /// True if `nickname` names a server.
    pub fn is_server(&self, nickname: &str) -> bool {
        self.definitions.servers.contains_key(nickname)
    }

    /// True if `nickname` names a server group.
    pub fn is_group(&self, nickname: &str) -> bool {
        self.definitions.server_groups.contains_key(nickname)
    }

    /// Description of a server group.
    pub fn group_description(&self, nickname: &str) -> Option<&str> {
        self.definitions
            .server_groups
            .get(nickname)
            .map(|g| g.description.as_str())
    }

    /// Direct members of a server group, as written in the file.
    pub fn group_members(&self, nickname: &str) -> Option<&[String]> {
        self.definitions
            .server_groups
            .get(nickname)
            .map(|g| g.members.as_slice())
    }

    /// Server definition for a server nickname.
    ///
    /// Group nicknames are not found here; use
    /// [`ServerDefinitionFile::list_servers`] to resolve groups.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::ServerNotFound`] if no server has this nickname.
    pub fn get_server(&self, nickname: &str) -> Result<ServerDefinition, LookupError> {
        self.definitions
            .servers
            .get(nickname)
            .map(|entry| entry.to_definition())
            .ok_or_else(|| LookupError::ServerNotFound {
                nickname: nickname.to_string(),
                path: self.label(),
            })
    }

    /// Server definitions for a server or server group nickname.
    ///
    /// A server nickname yields that one server. A group nickname yields
    /// the servers reachable through its members, depth-first and in
    /// member order, each server once at its first occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NicknameNotFound`] if the nickname names
    /// neither a server nor a server group.
    pub fn list_servers(&self, nickname: &str) -> Result<Vec<ServerDefinition>, LookupError> {
        if self.is_server(nickname) {
            return Ok(vec![self.get_server(nickname)?]);
        }
        if !self.is_group(nickname) {
            return Err(LookupError::NicknameNotFound {
                nickname: nickname.to_string(),
                path: self.label(),
            });
        }

        let mut seen = HashSet::new();
        let mut ordered = Vec::new();
        self.expand(nickname, &mut seen, &mut ordered)?;
        tracing::debug!(group = nickname, servers = ordered.len(), "expanded server group");

        ordered
            .into_iter()
            .map(|server_nick| self.get_server(server_nick))
            .collect()
    }

    /// Server definitions for the default server or server group.
    ///
    /// Empty if the file has no default.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] only if the default cannot be resolved,
    /// which load-time checks rule out.
    pub fn list_default_servers(&self) -> Result<Vec<ServerDefinition>, LookupError> {
        match self.default_nickname() {
            Some(nickname) => self.list_servers(nickname),
            None => Ok(Vec::new()),
        }
    }

    /// Server definitions for all servers, in file order.
    pub fn list_all_servers(&self) -> Vec<ServerDefinition> {
        self.definitions
            .servers
            .values()
            .map(ServerEntry::to_definition)
            .collect()
    }

    /// Collect server nicknames reachable from `nickname` into `ordered`.
    fn expand<'a>(
        &'a self,
        nickname: &'a str,
        seen: &mut HashSet<&'a str>,
        ordered: &mut Vec<&'a str>,
    ) -> Result<(), LookupError> {
        if self.is_server(nickname) {
            if seen.insert(nickname) {
                ordered.push(nickname);
            }
            return Ok(());
        }

        let members = self
            .group_members(nickname)
            .ok_or_else(|| LookupError::NicknameNotFound {
                nickname: nickname.to_string(),
                path: self.label(),
            })?;
        for member in members {
            self.expand(member, seen, ordered)?;
        }
        Ok(())
    }

    fn label(&self) -> String {
        self.filepath.display().to_string()
    }
}
