//! # Loading and Checking
//!
//! Turns a server definition file into validated, defaulted state. Steps
//! run in a fixed order and the first failure aborts:
//!
//! 1. Read the file (failure: [`ServerDefinitionFileError::NotFound`]).
//! 2. Parse YAML (failure: [`FormatError::Syntax`]).
//! 3. Validate against the schema (failure: [`FormatError::Schema`]).
//! 4. Default `server_groups` to empty and `default` to none.
//! 5. Check that `default` names a server or group.
//! 6. Check that every group member names a server or group.
//! 7. Check that no group contains itself.

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use srvdef_core::{ElementPath, FormatError, Nickname, ServerDefinition, ServerDefinitionFileError};
use srvdef_schema::{parse_document, ServerDefinitionSchema};

use crate::membership;

/// A server entry as stored in the file.
#[derive(Debug, Clone)]
pub(crate) struct ServerEntry {
    nickname: Nickname,
    fields: ServerFields,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct ServerFields {
    description: String,
    #[serde(default)]
    contact_name: Option<String>,
    #[serde(default)]
    access_via: Option<String>,
    details: Value,
}

impl ServerEntry {
    /// Build a fresh definition from the stored entry.
    pub(crate) fn to_definition(&self) -> ServerDefinition {
        ServerDefinition::new(
            self.nickname.clone(),
            self.fields.description.clone(),
            self.fields.contact_name.clone(),
            self.fields.access_via.clone(),
            self.fields.details.clone(),
        )
    }
}

/// A server group as stored in the file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ServerGroup {
    pub(crate) description: String,
    pub(crate) members: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFile {
    servers: serde_json::Map<String, Value>,
    #[serde(default)]
    server_groups: serde_json::Map<String, Value>,
    #[serde(default)]
    default: Option<String>,
}

/// Validated and defaulted content of a server definition file.
///
/// Both tables iterate in file order.
#[derive(Debug, Clone)]
pub(crate) struct Definitions {
    pub(crate) servers: IndexMap<String, ServerEntry>,
    pub(crate) server_groups: IndexMap<String, ServerGroup>,
    pub(crate) default: Option<String>,
}

impl Definitions {
    pub(crate) fn contains(&self, nickname: &str) -> bool {
        self.servers.contains_key(nickname) || self.server_groups.contains_key(nickname)
    }
}

/// Read, parse and check the file at `path`.
pub(crate) fn load_file(path: &Path) -> Result<Definitions, ServerDefinitionFileError> {
    let label = path.display().to_string();
    tracing::debug!(path = %label, "loading server definition file");

    let bytes = std::fs::read(path).map_err(|source| ServerDefinitionFileError::NotFound {
        path: label.clone(),
        source,
    })?;
    let content = String::from_utf8(bytes).map_err(|e| FormatError::Syntax {
        path: label.clone(),
        reason: format!("file is not valid UTF-8: {e}"),
    })?;

    load_str(&content, &label)
}

/// Parse and check file content. `label` names the file in error messages.
pub(crate) fn load_str(content: &str, label: &str) -> Result<Definitions, ServerDefinitionFileError> {
    let document = parse_document(content).map_err(|e| FormatError::Syntax {
        path: label.to_string(),
        reason: e.to_string(),
    })?;

    let schema = ServerDefinitionSchema::new()
        .map_err(|e| ServerDefinitionFileError::Internal(e.to_string()))?;
    schema.validate(&document).map_err(|v| FormatError::Schema {
        path: label.to_string(),
        element: v.element,
        message: v.message,
    })?;

    let raw: RawFile = serde_json::from_value(document).map_err(|e| FormatError::Schema {
        path: label.to_string(),
        element: ElementPath::root(),
        message: e.to_string(),
    })?;

    let definitions = Definitions {
        servers: server_table(raw.servers, label)?,
        server_groups: group_table(raw.server_groups, label)?,
        default: raw.default,
    };

    check_references(&definitions, label)?;
    membership::check_acyclic(
        &definitions.server_groups,
        &|nickname| definitions.servers.contains_key(nickname),
        label,
    )?;

    tracing::debug!(
        path = %label,
        servers = definitions.servers.len(),
        server_groups = definitions.server_groups.len(),
        default = definitions.default.as_deref().unwrap_or("-"),
        "server definition file is valid"
    );
    Ok(definitions)
}

fn server_table(
    raw: serde_json::Map<String, Value>,
    label: &str,
) -> Result<IndexMap<String, ServerEntry>, FormatError> {
    let mut table = IndexMap::with_capacity(raw.len());
    for (key, value) in raw {
        let element = || ElementPath::from_segments(["servers", key.as_str()]);
        let nickname = Nickname::new(key.clone()).map_err(|e| FormatError::Schema {
            path: label.to_string(),
            element: element(),
            message: e.to_string(),
        })?;
        let fields: ServerFields = serde_json::from_value(value).map_err(|e| FormatError::Schema {
            path: label.to_string(),
            element: element(),
            message: e.to_string(),
        })?;
        table.insert(key, ServerEntry { nickname, fields });
    }
    Ok(table)
}

fn group_table(
    raw: serde_json::Map<String, Value>,
    label: &str,
) -> Result<IndexMap<String, ServerGroup>, FormatError> {
    let mut table = IndexMap::with_capacity(raw.len());
    for (key, value) in raw {
        let group: ServerGroup = serde_json::from_value(value).map_err(|e| FormatError::Schema {
            path: label.to_string(),
            element: ElementPath::from_segments(["server_groups", key.as_str()]),
            message: e.to_string(),
        })?;
        table.insert(key, group);
    }
    Ok(table)
}

/// The default and every group member must name a server or a group.
fn check_references(definitions: &Definitions, label: &str) -> Result<(), FormatError> {
    if let Some(default) = &definitions.default {
        if !definitions.contains(default) {
            return Err(FormatError::UnknownDefault {
                path: label.to_string(),
                nickname: default.clone(),
            });
        }
    }

    for (group_nick, group) in definitions.server_groups.iter() {
        if let Some(member) = group.members.iter().find(|m| !definitions.contains(m)) {
            return Err(FormatError::UnknownMember {
                path: label.to_string(),
                group: group_nick.to_string(),
                member: member.clone(),
            });
        }
    }

    Ok(())
}
