//! # Server Selection
//!
//! A test runner needs two settings to know which servers to run against:
//! the server definition file and an optional nickname. [`ServerSelection`]
//! carries both explicitly; it is built once per run and resolved into the
//! ordered list of servers, one test execution each.

use std::path::{Path, PathBuf};

use thiserror::Error;

use srvdef_core::{LookupError, Nickname, ServerDefinition, ServerDefinitionFileError};

use crate::file::{ServerDefinitionFile, DEFAULT_FILEPATH};

/// Failure to resolve a [`ServerSelection`].
///
/// Either variant is expected to abort the whole test run with this message.
#[derive(Error, Debug)]
pub enum SelectionError {
    /// The server definition file could not be loaded.
    #[error(transparent)]
    File(#[from] ServerDefinitionFileError),

    /// The selected nickname is not in the file.
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

/// Which servers a test run targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSelection {
    file: PathBuf,
    nickname: Option<Nickname>,
}

impl ServerSelection {
    /// Select `nickname` from `file`, or the file's default if `None`.
    pub fn new(file: impl Into<PathBuf>, nickname: Option<Nickname>) -> Self {
        Self {
            file: file.into(),
            nickname,
        }
    }

    /// Select from [`DEFAULT_FILEPATH`] in the current directory.
    pub fn with_default_file(nickname: Option<Nickname>) -> Self {
        Self::new(DEFAULT_FILEPATH, nickname)
    }

    /// The server definition file.
    pub fn file(&self) -> &Path {
        &self.file
    }

    /// The selected nickname; `None` selects the file's default.
    pub fn nickname(&self) -> Option<&Nickname> {
        self.nickname.as_ref()
    }

    /// Load the selected server definition file.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::File`] if the file cannot be loaded.
    pub fn load(&self) -> Result<ServerDefinitionFile, SelectionError> {
        Ok(ServerDefinitionFile::open(&self.file)?)
    }

    /// Resolve the selection against an already loaded file.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] if the selected nickname is not in the file.
    pub fn resolve_in(
        &self,
        file: &ServerDefinitionFile,
    ) -> Result<Vec<ServerDefinition>, LookupError> {
        match &self.nickname {
            Some(nickname) => file.list_servers(nickname.as_str()),
            None => file.list_default_servers(),
        }
    }

    /// Load the file and resolve the selection.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::File`] if the file cannot be loaded and
    /// [`SelectionError::Lookup`] if the nickname is not in it.
    pub fn resolve(&self) -> Result<Vec<ServerDefinition>, SelectionError> {
        let file = self.load()?;
        let servers = self.resolve_in(&file)?;
        tracing::debug!(
            path = %self.file.display(),
            nickname = self.nickname.as_ref().map(Nickname::as_str).unwrap_or("<default>"),
            servers = servers.len(),
            "resolved server selection"
        );
        Ok(servers)
    }
}

impl Default for ServerSelection {
    fn default() -> Self {
        Self::with_default_file(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_selection_uses_conventional_file() {
        let sel = ServerSelection::default();
        assert_eq!(sel.file(), Path::new("server_definitions.yaml"));
        assert_eq!(sel.nickname(), None);
    }

    #[test]
    fn resolve_in_uses_nickname_or_default() {
        let file = ServerDefinitionFile::from_yaml(
            "sel.yaml",
            "servers:\n  a: {description: a, details: {}}\n  b: {description: b, details: {}}\ndefault: b\n",
        )
        .unwrap();

        let by_default = ServerSelection::new("sel.yaml", None).resolve_in(&file).unwrap();
        assert_eq!(by_default.len(), 1);
        assert_eq!(by_default[0].nickname().as_str(), "b");

        let by_name = ServerSelection::new("sel.yaml", Some(Nickname::new("a").unwrap()))
            .resolve_in(&file)
            .unwrap();
        assert_eq!(by_name[0].nickname().as_str(), "a");
    }

    #[test]
    fn missing_file_is_file_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ServerSelection::new(dir.path().join("nope.yaml"), None)
            .resolve()
            .unwrap_err();
        assert!(
            matches!(err, SelectionError::File(ServerDefinitionFileError::NotFound { .. })),
            "{err}"
        );
    }
}
