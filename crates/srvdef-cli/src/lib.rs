//! # srvdef-cli: CLI for Server Definition Files
//!
//! Provides the `srvdef` command-line interface.
//!
//! ## Subcommands
//!
//! - `srvdef validate`: Load and check a server definition file.
//! - `srvdef list`: Resolve the servers a test run targets: the selected
//!   nickname, or the file's default.
//! - `srvdef show`: Print one server definition.
//! - `srvdef all`: Print every server definition in file order.
//!
//! ```bash
//! srvdef --file server_definitions.yaml validate
//! srvdef list --server grp1
//! srvdef show srv1 --format yaml
//! ```
//!
//! ## Exit Codes
//!
//! `0` on success, `1` when the file is invalid or a nickname is unknown,
//! `2` on operational errors such as a failed write to stdout.

pub mod list;
pub mod output;
pub mod show;
pub mod validate;

use std::path::Path;

use srvdef_file::ServerDefinitionFile;

/// Load a server definition file, reporting a failure on stderr.
///
/// Returns `None` after printing the error; callers exit with status 1.
pub(crate) fn load_or_report(file: &Path) -> Option<ServerDefinitionFile> {
    match ServerDefinitionFile::open(file) {
        Ok(sdf) => Some(sdf),
        Err(e) => {
            tracing::debug!(error = ?e, "failed to load server definition file");
            eprintln!("ERROR: {e}");
            None
        }
    }
}
