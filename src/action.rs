//! Sweep actions and their per-file implementations.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::audit::AuditLog;
use crate::{Error, Result};

/// What happens to every file that survives filtering.
///
/// Exactly one action applies per run. The variants are closed: a run is
/// always in exactly one mode, and a destination travels with the
/// `Archive` variant instead of living in separate shared state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Action {
    /// Write each surviving path to the primary sink, one per line.
    #[default]
    List,
    /// Remove each surviving file, recording it in the audit log.
    Delete,
    /// Write a gzip copy of each surviving file under `dest`, mirroring
    /// its directory structure relative to the traversal root, then report
    /// the path on the primary sink.
    Archive {
        /// Pre-existing destination directory for the mirrored tree.
        dest: PathBuf,
    },
}

impl Action {
    /// Resolves flag-style selectors into one action.
    ///
    /// Precedence: an archive destination wins over `delete`, which wins
    /// over `list`. `List` is also the fallback when nothing is requested.
    pub fn resolve(list: bool, delete: bool, archive: Option<PathBuf>) -> Self {
        match (archive, delete, list) {
            (Some(dest), _, _) => Action::Archive { dest },
            (None, true, _) => Action::Delete,
            (None, false, _) => Action::List,
        }
    }

    /// Returns true for [`Action::List`].
    pub fn is_list(&self) -> bool {
        matches!(self, Action::List)
    }

    /// Returns true for [`Action::Delete`].
    pub fn is_delete(&self) -> bool {
        matches!(self, Action::Delete)
    }

    /// Returns true for [`Action::Archive`].
    pub fn is_archive(&self) -> bool {
        matches!(self, Action::Archive { .. })
    }
}

/// Writes the path to the primary sink, one line per file.
pub(crate) fn list_file(path: &Path, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", path.display())?;
    Ok(())
}

/// Removes the file, then records the deletion.
///
/// The audit record is written only after the removal succeeded; a file
/// that could not be removed leaves no trace in the log.
pub(crate) fn delete_file(path: &Path, audit: &mut AuditLog<'_>) -> Result<()> {
    fs::remove_file(path).map_err(|e| Error::delete(path, e))?;
    audit.record(path)
}
