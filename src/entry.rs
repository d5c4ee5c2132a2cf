//! Traversal entry type.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::Result;

/// One node yielded by tree traversal.
///
/// An `Entry` is a plain snapshot of a filesystem node: the path as seen
/// during the walk plus the two metadata facts filtering needs. Traversal
/// does not follow symbolic links, so for a link the size and directory
/// flag describe the link itself.
///
/// This struct is marked `#[non_exhaustive]`; construct it with
/// [`Entry::new`] or [`Entry::from_walkdir`].
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Entry {
    /// The path of this node, as produced by the walk (root-relative when
    /// the walk started from a relative root).
    pub path: PathBuf,
    /// Whether this node is a directory.
    pub is_directory: bool,
    /// Size in bytes as reported by metadata.
    pub size: u64,
}

impl Entry {
    /// Creates an entry from its parts.
    pub fn new(path: impl Into<PathBuf>, is_directory: bool, size: u64) -> Self {
        Self {
            path: path.into(),
            is_directory,
            size,
        }
    }

    /// Creates an entry from a [`walkdir::DirEntry`], reading its metadata.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Walk`](crate::Error::Walk) if the metadata cannot
    /// be read (e.g. the file vanished mid-walk).
    pub fn from_walkdir(entry: &walkdir::DirEntry) -> Result<Self> {
        let meta = entry.metadata()?;
        Ok(Self {
            path: entry.path().to_path_buf(),
            is_directory: meta.is_dir(),
            size: meta.len(),
        })
    }

    /// Returns the file name (last component of the path), if any.
    pub fn file_name(&self) -> Option<&OsStr> {
        self.path.file_name()
    }

    /// Returns true if this is a file (not a directory).
    pub fn is_file(&self) -> bool {
        !self.is_directory
    }

    /// Returns the path as a [`Path`].
    pub fn as_path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_is_file() {
        let file = Entry::new("logs/app.log", false, 42);
        assert!(file.is_file());
        assert!(!file.is_directory);

        let dir = Entry::new("logs", true, 0);
        assert!(!dir.is_file());
        assert!(dir.is_directory);
    }

    #[test]
    fn test_entry_file_name() {
        let entry = Entry::new("path/to/file.txt", false, 0);
        assert_eq!(entry.file_name(), Some(OsStr::new("file.txt")));
        assert_eq!(entry.as_path(), Path::new("path/to/file.txt"));
    }

    #[test]
    fn test_entry_from_walkdir() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("data.bin"), b"12345").unwrap();

        let mut found = false;
        for item in walkdir::WalkDir::new(dir.path()) {
            let item = item.unwrap();
            let entry = Entry::from_walkdir(&item).unwrap();
            if entry.file_name() == Some(OsStr::new("data.bin")) {
                assert!(entry.is_file());
                assert_eq!(entry.size, 5);
                found = true;
            } else {
                assert!(entry.is_directory);
            }
        }
        assert!(found, "walk should have yielded the file");
    }
}
