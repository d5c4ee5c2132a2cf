//! File filtering predicate.

use crate::Entry;

/// Decides which traversal entries a sweep acts on.
///
/// A filter is a pure predicate over an [`Entry`]: it never touches the
/// filesystem. Directories are always excluded; files are excluded when
/// they are smaller than [`min_size`](Self::min_size) or, if an extension
/// filter is set, when their extension differs from it.
///
/// The extension of a file name is the suffix starting at the final dot,
/// dot included: `notes.txt` has extension `.txt`, `a.tar.gz` has `.gz`,
/// and a dotfile like `.gitignore` has `.gitignore`. Comparison is exact,
/// so a filter of `log` (no dot) or `""` matches nothing. Use `None`
/// (the default) to disable extension filtering.
///
/// # Example
///
/// ```rust
/// use fsweep::{Entry, FileFilter};
///
/// let filter = FileFilter::new().extension(".log").min_size(1024);
///
/// assert!(!filter.is_excluded(&Entry::new("app/server.log", false, 4096)));
/// assert!(filter.is_excluded(&Entry::new("app/server.log", false, 100)));
/// assert!(filter.is_excluded(&Entry::new("app/server.txt", false, 4096)));
/// assert!(filter.is_excluded(&Entry::new("app", true, 0)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileFilter {
    /// Required extension, leading dot included. `None` disables the rule.
    pub extension: Option<String>,
    /// Minimum file size in bytes, inclusive.
    pub min_size: u64,
}

impl FileFilter {
    /// Creates a filter that keeps every file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the required extension (leading dot included).
    pub fn extension(mut self, ext: impl Into<String>) -> Self {
        self.extension = Some(ext.into());
        self
    }

    /// Sets the minimum file size in bytes (inclusive).
    pub fn min_size(mut self, bytes: u64) -> Self {
        self.min_size = bytes;
        self
    }

    /// Returns true if the entry should be skipped by the sweep.
    pub fn is_excluded(&self, entry: &Entry) -> bool {
        if entry.is_directory || entry.size < self.min_size {
            return true;
        }
        match &self.extension {
            Some(want) => {
                let name = match entry.file_name() {
                    Some(name) => name.to_string_lossy(),
                    None => return true,
                };
                extension(&name) != Some(want.as_str())
            }
            None => false,
        }
    }
}

/// Extension of a file name: the suffix from the final dot, dot included.
/// `None` when the name contains no dot.
fn extension(name: &str) -> Option<&str> {
    name.rfind('.').map(|i| &name[i..])
}
