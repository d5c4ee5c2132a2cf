//! Error types for tree sweep operations.
//!
//! This module provides the [`Error`] enum which represents all possible
//! failure modes of a sweep run, along with a convenient [`Result<T>`] type
//! alias.
//!
//! # Error Handling
//!
//! All fallible operations in this crate return `Result<T, Error>`. A run
//! aborts on the first error; nothing is retried or skipped. You can handle
//! errors using pattern matching or the `?` operator:
//!
//! ## Using the `?` Operator
//!
//! ```rust,no_run
//! use std::io;
//! use fsweep::{run, Action, Config, FileFilter, Result};
//!
//! fn list_logs(root: &str) -> Result<()> {
//!     let mut out = io::stdout();
//!     let mut audit = io::sink();
//!     run(root, Config {
//!         filter: FileFilter::new().extension(".log"),
//!         action: Action::List,
//!         out: &mut out,
//!         audit: &mut audit,
//!     })?;
//!     Ok(())
//! }
//! ```
//!
//! ## Matching on Error Variants
//!
//! For fine-grained handling, match on specific variants:
//!
//! ```rust,no_run
//! use std::io;
//! use fsweep::{run, Action, Config, Error, FileFilter};
//!
//! fn archive_logs(root: &str, dest: &str) {
//!     let mut out = io::stdout();
//!     let mut audit = io::sink();
//!     let config = Config {
//!         filter: FileFilter::new().extension(".log"),
//!         action: Action::Archive { dest: dest.into() },
//!         out: &mut out,
//!         audit: &mut audit,
//!     };
//!     match run(root, config) {
//!         Ok(summary) => println!("archived {} files", summary.files_matched),
//!         Err(Error::DestinationNotDirectory { path }) => {
//!             eprintln!("create {} first", path.display());
//!         }
//!         Err(Error::Walk(e)) => eprintln!("traversal failed: {}", e),
//!         Err(e) => eprintln!("{}", e),
//!     }
//! }
//! ```

use std::io;
use std::path::{Path, PathBuf};

/// The main error type for sweep operations.
///
/// Each variant carries the context needed to diagnose the failure,
/// in particular the filesystem path involved where one exists. Any
/// of these errors aborts the whole run at the point of failure.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Traversal failed: the root does not exist, a directory could not be
    /// read, or an entry vanished between listing and stat.
    ///
    /// Wraps [`walkdir::Error`], which carries the path and depth at which
    /// traversal broke down.
    #[error("traversal error: {0}")]
    Walk(#[from] walkdir::Error),

    /// An I/O error outside any more specific category.
    ///
    /// This is primarily sink failures: writing a listed path or an audit
    /// record to an output that is broken or full.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A file matched the filter but could not be removed.
    ///
    /// The file may be gone, read-only, or in a directory the process
    /// cannot modify. Nothing was written to the audit sink for it.
    #[error("failed to delete '{}': {source}", path.display())]
    Delete {
        /// The file that could not be removed.
        path: PathBuf,
        /// The underlying removal error.
        #[source]
        source: io::Error,
    },

    /// A file matched the filter but could not be archived.
    ///
    /// Covers every stage of archiving a single file: opening the source,
    /// creating the mirrored directory or target file, streaming the
    /// compressed bytes, and flushing the result to disk.
    #[error("failed to archive '{}': {source}", path.display())]
    Archive {
        /// The source file being archived.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The archive destination is missing or not a directory.
    ///
    /// Checked once before traversal starts; no file is touched when this
    /// is returned.
    #[error("archive destination '{}' is not a directory", path.display())]
    DestinationNotDirectory {
        /// The destination that failed validation.
        path: PathBuf,
    },

    /// A file's archive placement could not be derived because the file
    /// does not sit under the traversal root.
    #[error("'{}' is not under the traversal root '{}'", path.display(), root.display())]
    OutsideRoot {
        /// The file whose placement was being computed.
        path: PathBuf,
        /// The traversal root it escapes.
        root: PathBuf,
    },
}

impl Error {
    /// Returns the filesystem path associated with this error, if any.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fsweep::Error;
    /// use std::io;
    ///
    /// let err = Error::Delete {
    ///     path: "/tmp/gone.log".into(),
    ///     source: io::Error::new(io::ErrorKind::NotFound, "not found"),
    /// };
    /// assert_eq!(err.path().unwrap().to_str(), Some("/tmp/gone.log"));
    /// ```
    pub fn path(&self) -> Option<&Path> {
        match self {
            Error::Walk(e) => e.path(),
            Error::Io(_) => None,
            Error::Delete { path, .. } => Some(path),
            Error::Archive { path, .. } => Some(path),
            Error::DestinationNotDirectory { path } => Some(path),
            Error::OutsideRoot { path, .. } => Some(path),
        }
    }

    /// Returns the [`io::ErrorKind`] underlying this error, if any.
    ///
    /// Provides unified access to the I/O cause across variants, for
    /// callers that branch on `NotFound` vs `PermissionDenied` and the
    /// like.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Error::Walk(e) => e.io_error().map(io::Error::kind),
            Error::Io(e) => Some(e.kind()),
            Error::Delete { source, .. } => Some(source.kind()),
            Error::Archive { source, .. } => Some(source.kind()),
            Error::DestinationNotDirectory { .. } => None,
            Error::OutsideRoot { .. } => None,
        }
    }

    /// Creates a [`Error::Delete`] with the failing path.
    pub fn delete(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Delete {
            path: path.into(),
            source,
        }
    }

    /// Creates an [`Error::Archive`] with the failing source path.
    pub fn archive(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Archive {
            path: path.into(),
            source,
        }
    }
}

/// A specialized Result type for sweep operations.
///
/// This is defined as `std::result::Result<T, Error>` for convenience.
///
/// # Example
///
/// ```rust
/// use fsweep::Result;
///
/// fn my_function() -> Result<()> {
///     // Operations that may fail...
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;
