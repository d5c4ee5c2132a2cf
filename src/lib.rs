//! # fsweep
//!
//! Walk a file tree and list, delete, or gzip-archive the files that match
//! a filter.
//!
//! This crate provides a small, explicit pipeline: a depth-first [`run`]
//! over a root directory, a pure [`FileFilter`] deciding which files are
//! acted on, and a closed [`Action`] describing what happens to each of
//! them. The first error anywhere aborts the whole run and is returned
//! unchanged.
//!
//! ## Quick Start
//!
//! ### Listing Matching Files
//!
//! ```rust,no_run
//! use std::io;
//! use fsweep::{run, Action, Config, FileFilter, Result};
//!
//! fn main() -> Result<()> {
//!     let mut out = io::stdout();
//!     let mut audit = io::sink();
//!
//!     let summary = run("/var/log", Config {
//!         filter: FileFilter::new().extension(".log").min_size(1024),
//!         action: Action::List,
//!         out: &mut out,
//!         audit: &mut audit,
//!     })?;
//!
//!     eprintln!("matched {} files", summary.files_matched);
//!     Ok(())
//! }
//! ```
//!
//! ### Deleting, With an Audit Trail
//!
//! Every successful deletion is recorded on the audit sink, one line per
//! file, after the file is actually gone:
//!
//! ```rust,no_run
//! use std::fs::OpenOptions;
//! use std::io;
//! use fsweep::{run, Action, Config, FileFilter, Result};
//!
//! fn main() -> Result<()> {
//!     let mut out = io::stdout();
//!     let mut audit = OpenOptions::new()
//!         .append(true)
//!         .create(true)
//!         .open("deleted.log")?;
//!
//!     run("/var/log", Config {
//!         filter: FileFilter::new().extension(".tmp"),
//!         action: Action::Delete,
//!         out: &mut out,
//!         audit: &mut audit,
//!     })?;
//!     Ok(())
//! }
//! ```
//!
//! ### Archiving Into a Mirrored Tree
//!
//! Archiving compresses each matching file with gzip into a pre-existing
//! destination directory, mirroring the structure under the root:
//! `root/a/b/x.log` becomes `dest/a/b/x.log.gz`. Each archived path is
//! reported on the primary sink.
//!
//! ```rust,no_run
//! use std::io;
//! use fsweep::{run, Action, Config, FileFilter, Result};
//!
//! fn main() -> Result<()> {
//!     let mut out = io::stdout();
//!     let mut audit = io::sink();
//!
//!     let summary = run("/var/log", Config {
//!         filter: FileFilter::new().extension(".log"),
//!         action: Action::Archive { dest: "/backup".into() },
//!         out: &mut out,
//!         audit: &mut audit,
//!     })?;
//!
//!     eprintln!(
//!         "archived {} files at ratio {:.2}",
//!         summary.files_matched,
//!         summary.compression_ratio(),
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli` | No | Command-line interface tool |
//!
//! ## Error Handling
//!
//! All operations return [`Result<T>`], an alias for
//! `std::result::Result<T, Error>`. Runs are fail-fast: nothing is
//! retried, skipped, or logged-and-continued. See the [`error`] module
//! for the variants and matching examples.
//!
//! ## Minimum Supported Rust Version (MSRV)
//!
//! This crate requires **Rust 1.85** or later.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod action;
pub mod archive;
pub mod audit;
pub mod entry;
pub mod error;
pub mod filter;
pub mod walk;

pub use action::Action;
pub use archive::{ArchiveTarget, validate_destination};
pub use audit::AuditLog;
pub use entry::Entry;
pub use error::{Error, Result};
pub use filter::FileFilter;
pub use walk::{Config, RunSummary, run};
