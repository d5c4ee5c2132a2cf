//! Sweep configuration and the traversal loop.

use std::io::Write;
use std::path::Path;

use log::debug;
use walkdir::WalkDir;

use crate::action::{self, Action};
use crate::audit::AuditLog;
use crate::filter::FileFilter;
use crate::{Entry, Result, archive};

/// Settings and sinks for one sweep run.
///
/// A `Config` is built once and consumed by [`run`]; the filter and action
/// do not change mid-run. Both sinks are explicit values owned by the
/// caller: there is no ambient output state anywhere in the crate.
pub struct Config<'a> {
    /// Which entries survive filtering.
    pub filter: FileFilter,
    /// What happens to each surviving file.
    pub action: Action,
    /// Primary sink: listed and archived paths, one per line.
    pub out: &'a mut dyn Write,
    /// Audit sink for deletion records; written only in delete mode.
    pub audit: &'a mut dyn Write,
}

/// Counters from a completed sweep run.
#[must_use = "run summary should be checked to verify what the sweep did"]
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Nodes yielded by traversal, directories and the root included.
    pub entries_visited: usize,
    /// Files that survived the filter and were actioned.
    pub files_matched: usize,
    /// Total size in bytes of the matched files.
    pub bytes_processed: u64,
    /// Compressed bytes written; zero outside archive mode.
    pub bytes_written: u64,
}

impl RunSummary {
    /// Returns the compression ratio (written / processed) of an archive
    /// run.
    pub fn compression_ratio(&self) -> f64 {
        if self.bytes_processed == 0 {
            1.0
        } else {
            self.bytes_written as f64 / self.bytes_processed as f64
        }
    }
}

/// Walks the tree under `root` and applies the configured action to every
/// file the filter keeps.
///
/// Traversal is depth-first with entries sorted by file name, so output
/// order is deterministic. The first error of any kind aborts the run and
/// is returned unchanged; files already actioned stay actioned. In archive
/// mode the destination is validated before the walk starts.
///
/// # Example
///
/// ```rust,no_run
/// use std::io;
/// use fsweep::{run, Action, Config, FileFilter};
///
/// let mut out = io::stdout();
/// let mut audit = io::sink();
/// let summary = run(".", Config {
///     filter: FileFilter::new().extension(".log").min_size(1024),
///     action: Action::List,
///     out: &mut out,
///     audit: &mut audit,
/// })?;
/// eprintln!("{} of {} entries matched", summary.files_matched, summary.entries_visited);
/// # Ok::<(), fsweep::Error>(())
/// ```
pub fn run(root: impl AsRef<Path>, config: Config<'_>) -> Result<RunSummary> {
    let root = root.as_ref();
    let Config {
        filter,
        action,
        out,
        audit,
    } = config;

    if let Action::Archive { dest } = &action {
        archive::validate_destination(dest)?;
    }

    let mut audit = AuditLog::new(audit);
    let mut summary = RunSummary::default();

    for item in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = Entry::from_walkdir(&item?)?;
        summary.entries_visited += 1;

        if filter.is_excluded(&entry) {
            debug!("excluded: {}", entry.path.display());
            continue;
        }
        summary.files_matched += 1;
        summary.bytes_processed += entry.size;

        match &action {
            Action::List => action::list_file(entry.as_path(), out)?,
            Action::Delete => action::delete_file(entry.as_path(), &mut audit)?,
            Action::Archive { dest } => {
                summary.bytes_written += archive::archive_file(dest, root, entry.as_path())?;
                action::list_file(entry.as_path(), out)?;
            }
        }
    }

    Ok(summary)
}
