//! Gzip archiving of matched files into a mirrored directory tree.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use flate2::{Compression, GzBuilder};

use crate::{Error, Result};

/// Where one source file lands under the archive destination.
///
/// The placement mirrors the source's location relative to the traversal
/// root: archiving `root/a/b/notes.txt` into `dest` targets
/// `dest/a/b/notes.txt.gz`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveTarget {
    /// Directory under the destination root holding the compressed copy.
    pub dir: PathBuf,
    /// Full target path: `dir` joined with the source base name plus `.gz`.
    pub path: PathBuf,
}

impl ArchiveTarget {
    /// Computes the placement of `path` (a file under `root`) below
    /// `dest_root`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutsideRoot`] when `path` does not sit under
    /// `root`; a placement that would escape the destination is never
    /// produced.
    pub fn resolve(dest_root: &Path, root: &Path, path: &Path) -> Result<Self> {
        let parent = path.parent().unwrap_or(Path::new(""));
        let relative = parent.strip_prefix(root).map_err(|_| Error::OutsideRoot {
            path: path.to_path_buf(),
            root: root.to_path_buf(),
        })?;
        let name = path.file_name().ok_or_else(|| {
            Error::archive(
                path,
                io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"),
            )
        })?;

        let mut file_name = name.to_os_string();
        file_name.push(".gz");
        let dir = dest_root.join(relative);
        let path = dir.join(file_name);
        Ok(Self { dir, path })
    }
}

/// Checks that the archive destination exists and is a directory.
///
/// Runs once per sweep, before traversal starts; no file is touched when
/// this fails.
pub fn validate_destination(dest: &Path) -> Result<()> {
    match fs::metadata(dest) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(Error::DestinationNotDirectory {
            path: dest.to_path_buf(),
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(Error::DestinationNotDirectory {
            path: dest.to_path_buf(),
        }),
        Err(e) => Err(Error::Io(e)),
    }
}

/// Compresses `path` into its mirrored location under `dest_root`.
///
/// Intermediate directories are created as needed. The target is created
/// with truncation, so re-archiving a file that shrank never leaves stale
/// bytes from the previous copy. The original base name is stored in the
/// gzip header's name field. Returns the number of compressed bytes
/// written, counted after the encoder is finished and the target is
/// synced; a failure at any stage, the final flush included, is an error.
pub(crate) fn archive_file(dest_root: &Path, root: &Path, path: &Path) -> Result<u64> {
    let target = ArchiveTarget::resolve(dest_root, root, path)?;
    let wrap = |e: io::Error| Error::archive(path, e);

    fs::create_dir_all(&target.dir).map_err(wrap)?;

    let mut source = File::open(path).map_err(wrap)?;
    let out = File::create(&target.path).map_err(wrap)?;

    let base = match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => String::new(),
    };
    let mut encoder = GzBuilder::new()
        .filename(base)
        .write(out, Compression::default());
    io::copy(&mut source, &mut encoder).map_err(wrap)?;

    // Close failure overrides an otherwise successful copy.
    let out = encoder.finish().map_err(wrap)?;
    out.sync_all().map_err(wrap)?;
    Ok(out.metadata().map_err(wrap)?.len())
}
