//! Filesystem helpers used by the generator.
//! Existence and emptiness checks, and a writer that never replaces a file
//! that is already on disk.

use std::fs::{self, OpenOptions};
use std::io::{self, Read};
use std::path::Path;

use log::debug;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::report::Reporter;

fn stat_error(path: &Path, source: io::Error) -> Error {
    if source.kind() == io::ErrorKind::NotFound {
        Error::NotFound { path: path.display().to_string() }
    } else {
        Error::StatError { path: path.display().to_string(), source }
    }
}

/// Reports whether `path` exists.
///
/// An empty path is never looked up and yields `false`. Metadata failures
/// other than "not found" are handed to `reporter` and also yield `false`,
/// so a path hidden behind a permission error is indistinguishable from a
/// missing one.
pub fn exists<P: AsRef<Path>>(path: P, reporter: &dyn Reporter) -> bool {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return false;
    }
    match fs::metadata(path) {
        Ok(_) => true,
        Err(e) if e.kind() == io::ErrorKind::NotFound => false,
        Err(e) => {
            reporter.report(&stat_error(path, e));
            false
        }
    }
}

/// Checks whether `path` is empty.
///
/// A regular file is empty when it has zero bytes. A directory is empty when
/// none of its direct entries has a name that doesn't start with a dot, so a
/// directory holding only `.git` counts as empty. Nested directories are not
/// inspected.
///
/// # Errors
/// * `Error::NotFound` if `path` does not exist
/// * `Error::StatError` if its metadata cannot be read
/// * `Error::IoError` if the directory cannot be opened
///
/// Failures on individual entries are reported and skipped.
pub fn is_empty<P: AsRef<Path>>(path: P, reporter: &dyn Reporter) -> Result<bool> {
    let path = path.as_ref();
    let metadata = fs::metadata(path).map_err(|e| stat_error(path, e))?;
    if !metadata.is_dir() {
        return Ok(metadata.len() == 0);
    }

    for entry in WalkDir::new(path).min_depth(1).max_depth(1) {
        match entry {
            Ok(entry) => {
                let name = entry.file_name().to_string_lossy();
                if !name.is_empty() && !name.starts_with('.') {
                    debug!("'{}' is not empty: found '{}'", path.display(), name);
                    return Ok(false);
                }
            }
            Err(e) if e.depth() == 0 => return Err(Error::IoError(e.into())),
            Err(e) => reporter.report(&Error::IoError(e.into())),
        }
    }
    Ok(true)
}

/// Writes everything `reader` yields into a new file at `path`.
///
/// Missing parent directories are created. The target is opened with
/// `create_new`, so a file appearing between the existence check and the
/// open is not truncated either.
///
/// # Returns
/// * `Result<u64>` - Number of bytes written
///
/// # Errors
/// * `Error::AlreadyExists` if `path` is already present
/// * `Error::CreateDirError`, `Error::CreateFileError`, `Error::CopyError`
///   for the corresponding filesystem failures
pub fn write_to_file<P, R>(path: P, mut reader: R, reporter: &dyn Reporter) -> Result<u64>
where
    P: AsRef<Path>,
    R: Read,
{
    let path = path.as_ref();
    if exists(path, reporter) {
        return Err(Error::AlreadyExists { path: path.display().to_string() });
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| Error::CreateDirError {
            path: parent.display().to_string(),
            source,
        })?;
    }

    let mut file = OpenOptions::new().write(true).create_new(true).open(path).map_err(
        |source| match source.kind() {
            io::ErrorKind::AlreadyExists => {
                Error::AlreadyExists { path: path.display().to_string() }
            }
            _ => Error::CreateFileError { path: path.display().to_string(), source },
        },
    )?;

    let written = io::copy(&mut reader, &mut file)
        .map_err(|source| Error::CopyError { path: path.display().to_string(), source })?;
    debug!("Wrote {} bytes to '{}'", written, path.display());
    Ok(written)
}

/// String flavour of [`write_to_file`].
pub fn write_string_to_file<P: AsRef<Path>>(
    path: P,
    content: &str,
    reporter: &dyn Reporter,
) -> Result<u64> {
    write_to_file(path, content.as_bytes(), reporter)
}
