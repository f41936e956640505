//! Generation targets.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// A generation target owning an output directory.
pub trait Function {
    /// Absolute directory generated files are written under.
    fn abs_path(&self) -> PathBuf;
}

/// A function backed by a directory on the local filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDir {
    path: PathBuf,
}

impl FunctionDir {
    /// Creates a function rooted at `path`.
    ///
    /// Relative paths are resolved against the current working directory.
    ///
    /// # Errors
    /// * `Error::IoError` if `path` is relative and the current directory
    ///   cannot be determined
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_err(Error::IoError)?.join(path)
        };
        Ok(Self { path })
    }

    /// Last component of the function directory, if any.
    pub fn name(&self) -> Option<&str> {
        self.path.file_name().and_then(|n| n.to_str())
    }
}

impl Function for FunctionDir {
    fn abs_path(&self) -> PathBuf {
        self.path.clone()
    }
}
