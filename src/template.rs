//! Turns template files on disk into generation steps.

use crate::error::{Error, Result};
use crate::generator::Step;
use crate::report::Reporter;
use log::debug;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Suffix removed from template file names when computing output paths.
pub const TEMPLATE_SUFFIX: &str = ".j2";

/// Output path for a template at `relative`, with a trailing `.j2` removed.
///
/// A file named just `.j2` keeps its name.
pub fn output_path<P: AsRef<Path>>(relative: P) -> PathBuf {
    let relative = relative.as_ref();
    match relative.file_name().and_then(|n| n.to_str()) {
        Some(name) if name.len() > TEMPLATE_SUFFIX.len() && name.ends_with(TEMPLATE_SUFFIX) => {
            relative.with_file_name(&name[..name.len() - TEMPLATE_SUFFIX.len()])
        }
        _ => relative.to_path_buf(),
    }
}

fn read_step(source: &Path, relative: &Path) -> Result<Step> {
    let template = std::fs::read_to_string(source).map_err(|e| Error::ReadTemplateError {
        path: source.display().to_string(),
        source: e,
    })?;
    Ok(Step::new(template, output_path(relative)))
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(|name| name.starts_with('.'))
}

/// Loads the steps described by `path`.
///
/// A file yields one step named after the file. A directory is walked
/// recursively and every file yields a step whose output path mirrors its
/// location below `path`. Dot-prefixed entries below `path` are skipped, and
/// files that cannot be read as UTF-8 text are reported and left out.
///
/// # Errors
/// * `Error::NotFound` if `path` is neither a file nor a directory
/// * `Error::ReadTemplateError` if `path` is a file that cannot be read
pub fn load_steps<P: AsRef<Path>>(path: P, reporter: &dyn Reporter) -> Result<Vec<Step>> {
    let path = path.as_ref();
    if path.is_file() {
        let name = path.file_name().ok_or_else(|| Error::NotFound {
            path: path.display().to_string(),
        })?;
        return Ok(vec![read_step(path, Path::new(name))?]);
    }
    if !path.is_dir() {
        return Err(Error::NotFound { path: path.display().to_string() });
    }

    let mut steps = Vec::new();
    let walker = WalkDir::new(path)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e));
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                reporter.report(&Error::IoError(e.into()));
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(path)
            .map_err(|e| Error::ConfigError(e.to_string()))?;
        debug!("Found template '{}'", relative.display());
        match read_step(entry.path(), relative) {
            Ok(step) => steps.push(step),
            Err(e) => reporter.report(&e),
        }
    }
    Ok(steps)
}
