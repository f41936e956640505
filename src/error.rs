//! Error handling for fngen.
//! Defines the error taxonomy shared by the filesystem helpers, the renderer
//! and the generator.

use std::io;
use thiserror::Error;

/// Errors produced by fngen operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Generic filesystem failure
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// A path that must exist is missing
    #[error("'{path}' does not exist.")]
    NotFound { path: String },

    /// Reading metadata failed for a reason other than absence
    #[error("Cannot stat '{path}': {source}.")]
    StatError { path: String, source: io::Error },

    /// The template source could not be parsed
    #[error("Template syntax error: {0}.")]
    TemplateSyntaxError(minijinja::Error),

    /// The template parsed but failed while executing against its data
    #[error("Template render error: {0}.")]
    TemplateRenderError(minijinja::Error),

    /// The write target is already present and will not be overwritten
    #[error("'{path}' already exists.")]
    AlreadyExists { path: String },

    #[error("Failed to create directory '{path}': {source}.")]
    CreateDirError { path: String, source: io::Error },

    #[error("Failed to create file '{path}': {source}.")]
    CreateFileError { path: String, source: io::Error },

    #[error("Failed to write content to '{path}': {source}.")]
    CopyError { path: String, source: io::Error },

    /// A template file is unreadable or not UTF-8 text
    #[error("Failed to read template '{path}': {source}.")]
    ReadTemplateError { path: String, source: io::Error },

    /// Render data could not be loaded or has the wrong shape
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// One or more generation steps failed
    #[error("Generation error: {0}.")]
    GenerationError(String),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Prints the error to stderr and exits with status code 1.
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{err}");
    std::process::exit(1);
}
