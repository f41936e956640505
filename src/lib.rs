//! fngen renders templates into function directories.
//! It provides filesystem checks, template rendering with a `comment` helper,
//! and a writer that never overwrites existing files.

/// Command-line interface module for the fngen binary
pub mod cli;

/// Turns text into `//` line comments
pub mod comment;

/// Render data loading from JSON or YAML files
pub mod config;

/// Error types and handling for fngen
pub mod error;

/// Existence and emptiness checks, non-destructive file writing
pub mod files;

/// Generation targets exposing an output directory
pub mod function;

/// Render-then-write orchestration
pub mod generator;

/// Template parsing and rendering functionality
pub mod renderer;

/// Injected sink for non-fatal diagnostics
pub mod report;

/// Template files to generation steps
pub mod template;
