//! Render-then-write orchestration.
//! A single step renders one template and writes it below a function's
//! directory; [`Generator::run`] drives a batch of steps and keeps going when
//! one of them fails.

use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::Result;
use crate::files::write_string_to_file;
use crate::function::Function;
use crate::renderer::TemplateRenderer;
use crate::report::Reporter;

/// One generated file: the template source and the path, relative to the
/// function directory, it is written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub template: String,
    pub file: PathBuf,
}

impl Step {
    pub fn new<S: Into<String>, P: Into<PathBuf>>(template: S, file: P) -> Self {
        Self { template: template.into(), file: file.into() }
    }
}

/// Outcome of a batch run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub written: Vec<PathBuf>,
    pub failed: Vec<PathBuf>,
}

impl Summary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Renders `template` with empty data and writes it to
/// `<function abs path>/<file>`.
///
/// # Returns
/// * `Result<PathBuf>` - Path of the written file
///
/// # Errors
/// Rendering and writing errors are returned unchanged. Nothing is written
/// when rendering fails.
pub fn create_file<P: AsRef<Path>>(
    renderer: &dyn TemplateRenderer,
    function: &dyn Function,
    template: &str,
    file: P,
    reporter: &dyn Reporter,
) -> Result<PathBuf> {
    let data = serde_json::Value::Object(serde_json::Map::new());
    create_file_with(renderer, function, template, file, &data, reporter)
}

/// Same as [`create_file`] with caller supplied render data.
pub fn create_file_with<P: AsRef<Path>>(
    renderer: &dyn TemplateRenderer,
    function: &dyn Function,
    template: &str,
    file: P,
    data: &serde_json::Value,
    reporter: &dyn Reporter,
) -> Result<PathBuf> {
    let target = function.abs_path().join(file);
    debug!("Rendering template for '{}'", target.display());
    let content = renderer.render(template, data)?;
    write_string_to_file(&target, &content, reporter)?;
    Ok(target)
}

/// Runs generation steps against a renderer, reporting failures as it goes.
pub struct Generator<'a> {
    renderer: &'a dyn TemplateRenderer,
    reporter: &'a dyn Reporter,
    data: serde_json::Value,
}

impl<'a> Generator<'a> {
    pub fn new(renderer: &'a dyn TemplateRenderer, reporter: &'a dyn Reporter) -> Self {
        Self {
            renderer,
            reporter,
            data: serde_json::Value::Object(serde_json::Map::new()),
        }
    }

    /// Replaces the render data shared by every step.
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = data;
        self
    }

    /// Executes a single step, returning its error to the caller.
    pub fn create_file(&self, function: &dyn Function, step: &Step) -> Result<PathBuf> {
        create_file_with(
            self.renderer,
            function,
            &step.template,
            &step.file,
            &self.data,
            self.reporter,
        )
    }

    /// Executes every step in order.
    ///
    /// A failing step is reported and recorded in the summary; the remaining
    /// steps still run.
    pub fn run(&self, function: &dyn Function, steps: &[Step]) -> Summary {
        let mut summary = Summary::default();
        for step in steps {
            match self.create_file(function, step) {
                Ok(target) => {
                    info!("Created '{}'", target.display());
                    summary.written.push(target);
                }
                Err(e) => {
                    self.reporter.report(&e);
                    summary.failed.push(function.abs_path().join(&step.file));
                }
            }
        }
        summary
    }
}
