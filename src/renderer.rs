//! Template rendering for fngen.
//! Wraps MiniJinja and exposes the `comment` helper to templates.
use crate::comment::commentify;
use crate::error::{Error, Result};
use minijinja::{Environment, UndefinedBehavior};

/// Name under which [`commentify`] is registered, as a function and a filter.
pub const COMMENT_HELPER: &str = "comment";

const TEMPLATE_NAME: &str = "temp";

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Data the template reads fields from
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

fn comment(text: String) -> String {
    commentify(&text)
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer with `comment` registered.
    ///
    /// Printing an undefined value is an error, while `if` tests on a missing
    /// key are simply false. The final newline of a template is kept.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::SemiStrict);
        env.set_keep_trailing_newline(true);
        env.add_function(COMMENT_HELPER, comment);
        env.add_filter(COMMENT_HELPER, comment);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja.
    ///
    /// # Errors
    /// * `Error::TemplateSyntaxError` if the template does not parse
    /// * `Error::TemplateRenderError` if execution fails, e.g. on an
    ///   undefined field
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        let mut env = self.env.clone();
        env.add_template_owned(TEMPLATE_NAME, template.to_string())
            .map_err(Error::TemplateSyntaxError)?;

        let tmpl = env.get_template(TEMPLATE_NAME).map_err(Error::TemplateSyntaxError)?;

        tmpl.render(context).map_err(Error::TemplateRenderError)
    }
}

/// Renders `template` against `context` with a default [`MiniJinjaRenderer`].
pub fn render_str(template: &str, context: &serde_json::Value) -> Result<String> {
    MiniJinjaRenderer::new().render(template, context)
}
