//! Rendering of generated text.
//! The ignore file, the commit message and the next-steps summary are
//! MiniJinja templates rendered against the project name and the features.
use crate::error::{Error, Result};
use crate::features::FeatureSelection;
use crate::name::ProjectName;
use minijinja::Environment;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer instance with default environment.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        let mut env = self.env.clone();
        env.add_template("temp", template).map_err(Error::MinijinjaError)?;

        let tmpl = env.get_template("temp").map_err(Error::MinijinjaError)?;

        tmpl.render(context).map_err(Error::MinijinjaError)
    }
}

/// Context shared by every generated text.
pub fn render_context(name: &ProjectName, features: &FeatureSelection) -> serde_json::Value {
    serde_json::json!({
        "project_name": name.as_str(),
        "project_title": name.title(),
        "project_slug": name.lowercase(),
        "database_name": name.snake(),
        "features": features,
    })
}
