//! Prompt Loader
//!
//! Loads prompt templates from files or falls back to embedded defaults.

use std::path::{Path, PathBuf};

use eyre::{Result, eyre};
use handlebars::Handlebars;
use serde::Serialize;
use tracing::debug;

use super::embedded;

/// Name of the system prompt template
pub const TRAVEL_AGENT_TEMPLATE: &str = "travel_agent";

/// Follow-up details rendered into the system prompt
#[derive(Debug, Clone, Serialize)]
pub struct FollowUpContext {
    /// Section the change targets ("hotels", "flights", "activities", ...)
    pub section: String,
    /// Current plan as JSON
    pub current_plan: String,
}

/// Context for rendering the travel agent prompt
#[derive(Debug, Clone, Default, Serialize)]
pub struct PromptContext {
    pub requested_days: Option<u32>,
    pub travel_data: Option<String>,
    pub follow_up: Option<FollowUpContext>,
}

/// Loads and renders prompt templates
pub struct PromptLoader {
    hbs: Handlebars<'static>,
    /// Configured override directory (`chat.prompts-dir`)
    config_dir: Option<PathBuf>,
    /// Project override directory (`.tripplanner/prompts/`)
    project_dir: Option<PathBuf>,
}

impl PromptLoader {
    /// Create a loader rooted at `project_root`, with an optional configured directory
    pub fn new(config_dir: Option<&Path>, project_root: impl AsRef<Path>) -> Self {
        let project_dir = project_root.as_ref().join(".tripplanner/prompts");
        let config_dir = config_dir.map(Path::to_path_buf).filter(|d| d.exists());
        let project_dir = Some(project_dir).filter(|d| d.exists());
        debug!(?config_dir, ?project_dir, "PromptLoader::new: called");

        Self {
            hbs: Self::engine(),
            config_dir,
            project_dir,
        }
    }

    /// Create a loader that only uses embedded prompts (for testing)
    pub fn embedded_only() -> Self {
        debug!("PromptLoader::embedded_only: called");
        Self {
            hbs: Self::engine(),
            config_dir: None,
            project_dir: None,
        }
    }

    // Prompts are plain text, so no HTML escaping of interpolated JSON
    fn engine() -> Handlebars<'static> {
        let mut hbs = Handlebars::new();
        hbs.register_escape_fn(handlebars::no_escape);
        hbs
    }

    /// Load a template by name
    ///
    /// Checks in order:
    /// 1. Configured directory: `<prompts-dir>/{name}.pmt`
    /// 2. Project override: `.tripplanner/prompts/{name}.pmt`
    /// 3. Embedded fallback
    fn load_template(&self, name: &str) -> Result<String> {
        debug!(%name, "PromptLoader::load_template: called");
        for dir in [&self.config_dir, &self.project_dir].into_iter().flatten() {
            let path = dir.join(format!("{}.pmt", name));
            if path.exists() {
                debug!(?path, "PromptLoader::load_template: found override");
                return std::fs::read_to_string(&path)
                    .map_err(|e| eyre!("Failed to read prompt {}: {}", path.display(), e));
            }
        }

        if let Some(content) = embedded::get_embedded(name) {
            debug!(%name, "PromptLoader::load_template: using embedded");
            return Ok(content.to_string());
        }

        Err(eyre!("Prompt template not found: {}", name))
    }

    /// Render a template with the given context
    pub fn render(&self, template_name: &str, context: &PromptContext) -> Result<String> {
        debug!(%template_name, ?context.requested_days, "PromptLoader::render: called");
        let template = self.load_template(template_name)?;
        self.hbs
            .render_template(&template, context)
            .map_err(|e| eyre!("Failed to render template {}: {}", template_name, e))
    }

    /// Render the travel agent system prompt
    pub fn system_prompt(&self, context: &PromptContext) -> Result<String> {
        self.render(TRAVEL_AGENT_TEMPLATE, context)
    }
}
