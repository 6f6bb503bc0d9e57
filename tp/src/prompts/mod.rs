//! Prompt Template System
//!
//! Template loading chain:
//! 1. `<chat.prompts-dir>/{name}.pmt` (configured override)
//! 2. `.tripplanner/prompts/{name}.pmt` (project override)
//! 3. Embedded fallback in code
//!
//! Templates use Handlebars syntax for variable substitution.

pub mod embedded;
mod loader;

pub use loader::{FollowUpContext, PromptContext, PromptLoader, TRAVEL_AGENT_TEMPLATE};
