//! Travel chat: turn orchestration and the interactive session
//!
//! The REPL streams the agent's reply as it arrives, routes follow-ups to
//! the plan section they target, and keeps the current trip plan in memory.

mod report;
mod session;
mod turn;

pub use report::RoutingReport;
pub use session::ChatSession;
pub use turn::{ChatTurn, HistoryEntry, PreparedTurn, TurnOutcome};

use eyre::Result;
use tracing::info;

use crate::config::Config;
use crate::llm::create_client;
use crate::prompts::PromptLoader;

/// Run the interactive chat
///
/// This is the main entry point for `tp chat`.
pub async fn run_interactive(config: Config, initial_message: Option<String>) -> Result<()> {
    config.validate()?;

    let llm = create_client(&config.llm).map_err(|e| eyre::eyre!("Failed to create LLM client: {}", e))?;

    let project_root = std::env::current_dir()?;
    let prompts = PromptLoader::new(config.chat.prompts_dir.as_deref(), &project_root);

    info!(provider = %config.llm.provider, model = %config.llm.model, "Starting chat session");
    let mut session = ChatSession::new(llm, config, prompts);
    session.run(initial_message).await
}
