//! Interactive chat session

use std::io::{self, Write};
use std::sync::Arc;

use colored::Colorize;
use eyre::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tokio::sync::mpsc;
use tracing::debug;

use super::report::RoutingReport;
use super::turn::{ChatTurn, HistoryEntry};
use crate::config::Config;
use crate::llm::{CompletionRequest, CompletionResponse, LlmClient, StopReason, StreamChunk, TokenUsage};
use crate::prompts::PromptLoader;
use crate::trip::TripPlan;

const PLAN_PROGRESS_NOTE: &str = "[building your trip plan...]";

/// What to put on screen for a streamed delta
#[derive(Debug, Clone, PartialEq, Eq)]
enum Emit {
    Text(String),
    Progress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FilterState {
    Undecided,
    Prose,
    Json,
}

/// Keeps raw plan JSON off the terminal
///
/// The first non-whitespace character decides: `{` means a structured
/// payload, which is swallowed after a single progress note.
#[derive(Debug)]
struct StreamFilter {
    state: FilterState,
    pending: String,
}

impl StreamFilter {
    fn new() -> Self {
        Self {
            state: FilterState::Undecided,
            pending: String::new(),
        }
    }

    fn push(&mut self, delta: &str) -> Option<Emit> {
        match self.state {
            FilterState::Prose => Some(Emit::Text(delta.to_string())),
            FilterState::Json => None,
            FilterState::Undecided => {
                self.pending.push_str(delta);
                match self.pending.trim_start().chars().next() {
                    None => None,
                    Some('{') => {
                        self.state = FilterState::Json;
                        self.pending.clear();
                        Some(Emit::Progress)
                    }
                    Some(_) => {
                        self.state = FilterState::Prose;
                        Some(Emit::Text(std::mem::take(&mut self.pending)))
                    }
                }
            }
        }
    }

    /// True once prose has been echoed to the terminal
    fn echoed_text(&self) -> bool {
        self.state == FilterState::Prose
    }
}

/// Interactive travel chat session
pub struct ChatSession {
    llm: Arc<dyn LlmClient>,
    config: Config,
    prompts: PromptLoader,
    history: Vec<HistoryEntry>,
    plan: Option<TripPlan>,
    usage: TokenUsage,
}

impl ChatSession {
    pub fn new(llm: Arc<dyn LlmClient>, config: Config, prompts: PromptLoader) -> Self {
        debug!(model = %config.llm.model, "ChatSession::new: called");
        Self {
            llm,
            config,
            prompts,
            history: Vec::new(),
            plan: None,
            usage: TokenUsage::default(),
        }
    }

    /// Run the chat main loop
    pub async fn run(&mut self, initial_message: Option<String>) -> Result<()> {
        self.print_welcome();

        if let Some(message) = initial_message {
            println!("{} {}", ">".bright_green(), message);
            self.process_user_input(&message).await?;
        }

        let mut rl = DefaultEditor::new().map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;

        loop {
            let readline = rl.readline(&format!("{} ", ">".bright_green()));

            match readline {
                Ok(line) => {
                    let input = line.trim();
                    if input.is_empty() {
                        continue;
                    }

                    let _ = rl.add_history_entry(input);

                    if input.starts_with('/') {
                        match self.handle_slash_command(input) {
                            SlashResult::Continue => continue,
                            SlashResult::Quit => break,
                        }
                    } else if let Err(e) = self.process_user_input(input).await {
                        // A failed turn leaves the session usable
                        println!("{} {}", "Error:".red(), e);
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!();
                    break;
                }
                Err(err) => {
                    return Err(eyre::eyre!("Readline error: {}", err));
                }
            }
        }

        println!("Goodbye!");
        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("{}", "Trip Planner".bright_cyan().bold());
        println!("Model: {} ({})", self.config.llm.model, self.config.llm.provider);
        println!("Tell me where you'd like to go. Type {} for help, {} to quit", "/help".yellow(), "/quit".yellow());
        println!();
    }

    fn handle_slash_command(&mut self, input: &str) -> SlashResult {
        let (cmd, rest) = match input.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (input, ""),
        };
        debug!(%cmd, "handle_slash_command: called");

        match cmd {
            "/help" | "/h" => {
                self.print_help();
                SlashResult::Continue
            }
            "/quit" | "/q" | "/exit" => SlashResult::Quit,
            "/clear" | "/c" => {
                self.history.clear();
                self.plan = None;
                println!("{}", "Conversation and trip plan cleared.".dimmed());
                SlashResult::Continue
            }
            "/history" => {
                self.print_history();
                SlashResult::Continue
            }
            "/plan" | "/p" => {
                match &self.plan {
                    Some(plan) => {
                        println!();
                        println!("{}", "Trip Plan:".bright_cyan());
                        println!("{}", plan.render_summary());
                        println!();
                    }
                    None => println!("{}", "No trip plan yet.".dimmed()),
                }
                SlashResult::Continue
            }
            "/usage" => {
                println!(
                    "Tokens: {} in, {} out (~${:.4})",
                    self.usage.input_tokens,
                    self.usage.output_tokens,
                    self.usage.cost_usd(&self.config.llm.model)
                );
                SlashResult::Continue
            }
            "/analyze" => {
                if rest.is_empty() {
                    println!("Usage: {} <message>", "/analyze".yellow());
                } else {
                    print!("{}", RoutingReport::new(rest, self.plan.is_some()).to_text());
                }
                SlashResult::Continue
            }
            _ => {
                println!("{} Unknown command: {}", "?".yellow(), cmd);
                println!("Type {} for available commands", "/help".yellow());
                SlashResult::Continue
            }
        }
    }

    fn print_help(&self) {
        println!();
        println!("{}", "Available Commands:".bright_cyan());
        println!("  {:14} Show this help", "/help".yellow());
        println!("  {:14} Exit the chat", "/quit".yellow());
        println!("  {:14} Clear conversation and trip plan", "/clear".yellow());
        println!("  {:14} Show conversation history", "/history".yellow());
        println!("  {:14} Show the current trip plan", "/plan".yellow());
        println!("  {:14} Show token usage and cost", "/usage".yellow());
        println!("  {:14} Show how a message would be routed", "/analyze".yellow());
        println!();
        println!("{}", "Tips:".bright_cyan());
        println!("  Start with a destination, dates, budget and who is traveling.");
        println!("  Once a plan exists, ask for changes like \"find a cheaper hotel\".");
        println!();
    }

    fn print_history(&self) {
        if self.history.is_empty() {
            println!("{}", "No conversation history.".dimmed());
            return;
        }

        println!();
        println!("{}", "Conversation History:".bright_cyan());
        for (i, entry) in self.history.iter().enumerate() {
            let role = if entry.sender == "user" {
                "You".bright_green()
            } else {
                "Agent".bright_blue()
            };
            let text = entry.content.as_deref().unwrap_or_default();
            let preview: String = text.chars().take(50).collect();
            let preview = if text.chars().count() > 50 {
                format!("{}...", preview)
            } else {
                preview
            };
            println!("  {}. {}: {}", i + 1, role, preview);
        }
        println!();
    }

    /// Run one chat turn and fold the result into the session
    async fn process_user_input(&mut self, input: &str) -> Result<()> {
        let prepared = ChatTurn::prepare(input, &self.history, self.plan.as_ref(), &self.config, &self.prompts)?;

        for state in &prepared.routing.section_states {
            println!("{}", state.message.dimmed());
        }

        let (response, echoed) = self.call_llm_streaming(prepared.request.clone()).await?;
        self.usage.add(&response.usage);

        if response.stop_reason == StopReason::MaxTokens {
            println!("{}", "\n[Response truncated - max tokens reached]".yellow());
        }

        let text = response.content.clone().unwrap_or_default();
        let outcome = ChatTurn::finish(&prepared, &text, self.plan.as_ref());

        if !echoed {
            println!("{}", outcome.reply);
        }
        if let Some(mismatch) = &outcome.day_mismatch {
            println!("{} {}", "Note:".yellow(), mismatch);
        }

        if let Some(plan) = outcome.plan {
            self.plan = Some(plan);
        }
        self.history.push(HistoryEntry::user(input));
        self.history.push(HistoryEntry::ai(&outcome.reply));

        println!();
        Ok(())
    }

    /// Stream the reply to stdout; the flag reports whether prose was echoed
    async fn call_llm_streaming(&self, request: CompletionRequest) -> Result<(CompletionResponse, bool)> {
        let (tx, mut rx) = mpsc::channel::<StreamChunk>(100);

        let print_handle = tokio::spawn(async move {
            let mut filter = StreamFilter::new();
            while let Some(chunk) = rx.recv().await {
                match chunk {
                    StreamChunk::TextDelta(text) => match filter.push(&text) {
                        Some(Emit::Text(text)) => {
                            print!("{}", text);
                            let _ = io::stdout().flush();
                        }
                        Some(Emit::Progress) => {
                            print!("{}", PLAN_PROGRESS_NOTE.dimmed());
                            let _ = io::stdout().flush();
                        }
                        None => {}
                    },
                    StreamChunk::MessageStart { .. } | StreamChunk::MessageDone { .. } => {}
                    StreamChunk::Error(err) => {
                        eprintln!("\n{} {}", "Stream error:".red(), err);
                    }
                }
            }
            println!();
            filter.echoed_text()
        });

        let response = self
            .llm
            .stream(request, tx)
            .await
            .map_err(|e| eyre::eyre!("LLM error: {}", e))?;

        let echoed = print_handle.await.unwrap_or(false);
        Ok((response, echoed))
    }
}

/// Result of handling a slash command
enum SlashResult {
    Continue,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::client::mock::MockLlmClient;

    fn session(replies: &[&str]) -> ChatSession {
        ChatSession::new(
            Arc::new(MockLlmClient::with_texts(replies)),
            Config::default(),
            PromptLoader::embedded_only(),
        )
    }

    const PLAN_JSON: &str = r#"{"type": "trip_plan", "destination": "Tokyo, Japan", "duration": "2 days",
        "itinerary": [{"day": 1}, {"day": 2}], "hotels": [{"id": "h1"}], "totalCost": {"total": 3000}}"#;

    #[test]
    fn test_filter_passes_prose() {
        let mut filter = StreamFilter::new();
        assert_eq!(filter.push("  "), None);
        assert_eq!(filter.push("Hello "), Some(Emit::Text("  Hello ".to_string())));
        assert_eq!(filter.push("there"), Some(Emit::Text("there".to_string())));
        assert!(filter.echoed_text());
    }

    #[test]
    fn test_filter_swallows_json() {
        let mut filter = StreamFilter::new();
        assert_eq!(filter.push("\n{\"type\""), Some(Emit::Progress));
        assert_eq!(filter.push(": \"trip_plan\"}"), None);
        assert!(!filter.echoed_text());
    }

    #[test]
    fn test_filter_empty_stream() {
        let filter = StreamFilter::new();
        assert!(!filter.echoed_text());
    }

    #[tokio::test]
    async fn test_plan_then_follow_up() {
        let update = r#"{"type": "follow_up", "message": "Swapped the hotel", "hotels": [{"id": "h2"}]}"#;
        let mut s = session(&[PLAN_JSON, update]);

        s.process_user_input("Plan a 2 day trip to Tokyo").await.unwrap();
        assert_eq!(s.plan.as_ref().map(|p| p.day_count()), Some(2));
        assert_eq!(s.history.len(), 2);
        assert!(
            s.history[1]
                .content
                .as_deref()
                .is_some_and(|c| c.starts_with("I've created a 2 days itinerary"))
        );

        s.process_user_input("find me a cheaper hotel").await.unwrap();
        let plan = s.plan.as_ref().unwrap();
        assert_eq!(plan.hotels[0].id, "h2");
        assert_eq!(plan.day_count(), 2);
        assert_eq!(s.history[3].content.as_deref(), Some("Swapped the hotel"));
    }

    #[tokio::test]
    async fn test_prose_reply_keeps_plan() {
        let mut s = session(&["Where are you flying from?"]);
        s.process_user_input("I want to go to Rome").await.unwrap();
        assert!(s.plan.is_none());
        assert_eq!(s.history[1].content.as_deref(), Some("Where are you flying from?"));
    }

    #[tokio::test]
    async fn test_llm_error_propagates() {
        let mut s = session(&[]);
        assert!(s.process_user_input("hello").await.is_err());
        assert!(s.history.is_empty());
    }

    #[test]
    fn test_slash_commands() {
        let mut s = session(&[]);
        assert!(matches!(s.handle_slash_command("/help"), SlashResult::Continue));
        assert!(matches!(s.handle_slash_command("/plan"), SlashResult::Continue));
        assert!(matches!(s.handle_slash_command("/analyze find a cheaper hotel"), SlashResult::Continue));
        assert!(matches!(s.handle_slash_command("/bogus"), SlashResult::Continue));
        assert!(matches!(s.handle_slash_command("/quit"), SlashResult::Quit));
        assert!(matches!(s.handle_slash_command("/exit"), SlashResult::Quit));
    }

    #[test]
    fn test_clear_drops_plan() {
        let mut s = session(&[]);
        s.plan = Some(TripPlan::default());
        s.history.push(HistoryEntry::user("hi"));
        s.handle_slash_command("/clear");
        assert!(s.plan.is_none());
        assert!(s.history.is_empty());
    }
}
