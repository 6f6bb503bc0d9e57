//! One request/response cycle of the travel chat
//!
//! `prepare` runs before the model is called (routing, prompt, history) and
//! `finish` interprets the complete reply once streaming is over. Both the
//! REPL and the HTTP server drive turns through these two calls.

use chrono::Local;
use eyre::{Context, Result};
use querydetect::{
    DayCountMismatch, FollowUpRouting, TargetSection, check_day_count, extract_requested_days, route_message,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::llm::{CompletionRequest, Message};
use crate::prompts::{FollowUpContext, PromptContext, PromptLoader};
use crate::travel::{parse_travel_request, search_travel};
use crate::trip::{FALLBACK_REPLY, ModelOutput, TripPlan, parse_model_output};

/// A prior chat message as the browser client sends it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryEntry {
    pub content: Option<String>,
    /// "user" for the traveler; anything else is the assistant
    pub sender: String,
}

impl HistoryEntry {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            sender: "user".to_string(),
        }
    }

    pub fn ai(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            sender: "ai".to_string(),
        }
    }

    /// Trimmed model message, or `None` for blank entries
    fn to_message(&self) -> Option<Message> {
        let content = self.content.as_deref().map(str::trim).filter(|c| !c.is_empty())?;
        Some(if self.sender == "user" {
            Message::user(content)
        } else {
            Message::assistant(content)
        })
    }
}

/// Everything decided before the model is called
#[derive(Debug, Clone)]
pub struct PreparedTurn {
    pub request: CompletionRequest,
    pub routing: FollowUpRouting,
    pub requested_days: Option<u32>,
}

/// Result of interpreting the model's full reply
#[derive(Debug, Clone, PartialEq)]
pub struct TurnOutcome {
    /// New or updated plan; `None` leaves the current plan as it was
    pub plan: Option<TripPlan>,

    /// Text to show in the conversation
    pub reply: String,

    pub day_mismatch: Option<DayCountMismatch>,
}

/// Entry points for a single chat turn
pub struct ChatTurn;

impl ChatTurn {
    /// Route the message and build the completion request
    pub fn prepare(
        message: &str,
        history: &[HistoryEntry],
        current_plan: Option<&TripPlan>,
        config: &Config,
        prompts: &PromptLoader,
    ) -> Result<PreparedTurn> {
        debug!(
            message_len = message.len(),
            history = history.len(),
            has_plan = current_plan.is_some(),
            "ChatTurn::prepare: called"
        );
        let routing = route_message(message, current_plan.is_some());
        let requested_days = extract_requested_days(message);

        // Inventory is only worth the prompt space once a destination is known
        let travel_data = if config.chat.include_mock_data {
            let criteria = parse_travel_request(message, Local::now().date_naive());
            if criteria.destination.is_some() {
                let context = search_travel(&criteria).prompt_context();
                debug!(has_data = context.is_some(), "ChatTurn::prepare: mock inventory searched");
                context
            } else {
                debug!("ChatTurn::prepare: no destination, skipping inventory");
                None
            }
        } else {
            None
        };

        let follow_up = match (routing.target_section(), current_plan) {
            (Some(target), Some(plan)) => Some(FollowUpContext {
                section: section_label(target).to_string(),
                current_plan: serde_json::to_string_pretty(plan).context("Failed to serialize current plan")?,
            }),
            _ => None,
        };

        let context = PromptContext {
            requested_days,
            travel_data,
            follow_up,
        };
        let system_prompt = prompts.system_prompt(&context)?;

        let mut messages: Vec<Message> = history.iter().filter_map(HistoryEntry::to_message).collect();
        if messages.len() > config.chat.history_limit {
            let skip = messages.len() - config.chat.history_limit;
            debug!(skip, "ChatTurn::prepare: dropping old history");
            messages.drain(..skip);
        }
        messages.push(Message::user(message));

        info!(
            is_follow_up = routing.is_follow_up,
            target = ?routing.target_section(),
            ?requested_days,
            messages = messages.len(),
            "Prepared chat turn"
        );

        Ok(PreparedTurn {
            request: CompletionRequest {
                system_prompt,
                messages,
                max_tokens: config.llm.max_tokens,
                temperature: config.llm.temperature,
            },
            routing,
            requested_days,
        })
    }

    /// Interpret the complete reply against the current plan
    pub fn finish(prepared: &PreparedTurn, text: &str, current_plan: Option<&TripPlan>) -> TurnOutcome {
        debug!(text_len = text.len(), has_plan = current_plan.is_some(), "ChatTurn::finish: called");
        let target = prepared.routing.target_section();

        let (plan, reply) = match parse_model_output(text) {
            ModelOutput::Plan(new_plan) => match (current_plan, target) {
                (Some(existing), Some(target)) => {
                    debug!(%target, "ChatTurn::finish: merging full plan into follow-up target");
                    let mut merged = existing.clone();
                    merged.merge_from(new_plan, target);
                    let reply = updated_reply(target);
                    (Some(merged), reply)
                }
                _ => {
                    let reply = new_plan.confirmation_message();
                    (Some(new_plan), reply)
                }
            },
            ModelOutput::Update(update) => match current_plan {
                Some(existing) => {
                    let target = target.unwrap_or(TargetSection::Multiple);
                    let mut updated = existing.clone();
                    let replaced = updated.apply_update(&update, target);
                    debug!(replaced, %target, "ChatTurn::finish: applied follow-up update");
                    let reply = update.message.clone().unwrap_or_else(|| updated_reply(target));
                    (Some(updated), reply)
                }
                None => {
                    warn!("Follow-up update received with no plan to apply it to");
                    (None, update.message.unwrap_or_else(|| FALLBACK_REPLY.to_string()))
                }
            },
            ModelOutput::Text(text) => (None, text),
        };

        let day_mismatch = plan
            .as_ref()
            .and_then(|p| check_day_count(prepared.requested_days, p.day_count()));
        if let Some(mismatch) = &day_mismatch {
            warn!(
                requested = mismatch.requested,
                actual = mismatch.actual,
                "Itinerary day count mismatch: {}",
                mismatch
            );
        }

        TurnOutcome {
            plan,
            reply,
            day_mismatch,
        }
    }
}

/// How a target reads inside "wants to change the ..."
fn section_label(target: TargetSection) -> &'static str {
    match target {
        TargetSection::Hotels | TargetSection::Flights | TargetSection::Activities => target.as_str(),
        TargetSection::Multiple => "dates, budget and the sections they affect",
        TargetSection::General => "plan",
    }
}

fn updated_reply(target: TargetSection) -> String {
    match target {
        TargetSection::Hotels | TargetSection::Flights | TargetSection::Activities => {
            format!("I've updated the {} in your trip plan. Type /plan to see the changes.", target)
        }
        TargetSection::Multiple | TargetSection::General => {
            "I've updated your trip plan. Type /plan to see the changes.".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::client::mock::MockLlmClient;
    use crate::llm::{LlmClient, Role, StreamChunk};
    use crate::trip::{Hotel, PlanUpdate};
    use tokio::sync::mpsc;

    const PLAN_JSON: &str = r#"{"type": "trip_plan", "destination": "Rome, Italy", "duration": "3 days",
        "budget": "$2,000", "travelers": 2,
        "flights": [{"id": "f1", "airline": "ITA"}],
        "hotels": [{"id": "h1", "name": "Hotel Artemide"}],
        "itinerary": [{"day": 1, "title": "Arrival"}, {"day": 2, "title": "Vatican"}, {"day": 3, "title": "Colosseum"}],
        "totalCost": {"flights": 800, "hotels": 900, "activities": 100, "total": 1800}}"#;

    fn existing_plan() -> TripPlan {
        match parse_model_output(PLAN_JSON) {
            ModelOutput::Plan(plan) => plan,
            other => panic!("fixture did not parse: {other:?}"),
        }
    }

    fn prepare(message: &str, history: &[HistoryEntry], plan: Option<&TripPlan>, config: &Config) -> PreparedTurn {
        ChatTurn::prepare(message, history, plan, config, &PromptLoader::embedded_only()).unwrap()
    }

    #[test]
    fn test_prepare_fresh_request() {
        let turn = prepare("Plan a 3 day trip to Rome", &[], None, &Config::default());

        assert!(!turn.routing.is_follow_up);
        assert_eq!(turn.requested_days, Some(3));
        assert!(turn.request.system_prompt.contains("3-day trip"));
        assert!(!turn.request.system_prompt.contains("AVAILABLE INVENTORY"));
        assert_eq!(turn.request.messages.len(), 1);
        assert_eq!(turn.request.messages[0].role, Role::User);
        assert_eq!(turn.request.max_tokens, 10_000);
    }

    #[test]
    fn test_prepare_follow_up_carries_plan() {
        let plan = existing_plan();
        let turn = prepare("find me a cheaper hotel", &[], Some(&plan), &Config::default());

        assert!(turn.routing.is_follow_up);
        assert_eq!(turn.routing.target_section(), Some(TargetSection::Hotels));
        assert_eq!(turn.routing.section_states.len(), 1);
        assert!(turn.request.system_prompt.contains("wants to change the hotels"));
        assert!(turn.request.system_prompt.contains("Hotel Artemide"));
    }

    #[test]
    fn test_prepare_same_message_without_plan_is_fresh() {
        let turn = prepare("find me a cheaper hotel", &[], None, &Config::default());
        assert!(!turn.routing.is_follow_up);
        assert!(turn.routing.analysis.is_none());
        assert!(!turn.request.system_prompt.contains("wants to change"));
    }

    #[test]
    fn test_prepare_filters_and_limits_history() {
        let mut history = vec![HistoryEntry::user("   "), HistoryEntry::default()];
        for i in 0..12 {
            if i % 2 == 0 {
                history.push(HistoryEntry::user(format!("  question {i}  ")));
            } else {
                history.push(HistoryEntry::ai(format!("answer {i}")));
            }
        }

        let turn = prepare("thanks", &history, None, &Config::default());
        let messages = &turn.request.messages;

        assert_eq!(messages.len(), 11);
        assert_eq!(messages[0].content, "question 2");
        assert_eq!(messages[0].role, Role::User);
        assert_eq!(messages[1].role, Role::Assistant);
        assert_eq!(messages[10].content, "thanks");
    }

    #[test]
    fn test_unknown_sender_is_assistant() {
        let entry = HistoryEntry {
            content: Some("hi".to_string()),
            sender: "bot".to_string(),
        };
        let turn = prepare("hello", &[entry], None, &Config::default());
        assert_eq!(turn.request.messages[0].role, Role::Assistant);
    }

    #[test]
    fn test_prepare_with_mock_data() {
        let mut config = Config::default();
        config.chat.include_mock_data = true;

        let turn = prepare("Plan a 5 days trip to Paris", &[], None, &config);
        assert!(turn.request.system_prompt.contains("AVAILABLE INVENTORY"));

        let turn = prepare("hello there", &[], None, &config);
        assert!(!turn.request.system_prompt.contains("AVAILABLE INVENTORY"));
    }

    #[test]
    fn test_finish_new_plan() {
        let turn = prepare("Plan a 3 day trip to Rome", &[], None, &Config::default());
        let outcome = ChatTurn::finish(&turn, PLAN_JSON, None);

        let plan = outcome.plan.unwrap();
        assert_eq!(plan.destination, "Rome, Italy");
        assert!(outcome.reply.starts_with("I've created a 3 days itinerary for Rome, Italy!"));
        assert_eq!(outcome.day_mismatch, None);
    }

    #[test]
    fn test_finish_reports_day_mismatch() {
        let turn = prepare("Plan a 5 day trip to Rome", &[], None, &Config::default());
        let outcome = ChatTurn::finish(&turn, PLAN_JSON, None);

        assert!(outcome.plan.is_some());
        assert_eq!(
            outcome.day_mismatch,
            Some(DayCountMismatch {
                requested: 5,
                actual: 3
            })
        );
    }

    #[test]
    fn test_finish_update_narrowed_to_target() {
        let plan = existing_plan();
        let turn = prepare("find me a cheaper hotel", &[], Some(&plan), &Config::default());
        let reply = r#"{"type": "follow_up", "message": "Here are cheaper hotels",
            "hotels": [{"id": "h2", "name": "Hotel Santa Maria"}],
            "flights": [{"id": "f2", "airline": "Ryanair"}]}"#;

        let outcome = ChatTurn::finish(&turn, reply, Some(&plan));
        let updated = outcome.plan.unwrap();

        assert_eq!(outcome.reply, "Here are cheaper hotels");
        assert_eq!(updated.hotels[0].id, "h2");
        assert_eq!(updated.flights[0].id, "f1");
        assert_eq!(updated.day_count(), 3);
    }

    #[test]
    fn test_finish_update_without_message() {
        let plan = existing_plan();
        let turn = prepare("find me a cheaper hotel", &[], Some(&plan), &Config::default());
        let update = PlanUpdate {
            hotels: Some(vec![Hotel::default()]),
            ..Default::default()
        };
        let text = serde_json::to_string(&crate::trip::PlanResponse::FollowUp(update)).unwrap();

        let outcome = ChatTurn::finish(&turn, &text, Some(&plan));
        assert_eq!(
            outcome.reply,
            "I've updated the hotels in your trip plan. Type /plan to see the changes."
        );
    }

    #[test]
    fn test_finish_full_plan_on_follow_up_is_merged() {
        let plan = existing_plan();
        let turn = prepare("find me a cheaper hotel", &[], Some(&plan), &Config::default());
        let mut replacement = plan.clone();
        replacement.destination = "Naples".to_string();
        replacement.hotels[0].id = "h9".to_string();
        let text = serde_json::to_string(&crate::trip::PlanResponse::TripPlan(replacement)).unwrap();

        let outcome = ChatTurn::finish(&turn, &text, Some(&plan));
        let merged = outcome.plan.unwrap();
        assert_eq!(merged.destination, "Rome, Italy");
        assert_eq!(merged.hotels[0].id, "h9");
    }

    #[test]
    fn test_finish_update_without_plan() {
        let turn = prepare("hello", &[], None, &Config::default());
        let outcome = ChatTurn::finish(&turn, r#"{"type": "follow_up", "message": "Done"}"#, None);
        assert_eq!(outcome.plan, None);
        assert_eq!(outcome.reply, "Done");
    }

    #[test]
    fn test_finish_prose_and_empty() {
        let turn = prepare("hello", &[], None, &Config::default());

        let outcome = ChatTurn::finish(&turn, "Where are you flying from?", None);
        assert_eq!(outcome.plan, None);
        assert_eq!(outcome.reply, "Where are you flying from?");

        let outcome = ChatTurn::finish(&turn, "  ", None);
        assert_eq!(outcome.reply, FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn test_turn_through_streaming_client() {
        let client = MockLlmClient::with_texts(&[PLAN_JSON]);
        let turn = prepare("Plan a 3 day trip to Rome", &[HistoryEntry::ai("Hi!")], None, &Config::default());

        // Small buffer: the reply has more pieces than the channel holds, so
        // the receiver has to drain concurrently with the stream.
        let (tx, mut rx) = mpsc::channel(8);
        let drain = tokio::spawn(async move {
            let mut streamed = String::new();
            while let Some(chunk) = rx.recv().await {
                if let StreamChunk::TextDelta(delta) = chunk {
                    streamed.push_str(&delta);
                }
            }
            streamed
        });
        let response = client.stream(turn.request.clone(), tx).await.unwrap();
        let streamed = drain.await.unwrap();
        assert!(PLAN_JSON.split_inclusive(' ').count() > 8);
        assert_eq!(response.content.as_deref(), Some(streamed.as_str()));

        let outcome = ChatTurn::finish(&turn, &streamed, None);
        assert_eq!(outcome.plan.map(|p| p.day_count()), Some(3));

        let sent = client.requests();
        assert_eq!(sent[0].messages.len(), 2);
        assert_eq!(sent[0].messages[0].role, Role::Assistant);
    }
}
