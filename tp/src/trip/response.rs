//! Interpreting the model's reply

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use super::plan::{PlanUpdate, TripPlan};

/// Shown when the model produced nothing usable
pub const FALLBACK_REPLY: &str =
    "I received your request, but I'm having trouble processing it right now. Please try again.";

/// Structured payloads the model may send, discriminated by `type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlanResponse {
    TripPlan(TripPlan),
    FollowUp(PlanUpdate),
}

/// Why a reply is not a structured payload
#[derive(Debug, Error)]
pub enum TripPlanError {
    #[error("reply is empty")]
    Empty,

    #[error("reply looks like truncated JSON ({0} bytes)")]
    Truncated(usize),

    #[error("reply is not JSON: {0}")]
    NotJson(#[from] serde_json::Error),

    #[error("unsupported payload type: {0}")]
    UnsupportedType(String),
}

/// What the model's full reply turned out to be
#[derive(Debug, Clone, PartialEq)]
pub enum ModelOutput {
    Plan(TripPlan),
    Update(PlanUpdate),
    Text(String),
}

/// True when the reply opens a JSON object but never closes it
///
/// Usually means the token limit cut the plan short.
pub fn looks_truncated(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.starts_with('{') && !trimmed.ends_with('}')
}

/// Parse the whole reply as a structured payload
pub fn parse_plan_response(text: &str) -> Result<PlanResponse, TripPlanError> {
    debug!(text_len = text.len(), "parse_plan_response: called");
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(TripPlanError::Empty);
    }
    if looks_truncated(trimmed) {
        return Err(TripPlanError::Truncated(trimmed.len()));
    }

    let value: serde_json::Value = serde_json::from_str(trimmed)?;
    match value.get("type").and_then(|t| t.as_str()) {
        Some("trip_plan") | Some("follow_up") => Ok(serde_json::from_value(value)?),
        Some(other) => Err(TripPlanError::UnsupportedType(other.to_string())),
        None => Err(TripPlanError::UnsupportedType("<missing>".to_string())),
    }
}

/// Classify the reply: a plan, a follow-up update, or prose
///
/// Anything that is not a recognized JSON payload is passed through as text;
/// an empty reply becomes the fallback apology.
pub fn parse_model_output(text: &str) -> ModelOutput {
    debug!(text_len = text.len(), "parse_model_output: called");
    match parse_plan_response(text) {
        Ok(PlanResponse::TripPlan(plan)) => {
            debug!(destination = %plan.destination, "parse_model_output: trip plan");
            ModelOutput::Plan(plan)
        }
        Ok(PlanResponse::FollowUp(update)) => {
            debug!("parse_model_output: follow-up update");
            ModelOutput::Update(update)
        }
        Err(TripPlanError::Empty) => {
            debug!("parse_model_output: empty reply");
            ModelOutput::Text(FALLBACK_REPLY.to_string())
        }
        Err(TripPlanError::Truncated(len)) => {
            warn!(len, "Response appears to be truncated JSON - increase max-tokens");
            ModelOutput::Text(text.to_string())
        }
        Err(e) => {
            debug!(error = %e, "parse_model_output: treating as text");
            ModelOutput::Text(text.to_string())
        }
    }
}
