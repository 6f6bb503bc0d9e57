//! Route handlers

use std::convert::Infallible;

use async_stream::stream;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::sse::{Event as SseEvent, KeepAlive, Sse};
use futures::Stream;
use serde::Deserialize;
use serde_json::{Value, json};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use super::AppState;
use crate::chat::{ChatTurn, HistoryEntry, RoutingReport};
use crate::llm::StreamChunk;
use crate::travel::{
    SearchCriteria, TravelSearchResults, generate_itinerary, search_activities, search_hotels, search_travel,
};
use crate::trip::TripPlan;

const MAX_ITINERARY_DAYS: u32 = 30;

type ApiError = (StatusCode, Json<Value>);

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(json!({ "error": message.into() })))
}

/// Non-blank string message, or `None` for anything else
fn message_text(message: Option<&Value>) -> Option<&str> {
    message.and_then(Value::as_str).filter(|m| !m.trim().is_empty())
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(super) struct ChatRequest {
    message: Option<Value>,
    /// Entries that are not `{content, sender}` objects are skipped
    conversation_history: Vec<Value>,
    /// Current plan, when the client has one; enables follow-up routing
    trip_plan: Option<TripPlan>,
}

pub(super) async fn health() -> &'static str {
    "ok"
}

/// Stream a travel agent reply as server-sent events
pub(super) async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Sse<impl Stream<Item = Result<SseEvent, Infallible>>>, ApiError> {
    debug!(history = payload.conversation_history.len(), "chat: called");
    let message = message_text(payload.message.as_ref())
        .ok_or_else(|| api_error(StatusCode::BAD_REQUEST, "Valid message content is required"))?
        .to_string();

    let llm = state
        .llm
        .clone()
        .ok_or_else(|| api_error(StatusCode::INTERNAL_SERVER_ERROR, "LLM API key not configured"))?;

    let history: Vec<HistoryEntry> = payload
        .conversation_history
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect();
    let current_plan = payload.trip_plan;

    let prepared = ChatTurn::prepare(&message, &history, current_plan.as_ref(), &state.config, &state.prompts)
        .map_err(|e| {
            error!(error = %e, "Chat API error");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, format!("API Error: {}", e))
        })?;

    let request_id = Uuid::now_v7();
    info!(%request_id, is_follow_up = prepared.routing.is_follow_up, "chat: streaming reply");

    let (tx, mut rx) = mpsc::channel::<StreamChunk>(100);
    let request = prepared.request.clone();
    let handle = tokio::spawn(async move { llm.stream(request, tx).await });

    let events = stream! {
        let mut full = String::new();
        let mut saw_error = false;
        while let Some(chunk) = rx.recv().await {
            match chunk {
                StreamChunk::TextDelta(content) => {
                    full.push_str(&content);
                    yield Ok(SseEvent::default().data(json!({ "content": content }).to_string()));
                }
                StreamChunk::Error(message) => {
                    warn!(%request_id, %message, "Stream error");
                    saw_error = true;
                    yield Ok(SseEvent::default().data(json!({ "error": message }).to_string()));
                }
                StreamChunk::MessageStart { .. } | StreamChunk::MessageDone { .. } => {}
            }
        }

        match handle.await {
            Ok(Ok(_)) => {}
            Ok(Err(e)) => {
                error!(%request_id, error = %e, "Streaming error");
                if !saw_error {
                    yield Ok(SseEvent::default().data(json!({ "error": e.to_string() }).to_string()));
                }
            }
            Err(e) => {
                error!(%request_id, error = %e, "Streaming task failed");
                yield Ok(SseEvent::default().data(json!({ "error": "Streaming task failed" }).to_string()));
            }
        }

        let tail: String = {
            let skip = full.chars().count().saturating_sub(100);
            full.chars().skip(skip).collect()
        };
        info!(%request_id, len = full.len(), ends_with = %tail, "Complete response");

        // Logs truncation and day-count mismatches
        let outcome = ChatTurn::finish(&prepared, &full, current_plan.as_ref());
        debug!(%request_id, plan = outcome.plan.is_some(), "chat: done");
    };

    Ok(Sse::new(events).keep_alive(KeepAlive::new()))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(super) struct AnalyzeRequest {
    message: Option<Value>,
    has_existing_trip_plan: bool,
}

/// Routing decision for a message, without calling the model
pub(super) async fn analyze(Json(payload): Json<AnalyzeRequest>) -> Result<Json<RoutingReport>, ApiError> {
    debug!(has_plan = payload.has_existing_trip_plan, "analyze: called");
    let message = message_text(payload.message.as_ref())
        .ok_or_else(|| api_error(StatusCode::BAD_REQUEST, "Valid message content is required"))?;

    Ok(Json(RoutingReport::new(message, payload.has_existing_trip_plan)))
}

/// Search the mock inventory
pub(super) async fn search(Json(criteria): Json<SearchCriteria>) -> Json<TravelSearchResults> {
    debug!(?criteria, "search: called");
    Json(search_travel(&criteria))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(super) struct ItineraryRequest {
    destination: String,
    days: u32,
    preferences: Vec<String>,
    budget: Option<f64>,
}

/// Markdown itinerary built from the mock inventory
pub(super) async fn itinerary(Json(payload): Json<ItineraryRequest>) -> Result<Json<Value>, ApiError> {
    debug!(destination = %payload.destination, days = payload.days, "itinerary: called");
    if payload.destination.trim().is_empty() {
        return Err(api_error(StatusCode::BAD_REQUEST, "Destination is required"));
    }
    if payload.days == 0 || payload.days > MAX_ITINERARY_DAYS {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            format!("Days must be between 1 and {}", MAX_ITINERARY_DAYS),
        ));
    }

    let criteria = SearchCriteria {
        destination: Some(payload.destination.clone()),
        budget: payload.budget,
        preferences: payload.preferences,
        ..Default::default()
    };
    let hotels = search_hotels(&criteria).hotels;
    let activities = search_activities(&criteria).activities;
    let markdown = generate_itinerary(&payload.destination, payload.days, &hotels, &activities);

    Ok(Json(json!({ "itinerary": markdown })))
}
