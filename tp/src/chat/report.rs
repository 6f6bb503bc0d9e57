//! Routing decision plus requested trip length, for display

use std::fmt::Write as _;

use querydetect::{FollowUpRouting, extract_requested_days, route_message};
use serde::Serialize;
use tracing::debug;

/// What the planner makes of a message before any model call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingReport {
    #[serde(flatten)]
    pub routing: FollowUpRouting,
    pub requested_days: Option<u32>,
}

impl RoutingReport {
    pub fn new(message: &str, has_existing_trip_plan: bool) -> Self {
        debug!(%has_existing_trip_plan, "RoutingReport::new: called");
        Self {
            routing: route_message(message, has_existing_trip_plan),
            requested_days: extract_requested_days(message),
        }
    }

    /// Human-readable summary, one field per line
    pub fn to_text(&self) -> String {
        let routing = &self.routing;
        let mut out = String::new();
        let _ = writeln!(out, "Follow-up:      {}", if routing.is_follow_up { "yes" } else { "no" });

        if let Some(analysis) = &routing.analysis {
            let _ = writeln!(out, "Intent:         {} ({:.2})", analysis.intent, analysis.confidence);
            let _ = writeln!(out, "Target:         {}", analysis.target_section);
            if !analysis.keywords.is_empty() {
                let _ = writeln!(out, "Keywords:       {}", analysis.keywords.join(", "));
            }
            let _ = writeln!(out, "Loading:        {}", analysis.loading_message);
        }

        for state in &routing.section_states {
            let _ = writeln!(out, "Reloading:      {} ({})", state.section, state.message);
        }

        match self.requested_days {
            Some(days) => {
                let _ = writeln!(out, "Requested days: {}", days);
            }
            None => {
                let _ = writeln!(out, "Requested days: none");
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_request() {
        let report = RoutingReport::new("find me a cheaper hotel", false);
        assert_eq!(report.to_text(), "Follow-up:      no\nRequested days: none\n");
    }

    #[test]
    fn test_follow_up_text() {
        let text = RoutingReport::new("find me a cheaper hotel for 4 days", true).to_text();
        assert!(text.starts_with("Follow-up:      yes\n"));
        assert!(text.contains("Intent:         hotel"));
        assert!(text.contains("Target:         hotels"));
        assert!(text.contains("Keywords:       hotel, cheaper hotel"));
        assert!(text.contains("Reloading:      hotels (🏨 Finding cheaper hotel options...)"));
        assert!(text.ends_with("Requested days: 4\n"));
    }

    #[test]
    fn test_json_shape_is_flat() {
        let json = serde_json::to_value(RoutingReport::new("add more activities", true)).unwrap();
        assert_eq!(json["isFollowUp"], true);
        assert_eq!(json["analysis"]["intent"], "activity");
        assert_eq!(json["sectionStates"][0]["section"], "activities");
        assert!(json["requestedDays"].is_null());
        assert!(json.get("routing").is_none());
    }
}
