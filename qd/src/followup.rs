//! Follow-up gate and section loading states

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::{QueryAnalysis, TargetSection, analyze};
use crate::patterns::{
    ACTIVITIES_UPDATING_MESSAGE, FLIGHTS_UPDATING_MESSAGE, FOLLOW_UP_INDICATORS, HOTELS_UPDATING_MESSAGE,
};

/// Decide whether a message refines the current plan
///
/// Always `false` when there is no plan yet. Otherwise a raw substring test
/// against the follow-up indicator words.
pub fn is_follow_up(message: &str, has_existing_trip_plan: bool) -> bool {
    debug!(message_len = message.len(), %has_existing_trip_plan, "is_follow_up: called");
    if !has_existing_trip_plan {
        debug!("is_follow_up: no existing plan");
        return false;
    }

    let lower = message.to_lowercase();
    let found = FOLLOW_UP_INDICATORS.iter().any(|indicator| lower.contains(indicator));
    debug!(%found, "is_follow_up: indicator scan done");
    found
}

/// A single reloadable section of a trip plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Hotels,
    Flights,
    Activities,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hotels => "hotels",
            Self::Flights => "flights",
            Self::Activities => "activities",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Loading indicator for one section while a follow-up is in flight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionLoadingState {
    pub section: Section,
    pub is_loading: bool,
    pub message: String,
}

impl SectionLoadingState {
    fn loading(section: Section, message: impl Into<String>) -> Self {
        Self {
            section,
            is_loading: true,
            message: message.into(),
        }
    }
}

/// Expand a target section into per-section loading indicators
///
/// `Multiple` lights up all three sections with fixed copy, a single section
/// carries `loading_message`, and `General` yields nothing.
pub fn build_section_loading_states(target: TargetSection, loading_message: &str) -> Vec<SectionLoadingState> {
    debug!(%target, "build_section_loading_states: called");
    match target {
        TargetSection::Multiple => vec![
            SectionLoadingState::loading(Section::Hotels, HOTELS_UPDATING_MESSAGE),
            SectionLoadingState::loading(Section::Flights, FLIGHTS_UPDATING_MESSAGE),
            SectionLoadingState::loading(Section::Activities, ACTIVITIES_UPDATING_MESSAGE),
        ],
        TargetSection::Hotels => vec![SectionLoadingState::loading(Section::Hotels, loading_message)],
        TargetSection::Flights => vec![SectionLoadingState::loading(Section::Flights, loading_message)],
        TargetSection::Activities => vec![SectionLoadingState::loading(Section::Activities, loading_message)],
        TargetSection::General => Vec::new(),
    }
}

/// Routing decision made once per incoming message, before dispatch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUpRouting {
    pub is_follow_up: bool,

    /// Present only for follow-ups
    pub analysis: Option<QueryAnalysis>,

    pub section_states: Vec<SectionLoadingState>,
}

impl FollowUpRouting {
    /// Section to narrow the plan update to, if this is a follow-up
    pub fn target_section(&self) -> Option<TargetSection> {
        self.analysis.as_ref().map(|a| a.target_section)
    }
}

/// Run the gate and, for follow-ups, the classifier
pub fn route_message(message: &str, has_existing_trip_plan: bool) -> FollowUpRouting {
    debug!(%has_existing_trip_plan, "route_message: called");
    if !is_follow_up(message, has_existing_trip_plan) {
        debug!("route_message: fresh planning request");
        return FollowUpRouting {
            is_follow_up: false,
            analysis: None,
            section_states: Vec::new(),
        };
    }

    let analysis = analyze(message);
    let section_states = build_section_loading_states(analysis.target_section, &analysis.loading_message);
    debug!(target = %analysis.target_section, states = section_states.len(), "route_message: follow-up");
    FollowUpRouting {
        is_follow_up: true,
        analysis: Some(analysis),
        section_states,
    }
}
