//! Intent classifier for follow-up messages

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::patterns::{
    CATEGORY_PATTERNS, CategoryPattern, DEFAULT_LOADING_MESSAGE, GENERAL_LOADING_MESSAGE, MULTI_SECTION_KEYWORDS,
    MULTI_SECTION_LOADING_MESSAGE,
};

/// Below this confidence a multi-section keyword takes over
const MULTI_SECTION_THRESHOLD: f64 = 0.3;

/// Below this confidence the message is treated as general
const GENERAL_THRESHOLD: f64 = 0.1;

/// What a message is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryIntent {
    Hotel,
    Flight,
    Activity,
    Budget,
    Date,
    General,
    Multiple,
}

impl QueryIntent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hotel => "hotel",
            Self::Flight => "flight",
            Self::Activity => "activity",
            Self::Budget => "budget",
            Self::Date => "date",
            Self::General => "general",
            Self::Multiple => "multiple",
        }
    }

    /// Section of the trip plan this intent refreshes
    pub fn target_section(&self) -> TargetSection {
        match self {
            Self::Hotel => TargetSection::Hotels,
            Self::Flight => TargetSection::Flights,
            Self::Activity => TargetSection::Activities,
            Self::Date | Self::Budget => TargetSection::Multiple,
            Self::General | Self::Multiple => TargetSection::General,
        }
    }
}

impl std::fmt::Display for QueryIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Part of a trip plan a message targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetSection {
    Hotels,
    Flights,
    Activities,
    Multiple,
    General,
}

impl TargetSection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hotels => "hotels",
            Self::Flights => "flights",
            Self::Activities => "activities",
            Self::Multiple => "multiple",
            Self::General => "general",
        }
    }
}

impl std::fmt::Display for TargetSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of classifying one message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryAnalysis {
    pub intent: QueryIntent,

    /// Matched keyword weight divided by word count; not a probability
    pub confidence: f64,

    pub target_section: TargetSection,

    /// UI copy shown while the targeted section reloads
    pub loading_message: String,

    /// Matched trigger phrases of the winning category, in table order
    pub keywords: Vec<String>,
}

impl Default for QueryAnalysis {
    fn default() -> Self {
        Self {
            intent: QueryIntent::General,
            confidence: 0.0,
            target_section: TargetSection::General,
            loading_message: DEFAULT_LOADING_MESSAGE.to_string(),
            keywords: Vec::new(),
        }
    }
}

/// Classify a message against the static keyword tables
///
/// Matching is a raw substring test on the lower-cased message, so "hotelier"
/// still counts as "hotel". Never fails; empty input falls through to
/// [`QueryIntent::General`].
pub fn analyze(message: &str) -> QueryAnalysis {
    debug!(message_len = message.len(), "analyze: called");
    let lower = message.to_lowercase();
    let word_count = lower.split_whitespace().count().max(1);

    let mut best = QueryAnalysis::default();

    for pattern in CATEGORY_PATTERNS {
        let (weight, matched) = score_category(pattern, &lower);
        let confidence = weight as f64 / word_count as f64;
        debug!(intent = %pattern.intent, weight, confidence, "analyze: scored category");

        if confidence > best.confidence {
            debug!(intent = %pattern.intent, "analyze: new best match");
            best = QueryAnalysis {
                intent: pattern.intent,
                confidence,
                target_section: pattern.intent.target_section(),
                loading_message: select_loading_message(pattern.loading_messages, &lower).to_string(),
                keywords: matched,
            };
        }
    }

    let has_multi_section_intent = MULTI_SECTION_KEYWORDS.iter().any(|k| lower.contains(k));
    if has_multi_section_intent && best.confidence < MULTI_SECTION_THRESHOLD {
        debug!(confidence = best.confidence, "analyze: multi-section override");
        best.intent = QueryIntent::Multiple;
        best.target_section = TargetSection::Multiple;
        best.loading_message = MULTI_SECTION_LOADING_MESSAGE.to_string();
    }

    if best.confidence < GENERAL_THRESHOLD {
        debug!(confidence = best.confidence, "analyze: low confidence, falling back to general");
        best.intent = QueryIntent::General;
        best.target_section = TargetSection::General;
        best.loading_message = GENERAL_LOADING_MESSAGE.to_string();
    }

    debug!(intent = %best.intent, target = %best.target_section, confidence = best.confidence, "analyze: done");
    best
}

/// Sum phrase weights (words per phrase) for every phrase found in `lower`
fn score_category(pattern: &CategoryPattern, lower: &str) -> (usize, Vec<String>) {
    let mut weight = 0;
    let mut matched = Vec::new();
    for keyword in pattern.keywords {
        if lower.contains(keyword) {
            weight += keyword.split(' ').count();
            matched.push((*keyword).to_string());
        }
    }
    (weight, matched)
}

/// Pick loading copy that echoes the message's tone, else the first entry
fn select_loading_message(messages: &'static [&'static str], lower: &str) -> &'static str {
    let preferences: [(&[&str], &[&str]); 3] = [
        (&["cheap", "budget"], &["cheaper", "budget"]),
        (&["luxury", "premium"], &["luxury", "better"]),
        (&["different", "alternative"], &["alternative", "different"]),
    ];

    for (query_words, message_words) in preferences {
        if query_words.iter().any(|w| lower.contains(w))
            && let Some(found) = messages.iter().find(|m| message_words.iter().any(|w| m.contains(w)))
        {
            return *found;
        }
    }

    messages.first().copied().unwrap_or(DEFAULT_LOADING_MESSAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hotel_follow_up() {
        let analysis = analyze("find me a cheaper hotel");
        assert_eq!(analysis.intent, QueryIntent::Hotel);
        assert_eq!(analysis.target_section, TargetSection::Hotels);
        assert_eq!(analysis.keywords, vec!["hotel", "cheaper hotel"]);
        assert!((analysis.confidence - 0.6).abs() < 1e-9);
        assert_eq!(analysis.loading_message, "🏨 Finding cheaper hotel options...");
    }

    #[test]
    fn test_flight_follow_up() {
        let analysis = analyze("show me a direct flight option");
        assert_eq!(analysis.intent, QueryIntent::Flight);
        assert_eq!(analysis.target_section, TargetSection::Flights);
        assert_eq!(analysis.keywords, vec!["flight", "direct flight"]);
        assert_eq!(analysis.loading_message, "✈️ Looking for alternative flights...");
    }

    #[test]
    fn test_multi_word_phrase_weighs_more() {
        let phrase = analyze("I want a different hotel");
        let single = analyze("I want a nice hotel");
        assert_eq!(phrase.intent, QueryIntent::Hotel);
        assert_eq!(single.intent, QueryIntent::Hotel);
        assert!(phrase.confidence > single.confidence);
        assert!((phrase.confidence - 0.6).abs() < 1e-9);
        assert!((single.confidence - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_different_hotel_picks_alternative_copy() {
        let analysis = analyze("I want a different hotel");
        assert_eq!(analysis.loading_message, "🏨 Finding alternative hotels...");
    }

    #[test]
    fn test_luxury_copy() {
        let analysis = analyze("show me luxury hotels");
        assert_eq!(analysis.intent, QueryIntent::Hotel);
        assert_eq!(analysis.loading_message, "🏨 Searching for better hotels...");
    }

    #[test]
    fn test_unmatched_tone_falls_back_to_first_copy() {
        // No activity copy mentions "cheaper" or "budget"
        let analysis = analyze("find cheap museum tours");
        assert_eq!(analysis.intent, QueryIntent::Activity);
        assert_eq!(analysis.keywords, vec!["tour", "tours", "museum"]);
        assert_eq!(analysis.loading_message, "🎯 Finding new activities...");
    }

    #[test]
    fn test_unmatched_tone_tries_next_preference() {
        // "cheap" finds nothing in the activity pool, "premium" finds "better"
        let analysis = analyze("cheap premium museum tours");
        assert_eq!(analysis.intent, QueryIntent::Activity);
        assert_eq!(analysis.loading_message, "🎯 Planning better activities...");
    }

    #[test]
    fn test_update_overrides_to_multiple() {
        // "plan" (activity) and "date" inside "update" both score 1/4
        let analysis = analyze("please update my plan");
        assert_eq!(analysis.intent, QueryIntent::Multiple);
        assert_eq!(analysis.target_section, TargetSection::Multiple);
        assert_eq!(analysis.loading_message, "🔄 Updating your trip plan...");
        assert_eq!(analysis.keywords, vec!["plan"]);
        assert!((analysis.confidence - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_confident_category_ignores_multi_keyword() {
        // "change" is a multi-section word, but hotel scores 1/3
        let analysis = analyze("change the hotel");
        assert_eq!(analysis.intent, QueryIntent::Hotel);
        assert_eq!(analysis.target_section, TargetSection::Hotels);
        assert!((analysis.confidence - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_override_threshold_is_exclusive() {
        // hotel + cheaper hotel = 3 over 10 words, exactly 0.3
        let analysis = analyze("please update me to a cheaper hotel with a pool");
        assert_eq!(analysis.intent, QueryIntent::Hotel);
        assert_eq!(analysis.target_section, TargetSection::Hotels);
        assert_eq!(analysis.confidence, 0.3);
        assert_eq!(analysis.keywords, vec!["hotel", "cheaper hotel"]);
        assert_eq!(analysis.loading_message, "🏨 Finding cheaper hotel options...");
    }

    #[test]
    fn test_zero_match_multi_keyword_still_general() {
        let analysis = analyze("modify it");
        assert_eq!(analysis.intent, QueryIntent::General);
        assert_eq!(analysis.target_section, TargetSection::General);
        assert_eq!(analysis.loading_message, "🤔 Understanding your request...");
        assert!(analysis.keywords.is_empty());
    }

    #[test]
    fn test_empty_message_is_general() {
        for input in ["", "   ", "\t\n"] {
            let analysis = analyze(input);
            assert_eq!(analysis.intent, QueryIntent::General);
            assert_eq!(analysis.target_section, TargetSection::General);
            assert_eq!(analysis.confidence, 0.0);
        }
    }

    #[test]
    fn test_punctuation_only_is_general() {
        let analysis = analyze("?!... 1234 $$$");
        assert_eq!(analysis.intent, QueryIntent::General);
        assert_eq!(analysis.loading_message, "🤔 Understanding your request...");
    }

    #[test]
    fn test_tie_goes_to_earlier_category() {
        // hotel and flight both score 1/2
        let analysis = analyze("hotel flight");
        assert_eq!(analysis.intent, QueryIntent::Hotel);
    }

    #[test]
    fn test_substring_matching_is_not_word_bounded() {
        let analysis = analyze("hotelier");
        assert_eq!(analysis.intent, QueryIntent::Hotel);
        assert_eq!(analysis.keywords, vec!["hotel"]);
        assert!((analysis.confidence - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_overlapping_phrases_exceed_one() {
        // "hotels" matches both "hotel" and "hotels"
        let analysis = analyze("hotels");
        assert_eq!(analysis.keywords, vec!["hotel", "hotels"]);
        assert!((analysis.confidence - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_budget_routes_to_multiple() {
        let analysis = analyze("make it cheaper");
        assert_eq!(analysis.intent, QueryIntent::Budget);
        assert_eq!(analysis.target_section, TargetSection::Multiple);
        assert_eq!(analysis.loading_message, "💰 Checking budget options...");
    }

    #[test]
    fn test_date_routes_to_multiple() {
        let analysis = analyze("reschedule for different dates");
        assert_eq!(analysis.intent, QueryIntent::Date);
        assert_eq!(analysis.target_section, TargetSection::Multiple);
    }

    #[test]
    fn test_activity_intent() {
        let analysis = analyze("add more activities");
        assert_eq!(analysis.intent, QueryIntent::Activity);
        assert_eq!(analysis.target_section, TargetSection::Activities);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(analyze("FIND ME A CHEAPER HOTEL"), analyze("find me a cheaper hotel"));
    }

    #[test]
    fn test_target_section_mapping() {
        assert_eq!(QueryIntent::Hotel.target_section(), TargetSection::Hotels);
        assert_eq!(QueryIntent::Flight.target_section(), TargetSection::Flights);
        assert_eq!(QueryIntent::Activity.target_section(), TargetSection::Activities);
        assert_eq!(QueryIntent::Budget.target_section(), TargetSection::Multiple);
        assert_eq!(QueryIntent::Date.target_section(), TargetSection::Multiple);
        assert_eq!(QueryIntent::General.target_section(), TargetSection::General);
        assert_eq!(QueryIntent::Multiple.target_section(), TargetSection::General);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(analyze("find me a cheaper hotel")).unwrap();
        assert_eq!(json["intent"], "hotel");
        assert_eq!(json["targetSection"], "hotels");
        assert!(json["loadingMessage"].is_string());
        assert!(json["keywords"].is_array());
    }
}
