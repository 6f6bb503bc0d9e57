//! Requested trip length extraction

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Tried in order; the first one that yields a number wins.
/// Digits are ASCII only; `\d` would also match other scripts' digits.
static DAY_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [r"(?i)([0-9]+)\s*days?", r"(?i)([0-9]+)\s*day\s*trip", r"(?i)([0-9]+)\s*-?\s*day"]
        .iter()
        .filter_map(|p| Regex::new(p).ok())
        .collect()
});

/// Pull a day count such as "7 days", "3 day trip" or "5-day" out of a message
pub fn extract_requested_days(message: &str) -> Option<u32> {
    debug!(message_len = message.len(), "extract_requested_days: called");
    for pattern in DAY_PATTERNS.iter() {
        if let Some(days) = pattern
            .captures(message)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<u32>().ok())
        {
            debug!(days, pattern = %pattern.as_str(), "extract_requested_days: matched");
            return Some(days);
        }
    }
    debug!("extract_requested_days: no match");
    None
}

/// Disagreement between the requested trip length and the generated itinerary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCountMismatch {
    pub requested: u32,
    pub actual: u32,
}

impl std::fmt::Display for DayCountMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "requested {} days but itinerary has {}", self.requested, self.actual)
    }
}

/// Compare a requested day count with an itinerary length
///
/// Only reports; the caller decides what to do with a mismatch.
pub fn check_day_count(requested: Option<u32>, actual: usize) -> Option<DayCountMismatch> {
    debug!(?requested, actual, "check_day_count: called");
    let requested = requested?;
    let actual = u32::try_from(actual).unwrap_or(u32::MAX);
    if requested == actual {
        return None;
    }
    Some(DayCountMismatch { requested, actual })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyphenated_day() {
        assert_eq!(extract_requested_days("Plan a 7-day trip to Tokyo"), Some(7));
    }

    #[test]
    fn test_no_duration() {
        assert_eq!(extract_requested_days("Plan a trip to Tokyo"), None);
        assert_eq!(extract_requested_days(""), None);
    }

    #[test]
    fn test_plural_and_singular() {
        assert_eq!(extract_requested_days("5 days in Rome"), Some(5));
        assert_eq!(extract_requested_days("just 1 day"), Some(1));
        assert_eq!(extract_requested_days("a 3 day trip"), Some(3));
        assert_eq!(extract_requested_days("10days please"), Some(10));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(extract_requested_days("4 DAYS IN LISBON"), Some(4));
    }

    #[test]
    fn test_first_number_before_day_wins() {
        assert_eq!(extract_requested_days("2 people, 6 days, $3000"), Some(6));
    }

    #[test]
    fn test_non_ascii_digits_are_skipped() {
        assert_eq!(extract_requested_days("٣ days then 5 days"), Some(5));
        assert_eq!(extract_requested_days("٣ days"), None);
    }

    #[test]
    fn test_overflow_is_none() {
        assert_eq!(extract_requested_days("99999999999999 days"), None);
    }

    #[test]
    fn test_check_day_count() {
        assert_eq!(check_day_count(Some(7), 7), None);
        assert_eq!(check_day_count(None, 3), None);
        assert_eq!(
            check_day_count(Some(7), 5),
            Some(DayCountMismatch {
                requested: 7,
                actual: 5
            })
        );
    }

    #[test]
    fn test_mismatch_display() {
        let mismatch = DayCountMismatch {
            requested: 7,
            actual: 5,
        };
        assert_eq!(mismatch.to_string(), "requested 7 days but itinerary has 5");
    }
}
