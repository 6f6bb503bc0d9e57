//! Search criteria and natural-language request parsing

use std::sync::LazyLock;

use chrono::{Days, Months, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Destination keywords recognized in free text, in priority order
const DESTINATION_KEYWORDS: &[&str] = &["paris", "rome", "tokyo", "japan", "italy", "france"];

/// Interest keywords recognized in free text
const PREFERENCE_KEYWORDS: &[&str] = &[
    "food", "culture", "history", "art", "romantic", "family", "adventure", "luxury", "budget",
];

/// Trips parsed from "N days" start this far out
const DEFAULT_LEAD_DAYS: u64 = 7;

static BUDGET_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\$(\d+(?:,\d+)?)").ok());

static TRAVELERS_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s+(?:people|person|traveler|guest)").ok());

static NEXT_MONTH_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"(?i)next month").ok());
static DAYS_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"(?i)(\d+)\s+days?").ok());
static WEEKS_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"(?i)(\d+)\s+weeks?").ok());

/// Filters for searching the travel inventory
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out: Option<NaiveDate>,
    /// Total trip budget in USD
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub travelers: Option<u32>,
    pub preferences: Vec<String>,
}

impl SearchCriteria {
    /// Lower-cased destination, ignoring blanks
    pub(crate) fn normalized_destination(&self) -> Option<String> {
        non_blank(self.destination.as_deref()).map(str::to_lowercase)
    }

    pub(crate) fn normalized_origin(&self) -> Option<String> {
        non_blank(self.origin.as_deref()).map(str::to_lowercase)
    }

    /// Budget that actually filters; zero and negative mean "no budget"
    pub(crate) fn effective_budget(&self) -> Option<f64> {
        self.budget.filter(|b| *b > 0.0)
    }

    /// Number of nights between check-in and check-out, when both are known
    pub fn nights(&self) -> Option<i64> {
        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) => Some((check_out - check_in).num_days()),
            _ => None,
        }
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

fn capture_number<T: std::str::FromStr>(re: &LazyLock<Option<Regex>>, text: &str) -> Option<T> {
    re.as_ref()?
        .captures(text)?
        .get(1)
        .and_then(|m| m.as_str().replace(',', "").parse::<T>().ok())
}

/// Pull search criteria out of a free-text travel request
///
/// `today` anchors relative dates such as "next month" or "5 days".
pub fn parse_travel_request(message: &str, today: NaiveDate) -> SearchCriteria {
    debug!(message_len = message.len(), %today, "parse_travel_request: called");
    let lower = message.to_lowercase();
    let mut criteria = SearchCriteria {
        destination: DESTINATION_KEYWORDS
            .iter()
            .find(|d| lower.contains(*d))
            .map(|d| d.to_string()),
        budget: capture_number::<u64>(&BUDGET_RE, message).map(|b| b as f64),
        travelers: capture_number::<u32>(&TRAVELERS_RE, message),
        preferences: PREFERENCE_KEYWORDS
            .iter()
            .filter(|k| lower.contains(*k))
            .map(|k| k.to_string())
            .collect(),
        ..Default::default()
    };

    // First matching date phrase decides; "N weeks" is recognized but sets no dates
    if NEXT_MONTH_RE.as_ref().is_some_and(|re| re.is_match(message)) {
        debug!("parse_travel_request: next month");
        criteria.check_in = today.checked_add_months(Months::new(1));
    } else if let Some(re) = DAYS_RE.as_ref()
        && let Some(caps) = re.captures(message)
    {
        let check_in = today.checked_add_days(Days::new(DEFAULT_LEAD_DAYS));
        let days = caps.get(1).and_then(|m| m.as_str().parse::<u64>().ok());
        debug!(?days, "parse_travel_request: day count");
        criteria.check_in = check_in;
        criteria.check_out = match (check_in, days) {
            (Some(start), Some(days)) => start.checked_add_days(Days::new(days)),
            _ => None,
        };
    } else if WEEKS_RE.as_ref().is_some_and(|re| re.is_match(message)) {
        debug!("parse_travel_request: week count, dates left open");
    }

    debug!(?criteria, "parse_travel_request: done");
    criteria
}
