//! Static trigger-phrase tables
//!
//! Category order matters: [`CATEGORY_PATTERNS`] is scanned front to back and
//! an earlier category keeps the lead on an exact confidence tie.

use crate::analysis::QueryIntent;

/// Trigger phrases and loading copy for one intent category
#[derive(Debug)]
pub struct CategoryPattern {
    pub intent: QueryIntent,
    pub keywords: &'static [&'static str],
    pub loading_messages: &'static [&'static str],
}

pub const HOTEL: CategoryPattern = CategoryPattern {
    intent: QueryIntent::Hotel,
    keywords: &[
        "hotel",
        "hotels",
        "accommodation",
        "stay",
        "room",
        "lodge",
        "resort",
        "inn",
        "cheaper hotel",
        "different hotel",
        "luxury hotel",
        "budget hotel",
        "better hotel",
        "another hotel",
        "hotel options",
        "place to stay",
    ],
    loading_messages: &[
        "🏨 Searching for better hotels...",
        "🏨 Finding cheaper hotel options...",
        "🏨 Looking for luxury accommodations...",
        "🏨 Updating hotel recommendations...",
        "🏨 Finding alternative hotels...",
    ],
};

pub const FLIGHT: CategoryPattern = CategoryPattern {
    intent: QueryIntent::Flight,
    keywords: &[
        "flight",
        "flights",
        "plane",
        "airline",
        "fly",
        "departure",
        "arrival",
        "cheaper flight",
        "different flight",
        "direct flight",
        "connecting flight",
        "earlier flight",
        "later flight",
        "flight options",
        "alternative flight",
    ],
    loading_messages: &[
        "✈️ Looking for alternative flights...",
        "✈️ Searching for cheaper flights...",
        "✈️ Finding direct flight options...",
        "✈️ Updating flight recommendations...",
        "✈️ Checking different airlines...",
    ],
};

pub const ACTIVITY: CategoryPattern = CategoryPattern {
    intent: QueryIntent::Activity,
    keywords: &[
        "activity",
        "activities",
        "things to do",
        "attractions",
        "tour",
        "tours",
        "museum",
        "restaurant",
        "food",
        "dining",
        "sightseeing",
        "entertainment",
        "add activities",
        "more activities",
        "different activities",
        "itinerary",
        "schedule",
        "plan",
        "visit",
        "explore",
        "experience",
    ],
    loading_messages: &[
        "🎯 Finding new activities...",
        "🎯 Adding more experiences...",
        "🎯 Updating your itinerary...",
        "🎯 Discovering local attractions...",
        "🎯 Planning better activities...",
    ],
};

pub const BUDGET: CategoryPattern = CategoryPattern {
    intent: QueryIntent::Budget,
    keywords: &[
        "budget",
        "cheaper",
        "expensive",
        "cost",
        "price",
        "affordable",
        "money",
        "save money",
        "reduce cost",
        "lower price",
        "budget options",
        "economical",
    ],
    loading_messages: &[
        "💰 Checking budget options...",
        "💰 Finding cheaper alternatives...",
        "💰 Optimizing your budget...",
        "💰 Looking for savings...",
        "💰 Updating cost estimates...",
    ],
};

pub const DATE: CategoryPattern = CategoryPattern {
    intent: QueryIntent::Date,
    keywords: &[
        "date",
        "dates",
        "time",
        "when",
        "schedule",
        "calendar",
        "day",
        "week",
        "change date",
        "different date",
        "reschedule",
        "move trip",
        "postpone",
    ],
    loading_messages: &[
        "📅 Updating travel dates...",
        "📅 Checking new availability...",
        "📅 Rescheduling your trip...",
        "📅 Finding options for new dates...",
        "📅 Adjusting your schedule...",
    ],
};

/// All scored categories, in tie-break priority order
pub const CATEGORY_PATTERNS: [&CategoryPattern; 5] = [&HOTEL, &FLIGHT, &ACTIVITY, &BUDGET, &DATE];

/// Words that mark a low-confidence message as touching the whole plan
pub const MULTI_SECTION_KEYWORDS: &[&str] = &["change", "update", "modify", "adjust", "new"];

/// Words that mark a message as refining an existing plan
pub const FOLLOW_UP_INDICATORS: &[&str] = &[
    "find",
    "get",
    "show",
    "change",
    "update",
    "modify",
    "adjust",
    "different",
    "another",
    "alternative",
    "better",
    "cheaper",
    "add",
    "remove",
    "replace",
    "switch",
    "upgrade",
];

pub const DEFAULT_LOADING_MESSAGE: &str = "🔍 Processing your request...";
pub const MULTI_SECTION_LOADING_MESSAGE: &str = "🔄 Updating your trip plan...";
pub const GENERAL_LOADING_MESSAGE: &str = "🤔 Understanding your request...";

pub const HOTELS_UPDATING_MESSAGE: &str = "🏨 Updating hotels...";
pub const FLIGHTS_UPDATING_MESSAGE: &str = "✈️ Updating flights...";
pub const ACTIVITIES_UPDATING_MESSAGE: &str = "🎯 Updating activities...";
