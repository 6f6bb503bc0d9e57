//! Searching the static inventory

use std::fmt::Write as _;

use serde::Serialize;
use tracing::debug;

use super::criteria::SearchCriteria;
use super::data::{ACTIVITIES, ActivityOption, FLIGHTS, FlightOption, HOTELS, HotelOption};

/// Hotel budget assumes this many nights
const ASSUMED_NIGHTS: f64 = 5.0;

/// Share of the total budget set aside for activities
const ACTIVITY_BUDGET_SHARE: f64 = 0.3;

/// Activity budget is split across this many activities
const ASSUMED_ACTIVITIES: f64 = 3.0;

/// Airport used when a place name is not recognized
pub const DEFAULT_AIRPORT: &str = "JFK";

/// Map a city, country or airport name to the airport code the inventory uses
pub fn airport_code(location: &str) -> &'static str {
    match location.trim().to_lowercase().as_str() {
        "new york" | "nyc" | "jfk" => "JFK",
        "paris" | "france" | "cdg" => "CDG",
        "rome" | "italy" | "fco" => "FCO",
        "tokyo" | "japan" | "nrt" => "NRT",
        "los angeles" | "la" | "lax" => "LAX",
        _ => DEFAULT_AIRPORT,
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightSearchResult {
    pub flights: Vec<&'static FlightOption>,
    pub total_results: usize,
    pub search_criteria: SearchCriteria,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelSearchResult {
    pub hotels: Vec<&'static HotelOption>,
    pub total_results: usize,
    pub search_criteria: SearchCriteria,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySearchResult {
    pub activities: Vec<&'static ActivityOption>,
    pub total_results: usize,
    pub search_criteria: SearchCriteria,
}

/// All three result sets for one set of criteria
#[derive(Debug, Clone, Serialize)]
pub struct TravelSearchResults {
    pub flights: FlightSearchResult,
    pub hotels: HotelSearchResult,
    pub activities: ActivitySearchResult,
}

fn matches_place(needle: &str, id: &str, location: &str, city: &str, country: &str) -> bool {
    id.contains(needle)
        || location.to_lowercase().contains(needle)
        || city.to_lowercase().contains(needle)
        || country.to_lowercase().contains(needle)
}

/// Flights to and from the mapped airports, within budget, cheapest first
pub fn search_flights(criteria: &SearchCriteria) -> FlightSearchResult {
    debug!(?criteria.destination, ?criteria.origin, "search_flights: called");
    let dest_code = criteria.normalized_destination().map(|d| airport_code(&d));
    let origin_code = criteria.normalized_origin().map(|o| airport_code(&o));
    let budget = criteria.effective_budget();

    let mut flights: Vec<&'static FlightOption> = FLIGHTS
        .iter()
        .filter(|f| dest_code.is_none_or(|code| f.destination == code))
        .filter(|f| origin_code.is_none_or(|code| f.origin == code))
        .filter(|f| budget.is_none_or(|b| f64::from(f.price) <= b))
        .collect();
    flights.sort_by_key(|f| f.price);

    debug!(count = flights.len(), "search_flights: done");
    FlightSearchResult {
        total_results: flights.len(),
        flights,
        search_criteria: criteria.clone(),
    }
}

/// Hotels in the destination under a fifth of the budget per night, best value first
pub fn search_hotels(criteria: &SearchCriteria) -> HotelSearchResult {
    debug!(?criteria.destination, "search_hotels: called");
    let destination = criteria.normalized_destination();
    let max_per_night = criteria.effective_budget().map(|b| b / ASSUMED_NIGHTS);

    let mut hotels: Vec<&'static HotelOption> = HOTELS
        .iter()
        .filter(|h| {
            destination
                .as_deref()
                .is_none_or(|d| matches_place(d, h.id, h.location, h.city, h.country))
        })
        .filter(|h| max_per_night.is_none_or(|max| f64::from(h.price_per_night) <= max))
        .collect();
    hotels.sort_by(|a, b| value_score(b).total_cmp(&value_score(a)));

    debug!(count = hotels.len(), "search_hotels: done");
    HotelSearchResult {
        total_results: hotels.len(),
        hotels,
        search_criteria: criteria.clone(),
    }
}

/// Stars per hundred dollars a night
fn value_score(hotel: &HotelOption) -> f64 {
    f64::from(hotel.rating) / (f64::from(hotel.price_per_night) / 100.0)
}

fn matches_preference(activity: &ActivityOption, preference: &str) -> bool {
    let pref = preference.to_lowercase();
    activity.tags.iter().any(|tag| {
        let tag = tag.to_lowercase();
        tag.contains(&pref) || pref.contains(&tag)
    }) || activity.kind.as_str().contains(&pref)
        || activity.name.to_lowercase().contains(&pref)
}

/// Activities in the destination matching any preference, within budget, best rated first
pub fn search_activities(criteria: &SearchCriteria) -> ActivitySearchResult {
    debug!(?criteria.destination, preferences = criteria.preferences.len(), "search_activities: called");
    let destination = criteria.normalized_destination();
    let max_price = criteria
        .effective_budget()
        .map(|b| b * ACTIVITY_BUDGET_SHARE / ASSUMED_ACTIVITIES);

    let mut activities: Vec<&'static ActivityOption> = ACTIVITIES
        .iter()
        .filter(|a| {
            destination
                .as_deref()
                .is_none_or(|d| matches_place(d, a.id, a.location, a.city, a.country))
        })
        .filter(|a| criteria.preferences.is_empty() || criteria.preferences.iter().any(|p| matches_preference(a, p)))
        .filter(|a| max_price.is_none_or(|max| f64::from(a.price) <= max))
        .collect();
    activities.sort_by(|a, b| b.rating.total_cmp(&a.rating));

    debug!(count = activities.len(), "search_activities: done");
    ActivitySearchResult {
        total_results: activities.len(),
        activities,
        search_criteria: criteria.clone(),
    }
}

/// Run all three searches
pub fn search_travel(criteria: &SearchCriteria) -> TravelSearchResults {
    debug!("search_travel: called");
    TravelSearchResults {
        flights: search_flights(criteria),
        hotels: search_hotels(criteria),
        activities: search_activities(criteria),
    }
}

impl TravelSearchResults {
    pub fn is_empty(&self) -> bool {
        self.flights.total_results == 0 && self.hotels.total_results == 0 && self.activities.total_results == 0
    }

    /// Compact listing for the system prompt, or `None` when nothing matched
    pub fn prompt_context(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }

        let mut out = String::new();
        if !self.flights.flights.is_empty() {
            let _ = writeln!(out, "Flights:");
            for f in &self.flights.flights {
                let _ = writeln!(
                    out,
                    "- {} {} {} → {} dep {} arr {} ({}, {} stop{}) ${}",
                    f.airline,
                    f.flight_number,
                    f.origin,
                    f.destination,
                    f.departure_time,
                    f.arrival_time,
                    f.duration,
                    f.stops,
                    if f.stops == 1 { "" } else { "s" },
                    f.price
                );
            }
        }
        if !self.hotels.hotels.is_empty() {
            let _ = writeln!(out, "Hotels:");
            for h in &self.hotels.hotels {
                let _ = writeln!(
                    out,
                    "- {} ({}, {}) {}★ {} ${}/night",
                    h.name,
                    h.location,
                    h.city,
                    h.rating,
                    h.category.as_str(),
                    h.price_per_night
                );
            }
        }
        if !self.activities.activities.is_empty() {
            let _ = writeln!(out, "Activities:");
            for a in &self.activities.activities {
                let _ = writeln!(
                    out,
                    "- {} ({}, {}) {} ${} rated {}",
                    a.name,
                    a.kind.as_str(),
                    a.location,
                    a.duration,
                    a.price,
                    a.rating
                );
            }
        }
        Some(out.trim_end().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criteria(destination: Option<&str>, budget: Option<f64>) -> SearchCriteria {
        SearchCriteria {
            destination: destination.map(str::to_string),
            budget,
            ..Default::default()
        }
    }

    #[test]
    fn test_airport_code() {
        assert_eq!(airport_code("Paris"), "CDG");
        assert_eq!(airport_code("japan"), "NRT");
        assert_eq!(airport_code("LA"), "LAX");
        assert_eq!(airport_code("Atlantis"), "JFK");
    }

    #[test]
    fn test_flights_to_paris_sorted_by_price() {
        let result = search_flights(&criteria(Some("paris"), None));
        let ids: Vec<_> = result.flights.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec!["BA178", "DL264", "AF1001"]);
        assert_eq!(result.total_results, 3);
    }

    #[test]
    fn test_flights_budget_filter() {
        let result = search_flights(&criteria(Some("paris"), Some(1000.0)));
        assert_eq!(result.flights.len(), 1);
        assert_eq!(result.flights[0].id, "BA178");
    }

    #[test]
    fn test_unknown_destination_maps_to_jfk() {
        // Nothing in the inventory lands at JFK
        assert!(search_flights(&criteria(Some("atlantis"), None)).flights.is_empty());
    }

    #[test]
    fn test_flights_origin_filter() {
        let mut c = criteria(Some("tokyo"), None);
        c.origin = Some("Los Angeles".to_string());
        assert_eq!(search_flights(&c).total_results, 2);
        c.origin = Some("nyc".to_string());
        assert_eq!(search_flights(&c).total_results, 0);
    }

    #[test]
    fn test_hotels_by_value() {
        let result = search_hotels(&criteria(Some("rome"), None));
        let ids: Vec<_> = result.hotels.iter().map(|h| h.id).collect();
        assert_eq!(ids, vec!["rome-budget", "rome-artemide", "rome-hassler"]);
    }

    #[test]
    fn test_hotels_budget_is_per_five_nights() {
        // $1,000 allows up to $200 a night
        let result = search_hotels(&criteria(Some("tokyo"), Some(1000.0)));
        let ids: Vec<_> = result.hotels.iter().map(|h| h.id).collect();
        assert_eq!(ids, vec!["tokyo-shibuya"]);
    }

    #[test]
    fn test_activities_match_city() {
        let result = search_activities(&criteria(Some("paris"), None));
        assert_eq!(result.total_results, 5);
        assert_eq!(result.activities[0].id, "eiffel-tower");
    }

    #[test]
    fn test_activities_preferences_either_direction() {
        let mut c = criteria(Some("rome"), None);
        c.preferences = vec!["cuisine".to_string()];
        let ids: Vec<_> = search_activities(&c).activities.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["da-enzo"]);

        // "restaurant" matches the activity type
        c.preferences = vec!["Restaurant".to_string()];
        let ids: Vec<_> = search_activities(&c).activities.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["da-enzo"]);
    }

    #[test]
    fn test_activities_budget_share() {
        // $1,000 * 0.3 / 3 = $100 per activity, which drops Jiro
        let result = search_activities(&criteria(Some("tokyo"), Some(1000.0)));
        assert!(result.activities.iter().all(|a| a.price <= 100));
        assert_eq!(result.total_results, 3);
    }

    #[test]
    fn test_zero_budget_does_not_filter() {
        let result = search_flights(&criteria(Some("rome"), Some(0.0)));
        assert_eq!(result.total_results, 2);
    }

    #[test]
    fn test_search_travel_and_prompt_context() {
        let results = search_travel(&criteria(Some("rome"), None));
        assert!(!results.is_empty());
        let context = results.prompt_context().unwrap();
        assert!(context.starts_with("Flights:"));
        assert!(context.contains("Hotel Artemide"));
        assert!(context.contains("Colosseum Underground Tour"));
    }

    #[test]
    fn test_prompt_context_none_when_empty() {
        let mut c = criteria(Some("atlantis"), None);
        c.preferences = vec!["zzz".to_string()];
        let results = search_travel(&c);
        assert!(results.is_empty());
        assert!(results.prompt_context().is_none());
    }
}
