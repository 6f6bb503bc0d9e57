//! Trip plan data model

use std::fmt::Write as _;

use querydetect::TargetSection;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A flight option in a trip plan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Flight {
    pub id: String,
    pub airline: String,
    pub flight_number: String,
    pub route: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub duration: String,
    pub price: f64,
    pub stops: u32,
}

/// A hotel option in a trip plan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub location: String,
    pub rating: f64,
    pub price_per_night: f64,
    pub amenities: Vec<String>,
    pub description: String,
}

/// One scheduled activity within a day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlannedActivity {
    pub name: String,
    pub time: String,
    pub duration: String,
    pub description: String,
    pub cost: f64,
    pub category: String,
}

/// One day of the itinerary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DayPlan {
    pub day: u32,
    pub title: String,
    pub description: String,
    pub activities: Vec<PlannedActivity>,
}

/// Cost breakdown
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TotalCost {
    pub flights: f64,
    pub hotels: f64,
    pub activities: f64,
    pub total: f64,
}

/// A complete trip plan as produced by the model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TripPlan {
    pub destination: String,
    pub duration: String,
    pub budget: String,
    pub travelers: u32,
    pub flights: Vec<Flight>,
    pub hotels: Vec<Hotel>,
    pub itinerary: Vec<DayPlan>,
    pub total_cost: TotalCost,
}

/// Partial plan returned for a follow-up; absent sections are left alone
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flights: Option<Vec<Flight>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotels: Option<Vec<Hotel>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub itinerary: Option<Vec<DayPlan>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<TotalCost>,
}

/// Which plan sections a follow-up may touch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SectionMask {
    flights: bool,
    hotels: bool,
    itinerary: bool,
}

impl SectionMask {
    fn for_target(target: TargetSection) -> Self {
        match target {
            TargetSection::Hotels => Self {
                flights: false,
                hotels: true,
                itinerary: false,
            },
            TargetSection::Flights => Self {
                flights: true,
                hotels: false,
                itinerary: false,
            },
            TargetSection::Activities => Self {
                flights: false,
                hotels: false,
                itinerary: true,
            },
            TargetSection::Multiple | TargetSection::General => Self {
                flights: true,
                hotels: true,
                itinerary: true,
            },
        }
    }
}

impl TripPlan {
    /// Number of days in the itinerary
    pub fn day_count(&self) -> usize {
        self.itinerary.len()
    }

    /// Apply a follow-up update, restricted to the targeted section
    ///
    /// A present `totalCost` is always taken so the totals track the change.
    /// Returns the number of sections replaced.
    pub fn apply_update(&mut self, update: &PlanUpdate, target: TargetSection) -> usize {
        debug!(%target, "apply_update: called");
        let mask = SectionMask::for_target(target);
        let mut replaced = 0;

        if mask.flights
            && let Some(flights) = &update.flights
        {
            self.flights = flights.clone();
            replaced += 1;
        }
        if mask.hotels
            && let Some(hotels) = &update.hotels
        {
            self.hotels = hotels.clone();
            replaced += 1;
        }
        if mask.itinerary
            && let Some(itinerary) = &update.itinerary
        {
            self.itinerary = itinerary.clone();
            replaced += 1;
        }
        if let Some(total_cost) = update.total_cost {
            self.total_cost = total_cost;
        }

        debug!(replaced, "apply_update: done");
        replaced
    }

    /// Take sections from a full plan the model returned for a follow-up
    ///
    /// Single-section targets copy only that section (plus `totalCost`);
    /// `multiple` and `general` replace the plan outright.
    pub fn merge_from(&mut self, plan: TripPlan, target: TargetSection) {
        debug!(%target, "merge_from: called");
        match target {
            TargetSection::Hotels => self.hotels = plan.hotels,
            TargetSection::Flights => self.flights = plan.flights,
            TargetSection::Activities => self.itinerary = plan.itinerary,
            TargetSection::Multiple | TargetSection::General => {
                *self = plan;
                return;
            }
        }
        self.total_cost = plan.total_cost;
    }

    /// Chat reply shown after a new plan arrives
    pub fn confirmation_message(&self) -> String {
        format!(
            "I've created a {} itinerary for {}! Type /plan to see the details. Let me know if you'd like me to adjust anything.",
            self.duration, self.destination
        )
    }

    /// Plain-text rendering for the terminal
    pub fn render_summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} · {} · {} · {} traveler{}",
            self.destination,
            self.duration,
            self.budget,
            self.travelers,
            if self.travelers == 1 { "" } else { "s" }
        );

        if !self.flights.is_empty() {
            let _ = writeln!(out, "\nFlights");
            for f in &self.flights {
                let stops = match f.stops {
                    0 => "nonstop".to_string(),
                    1 => "1 stop".to_string(),
                    n => format!("{n} stops"),
                };
                let _ = writeln!(
                    out,
                    "  {} {}  {}  {} → {}  {}  {}  ${:.0}",
                    f.airline, f.flight_number, f.route, f.departure_time, f.arrival_time, f.duration, stops, f.price
                );
            }
        }

        if !self.hotels.is_empty() {
            let _ = writeln!(out, "\nHotels");
            for h in &self.hotels {
                let _ = writeln!(
                    out,
                    "  {} ({}★)  {}  ${:.0}/night",
                    h.name, h.rating, h.location, h.price_per_night
                );
            }
        }

        if !self.itinerary.is_empty() {
            let _ = writeln!(out, "\nItinerary");
            for day in &self.itinerary {
                let _ = writeln!(out, "  Day {}: {}", day.day, day.title);
                for a in &day.activities {
                    let _ = writeln!(out, "    {}  {} ({})  ${:.0}", a.time, a.name, a.duration, a.cost);
                }
            }
        }

        let c = &self.total_cost;
        let _ = write!(
            out,
            "\nTotal: ${:.0} (flights ${:.0}, hotels ${:.0}, activities ${:.0})",
            c.total, c.flights, c.hotels, c.activities
        );
        out
    }
}
