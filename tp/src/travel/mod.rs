//! Mock travel inventory, search and itinerary layout

mod criteria;
pub mod data;
mod itinerary;
mod search;

pub use criteria::{SearchCriteria, parse_travel_request};
pub use data::{ActivityOption, FlightOption, HotelOption};
pub use itinerary::generate_itinerary;
pub use search::{
    ActivitySearchResult, DEFAULT_AIRPORT, FlightSearchResult, HotelSearchResult, TravelSearchResults, airport_code,
    search_activities, search_flights, search_hotels, search_travel,
};
