//! Static travel inventory
//!
//! A small fixed catalogue of flights, hotels and activities for Paris,
//! Rome and Tokyo. Prices are in USD.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CabinClass {
    Economy,
    Premium,
    Business,
    First,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HotelCategory {
    Budget,
    MidRange,
    Luxury,
}

impl HotelCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Budget => "budget",
            Self::MidRange => "mid-range",
            Self::Luxury => "luxury",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Attraction,
    Restaurant,
    Tour,
    Entertainment,
    Shopping,
}

impl ActivityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Attraction => "attraction",
            Self::Restaurant => "restaurant",
            Self::Tour => "tour",
            Self::Entertainment => "entertainment",
            Self::Shopping => "shopping",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightOption {
    pub id: &'static str,
    pub airline: &'static str,
    pub flight_number: &'static str,
    /// Origin airport code
    pub origin: &'static str,
    /// Destination airport code
    pub destination: &'static str,
    pub departure_time: &'static str,
    pub arrival_time: &'static str,
    pub duration: &'static str,
    pub price: u32,
    pub class: CabinClass,
    pub stops: u32,
    pub aircraft: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelOption {
    pub id: &'static str,
    pub name: &'static str,
    pub city: &'static str,
    pub country: &'static str,
    pub location: &'static str,
    pub rating: u32,
    pub price_per_night: u32,
    pub amenities: &'static [&'static str],
    pub description: &'static str,
    pub category: HotelCategory,
    pub review_count: u32,
    pub review_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityOption {
    pub id: &'static str,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: ActivityType,
    pub city: &'static str,
    pub country: &'static str,
    pub location: &'static str,
    pub price: u32,
    pub duration: &'static str,
    pub rating: f64,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub operating_hours: &'static str,
    pub booking_required: bool,
}

pub static FLIGHTS: [FlightOption; 7] = [
    // New York to Paris
    FlightOption {
        id: "AF1001",
        airline: "Air France",
        flight_number: "AF 1001",
        origin: "JFK",
        destination: "CDG",
        departure_time: "22:30",
        arrival_time: "12:15+1",
        duration: "7h 45m",
        price: 1245,
        class: CabinClass::Economy,
        stops: 0,
        aircraft: "Boeing 777-300ER",
    },
    FlightOption {
        id: "DL264",
        airline: "Delta Air Lines",
        flight_number: "DL 264",
        origin: "JFK",
        destination: "CDG",
        departure_time: "23:55",
        arrival_time: "13:40+1",
        duration: "7h 45m",
        price: 1189,
        class: CabinClass::Economy,
        stops: 0,
        aircraft: "Airbus A330-300",
    },
    FlightOption {
        id: "BA178",
        airline: "British Airways",
        flight_number: "BA 178",
        origin: "JFK",
        destination: "CDG",
        departure_time: "09:50",
        arrival_time: "23:30",
        duration: "10h 40m",
        price: 987,
        class: CabinClass::Economy,
        stops: 1,
        aircraft: "Boeing 787-9",
    },
    // New York to Rome
    FlightOption {
        id: "AZ608",
        airline: "ITA Airways",
        flight_number: "AZ 608",
        origin: "JFK",
        destination: "FCO",
        departure_time: "21:40",
        arrival_time: "13:55+1",
        duration: "8h 15m",
        price: 1356,
        class: CabinClass::Economy,
        stops: 0,
        aircraft: "Airbus A330-200",
    },
    FlightOption {
        id: "DL216",
        airline: "Delta Air Lines",
        flight_number: "DL 216",
        origin: "JFK",
        destination: "FCO",
        departure_time: "22:25",
        arrival_time: "14:40+1",
        duration: "8h 15m",
        price: 1278,
        class: CabinClass::Economy,
        stops: 0,
        aircraft: "Airbus A330-900neo",
    },
    // Los Angeles to Tokyo
    FlightOption {
        id: "NH175",
        airline: "ANA",
        flight_number: "NH 175",
        origin: "LAX",
        destination: "NRT",
        departure_time: "11:50",
        arrival_time: "16:35+1",
        duration: "11h 45m",
        price: 1456,
        class: CabinClass::Economy,
        stops: 0,
        aircraft: "Boeing 777-300ER",
    },
    FlightOption {
        id: "JL62",
        airline: "JAL",
        flight_number: "JL 62",
        origin: "LAX",
        destination: "NRT",
        departure_time: "13:05",
        arrival_time: "17:50+1",
        duration: "11h 45m",
        price: 1398,
        class: CabinClass::Economy,
        stops: 0,
        aircraft: "Boeing 787-9",
    },
];

pub static HOTELS: [HotelOption; 9] = [
    HotelOption {
        id: "paris-ritz",
        name: "The Ritz Paris",
        city: "Paris",
        country: "France",
        location: "Place Vendôme, 1st Arrondissement",
        rating: 5,
        price_per_night: 1200,
        amenities: &["Spa", "Fitness Center", "Restaurant", "Bar", "Concierge", "Room Service"],
        description: "Legendary luxury hotel in the heart of Paris with opulent rooms and world-class service.",
        category: HotelCategory::Luxury,
        review_count: 2847,
        review_score: 9.2,
    },
    HotelOption {
        id: "paris-bristol",
        name: "Le Bristol Paris",
        city: "Paris",
        country: "France",
        location: "Faubourg Saint-Honoré, 8th Arrondissement",
        rating: 5,
        price_per_night: 980,
        amenities: &["Spa", "Pool", "Restaurant", "Bar", "Garden", "Pet-Friendly"],
        description: "Palace hotel with exceptional French elegance and Michelin-starred dining.",
        category: HotelCategory::Luxury,
        review_count: 1923,
        review_score: 9.1,
    },
    HotelOption {
        id: "paris-marais",
        name: "Hotel des Grands Boulevards",
        city: "Paris",
        country: "France",
        location: "Le Marais, 4th Arrondissement",
        rating: 4,
        price_per_night: 285,
        amenities: &["Restaurant", "Bar", "Free WiFi", "Concierge"],
        description: "Boutique hotel in historic Marais district with modern amenities and classic charm.",
        category: HotelCategory::MidRange,
        review_count: 1456,
        review_score: 8.7,
    },
    HotelOption {
        id: "paris-budget",
        name: "Hotel Jeanne d'Arc",
        city: "Paris",
        country: "France",
        location: "Le Marais, 4th Arrondissement",
        rating: 3,
        price_per_night: 145,
        amenities: &["Free WiFi", "Breakfast", "24/7 Reception"],
        description: "Charming budget hotel in the heart of historic Paris with comfortable rooms.",
        category: HotelCategory::Budget,
        review_count: 987,
        review_score: 8.1,
    },
    HotelOption {
        id: "rome-hassler",
        name: "Hotel Hassler Roma",
        city: "Rome",
        country: "Italy",
        location: "Spanish Steps, Historic Center",
        rating: 5,
        price_per_night: 850,
        amenities: &["Spa", "Restaurant", "Bar", "Rooftop Terrace", "Concierge"],
        description: "Iconic luxury hotel overlooking the Spanish Steps with breathtaking city views.",
        category: HotelCategory::Luxury,
        review_count: 2341,
        review_score: 9.0,
    },
    HotelOption {
        id: "rome-artemide",
        name: "Hotel Artemide",
        city: "Rome",
        country: "Italy",
        location: "Near Termini Station, Historic Center",
        rating: 4,
        price_per_night: 220,
        amenities: &["Rooftop Restaurant", "Spa", "Fitness Center", "Free WiFi"],
        description: "Modern 4-star hotel near major attractions with rooftop dining and city views.",
        category: HotelCategory::MidRange,
        review_count: 1678,
        review_score: 8.5,
    },
    HotelOption {
        id: "rome-budget",
        name: "The RomeHello",
        city: "Rome",
        country: "Italy",
        location: "Termini Station Area",
        rating: 3,
        price_per_night: 89,
        amenities: &["Free WiFi", "Breakfast", "Luggage Storage"],
        description: "Modern budget hotel with great location near transportation and major sites.",
        category: HotelCategory::Budget,
        review_count: 1234,
        review_score: 7.9,
    },
    HotelOption {
        id: "tokyo-mandarin",
        name: "Mandarin Oriental Tokyo",
        city: "Tokyo",
        country: "Japan",
        location: "Nihonbashi, Central Tokyo",
        rating: 5,
        price_per_night: 720,
        amenities: &["Spa", "Multiple Restaurants", "Bar", "Fitness Center", "City Views"],
        description: "Ultra-luxury hotel with stunning Tokyo skyline views and world-class amenities.",
        category: HotelCategory::Luxury,
        review_count: 1876,
        review_score: 9.3,
    },
    HotelOption {
        id: "tokyo-shibuya",
        name: "Shibuya Excel Hotel Tokyu",
        city: "Tokyo",
        country: "Japan",
        location: "Shibuya, Central Tokyo",
        rating: 4,
        price_per_night: 180,
        amenities: &["Restaurant", "Free WiFi", "City Views", "Shopping Access"],
        description: "Modern hotel in the heart of Shibuya with direct access to shopping and nightlife.",
        category: HotelCategory::MidRange,
        review_count: 2156,
        review_score: 8.4,
    },
];

pub static ACTIVITIES: [ActivityOption; 14] = [
    // Paris
    ActivityOption {
        id: "eiffel-tower",
        name: "Eiffel Tower Skip-the-Line Tour",
        kind: ActivityType::Attraction,
        city: "Paris",
        country: "France",
        location: "Champ de Mars, 7th Arrondissement",
        price: 89,
        duration: "2 hours",
        rating: 4.7,
        description: "Skip the lines and ascend to the second floor of Paris's most iconic landmark.",
        tags: &["iconic", "views", "photography", "must-see"],
        operating_hours: "9:30 AM - 11:45 PM",
        booking_required: true,
    },
    ActivityOption {
        id: "louvre-tour",
        name: "Louvre Museum Guided Tour",
        kind: ActivityType::Attraction,
        city: "Paris",
        country: "France",
        location: "1st Arrondissement",
        price: 65,
        duration: "3 hours",
        rating: 4.6,
        description: "Expert-guided tour of the world's largest art museum including the Mona Lisa.",
        tags: &["art", "culture", "history", "guided"],
        operating_hours: "9:00 AM - 6:00 PM",
        booking_required: true,
    },
    ActivityOption {
        id: "seine-cruise",
        name: "Seine River Evening Cruise with Dinner",
        kind: ActivityType::Tour,
        city: "Paris",
        country: "France",
        location: "Seine River",
        price: 125,
        duration: "2.5 hours",
        rating: 4.5,
        description: "Romantic dinner cruise along the Seine with views of illuminated landmarks.",
        tags: &["romantic", "dinner", "views", "evening"],
        operating_hours: "7:30 PM - 10:00 PM",
        booking_required: true,
    },
    ActivityOption {
        id: "montmartre-walk",
        name: "Montmartre Walking Tour",
        kind: ActivityType::Tour,
        city: "Paris",
        country: "France",
        location: "Montmartre, 18th Arrondissement",
        price: 35,
        duration: "2 hours",
        rating: 4.4,
        description: "Explore the artistic quarter of Montmartre with Sacré-Cœur and local cafés.",
        tags: &["walking", "art", "history", "neighborhood"],
        operating_hours: "10:00 AM - 6:00 PM",
        booking_required: false,
    },
    ActivityOption {
        id: "le-comptoir",
        name: "Le Comptoir du Relais",
        kind: ActivityType::Restaurant,
        city: "Paris",
        country: "France",
        location: "Saint-Germain, 6th Arrondissement",
        price: 75,
        duration: "2 hours",
        rating: 4.3,
        description: "Authentic French bistro experience with traditional dishes and wine pairing.",
        tags: &["french cuisine", "bistro", "wine", "authentic"],
        operating_hours: "12:00 PM - 2:00 PM, 7:00 PM - 11:00 PM",
        booking_required: true,
    },
    // Rome
    ActivityOption {
        id: "colosseum-tour",
        name: "Colosseum Underground Tour",
        kind: ActivityType::Attraction,
        city: "Rome",
        country: "Italy",
        location: "Historic Center",
        price: 95,
        duration: "3 hours",
        rating: 4.8,
        description: "Exclusive access to the underground chambers and arena floor of the Colosseum.",
        tags: &["history", "ancient", "underground", "exclusive"],
        operating_hours: "8:30 AM - 7:00 PM",
        booking_required: true,
    },
    ActivityOption {
        id: "vatican-tour",
        name: "Vatican Museums & Sistine Chapel Tour",
        kind: ActivityType::Attraction,
        city: "Rome",
        country: "Italy",
        location: "Vatican City",
        price: 78,
        duration: "4 hours",
        rating: 4.7,
        description: "Comprehensive tour of Vatican Museums, Sistine Chapel, and St. Peter's Basilica.",
        tags: &["art", "religion", "history", "michelangelo"],
        operating_hours: "8:00 AM - 6:00 PM",
        booking_required: true,
    },
    ActivityOption {
        id: "trastevere-food",
        name: "Trastevere Food Walking Tour",
        kind: ActivityType::Tour,
        city: "Rome",
        country: "Italy",
        location: "Trastevere",
        price: 89,
        duration: "3.5 hours",
        rating: 4.6,
        description: "Taste authentic Roman cuisine while exploring the charming Trastevere neighborhood.",
        tags: &["food", "walking", "local", "authentic"],
        operating_hours: "6:00 PM - 9:30 PM",
        booking_required: true,
    },
    ActivityOption {
        id: "roman-forum",
        name: "Roman Forum and Palatine Hill",
        kind: ActivityType::Attraction,
        city: "Rome",
        country: "Italy",
        location: "Historic Center",
        price: 45,
        duration: "2.5 hours",
        rating: 4.4,
        description: "Explore the ruins of ancient Rome with skip-the-line access.",
        tags: &["ancient", "ruins", "history", "archaeology"],
        operating_hours: "8:30 AM - 7:00 PM",
        booking_required: false,
    },
    ActivityOption {
        id: "da-enzo",
        name: "Da Enzo al 29",
        kind: ActivityType::Restaurant,
        city: "Rome",
        country: "Italy",
        location: "Trastevere",
        price: 55,
        duration: "1.5 hours",
        rating: 4.5,
        description: "Family-run trattoria serving traditional Roman dishes in an intimate setting.",
        tags: &["roman cuisine", "family-run", "traditional", "intimate"],
        operating_hours: "12:30 PM - 3:00 PM, 7:30 PM - 11:00 PM",
        booking_required: true,
    },
    // Tokyo
    ActivityOption {
        id: "tsukiji-tour",
        name: "Tsukiji Outer Market Food Tour",
        kind: ActivityType::Tour,
        city: "Tokyo",
        country: "Japan",
        location: "Tsukiji",
        price: 98,
        duration: "3 hours",
        rating: 4.8,
        description: "Early morning tour of the famous fish market with fresh sushi breakfast.",
        tags: &["food", "market", "sushi", "early morning"],
        operating_hours: "5:00 AM - 8:00 AM",
        booking_required: true,
    },
    ActivityOption {
        id: "senso-ji",
        name: "Senso-ji Temple and Asakusa District",
        kind: ActivityType::Attraction,
        city: "Tokyo",
        country: "Japan",
        location: "Asakusa",
        price: 0,
        duration: "2 hours",
        rating: 4.5,
        description: "Visit Tokyo's oldest temple and explore traditional shopping streets.",
        tags: &["temple", "traditional", "free", "culture"],
        operating_hours: "6:00 AM - 5:00 PM",
        booking_required: false,
    },
    ActivityOption {
        id: "shibuya-crossing",
        name: "Shibuya Sky Observation Deck",
        kind: ActivityType::Attraction,
        city: "Tokyo",
        country: "Japan",
        location: "Shibuya",
        price: 28,
        duration: "1 hour",
        rating: 4.6,
        description: "Panoramic views of Tokyo from the famous Shibuya crossing area.",
        tags: &["views", "modern", "cityscape", "photography"],
        operating_hours: "9:00 AM - 11:00 PM",
        booking_required: false,
    },
    ActivityOption {
        id: "jiro-sushi",
        name: "Sukiyabashi Jiro Experience",
        kind: ActivityType::Restaurant,
        city: "Tokyo",
        country: "Japan",
        location: "Ginza",
        price: 450,
        duration: "30 minutes",
        rating: 4.9,
        description: "World-renowned sushi experience at the legendary three-Michelin-starred restaurant.",
        tags: &["sushi", "michelin", "legendary", "expensive"],
        operating_hours: "11:30 AM - 2:00 PM, 5:00 PM - 8:30 PM",
        booking_required: true,
    },
];
