//! Markdown itinerary built from search results

use std::fmt::Write as _;

use tracing::debug;

use super::data::{ActivityOption, HotelOption};

const ACTIVITIES_PER_DAY: usize = 2;

/// Lay out a day-by-day itinerary
///
/// `hotels` and `activities` are expected in ranked order: the first hotel is
/// recommended and activities fill days two at a time (morning, then evening).
/// Days past the end of the activity list become free days.
pub fn generate_itinerary(
    destination: &str,
    days: u32,
    hotels: &[&HotelOption],
    activities: &[&ActivityOption],
) -> String {
    debug!(%destination, days, hotels = hotels.len(), activities = activities.len(), "generate_itinerary: called");
    let mut out = String::new();
    let _ = write!(out, "## {}-Day {} Itinerary\n\n", days, destination);

    if let Some(hotel) = hotels.first() {
        let _ = writeln!(out, "**🏨 Recommended Hotel:** {}", hotel.name);
        let _ = writeln!(out, "📍 {}", hotel.location);
        let _ = writeln!(out, "⭐ {}/5 stars • ${}/night", hotel.rating, hotel.price_per_night);
        let _ = write!(out, "{}\n\n", hotel.description);
    }

    let mut chunks = activities.chunks(ACTIVITIES_PER_DAY);
    for day in 1..=days {
        let _ = writeln!(out, "### Day {}", day);
        match chunks.next() {
            Some(day_activities) => {
                for (index, activity) in day_activities.iter().enumerate() {
                    let slot = if index == 0 { "🌅 Morning" } else { "🌆 Evening" };
                    let _ = writeln!(out, "**{}: {}**", slot, activity.name);
                    let _ = writeln!(out, "📍 {} • {} • ${}", activity.location, activity.duration, activity.price);
                    let _ = writeln!(out, "⭐ {}/5 • {}", activity.rating, activity.description);
                    let _ = write!(out, "⏰ {}\n\n", activity.operating_hours);
                }
            }
            None => {
                let _ = write!(out, "**Free Day**: Explore {} at your own pace\n\n", destination);
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::travel::{SearchCriteria, search_activities, search_hotels};

    fn inventory(destination: &str) -> (Vec<&'static HotelOption>, Vec<&'static ActivityOption>) {
        let criteria = SearchCriteria {
            destination: Some(destination.to_string()),
            ..Default::default()
        };
        (search_hotels(&criteria).hotels, search_activities(&criteria).activities)
    }

    #[test]
    fn test_header_and_hotel() {
        let (hotels, activities) = inventory("rome");
        let text = generate_itinerary("Rome", 2, &hotels, &activities);

        assert!(text.starts_with("## 2-Day Rome Itinerary\n\n"));
        assert!(text.contains("**🏨 Recommended Hotel:** The RomeHello"));
        assert!(text.contains("### Day 1\n**🌅 Morning: Colosseum Underground Tour**"));
        assert!(text.contains("**🌆 Evening: "));
        assert!(!text.contains("Free Day"));
    }

    #[test]
    fn test_free_days_when_activities_run_out() {
        let (hotels, activities) = inventory("tokyo");
        let text = generate_itinerary("Tokyo", 4, &hotels, &activities);

        // Four Tokyo activities fill two days
        assert_eq!(text.matches("🌅 Morning").count(), 2);
        assert_eq!(text.matches("🌆 Evening").count(), 2);
        assert_eq!(text.matches("**Free Day**: Explore Tokyo at your own pace").count(), 2);
    }

    #[test]
    fn test_no_inventory() {
        let text = generate_itinerary("Atlantis", 1, &[], &[]);
        assert!(!text.contains("Recommended Hotel"));
        assert!(text.contains("### Day 1\n**Free Day**"));
    }

    #[test]
    fn test_odd_activity_count_leaves_morning_only() {
        let (_, activities) = inventory("paris");
        let text = generate_itinerary("Paris", 3, &[], &activities);
        // Five activities: two, two, then one morning
        assert_eq!(text.matches("🌅 Morning").count(), 3);
        assert_eq!(text.matches("🌆 Evening").count(), 2);
    }
}
