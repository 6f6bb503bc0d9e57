//! Embedded prompts
//!
//! These are compiled into the binary from .pmt files at build time.

use tracing::debug;

/// Travel agent system prompt
pub const TRAVEL_AGENT: &str = include_str!("../../prompts/travel_agent.pmt");

/// Get the embedded prompt by name
pub fn get_embedded(name: &str) -> Option<&'static str> {
    debug!(%name, "get_embedded: called");
    match name {
        "travel_agent" => Some(TRAVEL_AGENT),
        _ => {
            debug!("get_embedded: no match found");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_embedded_travel_agent() {
        let prompt = get_embedded("travel_agent").unwrap();
        assert!(prompt.contains("travel agent"));
        assert!(prompt.contains("\"type\": \"trip_plan\""));
        assert!(prompt.contains("{{#if requested_days}}"));
        assert!(prompt.contains("{{#if follow_up}}"));
    }

    #[test]
    fn test_get_embedded_unknown() {
        assert!(get_embedded("unknown-template").is_none());
    }
}
