//! QueryDetect - follow-up query routing for trip plans
//!
//! Decides whether a chat message refines an existing trip plan and, if so,
//! which part of the plan it is about. Everything here is synchronous and
//! table-driven; no I/O and no model calls.
//!
//! # Example
//!
//! ```
//! use querydetect::{TargetSection, analyze, is_follow_up};
//!
//! let msg = "find me a cheaper hotel";
//! assert!(is_follow_up(msg, true));
//!
//! let analysis = analyze(msg);
//! assert_eq!(analysis.target_section, TargetSection::Hotels);
//! ```

mod analysis;
mod duration;
mod followup;
pub mod patterns;

pub use analysis::{QueryAnalysis, QueryIntent, TargetSection, analyze};
pub use duration::{DayCountMismatch, check_day_count, extract_requested_days};
pub use followup::{FollowUpRouting, Section, SectionLoadingState, build_section_loading_states, is_follow_up, route_message};
