//! Trip plan model and model-reply parsing

mod plan;
mod response;

pub use plan::{DayPlan, Flight, Hotel, PlanUpdate, PlannedActivity, TotalCost, TripPlan};
pub use response::{
    FALLBACK_REPLY, ModelOutput, PlanResponse, TripPlanError, looks_truncated, parse_model_output, parse_plan_response,
};
