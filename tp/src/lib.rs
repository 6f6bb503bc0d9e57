//! Trip Planner - conversational travel planning
//!
//! A travel agent chat that streams its replies, produces structured trip
//! plans, and routes follow-up requests ("find a cheaper hotel") to the plan
//! section they target so only that section is regenerated.
//!
//! # Modules
//!
//! - [`chat`] - Turn orchestration and the interactive REPL
//! - [`server`] - HTTP API with server-sent event streaming
//! - [`llm`] - Streaming LLM client (OpenAI-compatible)
//! - [`prompts`] - Travel agent prompt templates
//! - [`trip`] - Trip plan model and reply parsing
//! - [`travel`] - Mock travel inventory and search
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface
//!
//! Message classification lives in the `querydetect` crate.

pub mod chat;
pub mod cli;
pub mod config;
pub mod llm;
pub mod prompts;
pub mod server;
pub mod travel;
pub mod trip;

pub use config::Config;
