//! Trip Planner - conversational travel planning
//!
//! CLI entry point for the chat REPL, the HTTP server and the offline tools.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use eyre::{Context, Result};
use tracing::{debug, info};

use tripplanner::chat::{self, RoutingReport};
use tripplanner::cli::{Cli, Command, OutputFormat, get_log_path};
use tripplanner::config::Config;
use tripplanner::server;
use tripplanner::travel::{SearchCriteria, generate_itinerary, search_activities, search_hotels, search_travel};

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Note: Can't log params here since logging isn't initialized yet
    let log_path = get_log_path();
    let log_dir = log_path.parent().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Priority: CLI --log-level > config file > default (INFO)
    let level = match cli_log_level.or(config_log_level) {
        Some(s) => match s.to_uppercase().as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
                tracing::Level::INFO
            }
        },
        None => tracing::Level::INFO,
    };

    let log_file = fs::File::create(&log_path).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load log level from config file early (before full config load)
    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    info!(
        "Trip planner loaded config: provider={}, model={}",
        config.llm.provider, config.llm.model
    );

    debug!(command = ?cli.command, "main: dispatching command");
    match cli.command {
        Some(Command::Chat { message }) => chat::run_interactive(config, message).await,
        None => chat::run_interactive(config, None).await,
        Some(Command::Serve { host, port }) => cmd_serve(config, host, port).await,
        Some(Command::Analyze {
            message,
            has_plan,
            format,
        }) => cmd_analyze(&message, has_plan, &format),
        Some(Command::Days { message }) => cmd_days(&message),
        Some(Command::Search {
            destination,
            origin,
            budget,
            prefs,
            format,
        }) => {
            let criteria = SearchCriteria {
                destination,
                origin,
                budget,
                preferences: prefs,
                ..Default::default()
            };
            cmd_search(&criteria, &format)
        }
        Some(Command::Itinerary {
            destination,
            days,
            prefs,
        }) => cmd_itinerary(&destination, days, prefs),
    }
}

/// Run the HTTP server
async fn cmd_serve(mut config: Config, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    server::run_server(config).await
}

/// Print the routing decision for a message
fn cmd_analyze(message: &str, has_plan: bool, format: &OutputFormat) -> Result<()> {
    debug!(%has_plan, %format, "cmd_analyze: called");
    let report = RoutingReport::new(message, has_plan);
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print!("{}", report.to_text()),
    }
    Ok(())
}

/// Print the requested day count, or "none"
fn cmd_days(message: &str) -> Result<()> {
    match querydetect::extract_requested_days(message) {
        Some(days) => println!("{}", days),
        None => println!("none"),
    }
    Ok(())
}

/// Search the mock inventory
fn cmd_search(criteria: &SearchCriteria, format: &OutputFormat) -> Result<()> {
    debug!(?criteria, %format, "cmd_search: called");
    let results = search_travel(criteria);
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
        OutputFormat::Text => match results.prompt_context() {
            Some(listing) => {
                println!(
                    "{} flights, {} hotels, {} activities",
                    results.flights.total_results, results.hotels.total_results, results.activities.total_results
                );
                println!();
                print!("{}", listing);
            }
            None => println!("No matching inventory."),
        },
    }
    Ok(())
}

/// Print a Markdown itinerary
fn cmd_itinerary(destination: &str, days: u32, prefs: Vec<String>) -> Result<()> {
    debug!(%destination, days, "cmd_itinerary: called");
    if days == 0 {
        return Err(eyre::eyre!("Days must be at least 1"));
    }
    let criteria = SearchCriteria {
        destination: Some(destination.to_string()),
        preferences: prefs,
        ..Default::default()
    };
    let hotels = search_hotels(&criteria).hotels;
    let activities = search_activities(&criteria).activities;
    print!("{}", generate_itinerary(destination, days, &hotels, &activities));
    Ok(())
}
