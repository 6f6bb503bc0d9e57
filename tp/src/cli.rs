//! CLI command definitions and subcommands

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Trip Planner - conversational travel planning
#[derive(Debug, Parser)]
#[command(
    name = "tp",
    about = "Conversational trip planner with streaming chat and follow-up routing",
    version,
    after_help = "Logs are written to: ~/.local/share/tripplanner/logs/tripplanner.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        global = true,
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,

    /// Subcommand to execute; defaults to `chat`
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Chat with the travel agent interactively
    Chat {
        /// Opening message, sent before the prompt appears
        message: Option<String>,
    },

    /// Serve the HTTP chat API
    Serve {
        /// Bind host (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Bind port (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Show how a message would be routed
    Analyze {
        /// Message to classify
        message: String,

        /// Treat the message as arriving while a trip plan exists
        #[arg(long)]
        has_plan: bool,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the trip length requested in a message
    Days {
        /// Message to inspect
        message: String,
    },

    /// Search the mock travel inventory
    Search {
        /// Destination city or country
        #[arg(short, long)]
        destination: Option<String>,

        /// Departure city
        #[arg(short, long)]
        origin: Option<String>,

        /// Total budget in USD
        #[arg(short, long)]
        budget: Option<f64>,

        /// Interests, comma separated (food, culture, history, ...)
        #[arg(long, value_delimiter = ',')]
        prefs: Vec<String>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Lay out a day-by-day itinerary from the mock inventory
    Itinerary {
        /// Destination city or country
        destination: String,

        /// Number of days
        #[arg(short = 'n', long, default_value = "3")]
        days: u32,

        /// Interests, comma separated
        #[arg(long, value_delimiter = ',')]
        prefs: Vec<String>,
    },
}

/// Output format for analyze/search
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {}. Use: text or json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Where the binary writes its log file
pub fn get_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tripplanner")
        .join("logs")
        .join("tripplanner.log")
}
