//! Demonstration harness for the two contracts the core exposes:
//! `compute_panchangam` and `health`. Owns process-wide tracing
//! initialization and argument parsing, exactly the concerns the core
//! spec carves out as external collaborators.

mod logging;

use clap::{Parser, Subcommand};
use panchangam_core::{CalculationMethodRequest, GeographicLocation, PanchangamConfig, PanchangamRequest};
use panchangam_orchestrator::PanchangamOrchestrator;

#[derive(Parser)]
#[command(name = "panchangam", version, about = "Compute a Hindu panchangam for a date and location")]
struct Cli {
    /// Log level filter, e.g. "info" or "panchangam_orchestrator=debug"
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Emit logs as JSON instead of the pretty development format
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the panchangam for a date and location
    Compute {
        /// Civil date/time in RFC 3339 (UTC), e.g. 2026-07-28T06:00:00Z
        #[arg(long)]
        date: String,

        #[arg(long, allow_hyphen_values = true)]
        latitude: f64,

        #[arg(long, allow_hyphen_values = true)]
        longitude: f64,

        /// IANA timezone identifier, e.g. Asia/Kolkata
        #[arg(long, default_value = "UTC")]
        timezone: String,

        /// Region name used to resolve calendar-system conventions
        #[arg(long)]
        region: Option<String>,
    },
    /// Report the orchestrator's health
    Health,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.log_json {
        logging::init_tracing_json(&cli.log_level);
    } else {
        logging::init_tracing(&cli.log_level);
    }

    let config = PanchangamConfig::from_env();
    for warning in config.validate() {
        tracing::warn!(%warning, "configuration warning");
    }

    let orchestrator = PanchangamOrchestrator::new(config);

    match cli.command {
        Command::Compute { date, latitude, longitude, timezone, region } => {
            let date = match chrono::DateTime::parse_from_rfc3339(&date) {
                Ok(dt) => dt.with_timezone(&chrono::Utc),
                Err(err) => {
                    eprintln!("invalid --date '{}': {}", date, err);
                    std::process::exit(2);
                }
            };

            let request = PanchangamRequest {
                date,
                location: GeographicLocation { latitude, longitude, altitude_m: 0.0, timezone },
                region,
                method: CalculationMethodRequest::Auto,
                ayanamsa: None,
            };

            match orchestrator.compute(request).await {
                Ok(result) => println!("{}", serde_json::to_string_pretty(&result.to_envelope()).unwrap()),
                Err(err) => {
                    eprintln!("{}", serde_json::to_string_pretty(&err).unwrap());
                    std::process::exit(1);
                }
            }
        }
        Command::Health => {
            let report = panchangam_orchestrator::health(&orchestrator);
            println!("{}", serde_json::to_string_pretty(&report).unwrap());
        }
    }
}
