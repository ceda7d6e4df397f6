use std::process::ExitCode;

use chrono::Local;
use tracing::{info, warn};

use flight_filter::config::FilterConfig;
use flight_filter::domain::{DomainError, Flight};
use flight_filter::dto::FilterReport;
use flight_filter::engine::FlightFilter;
use flight_filter::logging::init_logging;
use flight_filter::printer::format_flights;
use flight_filter::rules::{
    ArrivalBeforeDepartureFilter, DepartureBeforeCurrentTimeFilter, ExcessiveGroundTimeFilter,
    FilterRule, presets,
};
use flight_filter::sample::sample_flights;

/// Environment variable overriding the standard ground time limit (minutes).
const MAX_GROUND_ENV: &str = "FLIGHT_FILTER_MAX_GROUND_MINS";

/// Environment variable overriding the business ground time limit (minutes).
const BUSINESS_GROUND_ENV: &str = "FLIGHT_FILTER_BUSINESS_GROUND_MINS";

fn main() -> ExitCode {
    init_logging();

    let json = std::env::args().skip(1).any(|arg| arg == "--json");
    let config = config_from_env();

    match run(&config, json) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Read threshold overrides from the environment, keeping defaults on bad input.
fn config_from_env() -> FilterConfig {
    let defaults = FilterConfig::default();
    FilterConfig {
        max_ground_time_mins: env_minutes(MAX_GROUND_ENV, defaults.max_ground_time_mins),
        business_max_ground_time_mins: env_minutes(
            BUSINESS_GROUND_ENV,
            defaults.business_max_ground_time_mins,
        ),
        ..defaults
    }
}

fn env_minutes(name: &str, default: i64) -> i64 {
    match std::env::var(name) {
        Ok(value) => value.trim().parse().unwrap_or_else(|_| {
            warn!(name, value = %value, default, "Ignoring unparsable override");
            default
        }),
        Err(_) => default,
    }
}

fn run(config: &FilterConfig, json: bool) -> Result<(), DomainError> {
    let now = Local::now().naive_local();
    let flights = sample_flights(now, config.sample_offset());
    let engine = FlightFilter::new();

    let departure = DepartureBeforeCurrentTimeFilter::at(now);
    let arrival = ArrivalBeforeDepartureFilter::new();
    let ground = ExcessiveGroundTimeFilter::new(config.max_ground_time_mins)?;
    let business = presets::custom_at(now, config.business_max_ground_time_mins)?;

    info!(
        flights = flights.len(),
        max_ground_mins = config.max_ground_time_mins,
        business_ground_mins = config.business_max_ground_time_mins,
        "Filtering sample flights"
    );

    let runs: Vec<(&str, Vec<Flight>, String)> = vec![
        ("Original flights", flights.clone(), "none".to_string()),
        (
            "Without departures before now",
            engine.filter(&flights, &departure),
            departure.description(),
        ),
        (
            "Without segments arriving before departure",
            engine.filter(&flights, &arrival),
            arrival.description(),
        ),
        (
            "Without excessive ground time",
            engine.filter(&flights, &ground),
            ground.description(),
        ),
        (
            "All three rules combined",
            engine.filter_all(&flights, &[&departure, &arrival, &ground]),
            (&departure).and(&arrival).and(&ground).description(),
        ),
        (
            "Business preset",
            engine.filter(&flights, &business),
            business.description(),
        ),
    ];

    if json {
        let reports: Vec<FilterReport> = runs
            .iter()
            .map(|(title, kept, rule)| FilterReport::new(*title, rule.as_str(), flights.len(), kept))
            .collect();
        match serde_json::to_string_pretty(&reports) {
            Ok(text) => println!("{text}"),
            Err(e) => eprintln!("Failed to serialize reports: {e}"),
        }
        return Ok(());
    }

    for (title, kept, rule) in &runs {
        println!("=== {title} ===");
        println!("Rule: {rule}");
        println!("Flights: {}", kept.len());
        println!("{}", format_flights(kept));
    }

    Ok(())
}
