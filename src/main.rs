mod config;
mod core;
mod models;
mod presenter;
mod season;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::Settings;
use crate::core::OddsCalculator;
use crate::models::Roster;

fn main() {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&log_level))
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting AYTO odds calculator...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Build the roster; a mismatched participant configuration is fatal
    let roster = Roster::new(
        settings.participants.boys.clone(),
        settings.participants.girls.clone(),
        settings.participants.expected_couples,
    )
    .unwrap_or_else(|e| {
        error!("Invalid participant configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Roster loaded: {} couples", roster.couple_count());

    // Load the season's event history
    let season_data = season::load_season(&settings.season.data_file).unwrap_or_else(|e| {
        error!(
            "Failed to load season data from {}: {}",
            settings.season.data_file, e
        );
        panic!("Season data error: {}", e);
    });

    let (ceremonies, booths) = season_data.events();

    info!(
        "Season loaded: {} weeks, {} ceremonies, {} booth reveals",
        season_data.weeks.len(),
        ceremonies.len(),
        booths.len()
    );

    let calculator = OddsCalculator::new(roster);
    let matrix = calculator.calculate(&ceremonies, &booths);

    print!("{}", presenter::render_table(&matrix));
}
