mod cli;
mod config;
mod core;
mod display;
mod kiosk;
mod utils;

/// World Clock Kiosk
///
/// A multi-timezone wall clock for TV/kiosk displays:
/// - Clock faces for the team's timezone roster, refreshed every second
/// - Header date refreshed every minute
/// - Meeting windows re-checked every thirty seconds
///
/// Usage: world-clock-kiosk [--once] [--json] [--local-timezone <TIMEZONE>]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    utils::logging::init_logging()?;

    let config = cli::Cli::parse_config()?;

    if let Err(e) = kiosk::run(config).await {
        tracing::error!("Error running world clock kiosk: {}", e);
        return Err(e.into());
    }

    Ok(())
}
