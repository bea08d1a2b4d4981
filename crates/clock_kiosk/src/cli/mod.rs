use std::str::FromStr;

use chrono_tz::Tz;
use clap::Parser;

use crate::config::{Config, default_meetings, default_zones};
use crate::core::error::{ClockError, ClockResult};

/// World Clock Kiosk
///
/// A multi-timezone wall clock for TV/kiosk displays. Shows the current time
/// for the team's timezone roster, highlights cards whose timezone has a
/// meeting in progress, and raises a banner while any meeting window is
/// active.
///
/// ## Environment Variables
/// - `RUST_LOG`: Controls logging verbosity (trace, debug, info, warn, error)
#[derive(Parser, Debug, Clone)]
#[command(name = "world-clock-kiosk")]
#[command(about = "A multi-timezone wall clock with meeting window alerts")]
#[command(version)]
#[command(
    long_about = "A multi-timezone wall clock for TV/kiosk displays. \nClock faces refresh every second, the header date every minute, and meeting windows are re-checked every thirty seconds."
)]
pub struct Cli {
    /// Render a single frame and exit.
    ///
    /// Useful for scripting and for checking the roster without taking over
    /// the terminal.
    #[arg(long)]
    pub once: bool,

    /// Emit frames as pretty JSON instead of the ANSI screen
    #[arg(long)]
    pub json: bool,

    /// Override the detected local timezone.
    ///
    /// Accepts an IANA timezone name such as 'America/Toronto'.
    #[arg(long, value_name = "TIMEZONE")]
    pub local_timezone: Option<String>,
}

impl Cli {
    /// Parse CLI arguments and convert to configuration.
    ///
    /// A timezone override is validated here so a typo fails at startup
    /// instead of surfacing as a skipped card later.
    pub fn parse_config() -> ClockResult<Config> {
        let cli = Self::parse();
        cli.into_config()
    }

    fn into_config(self) -> ClockResult<Config> {
        let local_timezone = self
            .local_timezone
            .map(|name| {
                Tz::from_str(&name).map_err(|_| ClockError::InvalidTimezone { timezone: name })
            })
            .transpose()?;

        Ok(Config {
            zones: default_zones(),
            meetings: default_meetings(),
            once: self.once,
            json: self.json,
            local_timezone,
        })
    }
}
