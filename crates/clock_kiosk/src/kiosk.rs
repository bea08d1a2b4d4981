use chrono::{DateTime, Utc};
use tokio::sync::mpsc;

use crate::config::Config;
use crate::core::{
    error::ClockResult,
    frame::{self, build_frame},
    matcher,
    models::{ClockFrame, ZoneDate},
    provider::ClockSource,
    ticker::{TickEvent, Ticker, TickerPeriods},
};
use crate::display;

/// State refreshed on the slower tick cadences.
///
/// Clock faces are recomputed fresh every second; the header date and the
/// meeting flags are cached here and refreshed on their own timers (60s and
/// 30s), mirroring the three-cadence design of the display.
struct KioskState {
    meeting_flags: Vec<bool>,
    any_meeting_active: bool,
    local_date: ZoneDate,
}

impl KioskState {
    fn new(source: &ClockSource, config: &Config, now: DateTime<Utc>) -> Self {
        let mut state = Self {
            meeting_flags: vec![false; config.zones.len()],
            any_meeting_active: false,
            local_date: source.local_date(now),
        };
        state.refresh_meetings(config, now);
        state
    }

    fn refresh_meetings(&mut self, config: &Config, now: DateTime<Utc>) {
        self.meeting_flags = config
            .zones
            .iter()
            .map(|zone| matcher::active_for_zone(&config.meetings, &zone.timezone, now))
            .collect();
        self.any_meeting_active = matcher::any_active(&config.meetings, now);
    }

    fn refresh_date(&mut self, source: &ClockSource, now: DateTime<Utc>) {
        self.local_date = source.local_date(now);
    }

    /// Fresh clock readings combined with the cached date and meeting flags
    fn frame(&self, source: &ClockSource, config: &Config, now: DateTime<Utc>) -> ClockFrame {
        let mut records = Vec::with_capacity(config.zones.len());
        for (entry, &is_meeting_active) in config.zones.iter().zip(&self.meeting_flags) {
            match frame::zone_record(source, entry, now, is_meeting_active) {
                Ok(record) => records.push(record),
                Err(error) => {
                    tracing::warn!(zone = %entry.id, %error, "Skipping misconfigured timezone entry");
                }
            }
        }

        ClockFrame {
            local_timezone: source.local_timezone_name(),
            local_time: source.local_time_of_day(now),
            local_date: self.local_date.clone(),
            records,
            any_meeting_active: self.any_meeting_active,
        }
    }
}

fn emit(frame: &ClockFrame, config: &Config, clear: bool) -> ClockResult<()> {
    if config.json {
        println!("{}", display::render_json(frame)?);
    } else {
        if clear {
            print!("{}", display::CLEAR_SCREEN);
        }
        println!("{}", display::render_screen(frame));
    }
    Ok(())
}

/// Run the kiosk: wire the clock source and ticker together and keep
/// rendering until Ctrl-C
pub async fn run(config: Config) -> ClockResult<()> {
    let source = match config.local_timezone {
        Some(timezone) => ClockSource::with_local_timezone(timezone),
        None => ClockSource::new(),
    };
    tracing::info!(local_timezone = %source.local_timezone_name(), "Observer timezone resolved");

    if config.once {
        let frame = build_frame(&source, &config.zones, &config.meetings, Utc::now());
        return emit(&frame, &config, false);
    }

    let (sender, mut receiver) = mpsc::channel(16);
    let ticker = Ticker::start(TickerPeriods::default(), sender);

    // Render immediately; the first ticks only arrive a full period in
    let now = Utc::now();
    let mut state = KioskState::new(&source, &config, now);
    emit(&state.frame(&source, &config, now), &config, !config.json)?;

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Received Ctrl-C, shutting down");
                break;
            }
            event = receiver.recv() => match event {
                None => break,
                Some(TickEvent::Clock) => {
                    let now = Utc::now();
                    emit(&state.frame(&source, &config, now), &config, !config.json)?;
                }
                Some(TickEvent::Date) => state.refresh_date(&source, Utc::now()),
                Some(TickEvent::MeetingCheck) => state.refresh_meetings(&config, Utc::now()),
            }
        }
    }

    ticker.shutdown().await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::config::{default_meetings, default_zones};

    fn test_config() -> Config {
        Config {
            zones: default_zones(),
            meetings: default_meetings(),
            once: false,
            json: false,
            local_timezone: Some(chrono_tz::America::Toronto),
        }
    }

    fn utc(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 7, 17, h, m, 0).unwrap()
    }

    #[test]
    fn test_meeting_flags_follow_their_own_cadence() {
        let config = test_config();
        let source = ClockSource::with_local_timezone(chrono_tz::America::Toronto);

        // Initialized during the standup window
        let mut state = KioskState::new(&source, &config, utc(17, 2));
        assert!(state.any_meeting_active);

        // A clock-tick frame rendered later still shows the cached flags
        let stale = state.frame(&source, &config, utc(17, 30));
        assert!(stale.any_meeting_active);

        // The meeting tick clears them
        state.refresh_meetings(&config, utc(17, 30));
        let fresh = state.frame(&source, &config, utc(17, 30));
        assert!(!fresh.any_meeting_active);
        assert!(fresh.records.iter().all(|r| !r.is_meeting_active));
    }

    #[test]
    fn test_date_is_cached_between_date_ticks() {
        let config = test_config();
        let source = ClockSource::with_local_timezone(chrono_tz::America::Toronto);

        let mut state = KioskState::new(&source, &config, utc(17, 0));
        let day_before = state.local_date.clone();

        // Two days later without a date tick: header date unchanged
        let later = Utc.with_ymd_and_hms(2024, 7, 19, 17, 0, 0).unwrap();
        assert_eq!(state.frame(&source, &config, later).local_date, day_before);

        state.refresh_date(&source, later);
        assert_eq!(state.frame(&source, &config, later).local_date.day, 19);
    }

    #[test]
    fn test_frame_times_are_always_fresh() {
        let config = test_config();
        let source = ClockSource::with_local_timezone(chrono_tz::America::Toronto);
        let state = KioskState::new(&source, &config, utc(17, 0));

        let frame = state.frame(&source, &config, utc(18, 30));
        // 18:30 UTC is 14:30 in Toronto
        assert_eq!(frame.local_time.hour, 14);
        assert_eq!(frame.local_time.minute, 30);
    }
}
