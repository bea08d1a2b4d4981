use std::str::FromStr;

use chrono::{DateTime, Utc};
use chrono_tz::{OffsetComponents, Tz};

use crate::core::{
    error::{ClockError, ClockResult},
    models::{TimeOfDay, UtcOffset, ZoneDate},
};

/// Timezone-aware clock computations.
///
/// Every query takes the instant to evaluate explicitly, so results are a
/// pure function of (instant, zone) and repeat calls with the same instant
/// return identical values.
#[derive(Clone)]
pub struct ClockSource {
    pub(crate) local_timezone: Tz,
}

impl ClockSource {
    pub fn new() -> Self {
        // Try to detect the system's local timezone
        let local_tz = match iana_time_zone::get_timezone() {
            Ok(tz_name) => match tz_name.parse::<Tz>() {
                Ok(tz) => tz,
                Err(_) => {
                    tracing::warn!("Could not parse timezone '{}', defaulting to UTC", tz_name);
                    chrono_tz::UTC
                }
            },
            Err(_) => {
                tracing::warn!("Could not detect system timezone, defaulting to UTC");
                chrono_tz::UTC
            }
        };

        Self {
            local_timezone: local_tz,
        }
    }

    /// Build a source with a fixed observer timezone instead of detecting one
    pub fn with_local_timezone(timezone: Tz) -> Self {
        Self {
            local_timezone: timezone,
        }
    }

    pub fn local_timezone_name(&self) -> String {
        self.local_timezone.to_string()
    }

    pub(crate) fn parse_timezone(&self, timezone_name: &str) -> ClockResult<Tz> {
        Tz::from_str(timezone_name).map_err(|_| ClockError::InvalidTimezone {
            timezone: timezone_name.to_string(),
        })
    }

    /// Wall-clock time of `now` in the given IANA timezone, 24-hour
    pub fn time_of_day(&self, timezone_name: &str, now: DateTime<Utc>) -> ClockResult<TimeOfDay> {
        let timezone = self.parse_timezone(timezone_name)?;
        Ok(TimeOfDay::from_datetime(&now.with_timezone(&timezone)))
    }

    /// Human-readable calendar date of `now` in the given IANA timezone
    pub fn date_in_zone(&self, timezone_name: &str, now: DateTime<Utc>) -> ClockResult<ZoneDate> {
        let timezone = self.parse_timezone(timezone_name)?;
        Ok(ZoneDate::from_datetime(&now.with_timezone(&timezone)))
    }

    /// The zone's UTC offset at `now`, DST included, at minute resolution
    pub fn utc_offset(&self, timezone_name: &str, now: DateTime<Utc>) -> ClockResult<UtcOffset> {
        let timezone = self.parse_timezone(timezone_name)?;
        let current = now.with_timezone(&timezone);
        let offset = current.offset().base_utc_offset() + current.offset().dst_offset();

        Ok(UtcOffset::from_minutes(offset.num_minutes() as i32))
    }

    /// Wall-clock time of `now` in the observer's timezone
    pub fn local_time_of_day(&self, now: DateTime<Utc>) -> TimeOfDay {
        TimeOfDay::from_datetime(&now.with_timezone(&self.local_timezone))
    }

    /// Calendar date of `now` in the observer's timezone
    pub fn local_date(&self, now: DateTime<Utc>) -> ZoneDate {
        ZoneDate::from_datetime(&now.with_timezone(&self.local_timezone))
    }
}

impl Default for ClockSource {
    fn default() -> Self {
        Self::new()
    }
}
