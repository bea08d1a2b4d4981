use chrono::{DateTime, Datelike, TimeZone, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::core::utils::{MONTH_FORMAT, WEEKDAY_FORMAT, format_offset_label};

/// A statically configured timezone card on the kiosk display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeZoneEntry {
    /// Stable identifier, unique within the configuration
    pub id: String,
    /// City or region name shown on the card
    pub city: String,
    /// IANA timezone name (e.g., 'America/Vancouver')
    pub timezone: String,
    /// Timezone abbreviation shown under the city name
    pub abbreviation: String,
    /// Configured offset label (e.g., '-05:00')
    pub utc_offset_label: String,
    /// Whether this is the observer's own timezone
    pub is_local: bool,
    /// Decorative icon for the card
    pub icon: String,
}

impl TimeZoneEntry {
    pub fn new(
        id: &str,
        city: &str,
        timezone: &str,
        abbreviation: &str,
        utc_offset_label: &str,
        icon: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            city: city.to_string(),
            timezone: timezone.to_string(),
            abbreviation: abbreviation.to_string(),
            utc_offset_label: utc_offset_label.to_string(),
            is_local: false,
            icon: icon.to_string(),
        }
    }

    /// Mark this entry as the observer's local timezone
    pub fn local(mut self) -> Self {
        self.is_local = true;
        self
    }
}

/// A recurring daily meeting definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingRule {
    /// IANA timezone the meeting time is defined in
    pub timezone: String,
    /// Meeting hour, 0-23
    pub hour: u32,
    /// Meeting minute, 0-59
    pub minute: u32,
    /// Weekdays the meeting recurs on, 0 = Sunday through 6 = Saturday
    pub weekdays: Vec<u8>,
    pub title: String,
    pub description: String,
}

impl MeetingRule {
    /// Whether the rule recurs on the given weekday
    pub fn applies_on(&self, weekday: Weekday) -> bool {
        let day = weekday.num_days_from_sunday() as u8;
        self.weekdays.contains(&day)
    }
}

/// Wall-clock time of day in a specific timezone, 24-hour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl TimeOfDay {
    /// Extract the wall-clock time from a timezone-aware datetime
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        Self {
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second(),
        }
    }
}

/// Human-readable calendar date in a specific timezone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneDate {
    /// Long weekday name (e.g., 'Wednesday')
    pub weekday: String,
    /// Long month name (e.g., 'January')
    pub month: String,
    /// Day of month, 1-31
    pub day: u32,
    pub year: i32,
}

impl ZoneDate {
    /// Extract the calendar date from a timezone-aware datetime
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            weekday: dt.format(WEEKDAY_FORMAT).to_string(),
            month: dt.format(MONTH_FORMAT).to_string(),
            day: dt.day(),
            year: dt.year(),
        }
    }
}

impl std::fmt::Display for ZoneDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {} {}, {}", self.weekday, self.month, self.day, self.year)
    }
}

/// A zone's UTC offset at some instant, carried at minute resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtcOffset {
    minutes: i32,
}

impl UtcOffset {
    pub fn from_minutes(minutes: i32) -> Self {
        Self { minutes }
    }

    pub fn num_minutes(&self) -> i32 {
        self.minutes
    }

    /// Signed whole-hour offset, truncated toward zero.
    ///
    /// Lossy for half-hour zones such as Asia/Colombo (+05:30 becomes +5);
    /// display code uses `label` instead.
    pub fn whole_hours(&self) -> i32 {
        self.minutes / 60
    }

    /// Display label at minute resolution (e.g., 'UTC+5:30')
    pub fn label(&self) -> String {
        format_offset_label(self.minutes)
    }
}

/// Per-timezone render record handed to the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneRecord {
    pub id: String,
    pub city: String,
    pub icon: String,
    pub abbreviation: String,
    #[serde(flatten)]
    pub time: TimeOfDay,
    pub is_local: bool,
    pub is_meeting_active: bool,
    /// Live-computed offset label for the current instant
    pub utc_offset_label: String,
}

/// One full render pass of the kiosk display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockFrame {
    /// Observer's IANA timezone name
    pub local_timezone: String,
    /// Observer-local header clock
    pub local_time: TimeOfDay,
    /// Observer-local header date
    pub local_date: ZoneDate,
    pub records: Vec<ZoneRecord>,
    /// Global banner toggle: any configured meeting currently active
    pub any_meeting_active: bool,
}
