use chrono_tz::Tz;

use crate::core::models::{MeetingRule, TimeZoneEntry};

/// Runtime configuration assembled from CLI arguments and the compiled-in
/// roster
#[derive(Debug, Clone)]
pub struct Config {
    pub zones: Vec<TimeZoneEntry>,
    pub meetings: Vec<MeetingRule>,
    /// Render one frame and exit instead of running the kiosk loop
    pub once: bool,
    /// Emit frames as pretty JSON instead of the ANSI screen
    pub json: bool,
    /// Observer timezone override; detected from the system when `None`
    pub local_timezone: Option<Tz>,
}

/// The team's timezone roster, in display order
pub fn default_zones() -> Vec<TimeZoneEntry> {
    vec![
        TimeZoneEntry::new("ontario", "Ontario", "America/Toronto", "EST", "-05:00", "🍁").local(),
        TimeZoneEntry::new(
            "vancouver",
            "Vancouver",
            "America/Vancouver",
            "PST",
            "-08:00",
            "🌲",
        ),
        TimeZoneEntry::new("alberta", "Alberta", "America/Edmonton", "MST", "-07:00", "🏔️"),
        TimeZoneEntry::new("hawaii", "Hawaii", "Pacific/Honolulu", "HST", "-10:00", "🌺"),
        TimeZoneEntry::new("sri-lanka", "Sri Lanka", "Asia/Colombo", "IST", "+05:30", "🦁"),
        TimeZoneEntry::new(
            "uk",
            "United Kingdom",
            "Europe/London",
            "GMT",
            "+00:00",
            "🇬🇧",
        ),
        TimeZoneEntry::new(
            "philippines",
            "Philippines",
            "Asia/Manila",
            "PHT",
            "+08:00",
            "🇵🇭",
        ),
    ]
}

/// The team's recurring meetings
pub fn default_meetings() -> Vec<MeetingRule> {
    vec![MeetingRule {
        timezone: "America/Vancouver".to_string(),
        hour: 10,
        minute: 0,
        // Monday to Friday
        weekdays: vec![1, 2, 3, 4, 5],
        title: "Daily Standup".to_string(),
        description: "10:00 AM PST".to_string(),
    }]
}
