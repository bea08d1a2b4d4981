use chrono::{DateTime, Utc};

use crate::core::{
    error::ClockResult,
    matcher,
    models::{ClockFrame, MeetingRule, TimeZoneEntry, ZoneRecord},
    provider::ClockSource,
};

/// Compute the render record for a single timezone card
pub fn zone_record(
    source: &ClockSource,
    entry: &TimeZoneEntry,
    now: DateTime<Utc>,
    is_meeting_active: bool,
) -> ClockResult<ZoneRecord> {
    let time = source.time_of_day(&entry.timezone, now)?;
    let offset = source.utc_offset(&entry.timezone, now)?;

    Ok(ZoneRecord {
        id: entry.id.clone(),
        city: entry.city.clone(),
        icon: entry.icon.clone(),
        abbreviation: entry.abbreviation.clone(),
        time,
        is_local: entry.is_local,
        is_meeting_active,
        utc_offset_label: offset.label(),
    })
}

/// Assemble a full display frame for `now`.
///
/// An entry whose timezone fails to parse is logged and skipped; the rest of
/// the frame still renders. The misconfiguration is static, so there is
/// nothing to retry.
pub fn build_frame(
    source: &ClockSource,
    zones: &[TimeZoneEntry],
    meetings: &[MeetingRule],
    now: DateTime<Utc>,
) -> ClockFrame {
    let mut records = Vec::with_capacity(zones.len());
    for entry in zones {
        let is_meeting_active = matcher::active_for_zone(meetings, &entry.timezone, now);
        match zone_record(source, entry, now, is_meeting_active) {
            Ok(record) => records.push(record),
            Err(error) => {
                tracing::warn!(zone = %entry.id, %error, "Skipping misconfigured timezone entry");
            }
        }
    }

    ClockFrame {
        local_timezone: source.local_timezone_name(),
        local_time: source.local_time_of_day(now),
        local_date: source.local_date(now),
        records,
        any_meeting_active: matcher::any_active(meetings, now),
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::config::{default_meetings, default_zones};

    fn source() -> ClockSource {
        ClockSource::with_local_timezone(chrono_tz::America::Toronto)
    }

    #[test]
    fn test_frame_covers_all_configured_zones() {
        let now = Utc.with_ymd_and_hms(2024, 7, 17, 17, 2, 0).unwrap();
        let zones = default_zones();
        let frame = build_frame(&source(), &zones, &default_meetings(), now);

        assert_eq!(frame.records.len(), zones.len());
        assert_eq!(frame.local_timezone, "America/Toronto");
    }

    #[test]
    fn test_frame_flags_meeting_zone_only() {
        // Wednesday 10:02 PDT, inside the standup window
        let now = Utc.with_ymd_and_hms(2024, 7, 17, 17, 2, 0).unwrap();
        let frame = build_frame(&source(), &default_zones(), &default_meetings(), now);

        assert!(frame.any_meeting_active);
        for record in &frame.records {
            assert_eq!(record.is_meeting_active, record.id == "vancouver");
        }
    }

    #[test]
    fn test_frame_quiet_outside_meeting_window() {
        let now = Utc.with_ymd_and_hms(2024, 7, 17, 20, 0, 0).unwrap();
        let frame = build_frame(&source(), &default_zones(), &default_meetings(), now);

        assert!(!frame.any_meeting_active);
        assert!(frame.records.iter().all(|r| !r.is_meeting_active));
    }

    #[test]
    fn test_invalid_zone_is_skipped_not_fatal() {
        let mut zones = default_zones();
        zones[0].timezone = "Invalid/Timezone".to_string();
        let now = Utc::now();

        let frame = build_frame(&source(), &zones, &default_meetings(), now);
        assert_eq!(frame.records.len(), zones.len() - 1);
        assert!(frame.records.iter().all(|r| r.id != zones[0].id));
    }

    #[test]
    fn test_half_hour_zone_label() {
        let now = Utc.with_ymd_and_hms(2024, 7, 17, 17, 2, 0).unwrap();
        let frame = build_frame(&source(), &default_zones(), &default_meetings(), now);

        let sri_lanka = frame
            .records
            .iter()
            .find(|r| r.id == "sri-lanka")
            .expect("Sri Lanka entry should render");
        assert_eq!(sri_lanka.utc_offset_label, "UTC+5:30");
    }
}
