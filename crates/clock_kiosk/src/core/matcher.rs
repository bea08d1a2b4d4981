use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, LocalResult, TimeZone, Utc};
use chrono_tz::Tz;

use crate::core::{
    error::{ClockError, ClockResult},
    models::MeetingRule,
};

/// Tolerance band around the scheduled meeting time, inclusive at the edges
fn meeting_window() -> Duration {
    Duration::minutes(5)
}

/// Whether `now` falls inside the rule's meeting window.
///
/// The comparison happens in the rule's own timezone: `now` is converted
/// into `rule.timezone`, the weekday is checked there, and the distance to
/// today's `hour:minute` is measured on that zone's wall clock. Exactly five
/// minutes away still counts as active.
pub fn is_active(rule: &MeetingRule, now: DateTime<Utc>) -> ClockResult<bool> {
    let timezone = Tz::from_str(&rule.timezone).map_err(|_| ClockError::InvalidTimezone {
        timezone: rule.timezone.clone(),
    })?;
    let now_in_zone = now.with_timezone(&timezone);

    if !rule.applies_on(now_in_zone.weekday()) {
        return Ok(false);
    }

    let Some(meeting_naive) = now_in_zone
        .date_naive()
        .and_hms_opt(rule.hour, rule.minute, 0)
    else {
        tracing::warn!(
            title = %rule.title,
            hour = rule.hour,
            minute = rule.minute,
            "Meeting rule has an out-of-range time, treating as inactive"
        );
        return Ok(false);
    };

    let meeting_time = match timezone.from_local_datetime(&meeting_naive) {
        LocalResult::Single(t) => t,
        // Fall-back repeats the hour; take the earlier occurrence
        LocalResult::Ambiguous(earliest, _) => earliest,
        // Spring-forward gap: the slot does not exist today
        LocalResult::None => return Ok(false),
    };

    Ok((now_in_zone - meeting_time).abs() <= meeting_window())
}

/// True iff any rule matches at `now`.
///
/// Rules with unrecognized timezones are logged and skipped so a single
/// misconfigured rule never takes down the banner check.
pub fn any_active(rules: &[MeetingRule], now: DateTime<Utc>) -> bool {
    rules.iter().any(|rule| is_active_or_log(rule, now))
}

/// True iff any rule configured in the given timezone matches at `now`.
///
/// Drives the per-card highlight: a card lights up only for meetings defined
/// in its own timezone.
pub fn active_for_zone(rules: &[MeetingRule], timezone_name: &str, now: DateTime<Utc>) -> bool {
    rules
        .iter()
        .filter(|rule| rule.timezone == timezone_name)
        .any(|rule| is_active_or_log(rule, now))
}

fn is_active_or_log(rule: &MeetingRule, now: DateTime<Utc>) -> bool {
    match is_active(rule, now) {
        Ok(active) => active,
        Err(error) => {
            tracing::warn!(title = %rule.title, %error, "Skipping unmatchable meeting rule");
            false
        }
    }
}
