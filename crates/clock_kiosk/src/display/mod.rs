use crate::core::error::ClockResult;
use crate::core::models::{ClockFrame, ZoneRecord};

/// ANSI sequence that clears the terminal and homes the cursor
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";

const MEETING_BANNER: &str = "🚨 Meeting Time! 🚨";

/// Render a frame as the full-screen text layout.
///
/// Pure `ClockFrame -> String`; the caller decides where it goes and whether
/// to clear the screen first.
pub fn render_screen(frame: &ClockFrame) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "WORLD CLOCK{:>60}\n",
        format!(
            "{}  {:02}:{:02}:{:02} ({})",
            frame.local_date,
            frame.local_time.hour,
            frame.local_time.minute,
            frame.local_time.second,
            frame.local_timezone
        )
    ));
    out.push_str(&"=".repeat(71));
    out.push('\n');

    if frame.any_meeting_active {
        out.push_str(MEETING_BANNER);
        out.push('\n');
        out.push_str(&"=".repeat(71));
        out.push('\n');
    }

    for record in &frame.records {
        out.push_str(&render_card(record));
        out.push('\n');
    }

    out
}

fn render_card(record: &ZoneRecord) -> String {
    let local_marker = if record.is_local { "*" } else { " " };
    let meeting_marker = if record.is_meeting_active {
        "  ◀ MEETING"
    } else {
        ""
    };

    format!(
        "{} {}{:<16} {:<4} {:02}:{:02}:{:02}  {:>9}{}",
        record.icon,
        local_marker,
        record.city,
        record.abbreviation,
        record.time.hour,
        record.time.minute,
        record.time.second,
        record.utc_offset_label,
        meeting_marker
    )
}

/// Render a frame as pretty JSON, one frame per emission
pub fn render_json(frame: &ClockFrame) -> ClockResult<String> {
    Ok(serde_json::to_string_pretty(frame)?)
}
