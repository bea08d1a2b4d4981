// Constants for format strings
pub const WEEKDAY_FORMAT: &str = "%A";
pub const MONTH_FORMAT: &str = "%B";

/// Format a UTC offset given in minutes as a display label
///
/// # Arguments
///
/// * `offset_minutes` - The signed offset from UTC in minutes
///
/// # Returns
///
/// A label such as `UTC+8`, `UTC-5` or `UTC+5:30`
pub fn format_offset_label(offset_minutes: i32) -> String {
    let sign = if offset_minutes < 0 { '-' } else { '+' };
    let hours = offset_minutes.abs() / 60;
    let minutes = offset_minutes.abs() % 60;

    match minutes {
        0 => format!("UTC{}{}", sign, hours),
        _ => format!("UTC{}{}:{:02}", sign, hours, minutes),
    }
}
