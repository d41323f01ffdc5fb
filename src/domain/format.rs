/// Unit shown after the work-days figure (jours/homme)
pub const WORK_DAYS_SUFFIX: &str = "J/H";

/// Format elapsed seconds as `HH:MM:SS`; hours are not wrapped at 24
pub fn format_clock(seconds: u64) -> String {
    let secs = seconds % 60;
    let minutes = (seconds / 60) % 60;
    let hours = seconds / 3600;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

/// Format elapsed seconds as work days of seven hours, one decimal (e.g. "1.5 J/H").
///
/// The value is `round(seconds / 360 / 7) / 10`, rounding half away from zero.
pub fn format_work_days(seconds: u64) -> String {
    let tenths = (seconds as f64 / 360.0 / 7.0).round();
    format!("{:.1} {}", tenths / 10.0, WORK_DAYS_SUFFIX)
}

/// Clamp a signed elapsed count before formatting
pub fn non_negative(seconds: i64) -> u64 {
    u64::try_from(seconds).unwrap_or(0)
}
