/// Time text shown right after a load and whenever the duration is unknown.
pub const RESET_TIME_TEXT: &str = "0:00 / 0:00";

/// Format seconds as `M:SS`: seconds floored, minutes unbounded (no hour rollover).
///
/// Non-finite or negative input renders as `0:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}
