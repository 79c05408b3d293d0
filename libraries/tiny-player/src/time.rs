//! Timer text formatting

use std::time::Duration;

/// Format seconds as `M:SS`, or `H:MM:SS` once the value reaches an hour
///
/// Non-finite and negative inputs render as `0:00`, which is what the timer
/// shows before the engine knows the track length.
///
/// ```
/// use tiny_player::format_time;
///
/// assert_eq!(format_time(65.0), "1:05");
/// assert_eq!(format_time(3661.0), "1:01:01");
/// assert_eq!(format_time(f64::NAN), "0:00");
/// ```
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };

    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

/// [`format_time`] for a [`Duration`]
pub fn format_duration(duration: Duration) -> String {
    format_time(duration.as_secs_f64())
}

/// Timer text while a track plays: `position / duration`
pub fn format_progress(position: Duration, duration: Duration) -> String {
    format!(
        "{} / {}",
        format_duration(position),
        format_duration(duration)
    )
}
