use chrono::{DateTime, Duration, Utc};

/// Shown once the airing time has been reached
pub const AIRING_NOW_MESSAGE: &str = "Airing now";

/// Coarse countdown text for a minute-granularity refresh
///
/// More than a day out: "2d 2h". Otherwise: "1h 30m".
pub fn format_countdown(next_occurrence: DateTime<Utc>, now: DateTime<Utc>) -> String {
    if next_occurrence <= now {
        return AIRING_NOW_MESSAGE.to_string();
    }

    let diff = next_occurrence - now;
    let total_hours = diff.num_hours();

    if diff > Duration::hours(24) {
        format!("{}d {}h", diff.num_days(), total_hours % 24)
    } else {
        format!("{}h {}m", total_hours, diff.num_minutes() % 60)
    }
}
