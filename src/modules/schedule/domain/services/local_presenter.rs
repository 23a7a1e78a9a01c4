use chrono::{DateTime, Datelike, Duration, Offset, TimeZone, Timelike, Utc, Weekday};
use chrono_tz::Tz;
use serde::Serialize;

/// An instant as the viewer's wall clock shows it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalDisplay {
    pub hours: u32,
    pub minutes: u32,
    pub weekday: Weekday,
    pub offset_minutes: i32,
    pub offset_label: String,
}

impl LocalDisplay {
    /// "HH:MM", zero padded
    pub fn time_label(&self) -> String {
        format!("{:02}:{:02}", self.hours, self.minutes)
    }
}

/// Converts resolved airings into the viewer's local time
pub struct LocalPresenter;

impl LocalPresenter {
    /// Local wall-clock reading for a host offset in minutes east of UTC
    pub fn to_local_display(instant: DateTime<Utc>, host_offset_minutes: i32) -> LocalDisplay {
        let local = instant.naive_utc() + Duration::minutes(i64::from(host_offset_minutes));

        LocalDisplay {
            hours: local.hour(),
            minutes: local.minute(),
            weekday: local.weekday(),
            offset_minutes: host_offset_minutes,
            offset_label: format_offset_label(host_offset_minutes),
        }
    }

    /// Same as `to_local_display`, with the offset taken from an IANA zone at `instant`
    pub fn to_zone_display(instant: DateTime<Utc>, zone: Tz) -> LocalDisplay {
        let offset_seconds = zone
            .offset_from_utc_datetime(&instant.naive_utc())
            .fix()
            .local_minus_utc();
        Self::to_local_display(instant, offset_seconds / 60)
    }
}

/// "UTC", "UTC+3", "UTC-5", or "UTC+5:30" for fractional-hour zones
pub fn format_offset_label(offset_minutes: i32) -> String {
    if offset_minutes == 0 {
        return "UTC".to_string();
    }

    let sign = if offset_minutes > 0 { '+' } else { '-' };
    let magnitude = offset_minutes.unsigned_abs();
    let (hours, minutes) = (magnitude / 60, magnitude % 60);

    if minutes == 0 {
        format!("UTC{}{}", sign, hours)
    } else {
        format!("UTC{}{}:{:02}", sign, hours, minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_labels() {
        assert_eq!(format_offset_label(0), "UTC");
        assert_eq!(format_offset_label(180), "UTC+3");
        assert_eq!(format_offset_label(330), "UTC+5:30");
        assert_eq!(format_offset_label(-300), "UTC-5");
        assert_eq!(format_offset_label(-210), "UTC-3:30");
        assert_eq!(format_offset_label(345), "UTC+5:45");
    }

    #[test]
    fn test_local_display_shifts_into_previous_day() {
        // Monday 00:00 UTC (Monday 09:00 JST) seen from UTC-5
        let instant = Utc.with_ymd_and_hms(2024, 1, 8, 0, 0, 0).unwrap();
        let display = LocalPresenter::to_local_display(instant, -300);
        assert_eq!((display.hours, display.minutes), (19, 0));
        assert_eq!(display.weekday, Weekday::Sun);
        assert_eq!(display.offset_label, "UTC-5");
        assert_eq!(display.time_label(), "19:00");
    }

    #[test]
    fn test_half_hour_zone() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 8, 0, 0, 0).unwrap();
        let display = LocalPresenter::to_local_display(instant, 330);
        assert_eq!(display.time_label(), "05:30");
        assert_eq!(display.offset_label, "UTC+5:30");
    }

    #[test]
    fn test_zone_display_follows_dst() {
        let winter = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let summer = Utc.with_ymd_and_hms(2024, 7, 15, 12, 0, 0).unwrap();

        let berlin_winter = LocalPresenter::to_zone_display(winter, chrono_tz::Europe::Berlin);
        let berlin_summer = LocalPresenter::to_zone_display(summer, chrono_tz::Europe::Berlin);

        assert_eq!(berlin_winter.offset_label, "UTC+1");
        assert_eq!(berlin_winter.time_label(), "13:00");
        assert_eq!(berlin_summer.offset_label, "UTC+2");
        assert_eq!(berlin_summer.time_label(), "14:00");
    }

    #[test]
    fn test_zone_display_for_tokyo_matches_reference() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 8, 0, 0, 0).unwrap();
        let display = LocalPresenter::to_zone_display(instant, chrono_tz::Asia::Tokyo);
        assert_eq!(display.time_label(), "09:00");
        assert_eq!(display.offset_label, "UTC+9");
    }
}
