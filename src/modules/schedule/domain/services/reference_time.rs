//! Conversions between absolute instants and JST wall-clock readings
//!
//! The offset is applied as plain arithmetic on the UTC reading. The host
//! timezone never takes part, so results are identical on every device.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};

/// Broadcast schedules are published in JST (UTC+9, no DST)
pub const REFERENCE_UTC_OFFSET_HOURS: i64 = 9;

pub fn reference_offset() -> Duration {
    Duration::hours(REFERENCE_UTC_OFFSET_HOURS)
}

/// Calendar fields a JST wall clock shows at `instant`
pub fn to_reference_wall_clock(instant: DateTime<Utc>) -> NaiveDateTime {
    instant.naive_utc() + reference_offset()
}

/// Absolute instant for a JST wall-clock reading
pub fn from_reference_wall_clock(wall: NaiveDateTime) -> DateTime<Utc> {
    (wall - reference_offset()).and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    #[test]
    fn test_utc_evening_is_next_day_in_jst() {
        let instant = Utc.with_ymd_and_hms(2024, 3, 31, 20, 15, 0).unwrap();
        let wall = to_reference_wall_clock(instant);
        assert_eq!(
            wall,
            NaiveDate::from_ymd_opt(2024, 4, 1)
                .unwrap()
                .and_hms_opt(5, 15, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_wall_clock_round_trip() {
        let wall = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 30, 0)
            .unwrap();
        let instant = from_reference_wall_clock(wall);
        assert_eq!(instant, Utc.with_ymd_and_hms(2023, 12, 31, 15, 30, 0).unwrap());
        assert_eq!(to_reference_wall_clock(instant), wall);
    }
}
