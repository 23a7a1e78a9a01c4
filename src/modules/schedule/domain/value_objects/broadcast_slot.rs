use chrono::{NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A recurring weekly airing time, expressed in the reference timezone (JST)
///
/// A slot only exists when both the weekday and the time parsed; anything
/// less is an unknown schedule and is represented by `None` upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "SlotFields")]
pub struct BroadcastSlot {
    pub weekday: Weekday,
    pub time: NaiveTime,
}

/// Wire shape of a slot; deserialization goes through `BroadcastSlot::new`
#[derive(Deserialize)]
struct SlotFields {
    weekday: Weekday,
    time: NaiveTime,
}

impl From<SlotFields> for BroadcastSlot {
    fn from(fields: SlotFields) -> Self {
        Self::new(fields.weekday, fields.time)
    }
}

impl BroadcastSlot {
    /// Build a slot from typed parts, dropping seconds and sub-seconds
    pub fn new(weekday: Weekday, time: NaiveTime) -> Self {
        Self {
            weekday,
            time: truncate_to_minute(time),
        }
    }

    /// Slot time at minute precision, even for a slot built as a literal
    pub fn minute_time(&self) -> NaiveTime {
        truncate_to_minute(self.time)
    }

    /// Parse free-text provider fields such as ("Mondays", "23:30")
    pub fn parse(day: &str, time: &str) -> Option<Self> {
        let weekday = parse_weekday(day)?;
        let time = parse_time_of_day(time)?;
        Some(Self::new(weekday, time))
    }
}

impl fmt::Display for BroadcastSlot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}s at {} (JST)",
            weekday_name(self.weekday),
            self.time.format("%H:%M")
        )
    }
}

/// Normalize a provider day name into a weekday
///
/// Case-insensitive; accepts the singular and plural forms ("Monday", "Mondays").
pub fn parse_weekday(raw: &str) -> Option<Weekday> {
    let folded = raw.trim().to_lowercase();
    weekday_from_name(&folded).or_else(|| folded.strip_suffix('s').and_then(weekday_from_name))
}

/// Parse a 24-hour `HH:mm` time of day
pub fn parse_time_of_day(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M").ok()
}

/// Zero seconds and sub-seconds; a leap second collapses to its minute
fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time)
}

/// Full English name of a weekday
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

fn weekday_from_name(name: &str) -> Option<Weekday> {
    match name {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}
