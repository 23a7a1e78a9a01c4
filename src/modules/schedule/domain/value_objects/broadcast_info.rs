//! Broadcast information as delivered by metadata providers

use chrono::{NaiveTime, Weekday};
use chrono_tz::Tz;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use super::broadcast_slot::{parse_time_of_day, parse_weekday, weekday_name, BroadcastSlot};

/// Matches strings like "Saturdays at 23:30 (JST)"
static BROADCAST_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*([a-z]+)\s+at\s+(\d{1,2}:\d{2})(?:\s*\(([^)]*)\))?\s*$")
        .expect("broadcast pattern is a valid regex")
});

/// Raw broadcast fields, kept as text so malformed provider data survives
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BroadcastInfo {
    /// Day of the week the anime airs (e.g., "Mondays", "Tuesday")
    pub day: Option<String>,
    /// JST time the anime airs (e.g., "23:30")
    pub time: Option<String>,
    /// Timezone tag for the broadcast time (e.g., "Asia/Tokyo")
    pub timezone: Option<String>,
    /// Human-readable label, shown when the schedule cannot be resolved
    pub string: Option<String>,
}

impl BroadcastInfo {
    /// Create new broadcast info from typed components
    pub fn new(day: Option<Weekday>, time: Option<NaiveTime>) -> Self {
        let day_str = day.map(|d| format!("{}s", weekday_name(d)));
        let time_str = time.map(|t| t.format("%H:%M").to_string());
        let tz_str = Some(chrono_tz::Asia::Tokyo.name().to_string());
        let string = Self::generate_display_string(&day_str, &time_str, &tz_str);

        Self {
            day: day_str,
            time: time_str,
            timezone: tz_str,
            string,
        }
    }

    /// Create new broadcast info from strings
    pub fn from_strings(
        day: Option<String>,
        time: Option<String>,
        timezone: Option<String>,
    ) -> Self {
        let string = Self::generate_display_string(&day, &time, &timezone);

        Self {
            day,
            time,
            timezone,
            string,
        }
    }

    /// Replace the display label with the provider's own wording
    pub fn with_label(mut self, label: Option<String>) -> Self {
        if label.is_some() {
            self.string = label;
        }
        self
    }

    /// Generate display string from string components
    fn generate_display_string(
        day: &Option<String>,
        time: &Option<String>,
        timezone: &Option<String>,
    ) -> Option<String> {
        match (day, time, timezone) {
            (Some(d), Some(t), Some(tz)) => Some(format!("{} at {} ({})", d, t, tz)),
            (Some(d), Some(t), None) => Some(format!("{} at {}", d, t)),
            (Some(d), None, _) => Some(d.clone()),
            (None, Some(t), Some(tz)) => Some(format!("{} ({})", t, tz)),
            (None, Some(t), None) => Some(t.clone()),
            _ => None,
        }
    }

    /// Parse from Jikan API string format
    pub fn from_jikan_string(broadcast_string: &str) -> Self {
        let mut info = Self {
            string: Some(broadcast_string.to_string()),
            ..Self::default()
        };

        let Some(captures) = BROADCAST_PATTERN.captures(broadcast_string) else {
            return info;
        };

        if let Some(day) = captures.get(1).map(|m| m.as_str()) {
            if parse_weekday(day).is_some() {
                info.day = Some(day.to_string());
            }
        }

        if let Some(time) = captures.get(2).map(|m| m.as_str()) {
            if parse_time_of_day(time).is_some() {
                info.time = Some(time.to_string());
            }
        }

        info.timezone = captures.get(3).map(|m| match m.as_str().trim() {
            tag if tag.eq_ignore_ascii_case("jst") => chrono_tz::Asia::Tokyo.name().to_string(),
            tag => tag.to_string(),
        });

        info
    }

    /// Typed slot, or `None` when the day or time is missing or malformed
    pub fn to_slot(&self) -> Option<BroadcastSlot> {
        BroadcastSlot::parse(self.day.as_deref()?, self.time.as_deref()?)
    }

    /// Get parsed weekday if valid
    pub fn get_weekday(&self) -> Option<Weekday> {
        self.day.as_deref().and_then(parse_weekday)
    }

    /// Get parsed time if valid
    pub fn get_time(&self) -> Option<NaiveTime> {
        self.time.as_deref().and_then(parse_time_of_day)
    }

    /// Get parsed timezone if valid
    pub fn get_timezone(&self) -> Option<Tz> {
        self.timezone.as_ref().and_then(|tz| tz.parse().ok())
    }

    /// Label for the unknown-schedule fallback
    pub fn display_label(&self) -> Option<String> {
        self.string
            .clone()
            .or_else(|| Self::generate_display_string(&self.day, &self.time, &self.timezone))
    }
}
