use chrono::{DateTime, Local, TimeZone, Utc};

use crate::modules::schedule::domain::Clock;

/// A [`Clock`] backed by the host's system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// The device's UTC offset in minutes at `at`
///
/// Only the display layer should use this; schedule arithmetic stays in JST.
pub fn host_utc_offset_minutes(at: DateTime<Utc>) -> i32 {
    Local.offset_from_utc_datetime(&at.naive_utc()).local_minus_utc() / 60
}
