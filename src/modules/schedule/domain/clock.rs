use chrono::{DateTime, Utc};

/// Source of the current instant
///
/// Everything time-dependent in the schedule context reads "now" through this
/// trait so tests can pin it. Production code uses `SystemClock`.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
