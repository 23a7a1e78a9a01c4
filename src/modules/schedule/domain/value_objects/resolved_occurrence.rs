use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::schedule::domain::services::reference_time::to_reference_wall_clock;

/// The next airing of a weekly slot, as an absolute instant
///
/// Only valid for the "now" it was computed against; recompute on every
/// render or timer tick instead of storing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ResolvedOccurrence {
    pub instant: DateTime<Utc>,
}

impl ResolvedOccurrence {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    /// Remaining time until the airing; negative once it has passed
    pub fn time_until(&self, now: DateTime<Utc>) -> Duration {
        self.instant - now
    }

    /// JST wall-clock reading of the airing
    pub fn reference_wall_clock(&self) -> NaiveDateTime {
        to_reference_wall_clock(self.instant)
    }
}
