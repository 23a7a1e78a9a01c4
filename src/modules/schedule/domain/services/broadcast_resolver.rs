use chrono::{DateTime, Datelike, Duration, Utc};

use super::reference_time::{from_reference_wall_clock, to_reference_wall_clock};
use crate::modules::schedule::domain::value_objects::{
    BroadcastInfo, BroadcastSlot, ResolvedOccurrence,
};
use crate::shared::utils::LogContext;

/// Turns a weekly JST slot into its next concrete airing
pub struct BroadcastResolver;

impl BroadcastResolver {
    /// Next airing for provider broadcast data
    ///
    /// Returns `None` when the day or time is missing or unparseable; callers
    /// show the raw label instead of a countdown in that case.
    pub fn resolve_next_occurrence(
        broadcast: &BroadcastInfo,
        now: DateTime<Utc>,
    ) -> Option<ResolvedOccurrence> {
        let Some(slot) = broadcast.to_slot() else {
            LogContext::unknown_schedule(broadcast.day.as_deref(), broadcast.time.as_deref());
            return None;
        };

        Some(ResolvedOccurrence::new(Self::next_occurrence(&slot, now)))
    }

    /// Next airing strictly after `now`
    ///
    /// An airing that starts exactly at `now` counts as already aired, so the
    /// result is always within `(now, now + 7 days]`.
    pub fn next_occurrence(slot: &BroadcastSlot, now: DateTime<Utc>) -> DateTime<Utc> {
        let wall = to_reference_wall_clock(now);
        let slot_time = slot.minute_time();

        let current = i64::from(wall.weekday().num_days_from_sunday());
        let target = i64::from(slot.weekday.num_days_from_sunday());
        let mut day_diff = (target - current).rem_euclid(7);

        if day_diff == 0 && wall.time() >= slot_time {
            day_diff = 7;
        }

        let target_wall = (wall.date() + Duration::days(day_diff)).and_time(slot_time);
        from_reference_wall_clock(target_wall)
    }
}
