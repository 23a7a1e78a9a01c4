use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

use crate::modules::schedule::domain::services::{
    format_countdown, BroadcastResolver, EpisodeEstimator, LocalDisplay, LocalPresenter,
};
use crate::modules::schedule::domain::{
    AiringMetadataSource, BroadcastInfo, Clock, ResolvedOccurrence, SeriesAiringInfo,
};
use crate::shared::errors::AppResult;
use crate::{log_debug, log_warn};

/// Everything a calendar card needs for one render
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AiringSnapshot {
    /// The "now" every other field was derived from
    pub computed_at: DateTime<Utc>,
    pub next_occurrence: Option<ResolvedOccurrence>,
    pub local_display: Option<LocalDisplay>,
    pub countdown: Option<String>,
    pub estimated_episode: Option<u32>,
    /// Raw provider label, set only when the schedule is unknown
    pub fallback_label: Option<String>,
}

impl AiringSnapshot {
    pub fn has_schedule(&self) -> bool {
        self.next_occurrence.is_some()
    }
}

/// Composes resolver, presenter, countdown and estimator for one render
///
/// Holds no state besides the clock; every call recomputes from its inputs.
pub struct AiringScheduleService {
    clock: Arc<dyn Clock>,
}

impl AiringScheduleService {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Snapshot against the injected clock's "now"
    pub fn snapshot(
        &self,
        broadcast: &BroadcastInfo,
        series: &SeriesAiringInfo,
        host_offset_minutes: i32,
    ) -> AiringSnapshot {
        Self::snapshot_at(broadcast, series, host_offset_minutes, self.clock.now())
    }

    /// Snapshot against an explicit "now"
    pub fn snapshot_at(
        broadcast: &BroadcastInfo,
        series: &SeriesAiringInfo,
        host_offset_minutes: i32,
        now: DateTime<Utc>,
    ) -> AiringSnapshot {
        let next_occurrence = BroadcastResolver::resolve_next_occurrence(broadcast, now);
        let next_instant = next_occurrence.map(|occurrence| occurrence.instant);

        AiringSnapshot {
            computed_at: now,
            next_occurrence,
            local_display: next_instant
                .map(|instant| LocalPresenter::to_local_display(instant, host_offset_minutes)),
            countdown: next_instant.map(|instant| format_countdown(instant, now)),
            estimated_episode: EpisodeEstimator::estimate_for(series, next_instant, now),
            fallback_label: match next_occurrence {
                Some(_) => None,
                None => broadcast.display_label(),
            },
        }
    }

    /// Fetch metadata for one anime and build its snapshot
    ///
    /// Returns `Ok(None)` when the source does not know the anime. Series the
    /// provider flags as finished get the raw label instead of a countdown.
    pub async fn load_snapshot(
        &self,
        source: &dyn AiringMetadataSource,
        mal_id: u32,
        host_offset_minutes: i32,
    ) -> AppResult<Option<AiringSnapshot>> {
        let Some(metadata) = source.fetch_airing(mal_id).await? else {
            log_debug!("No airing metadata for #{} from {}", mal_id, source.source_name());
            return Ok(None);
        };

        if !metadata.wants_countdown() {
            log_debug!("'{}' is no longer airing; skipping countdown", metadata.title);
            let now = self.clock.now();
            return Ok(Some(AiringSnapshot {
                computed_at: now,
                next_occurrence: None,
                local_display: None,
                countdown: None,
                estimated_episode: metadata.series.total_episodes,
                fallback_label: metadata.broadcast.display_label(),
            }));
        }

        let snapshot = self.snapshot(&metadata.broadcast, &metadata.series, host_offset_minutes);
        if !snapshot.has_schedule() {
            log_warn!("'{}' is airing but has no usable broadcast slot", metadata.title);
        }

        Ok(Some(snapshot))
    }
}
