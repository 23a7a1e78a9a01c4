use chrono::{DateTime, Utc};

use crate::modules::schedule::domain::value_objects::SeriesAiringInfo;

const WEEK_MILLIS: i64 = 7 * 24 * 60 * 60 * 1000;

/// Estimates which episode the next airing will be
///
/// Counts whole weeks between the premiere and the next airing, rounding to
/// the nearest week. Rounding absorbs the few hours of drift a JST/host mix-up
/// can introduce. Double episodes and broadcast breaks are not visible in the
/// data, so the count is an approximation.
pub struct EpisodeEstimator;

impl EpisodeEstimator {
    pub fn estimate_current_episode(
        first_aired: Option<DateTime<Utc>>,
        next_occurrence: Option<DateTime<Utc>>,
        total_episodes: Option<u32>,
        now: DateTime<Utc>,
    ) -> Option<u32> {
        let (first_aired, next_occurrence) = match (first_aired, next_occurrence) {
            (Some(first), Some(next)) => (first, next),
            _ => return None,
        };

        // Not started yet
        if first_aired > now {
            return Some(1);
        }

        let elapsed = (next_occurrence - first_aired).num_milliseconds();
        let estimated = weeks_rounded(elapsed).saturating_add(1).max(1);
        let estimated = u32::try_from(estimated).unwrap_or(u32::MAX);

        Some(match total_episodes.filter(|total| *total > 0) {
            Some(total) => estimated.min(total),
            None => estimated,
        })
    }

    /// Convenience wrapper over provider series data
    pub fn estimate_for(
        series: &SeriesAiringInfo,
        next_occurrence: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Option<u32> {
        Self::estimate_current_episode(
            series.first_aired,
            next_occurrence,
            series.total_episodes,
            now,
        )
    }
}

/// Nearest whole week, halves rounding up
fn weeks_rounded(millis: i64) -> i64 {
    millis.saturating_add(WEEK_MILLIS / 2).div_euclid(WEEK_MILLIS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn premiere() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 6, 14, 30, 0).unwrap()
    }

    #[test]
    fn test_missing_inputs_give_none() {
        let now = premiere() + Duration::days(3);
        let next = premiere() + Duration::weeks(1);
        assert_eq!(EpisodeEstimator::estimate_current_episode(None, Some(next), Some(12), now), None);
        assert_eq!(EpisodeEstimator::estimate_current_episode(Some(premiere()), None, Some(12), now), None);
        assert_eq!(EpisodeEstimator::estimate_current_episode(None, None, None, now), None);
    }

    #[test]
    fn test_not_started_is_episode_one() {
        let now = premiere() - Duration::days(10);
        let next = premiere();
        assert_eq!(
            EpisodeEstimator::estimate_current_episode(Some(premiere()), Some(next), Some(12), now),
            Some(1)
        );
    }

    #[test]
    fn test_each_week_adds_one_until_clamped() {
        let now = premiere() + Duration::hours(1);
        let mut previous = None;
        for week in 1..20 {
            let next = premiere() + Duration::weeks(week);
            let estimate =
                EpisodeEstimator::estimate_current_episode(Some(premiere()), Some(next), Some(12), now)
                    .unwrap();
            match previous {
                Some(prev) if prev < 12 => assert_eq!(estimate, prev + 1),
                Some(_) => assert_eq!(estimate, 12),
                None => assert_eq!(estimate, 2),
            }
            previous = Some(estimate);
        }
    }

    #[test]
    fn test_clamps_to_total() {
        let now = premiere() + Duration::weeks(14);
        let next = premiere() + Duration::weeks(14);
        // Raw estimate is 15
        assert_eq!(
            EpisodeEstimator::estimate_current_episode(Some(premiere()), Some(next), Some(12), now),
            Some(12)
        );
        assert_eq!(
            EpisodeEstimator::estimate_current_episode(Some(premiere()), Some(next), None, now),
            Some(15)
        );
    }

    #[test]
    fn test_rounding_absorbs_timezone_drift() {
        let now = premiere() + Duration::days(20);
        let early = premiere() + Duration::weeks(3) - Duration::hours(9);
        let late = premiere() + Duration::weeks(3) + Duration::hours(9);
        assert_eq!(
            EpisodeEstimator::estimate_current_episode(Some(premiere()), Some(early), None, now),
            Some(4)
        );
        assert_eq!(
            EpisodeEstimator::estimate_current_episode(Some(premiere()), Some(late), None, now),
            Some(4)
        );
    }

    #[test]
    fn test_never_below_one() {
        let now = premiere();
        let next = premiere() - Duration::weeks(3);
        assert_eq!(
            EpisodeEstimator::estimate_current_episode(Some(premiere()), Some(next), None, now),
            Some(1)
        );
    }

    #[test]
    fn test_zero_total_is_treated_as_unknown() {
        let now = premiere() + Duration::weeks(30);
        let next = premiere() + Duration::weeks(30);
        assert_eq!(
            EpisodeEstimator::estimate_current_episode(Some(premiere()), Some(next), Some(0), now),
            Some(31)
        );
    }

    #[test]
    fn test_estimate_for_series() {
        let series = SeriesAiringInfo::new(Some(premiere()), Some(24));
        let now = premiere() + Duration::days(2);
        let next = premiere() + Duration::weeks(1);
        assert_eq!(EpisodeEstimator::estimate_for(&series, Some(next), now), Some(2));
    }
}
