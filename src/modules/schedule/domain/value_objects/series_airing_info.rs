use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What the metadata provider knows about a series' run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesAiringInfo {
    /// Instant the first episode aired
    pub first_aired: Option<DateTime<Utc>>,
    /// Known episode count; `None` for open-ended series
    pub total_episodes: Option<u32>,
}

impl SeriesAiringInfo {
    /// Providers report an unannounced count as 0, which is treated as unknown
    pub fn new(first_aired: Option<DateTime<Utc>>, total_episodes: Option<u32>) -> Self {
        Self {
            first_aired,
            total_episodes: total_episodes.filter(|count| *count > 0),
        }
    }

    pub fn has_started(&self, now: DateTime<Utc>) -> bool {
        self.first_aired.is_some_and(|first| first <= now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_zero_episode_count_is_unknown() {
        let info = SeriesAiringInfo::new(None, Some(0));
        assert_eq!(info.total_episodes, None);
        assert_eq!(SeriesAiringInfo::new(None, Some(12)).total_episodes, Some(12));
    }

    #[test]
    fn test_has_started() {
        let first = Utc.with_ymd_and_hms(2024, 1, 6, 14, 30, 0).unwrap();
        let info = SeriesAiringInfo::new(Some(first), Some(12));
        assert!(!info.has_started(first - chrono::Duration::seconds(1)));
        assert!(info.has_started(first));
        assert!(!SeriesAiringInfo::default().has_started(first));
    }
}
