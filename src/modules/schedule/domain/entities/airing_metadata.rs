use serde::{Deserialize, Serialize};

use crate::modules::schedule::domain::value_objects::{BroadcastInfo, SeriesAiringInfo};

/// Schedule-relevant slice of an anime record, keyed by MyAnimeList id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimeAiringMetadata {
    pub mal_id: u32,
    pub title: String,
    pub broadcast: BroadcastInfo,
    pub series: SeriesAiringInfo,
    /// Provider's own "currently airing" flag, when reported
    pub airing: Option<bool>,
}

impl AnimeAiringMetadata {
    pub fn new(
        mal_id: u32,
        title: impl Into<String>,
        broadcast: BroadcastInfo,
        series: SeriesAiringInfo,
    ) -> Self {
        Self {
            mal_id,
            title: title.into(),
            broadcast,
            series,
            airing: None,
        }
    }

    pub fn with_airing(mut self, airing: Option<bool>) -> Self {
        self.airing = airing;
        self
    }

    /// Finished series keep their last broadcast slot in provider data;
    /// a countdown only makes sense while the show is on air or unflagged
    pub fn wants_countdown(&self) -> bool {
        self.airing.unwrap_or(true)
    }
}
