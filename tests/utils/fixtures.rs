/// Shared fixtures for schedule integration tests
use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use miru_airing::schedule::{AiringMetadataSource, AnimeAiringMetadata, JikanAiringMapper};
use miru_airing::AppResult;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Instant whose JST wall clock reads the given fields
pub fn jst(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, second)
        .unwrap()
        - Duration::hours(9)
}

pub const DUNGEON_MESHI: &str = r#"{
    "data": {
        "mal_id": 52701,
        "title": "Dungeon Meshi",
        "episodes": 24,
        "airing": true,
        "aired": { "from": "2024-01-04T00:00:00+00:00", "to": null },
        "broadcast": {
            "day": "Thursdays",
            "time": "22:00",
            "timezone": "Asia/Tokyo",
            "string": "Thursdays at 22:00 (JST)"
        }
    }
}"#;

pub const ONE_PIECE: &str = r#"{
    "data": {
        "mal_id": 21,
        "title": "One Piece",
        "episodes": null,
        "airing": true,
        "aired": { "from": "1999-10-20T00:00:00+00:00", "to": null },
        "broadcast": { "day": null, "time": null, "timezone": null, "string": "Unknown" }
    }
}"#;

/// In-memory source serving canned Jikan payloads and counting calls
pub struct CannedJikanSource {
    payloads: HashMap<u32, &'static str>,
    calls: AtomicUsize,
}

impl CannedJikanSource {
    pub fn new(payloads: &[(u32, &'static str)]) -> Self {
        Self {
            payloads: payloads.iter().copied().collect(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AiringMetadataSource for CannedJikanSource {
    async fn fetch_airing(&self, mal_id: u32) -> AppResult<Option<AnimeAiringMetadata>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.payloads
            .get(&mal_id)
            .map(|body| JikanAiringMapper::parse_anime_response(body))
            .transpose()
    }

    fn source_name(&self) -> &'static str {
        "canned-jikan"
    }
}
