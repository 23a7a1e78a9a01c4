use chrono::{DateTime, Utc};

use super::dto::{Aired, Broadcast, JikanAiringAnime, JikanItem};
use crate::modules::schedule::domain::{AnimeAiringMetadata, BroadcastInfo, SeriesAiringInfo};
use crate::shared::errors::AppResult;

/// Maps Jikan payloads into schedule metadata
///
/// Missing or malformed fields degrade to `None`; only a payload that is not
/// valid JSON for the envelope fails.
pub struct JikanAiringMapper;

impl JikanAiringMapper {
    /// Parse a `GET /anime/{id}` response body
    pub fn parse_anime_response(body: &str) -> AppResult<AnimeAiringMetadata> {
        let item: JikanItem<JikanAiringAnime> = serde_json::from_str(body)?;
        Ok(Self::to_metadata(item.data))
    }

    pub fn to_metadata(anime: JikanAiringAnime) -> AnimeAiringMetadata {
        let broadcast = Self::map_broadcast(anime.broadcast.as_ref());
        let series = SeriesAiringInfo::new(Self::parse_aired_from(&anime.aired), anime.episodes);
        let title = anime.title.unwrap_or_default();

        AnimeAiringMetadata::new(anime.mal_id, title, broadcast, series).with_airing(anime.airing)
    }

    /// Prefer the structured fields; fall back to parsing the combined string
    fn map_broadcast(broadcast: Option<&Broadcast>) -> BroadcastInfo {
        let Some(broadcast) = broadcast else {
            return BroadcastInfo::default();
        };

        if broadcast.day.is_none() && broadcast.time.is_none() {
            return broadcast
                .string
                .as_deref()
                .map(BroadcastInfo::from_jikan_string)
                .unwrap_or_default();
        }

        BroadcastInfo::from_strings(
            broadcast.day.clone(),
            broadcast.time.clone(),
            broadcast.timezone.clone(),
        )
        .with_label(broadcast.string.clone())
    }

    /// Parse Jikan aired start date
    fn parse_aired_from(aired: &Option<Aired>) -> Option<DateTime<Utc>> {
        aired
            .as_ref()
            .and_then(|a| a.from.as_ref())
            .and_then(|date_str| DateTime::parse_from_rfc3339(date_str).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::errors::AppError;
    use chrono::{TimeZone, Weekday};

    const FRIEREN: &str = r#"{
        "data": {
            "mal_id": 52991,
            "title": "Sousou no Frieren",
            "episodes": 28,
            "airing": false,
            "aired": {
                "from": "2023-09-29T00:00:00+00:00",
                "to": "2024-03-22T00:00:00+00:00",
                "string": "Sep 29, 2023 to Mar 22, 2024"
            },
            "broadcast": {
                "day": "Fridays",
                "time": "23:00",
                "timezone": "Asia/Tokyo",
                "string": "Fridays at 23:00 (JST)"
            },
            "score": 9.3
        }
    }"#;

    #[test]
    fn test_maps_structured_broadcast() {
        let metadata = JikanAiringMapper::parse_anime_response(FRIEREN).unwrap();

        assert_eq!(metadata.mal_id, 52991);
        assert_eq!(metadata.title, "Sousou no Frieren");
        assert_eq!(metadata.airing, Some(false));
        assert_eq!(metadata.broadcast.get_weekday(), Some(Weekday::Fri));
        assert_eq!(
            metadata.broadcast.display_label().as_deref(),
            Some("Fridays at 23:00 (JST)")
        );
        assert_eq!(metadata.series.total_episodes, Some(28));
        assert_eq!(
            metadata.series.first_aired,
            Some(Utc.with_ymd_and_hms(2023, 9, 29, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_unknown_schedule_and_null_fields() {
        let body = r#"{
            "data": {
                "mal_id": 21,
                "title": "One Piece",
                "episodes": null,
                "airing": true,
                "aired": { "from": "not-a-date" },
                "broadcast": { "day": null, "time": null, "timezone": null, "string": "Unknown" }
            }
        }"#;

        let metadata = JikanAiringMapper::parse_anime_response(body).unwrap();

        assert!(metadata.broadcast.to_slot().is_none());
        assert_eq!(metadata.broadcast.display_label().as_deref(), Some("Unknown"));
        assert_eq!(metadata.series.first_aired, None);
        assert_eq!(metadata.series.total_episodes, None);
    }

    #[test]
    fn test_string_only_broadcast_is_parsed() {
        let body = r#"{ "data": { "mal_id": 5, "broadcast": { "string": "Sundays at 17:30 (JST)" } } }"#;
        let metadata = JikanAiringMapper::parse_anime_response(body).unwrap();

        let slot = metadata.broadcast.to_slot().unwrap();
        assert_eq!(slot.weekday, Weekday::Sun);
        assert_eq!(metadata.title, "");
        assert!(metadata.wants_countdown());
    }

    #[test]
    fn test_missing_broadcast_block() {
        let body = r#"{ "data": { "mal_id": 5, "episodes": 0 } }"#;
        let metadata = JikanAiringMapper::parse_anime_response(body).unwrap();

        assert_eq!(metadata.broadcast, BroadcastInfo::default());
        assert_eq!(metadata.series.total_episodes, None);
    }

    #[test]
    fn test_invalid_json_is_a_serialization_error() {
        let result = JikanAiringMapper::parse_anime_response("<html>rate limited</html>");
        assert!(matches!(result, Err(AppError::SerializationError(_))));
    }
}
