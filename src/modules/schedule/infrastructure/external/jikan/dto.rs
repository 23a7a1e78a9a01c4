// Jikan v4 payload models, reduced to the fields the schedule needs
// https://docs.api.jikan.moe/

use serde::{Deserialize, Serialize};

// Response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JikanItem<T> {
    pub data: T,
}

pub type MalId = u32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JikanAiringAnime {
    pub mal_id: MalId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub episodes: Option<u32>,
    #[serde(default)]
    pub airing: Option<bool>,
    #[serde(default)]
    pub aired: Option<Aired>,
    #[serde(default)]
    pub broadcast: Option<Broadcast>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aired {
    #[serde(default)]
    pub from: Option<String>, // ISO8601 UTC
    #[serde(default)]
    pub to: Option<String>, // ISO8601 UTC
    #[serde(default)]
    pub string: Option<String>, // Human-readable date range
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Broadcast {
    #[serde(default)]
    pub day: Option<String>, // "Mondays"
    #[serde(default)]
    pub time: Option<String>, // "17:00"
    #[serde(default)]
    pub timezone: Option<String>, // "Asia/Tokyo"
    #[serde(default)]
    pub string: Option<String>, // human-readable
}
