// Schedule bounded context: weekly JST broadcast slots turned into
// next-airing instants, local display times, countdowns and episode estimates

pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used items
pub use application::{
    AiringScheduleService, AiringSnapshot, CountdownHandle, CountdownTicker, ScheduleConfig,
    ScheduleConfigBuilder,
};
pub use domain::services::{
    format_countdown, format_offset_label, BroadcastResolver, EpisodeEstimator, LocalDisplay,
    LocalPresenter, AIRING_NOW_MESSAGE,
};
pub use domain::{
    AiringMetadataSource, AnimeAiringMetadata, BroadcastInfo, BroadcastSlot, Clock,
    ResolvedOccurrence, SeriesAiringInfo,
};
pub use infrastructure::{
    host_utc_offset_minutes, CachedAiringMetadataSource, FixedClock, JikanAiringMapper,
    SystemClock, TtlCache,
};
