pub mod broadcast_info;
pub mod broadcast_slot;
pub mod resolved_occurrence;
pub mod series_airing_info;

pub use broadcast_info::BroadcastInfo;
pub use broadcast_slot::{parse_time_of_day, parse_weekday, weekday_name, BroadcastSlot};
pub use resolved_occurrence::ResolvedOccurrence;
pub use series_airing_info::SeriesAiringInfo;
