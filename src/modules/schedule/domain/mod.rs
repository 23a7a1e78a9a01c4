pub mod clock;
pub mod entities;
pub mod repositories;
pub mod services;
pub mod value_objects;

// Re-exports for easy access
pub use clock::Clock;
pub use entities::AnimeAiringMetadata;
pub use repositories::AiringMetadataSource;
pub use value_objects::{BroadcastInfo, BroadcastSlot, ResolvedOccurrence, SeriesAiringInfo};
