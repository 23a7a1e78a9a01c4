pub mod cache;
pub mod clock;
pub mod decorators;
pub mod external;

pub use cache::{CacheStats, TtlCache};
pub use clock::{host_utc_offset_minutes, FixedClock, SystemClock};
pub use decorators::CachedAiringMetadataSource;
pub use external::jikan::JikanAiringMapper;
