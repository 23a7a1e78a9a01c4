pub mod cached_metadata_source;

pub use cached_metadata_source::CachedAiringMetadataSource;
