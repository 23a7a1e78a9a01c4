pub mod airing_metadata;

pub use airing_metadata::AnimeAiringMetadata;
