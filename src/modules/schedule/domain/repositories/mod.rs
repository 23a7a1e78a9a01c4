pub mod airing_metadata_source;

pub use airing_metadata_source::AiringMetadataSource;
#[cfg(test)]
pub use airing_metadata_source::MockAiringMetadataSource;
