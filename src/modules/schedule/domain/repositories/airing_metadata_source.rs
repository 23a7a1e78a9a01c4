use async_trait::async_trait;

use crate::modules::schedule::domain::entities::AnimeAiringMetadata;
use crate::shared::errors::AppResult;

/// Port for whatever supplies broadcast and series metadata
///
/// `Ok(None)` means the provider has no such anime; transport or decoding
/// failures are errors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AiringMetadataSource: Send + Sync {
    async fn fetch_airing(&self, mal_id: u32) -> AppResult<Option<AnimeAiringMetadata>>;

    /// Short name used in logs
    fn source_name(&self) -> &'static str;
}
