use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::schedule::domain::{AiringMetadataSource, AnimeAiringMetadata};
use crate::modules::schedule::infrastructure::cache::TtlCache;
use crate::shared::errors::AppResult;
use crate::shared::utils::LogContext;

/// Decorator that adds transparent caching to any AiringMetadataSource
///
/// Only raw provider metadata is cached. Next-airing instants and countdowns
/// are derived from it fresh on every call.
pub struct CachedAiringMetadataSource {
    /// The wrapped source
    inner: Arc<dyn AiringMetadataSource>,
    /// Caller-owned cache, so its TTL and clock are chosen by the caller
    cache: Arc<TtlCache<u32, AnimeAiringMetadata>>,
}

impl CachedAiringMetadataSource {
    pub fn new(
        inner: Arc<dyn AiringMetadataSource>,
        cache: Arc<TtlCache<u32, AnimeAiringMetadata>>,
    ) -> Self {
        Self { inner, cache }
    }
}

#[async_trait]
impl AiringMetadataSource for CachedAiringMetadataSource {
    async fn fetch_airing(&self, mal_id: u32) -> AppResult<Option<AnimeAiringMetadata>> {
        if let Some(cached) = self.cache.get(&mal_id) {
            LogContext::metadata_fetch(self.source_name(), mal_id, "cache hit");
            return Ok(Some(cached));
        }

        LogContext::metadata_fetch(self.inner.source_name(), mal_id, "cache miss");

        let result = self.inner.fetch_airing(mal_id).await?;

        // Cache if found
        if let Some(ref metadata) = result {
            self.cache.insert(mal_id, metadata.clone());
        }

        Ok(result)
    }

    fn source_name(&self) -> &'static str {
        "cached"
    }
}
