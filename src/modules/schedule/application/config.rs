use std::time::Duration;

use crate::shared::errors::{AppError, AppResult};

/// Longest refresh period that still keeps a minute-resolution countdown honest
const MAX_REFRESH_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Configuration for the airing schedule pipeline
///
/// Constructed by the embedding application; nothing is read from the
/// environment.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleConfig {
    /// How often the countdown ticker recomputes the snapshot
    pub refresh_interval: Duration,

    /// How long fetched provider metadata stays fresh
    pub metadata_ttl: Duration,

    /// Upper bound on cached metadata entries
    pub metadata_cache_max_entries: usize,
}

impl ScheduleConfig {
    /// Creates a new configuration with production defaults
    pub fn new() -> Self {
        Self {
            refresh_interval: Duration::from_secs(60),
            metadata_ttl: Duration::from_secs(5 * 60),
            metadata_cache_max_entries: 1000,
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> AppResult<()> {
        if self.refresh_interval.is_zero() {
            return Err(AppError::ValidationError(
                "refresh_interval must be > 0".to_string(),
            ));
        }

        if self.refresh_interval > MAX_REFRESH_INTERVAL {
            return Err(AppError::ValidationError(format!(
                "refresh_interval must be at most {}s, got {}s",
                MAX_REFRESH_INTERVAL.as_secs(),
                self.refresh_interval.as_secs()
            )));
        }

        if self.metadata_ttl.is_zero() {
            return Err(AppError::ValidationError(
                "metadata_ttl must be > 0".to_string(),
            ));
        }

        if self.metadata_cache_max_entries == 0 {
            return Err(AppError::ValidationError(
                "metadata_cache_max_entries must be > 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for ScheduleConfig
#[derive(Default)]
pub struct ScheduleConfigBuilder {
    config: ScheduleConfig,
}

impl ScheduleConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: ScheduleConfig::new(),
        }
    }

    pub fn refresh_interval(mut self, interval: Duration) -> Self {
        self.config.refresh_interval = interval;
        self
    }

    pub fn metadata_ttl(mut self, ttl: Duration) -> Self {
        self.config.metadata_ttl = ttl;
        self
    }

    pub fn metadata_cache_max_entries(mut self, max: usize) -> Self {
        self.config.metadata_cache_max_entries = max;
        self
    }

    pub fn build(self) -> AppResult<ScheduleConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
