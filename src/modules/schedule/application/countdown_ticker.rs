//! Periodic countdown refresh for a visible calendar card
//!
//! The ticker owns one tokio task per card. Dropping or stopping the handle
//! cancels it, so a view only has to keep the handle alive while shown.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use super::config::ScheduleConfig;
use super::service::{AiringScheduleService, AiringSnapshot};
use crate::modules::schedule::domain::{BroadcastInfo, SeriesAiringInfo};
use crate::shared::errors::AppResult;
use crate::shared::utils::LogContext;

pub struct CountdownTicker;

impl CountdownTicker {
    /// Publish a snapshot now and then once per `refresh_interval`
    ///
    /// `host_offset` is asked for the viewer's UTC offset in minutes on every
    /// tick, so a card left open across a DST change follows it. Pass
    /// `host_utc_offset_minutes` for the machine zone, or `|_| minutes` for a
    /// fixed one. Must be called from within a tokio runtime.
    pub fn spawn<F>(
        service: Arc<AiringScheduleService>,
        broadcast: BroadcastInfo,
        series: SeriesAiringInfo,
        host_offset: F,
        config: &ScheduleConfig,
    ) -> AppResult<CountdownHandle>
    where
        F: Fn(DateTime<Utc>) -> i32 + Send + Sync + 'static,
    {
        config.validate()?;

        let period = config.refresh_interval;
        let token = CancellationToken::new();
        let render = move |now: DateTime<Utc>| {
            AiringScheduleService::snapshot_at(&broadcast, &series, host_offset(now), now)
        };
        let (sender, receiver) = watch::channel(render(service.now()));

        let cancelled = token.clone();
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately and the initial snapshot is already out
            interval.tick().await;

            loop {
                tokio::select! {
                    _ = cancelled.cancelled() => break,
                    _ = interval.tick() => {
                        if sender.send(render(service.now())).is_err() {
                            break;
                        }
                    }
                }
            }

            LogContext::ticker_lifecycle("stopped", period.as_secs());
        });

        LogContext::ticker_lifecycle("started", period.as_secs());

        Ok(CountdownHandle {
            token,
            task: Some(task),
            receiver,
        })
    }
}

/// Keeps a ticker alive; cancels it on `stop` or drop
pub struct CountdownHandle {
    token: CancellationToken,
    task: Option<JoinHandle<()>>,
    receiver: watch::Receiver<AiringSnapshot>,
}

impl CountdownHandle {
    /// A receiver that is notified on every refresh
    pub fn subscribe(&self) -> watch::Receiver<AiringSnapshot> {
        self.receiver.clone()
    }

    /// Most recently published snapshot
    pub fn latest(&self) -> AiringSnapshot {
        self.receiver.borrow().clone()
    }

    pub fn is_running(&self) -> bool {
        !self.token.is_cancelled() && self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Cancel the ticker and wait for its task to exit
    pub async fn stop(mut self) {
        self.token.cancel();
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                LogContext::error_with_context(&e, "Countdown ticker task failed");
            }
        }
    }
}

impl Drop for CountdownHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
