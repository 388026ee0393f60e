//! The tick loop: load watches, match, evaluate, deliver.
//!
//! One tick runs every `tick_interval_secs`. Ticks never overlap: the loop
//! awaits the full evaluation before asking the timer again, and a tick
//! whose slot passed while the previous one was still running is skipped
//! rather than queued. Within a tick, watches are evaluated sequentially;
//! they share no mutable state and each failure is scoped to its own watch.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use routewatch_core::config::SchedulerConfig;
use routewatch_core::{AlertVariant, RouteWatch};
use routewatch_notify::{compose, Notifier, NotifyError};
use routewatch_routing::{RouteDurationClient, RoutingError};
use routewatch_storage::{StorageError, WatchStore};

use crate::decision::decide;
use crate::matcher::{matches, wall_clock_hhmm};

/// Terminal state of one watch within one tick.
#[derive(Debug)]
pub enum WatchOutcome {
    /// No alert time matched this tick's wall-clock minute.
    Skipped,
    /// The notification was composed and handed to the delivery channel.
    Delivered(AlertVariant),
    /// The routing lookup failed; no notification was attempted.
    RoutingFailed(RoutingError),
    /// Composition succeeded but the delivery channel reported an error.
    DeliveryFailed(NotifyError),
}

/// Drives the periodic alert evaluation.
///
/// Owns the collaborators for one process: the watch store, the routing
/// client (wrapping the shared HTTP client), and the delivery channel.
/// All of them are read-only after construction.
pub struct TrafficAlertScheduler {
    store: Arc<dyn WatchStore>,
    routing: RouteDurationClient,
    notifier: Arc<dyn Notifier>,
    tick_interval_secs: u64,
    tz_offset_minutes: i32,
}

impl TrafficAlertScheduler {
    pub fn new(
        store: Arc<dyn WatchStore>,
        routing: RouteDurationClient,
        notifier: Arc<dyn Notifier>,
        config: &SchedulerConfig,
    ) -> Self {
        Self {
            store,
            routing,
            notifier,
            tick_interval_secs: config.tick_interval_secs.max(1),
            tz_offset_minutes: config.tz_offset_minutes,
        }
    }

    /// Run the tick loop forever. Spawned as a tokio task at startup.
    ///
    /// The first tick is aligned to the next interval boundary (the top of
    /// the minute for the default 60s cadence), matching the minute
    /// granularity of the alert times.
    pub async fn run(&self) {
        let interval_secs = self.tick_interval_secs;
        let align_secs =
            interval_secs - (Utc::now().timestamp().rem_euclid(interval_secs as i64) as u64);
        tokio::time::sleep(Duration::from_secs(align_secs)).await;

        let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(interval_secs, "traffic alert scheduler started");

        loop {
            interval.tick().await;
            let now_hhmm = wall_clock_hhmm(Utc::now(), self.tz_offset_minutes);
            if let Err(e) = self.run_tick(&now_hhmm).await {
                warn!(error = %e, "tick aborted: could not load watches");
            }
        }
    }

    /// Evaluate every stored watch against `now_hhmm`.
    ///
    /// A storage failure aborts the whole tick (there is nothing to
    /// iterate); every other failure is confined to its watch. Returns one
    /// outcome per stored watch, in store order.
    pub async fn run_tick(&self, now_hhmm: &str) -> Result<Vec<WatchOutcome>, StorageError> {
        let watches = self.store.list_all().await?;
        debug!(watch_count = watches.len(), now = %now_hhmm, "tick started");

        let mut outcomes = Vec::with_capacity(watches.len());
        for watch in &watches {
            let outcome = self.evaluate(watch, now_hhmm).await;
            match &outcome {
                WatchOutcome::Skipped => {}
                WatchOutcome::Delivered(variant) => {
                    info!(
                        watch_id = watch.id,
                        variant = variant.as_str(),
                        recipient = %watch.notify_email,
                        "alert delivered"
                    );
                }
                WatchOutcome::RoutingFailed(e) => {
                    warn!(watch_id = watch.id, error = %e, "routing lookup failed, watch skipped");
                }
                WatchOutcome::DeliveryFailed(e) => {
                    warn!(watch_id = watch.id, error = %e, "notification delivery failed");
                }
            }
            outcomes.push(outcome);
        }

        let fired = outcomes
            .iter()
            .filter(|o| !matches!(o, WatchOutcome::Skipped))
            .count();
        if fired > 0 {
            info!(fired, now = %now_hhmm, "tick completed");
        } else {
            debug!(now = %now_hhmm, "tick completed: no watches due");
        }

        Ok(outcomes)
    }

    /// Steps 3–5 for a single matched watch; Skipped when no time matches.
    async fn evaluate(&self, watch: &RouteWatch, now_hhmm: &str) -> WatchOutcome {
        if !matches(&watch.alert_times, now_hhmm) {
            return WatchOutcome::Skipped;
        }

        let result = match self.routing.fetch(&watch.source, &watch.destination).await {
            Ok(result) => result,
            Err(e) => return WatchOutcome::RoutingFailed(e),
        };

        let variant = decide(watch.expected_minutes, result.duration_seconds);
        let content = compose(variant, watch, &result);

        match self
            .notifier
            .send_html(&content.recipient, &content.subject, &content.html_body)
            .await
        {
            Ok(()) => WatchOutcome::Delivered(variant),
            Err(e) => WatchOutcome::DeliveryFailed(e),
        }
    }
}
