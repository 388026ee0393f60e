//! Collaborator wiring from config.
//!
//! Everything built here is immutable after init: the store, the shared
//! HTTP client behind the routing client, and the delivery channel.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use routewatch_core::Config;
use routewatch_notify::{EmailNotifier, Notifier, NullNotifier};
use routewatch_routing::RouteDurationClient;
use routewatch_storage::{MemoryWatchStore, PgWatchStore, WatchStore};

/// Connect the watch store: PostgreSQL when `PG_URL` is set, in-memory
/// otherwise. Returns the store together with its label for `/health`.
pub async fn build_store(config: &Config) -> anyhow::Result<(Arc<dyn WatchStore>, &'static str)> {
    match &config.postgres.url {
        Some(url) => {
            let store = PgWatchStore::connect(url).await?;
            Ok((Arc::new(store), "postgres"))
        }
        None => {
            warn!("PG_URL not configured — watches are kept in memory and lost on restart");
            Ok((Arc::new(MemoryWatchStore::new()), "memory"))
        }
    }
}

/// Build the delivery channel: SMTP when `SMTP_FROM` is set, log-only
/// otherwise. A configured-but-invalid SMTP setup is a startup error.
pub fn build_notifier(config: &Config) -> anyhow::Result<Arc<dyn Notifier>> {
    if config.smtp.from.is_some() {
        let notifier = EmailNotifier::from_config(&config.smtp)?;
        info!(host = %config.smtp.host, port = config.smtp.port, "email delivery enabled");
        Ok(Arc::new(notifier))
    } else {
        warn!("SMTP_FROM not configured — alerts will be logged, not emailed");
        Ok(Arc::new(NullNotifier))
    }
}

/// Build the routing client over a process-wide HTTP client with the
/// configured per-call timeout.
pub fn build_routing_client(config: &Config) -> anyhow::Result<RouteDurationClient> {
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.routing.timeout_secs))
        .build()?;
    Ok(RouteDurationClient::new(http, &config.routing))
}
