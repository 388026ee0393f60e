mod api;
mod router;
mod startup;
mod state;

use std::sync::Arc;

use tracing::info;

use routewatch_scheduler::TrafficAlertScheduler;

use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    routewatch_core::config::load_dotenv();
    let config = routewatch_core::Config::from_env()?;

    let (store, store_kind) = startup::build_store(&config).await?;
    let notifier = startup::build_notifier(&config)?;
    let routing = startup::build_routing_client(&config)?;

    let scheduler =
        TrafficAlertScheduler::new(store.clone(), routing, notifier, &config.scheduler);
    tokio::spawn(async move { scheduler.run().await });

    let state = Arc::new(AppState { store, store_kind });
    let app = router::build_router(state, &config.server);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "routewatch server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
