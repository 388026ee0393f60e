//! HTTP handlers for the watch CRUD surface.
//!
//! Thin request/response glue: store what was given, return what is stored.
//! The alert core never goes through these handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use tracing::error;

use routewatch_core::{NewRouteWatch, RouteWatch};
use routewatch_storage::StorageError;

use crate::state::AppState;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (axum::http::StatusCode, Json<ErrorResponse>);

fn storage_error(e: StorageError) -> ApiError {
    error!(error = %e, "storage operation failed");
    (
        axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}

// ── Health ────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub store: &'static str,
    pub watch_count: Option<u64>,
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        store: state.store_kind,
        watch_count: state.store.count().await.ok(),
    })
}

// ── Watch CRUD ────────────────────────────────────────────────────

pub async fn watch_add(
    State(state): State<Arc<AppState>>,
    Json(new): Json<NewRouteWatch>,
) -> Result<Json<RouteWatch>, ApiError> {
    let watch = state.store.add(new).await.map_err(storage_error)?;
    Ok(Json(watch))
}

pub async fn watch_list(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<RouteWatch>>, ApiError> {
    let watches = state.store.list_all().await.map_err(storage_error)?;
    Ok(Json(watches))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use routewatch_core::config::ServerConfig;
    use routewatch_storage::MemoryWatchStore;

    use crate::router::build_router;
    use crate::state::AppState;

    fn test_app() -> axum::Router {
        let state = Arc::new(AppState {
            store: Arc::new(MemoryWatchStore::new()),
            store_kind: "memory",
        });
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors_origin: None,
        };
        build_router(state, &config)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_reports_store_kind_and_count() {
        let app = test_app();
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["store"], "memory");
        assert_eq!(json["watch_count"], 0);
    }

    #[tokio::test]
    async fn add_then_list_round_trip() {
        let app = test_app();
        let body = serde_json::json!({
            "source": "Pune",
            "destination": "Mumbai",
            "alertTimes": ["09:00", "18:30"],
            "expectedMinutes": 120,
            "notifyEmail": "a@x.com"
        });

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/traffic/add")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let created = body_json(response).await;
        assert_eq!(created["id"], 1);
        assert_eq!(created["alertTimes"][1], "18:30");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/traffic/all")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let listed = body_json(response).await;
        assert_eq!(listed.as_array().unwrap().len(), 1);
        assert_eq!(listed[0]["source"], "Pune");
        assert_eq!(listed[0]["notifyEmail"], "a@x.com");
    }

    #[tokio::test]
    async fn malformed_add_body_is_rejected() {
        let app = test_app();
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/traffic/add")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"source": "Pune"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(response.status().is_client_error());
    }
}
