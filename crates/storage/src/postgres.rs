//! PostgreSQL watch store via `sqlx`.

use sqlx::PgPool;
use tracing::info;

use routewatch_core::{NewRouteWatch, RouteWatch};

use crate::error::StorageError;
use crate::store::WatchStore;

/// Watch store backed by a PostgreSQL connection pool.
pub struct PgWatchStore {
    pool: PgPool,
}

/// Row shape of the `watches` table. `alert_times` maps to a `TEXT[]` column.
#[derive(sqlx::FromRow)]
struct WatchRow {
    id: i64,
    source: String,
    destination: String,
    alert_times: Vec<String>,
    expected_minutes: i32,
    notify_email: String,
}

impl From<WatchRow> for RouteWatch {
    fn from(row: WatchRow) -> Self {
        RouteWatch {
            id: row.id,
            source: row.source,
            destination: row.destination,
            alert_times: row.alert_times,
            expected_minutes: row.expected_minutes,
            notify_email: row.notify_email,
        }
    }
}

impl PgWatchStore {
    /// Connect to PostgreSQL and run pending migrations.
    pub async fn connect(url: &str) -> Result<Self, StorageError> {
        let pool = PgPool::connect(url).await?;
        sqlx::migrate!("../../migrations").run(&pool).await?;
        info!("PostgreSQL watch store ready");
        Ok(Self { pool })
    }

    /// Wrap an existing pool (migrations are the caller's responsibility).
    pub fn with_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl WatchStore for PgWatchStore {
    async fn add(&self, new: NewRouteWatch) -> Result<RouteWatch, StorageError> {
        let row: WatchRow = sqlx::query_as(
            "INSERT INTO watches (source, destination, alert_times, expected_minutes, notify_email) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, source, destination, alert_times, expected_minutes, notify_email",
        )
        .bind(&new.source)
        .bind(&new.destination)
        .bind(&new.alert_times)
        .bind(new.expected_minutes)
        .bind(&new.notify_email)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn list_all(&self) -> Result<Vec<RouteWatch>, StorageError> {
        let rows: Vec<WatchRow> = sqlx::query_as(
            "SELECT id, source, destination, alert_times, expected_minutes, notify_email \
             FROM watches ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(RouteWatch::from).collect())
    }

    async fn count(&self) -> Result<u64, StorageError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM watches")
            .fetch_one(&self.pool)
            .await?;
        Ok(count as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_converts_to_watch() {
        let row = WatchRow {
            id: 3,
            source: "Pune".to_string(),
            destination: "Mumbai".to_string(),
            alert_times: vec!["09:00".to_string(), "18:30".to_string()],
            expected_minutes: 120,
            notify_email: "a@x.com".to_string(),
        };
        let watch: RouteWatch = row.into();
        assert_eq!(watch.id, 3);
        assert_eq!(watch.alert_times, vec!["09:00", "18:30"]);
        assert_eq!(watch.expected_minutes, 120);
    }
}
