//! In-memory watch store.
//!
//! Used when `PG_URL` is not configured and as the storage fake in tests.
//! Ids are assigned from a monotonically increasing counter.

use std::sync::atomic::{AtomicI64, Ordering};

use tokio::sync::RwLock;

use routewatch_core::{NewRouteWatch, RouteWatch};

use crate::error::StorageError;
use crate::store::WatchStore;

pub struct MemoryWatchStore {
    watches: RwLock<Vec<RouteWatch>>,
    next_id: AtomicI64,
}

impl MemoryWatchStore {
    pub fn new() -> Self {
        Self {
            watches: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait::async_trait]
impl WatchStore for MemoryWatchStore {
    async fn add(&self, new: NewRouteWatch) -> Result<RouteWatch, StorageError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let watch = new.into_watch(id);
        self.watches.write().await.push(watch.clone());
        Ok(watch)
    }

    async fn list_all(&self) -> Result<Vec<RouteWatch>, StorageError> {
        Ok(self.watches.read().await.clone())
    }

    async fn count(&self) -> Result<u64, StorageError> {
        Ok(self.watches.read().await.len() as u64)
    }
}
