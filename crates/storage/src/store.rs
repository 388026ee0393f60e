//! `WatchStore` trait definition.

use routewatch_core::{NewRouteWatch, RouteWatch};

use crate::error::StorageError;

/// Trait for watch persistence implementations.
///
/// The alert core only ever reads the full list; creation happens through
/// the HTTP surface. No filtering or pagination.
#[async_trait::async_trait]
pub trait WatchStore: Send + Sync {
    /// Persist a new watch and return it with its assigned id.
    async fn add(&self, new: NewRouteWatch) -> Result<RouteWatch, StorageError>;

    /// Return every stored watch.
    async fn list_all(&self) -> Result<Vec<RouteWatch>, StorageError>;

    /// Number of stored watches.
    async fn count(&self) -> Result<u64, StorageError>;
}
