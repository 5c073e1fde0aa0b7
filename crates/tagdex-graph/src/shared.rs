//! Process-wide shared connection handle.
//!
//! The gateway opens one connection pool per process and hands a clone of
//! it to every request context. First initialization is guarded, so
//! concurrent cold-start requests cannot each open a pool.

use std::future::Future;

use anyhow::Result;
use tokio::sync::OnceCell;

use crate::client::{GraphClient, GraphConfig};

/// A lazily-initialized handle that lives for the rest of the process.
///
/// The initializer runs at most once even under concurrent first access;
/// every caller observes the same value. There is no teardown.
pub struct SharedHandle<T> {
    cell: OnceCell<T>,
}

impl<T> SharedHandle<T> {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::const_new(),
        }
    }

    /// Get the value, running `init` first if none exists yet.
    pub async fn get_or_try_init<F, Fut, E>(&self, init: F) -> Result<&T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        self.cell.get_or_try_init(init).await
    }

    /// The current value, if initialized.
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }
}

impl<T> Default for SharedHandle<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The process-wide Neo4j handle.
pub type SharedGraph = SharedHandle<GraphClient>;

impl SharedGraph {
    /// Clone of the shared client, connecting lazily on first use.
    pub async fn get_or_connect(&self, config: &GraphConfig) -> Result<GraphClient> {
        let client = self
            .get_or_try_init(|| GraphClient::connect_lazy(config))
            .await?;
        Ok(client.clone())
    }
}
