//! Per-request context carrying the shared database connection handle.

use anyhow::Result;
use tagdex_graph::{GraphClient, GraphConfig, SharedGraph};

/// Request-scoped context consumed by the resolver layer.
pub struct RequestContext {
    client: GraphClient,
}

impl RequestContext {
    pub fn new(client: GraphClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &GraphClient {
        &self.client
    }
}

/// Build the context for one incoming request.
///
/// The first call creates the shared connection handle; every later call
/// reuses it and only clones the pool reference.
pub async fn create_context(shared: &SharedGraph, config: &GraphConfig) -> Result<RequestContext> {
    let client = shared.get_or_connect(config).await?;
    Ok(RequestContext::new(client))
}
