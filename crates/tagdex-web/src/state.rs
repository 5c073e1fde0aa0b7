//! Application state.

use std::sync::Arc;

use tagdex_gql::TagdexSchema;
use tagdex_graph::{GraphConfig, SharedGraph};

/// State shared across handlers.
///
/// The shared graph cell starts empty; the first request that needs the
/// database initializes it, and every later request reuses the handle.
#[derive(Clone)]
pub struct AppState {
    pub schema: TagdexSchema,
    pub graph: Arc<SharedGraph>,
    pub graph_config: GraphConfig,
}

impl AppState {
    pub fn new(schema: TagdexSchema, graph_config: GraphConfig) -> Self {
        Self {
            schema,
            graph: Arc::new(SharedGraph::new()),
            graph_config,
        }
    }
}
