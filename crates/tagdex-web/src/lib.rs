//! Tagdex Web Server
//!
//! Axum-based HTTP gateway: the GraphQL endpoint, the interactive
//! console, and the server-rendered hashtag search page.

pub mod routes;
pub mod state;
pub mod view;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tagdex_core::Settings;
use tagdex_graph::{CypherTranslator, GraphConfig, QueryTranslator};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::search::index))
        .route("/search", get(routes::search::search))
        .route("/graphql", post(routes::graphql::graphql_handler))
        .route("/graphiql", get(routes::graphql::graphiql))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the gateway.
///
/// Settings are validated by the caller before this point, so a missing
/// variable never reaches the bind.
pub async fn run_server(settings: &Settings) -> anyhow::Result<()> {
    let translator: Arc<dyn QueryTranslator> = Arc::new(CypherTranslator);
    let schema = tagdex_gql::build_schema(translator);
    let state = AppState::new(schema, GraphConfig::from(settings));

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", settings.port)).await?;
    tracing::info!(
        "gateway listening on http://127.0.0.1:{}/graphql",
        settings.port
    );

    axum::serve(listener, app).await?;
    Ok(())
}
