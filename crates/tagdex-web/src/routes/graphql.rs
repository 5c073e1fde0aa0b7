//! GraphQL endpoint and interactive console.

use async_graphql::{Response, ServerError};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    response::{Html, IntoResponse},
};
use tagdex_gql::create_context;

use crate::state::AppState;

/// Static console pointed at /graphql with a sample query pre-filled.
const GRAPHIQL_HTML: &str = include_str!("../../assets/graphiql.html");

/// POST /graphql - execute a GraphQL request with per-request context.
///
/// Context creation failures land in the response's error list; the HTTP
/// status stays 200 per GraphQL convention.
pub async fn graphql_handler(
    State(state): State<AppState>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let context = match create_context(&state.graph, &state.graph_config).await {
        Ok(context) => context,
        Err(e) => {
            tracing::error!("context creation failed: {e:#}");
            return Response::from_errors(vec![ServerError::new(e.to_string(), None)]).into();
        }
    };

    state
        .schema
        .execute(req.into_inner().data(context))
        .await
        .into()
}

/// GET /graphiql - serve the interactive console.
pub async fn graphiql() -> impl IntoResponse {
    Html(GRAPHIQL_HTML)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_points_at_gateway_with_sample_query() {
        assert!(GRAPHIQL_HTML.contains("/graphql"));
        assert!(GRAPHIQL_HTML.contains(r#"hashtag(tag: "politics")"#));
    }
}
