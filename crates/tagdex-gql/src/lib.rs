//! # tagdex-gql
//!
//! GraphQL schema for the tweet archive: object types, the query root,
//! and the per-request context factory.

pub mod context;
pub mod query;
pub mod selection;
pub mod types;

use std::sync::Arc;

use async_graphql::{EmptyMutation, EmptySubscription, Schema};
use tagdex_graph::QueryTranslator;

pub use context::{create_context, RequestContext};
pub use query::QueryRoot;

pub type TagdexSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Build the schema with the translation capability injected as data.
pub fn build_schema(translator: Arc<dyn QueryTranslator>) -> TagdexSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(translator)
        .finish()
}
