//! # tagdex-graph
//!
//! Neo4j access for the tweet archive: the connection client, the shared
//! process-wide handle, schema bootstrap, and the GraphQL-to-Cypher
//! translation capability consumed by the resolver layer.

pub mod client;
pub mod schema;
pub mod shared;
pub mod translate;

pub use client::{GraphClient, GraphConfig, GraphCounts};
pub use shared::{SharedGraph, SharedHandle};
pub use translate::{
    CypherTranslator, GraphQuery, Page, QueryTranslator, SelectedField, Selection, TranslateError,
};
