//! GraphQL-to-Cypher translation.
//!
//! The resolver layer hands the translator a root query, its arguments,
//! and the shape of the requested fields. The translator compiles that
//! shape into a single Cypher query and returns rows already matching it,
//! so no filtering or reshaping happens upstream.

mod cypher;
mod model;

use anyhow::Result;
use async_trait::async_trait;
use neo4rs::Query;
use serde_json::Value;
use thiserror::Error;

use crate::client::GraphClient;

pub use model::{Entity, FieldKind, Relation};

/// The shape of the fields requested by a GraphQL query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub fields: Vec<SelectedField>,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// A flat selection of leaf fields.
    pub fn of_leaves(names: &[&str]) -> Self {
        Self {
            fields: names.iter().map(|name| SelectedField::leaf(name)).collect(),
        }
    }
}

/// One requested field with its nested selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedField {
    pub name: String,
    pub children: Selection,
}

impl SelectedField {
    pub fn leaf(name: &str) -> Self {
        Self {
            name: name.to_string(),
            children: Selection::default(),
        }
    }

    pub fn nested(name: &str, children: Vec<SelectedField>) -> Self {
        Self {
            name: name.to_string(),
            children: Selection { fields: children },
        }
    }
}

/// Pagination bounds forwarded verbatim from the query arguments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
    pub first: Option<i64>,
    pub offset: Option<i64>,
}

/// A root query with its arguments, as parsed by the resolver layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphQuery {
    /// Hashtags matching a tag.
    HashtagByTag { tag: String, page: Page },
    /// Tweets whose text matches a full-text search expression.
    TweetsByText { search: String, page: Page },
}

/// Errors produced while compiling a selection into Cypher.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TranslateError {
    #[error("unknown field '{field}' on {entity}")]
    UnknownField {
        entity: &'static str,
        field: String,
    },

    #[error("empty selection for {entity}")]
    EmptySelection { entity: &'static str },
}

/// Executes a root query shaped by the requested selection.
///
/// The narrow seam between the resolver layer and the database: a
/// hand-written query layer can replace [`CypherTranslator`] without
/// touching the resolver contract.
#[async_trait]
pub trait QueryTranslator: Send + Sync {
    async fn execute(
        &self,
        client: &GraphClient,
        query: &GraphQuery,
        selection: &Selection,
    ) -> Result<Value>;
}

/// Compiles each selection into a single Cypher map-projection query.
#[derive(Debug, Default, Clone, Copy)]
pub struct CypherTranslator;

#[async_trait]
impl QueryTranslator for CypherTranslator {
    async fn execute(
        &self,
        client: &GraphClient,
        query: &GraphQuery,
        selection: &Selection,
    ) -> Result<Value> {
        let (cypher, page) = match query {
            GraphQuery::HashtagByTag { page, .. } => {
                (cypher::hashtag_query(selection, page)?, page)
            }
            GraphQuery::TweetsByText { page, .. } => {
                (cypher::tweets_by_text_query(selection, page)?, page)
            }
        };
        tracing::debug!(%cypher, "translated query");

        let mut bound = Query::new(cypher);
        bound = match query {
            GraphQuery::HashtagByTag { tag, .. } => bound.param("tag", tag.as_str()),
            GraphQuery::TweetsByText { search, .. } => bound.param("search", search.as_str()),
        };
        if let Some(offset) = page.offset {
            bound = bound.param("offset", offset);
        }
        if let Some(first) = page.first {
            bound = bound.param("first", first);
        }

        let rows = client.query(bound).await?;
        let mut values = Vec::with_capacity(rows.len());
        for row in rows {
            let value: Value = row
                .get("value")
                .map_err(|e| anyhow::anyhow!("failed to read projected row: {e:?}"))?;
            values.push(value);
        }
        Ok(Value::Array(values))
    }
}
