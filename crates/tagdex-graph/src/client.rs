//! Neo4j connection client.

use anyhow::{Context, Result};
use neo4rs::{ConfigBuilder, Graph, Query};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use tagdex_core::{Settings, DEFAULT_NEO4J_URI};

/// Configuration for connecting to Neo4j.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            uri: DEFAULT_NEO4J_URI.to_string(),
            user: "neo4j".to_string(),
            password: "neo4j".to_string(),
        }
    }
}

impl From<&Settings> for GraphConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            uri: settings.neo4j_uri.clone(),
            user: settings.neo4j_username.clone(),
            password: settings.neo4j_password.clone(),
        }
    }
}

/// Client for the tweet archive graph.
#[derive(Clone)]
pub struct GraphClient {
    graph: Graph,
}

impl GraphClient {
    /// Create a client and verify the database is reachable.
    ///
    /// neo4rs pools lazily: `Graph::connect` only creates the pool object
    /// without opening a bolt connection. Running a cheap `RETURN 1`
    /// forces the handshake, so callers get a fast failure when Neo4j is
    /// unreachable instead of hanging until the first real query.
    pub async fn connect(config: &GraphConfig) -> Result<Self> {
        let client = Self::connect_lazy(config).await?;
        client
            .graph
            .run(Query::new("RETURN 1".to_string()))
            .await
            .context("Neo4j is not responding to queries")?;
        Ok(client)
    }

    /// Create a client without touching the network.
    ///
    /// The first query establishes the actual connection. The gateway
    /// uses this so a database outage surfaces as a request-time error
    /// rather than a startup failure.
    pub async fn connect_lazy(config: &GraphConfig) -> Result<Self> {
        let neo4j_config = ConfigBuilder::default()
            .uri(&config.uri)
            .user(&config.user)
            .password(&config.password)
            .db("neo4j")
            .fetch_size(50)
            .build()
            .context("Failed to build Neo4j config")?;

        let graph = Graph::connect(neo4j_config)
            .await
            .context("Failed to create Neo4j connection pool")?;

        Ok(Self { graph })
    }

    /// Execute a Cypher query that returns no results.
    pub async fn execute(&self, query: Query) -> Result<()> {
        self.graph
            .run(query)
            .await
            .context("Neo4j query execution failed")?;
        Ok(())
    }

    /// Execute a Cypher query and return all rows.
    pub async fn query(&self, query: Query) -> Result<Vec<neo4rs::Row>> {
        let mut result = self
            .graph
            .execute(query)
            .await
            .context("Neo4j query failed")?;

        let mut rows = Vec::new();
        while let Ok(Some(row)) = result.next().await {
            rows.push(row);
        }
        Ok(rows)
    }

    /// Execute a Cypher query and return a single scalar value.
    pub async fn query_scalar<T: DeserializeOwned>(
        &self,
        query: Query,
        field: &str,
    ) -> Result<Option<T>> {
        let rows = self.query(query).await?;
        match rows.into_iter().next() {
            Some(row) => {
                let val: T = row
                    .get(field)
                    .map_err(|e| anyhow::anyhow!("Failed to get field '{}': {:?}", field, e))?;
                Ok(Some(val))
            }
            None => Ok(None),
        }
    }

    /// Node and relationship counts for `tagdex schema status`.
    pub async fn get_counts(&self) -> Result<GraphCounts> {
        let node_query = Query::new("MATCH (n) RETURN count(n) as count".to_string());
        let rel_query = Query::new("MATCH ()-[r]->() RETURN count(r) as count".to_string());

        let nodes: i64 = self.query_scalar(node_query, "count").await?.unwrap_or(0);
        let relationships: i64 = self.query_scalar(rel_query, "count").await?.unwrap_or(0);

        Ok(GraphCounts {
            nodes: nodes as usize,
            relationships: relationships as usize,
        })
    }
}

/// Node and relationship counts.
#[derive(Debug, Clone)]
pub struct GraphCounts {
    pub nodes: usize,
    pub relationships: usize,
}
