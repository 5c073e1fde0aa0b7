//! Graph schema initialization (constraints and indexes).

use anyhow::Result;
use neo4rs::Query;
use tracing::info;

use crate::GraphClient;

/// Cypher statements applied by `tagdex schema init`.
const SCHEMA_STATEMENTS: &[&str] = &[
    // Uniqueness constraints
    "CREATE CONSTRAINT hashtag_tag IF NOT EXISTS FOR (h:Hashtag) REQUIRE h.tag IS UNIQUE",
    "CREATE CONSTRAINT user_screen_name IF NOT EXISTS FOR (u:User) REQUIRE u.screen_name IS UNIQUE",
    "CREATE CONSTRAINT link_url IF NOT EXISTS FOR (l:Link) REQUIRE l.url IS UNIQUE",
    // Full-text index backing the tweetsByText query
    "CREATE FULLTEXT INDEX tweet_text IF NOT EXISTS FOR (t:Tweet) ON EACH [t.text]",
];

/// Apply constraints and indexes.
///
/// Safe to run multiple times - every statement carries IF NOT EXISTS.
pub async fn initialize_schema(client: &GraphClient) -> Result<()> {
    for statement in SCHEMA_STATEMENTS {
        client.execute(Query::new(statement.to_string())).await?;
    }

    info!(
        "graph schema initialized ({} statements)",
        SCHEMA_STATEMENTS.len()
    );
    Ok(())
}
