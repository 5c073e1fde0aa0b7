//! Graph schema maintenance commands.

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use tagdex_core::Settings;
use tagdex_graph::{schema, GraphClient, GraphConfig};

#[derive(Subcommand)]
pub enum SchemaCommands {
    /// Apply uniqueness constraints and the tweet_text full-text index
    Init,

    /// Show node and relationship counts
    Status,
}

pub async fn execute(command: SchemaCommands) -> Result<()> {
    let settings = Settings::from_env()?;

    // Eager connect with ping: these commands are useless without a live
    // database, so fail fast instead of at the first statement.
    let client = GraphClient::connect(&GraphConfig::from(&settings)).await?;

    match command {
        SchemaCommands::Init => init(&client).await,
        SchemaCommands::Status => status(&client).await,
    }
}

async fn init(client: &GraphClient) -> Result<()> {
    schema::initialize_schema(client).await?;
    println!("{}", "Graph schema initialized.".green().bold());
    Ok(())
}

async fn status(client: &GraphClient) -> Result<()> {
    let counts = client.get_counts().await?;

    println!("{}", "Graph status".bold());
    println!("  Nodes:         {}", counts.nodes);
    println!("  Relationships: {}", counts.relationships);
    Ok(())
}
