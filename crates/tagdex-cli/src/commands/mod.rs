//! Command-line surface.

pub mod schema;
pub mod serve;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tagdex",
    version,
    about = "GraphQL gateway for searching archived tweets by hashtag"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP gateway
    Serve,

    /// Graph schema maintenance
    Schema {
        #[command(subcommand)]
        command: schema::SchemaCommands,
    },
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Serve => serve::execute().await,
            Commands::Schema { command } => schema::execute(command).await,
        }
    }
}
