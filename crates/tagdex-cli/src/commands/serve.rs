//! Gateway server command.

use anyhow::Result;
use colored::Colorize;
use tagdex_core::Settings;

pub async fn execute() -> Result<()> {
    // Refuses to start before binding when a required variable is missing.
    let settings = Settings::from_env()?;

    println!();
    println!("  {} {}", "Tagdex".cyan().bold(), "Gateway".bold());
    println!();
    println!(
        "  {}   http://127.0.0.1:{}/graphql",
        "GraphQL".green(),
        settings.port
    );
    println!(
        "  {}  http://127.0.0.1:{}/graphiql",
        "GraphiQL".green(),
        settings.port
    );
    println!(
        "  {}    http://127.0.0.1:{}/",
        "Search".green(),
        settings.port
    );
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    tagdex_web::run_server(&settings).await
}
