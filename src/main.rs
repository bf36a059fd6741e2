use clap::Parser;
use colored::*;
use github_harvester::cli::Cli;
use github_harvester::github::GitHubClient;
use github_harvester::{collector, output};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    println!("{}", "GitHub Profile Harvester".bold().green());
    println!("{}\n", "=".repeat(50).dimmed());

    let query = cli.search_query();
    println!("Searching for users matching {}", query.cyan());

    let client = GitHubClient::new(&cli.http_config(), cli.api_url.clone())?;
    let harvest = collector::collect(&client, &query).await;

    output::write_users(&cli.users_output, &harvest.users)?;
    output::write_repositories(&cli.repos_output, &harvest.repositories)?;

    println!(
        "✅ {} users written to {}",
        harvest.users.len().to_string().bold(),
        cli.users_output.display()
    );
    println!(
        "✅ {} repositories written to {}",
        harvest.repositories.len().to_string().bold(),
        cli.repos_output.display()
    );

    Ok(())
}
