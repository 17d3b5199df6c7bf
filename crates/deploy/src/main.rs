use anyhow::Result;
use clap::Parser;
use tracing_subscriber::FmtSubscriber;

mod artifacts;
mod cli;
mod deployer;
mod manifest;
mod networks;

use cli::DeployArgs;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file first
    dotenvy::dotenv().ok();

    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = DeployArgs::parse();
    cli::execute(args).await
}
