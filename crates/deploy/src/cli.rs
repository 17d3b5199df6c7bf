//! CLI arguments and command execution for the deploy tool

use crate::artifacts;
use crate::deployer;
use crate::manifest::{DeploymentManifest, ManifestContracts};
use crate::networks::EvmNetwork;
use alloy::network::EthereumWallet;
use alloy::providers::{Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;
use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

/// Deploy the BaseLine contracts and record a deployment manifest
#[derive(Debug, Parser)]
#[command(name = "baseline-deploy", version, about)]
pub struct DeployArgs {
    /// Target network (base, base-sepolia, localhost)
    #[arg(long, default_value = "localhost")]
    pub network: String,

    /// Override the network's default RPC endpoint
    #[arg(long)]
    pub rpc_url: Option<String>,

    /// Directory holding Profiles.json, Posts.json, Comments.json and
    /// Follow.json artifacts
    #[arg(long, default_value = "artifacts")]
    pub artifacts: PathBuf,

    /// Directory deployment manifests are written to
    #[arg(long, default_value = "deployments")]
    pub out: PathBuf,

    /// Deployer private key (0x-prefixed)
    #[arg(long, env = "BASELINE_DEPLOYER_KEY", hide_env_values = true)]
    pub private_key: Option<String>,
}

/// Run a full deployment: Profiles → Posts → Comments → Follow, then write
/// the manifest.
pub async fn execute(args: DeployArgs) -> Result<()> {
    let network = EvmNetwork::get_network(&args.network).ok_or_else(|| {
        anyhow!(
            "Unknown network '{}' (known: {})",
            args.network,
            EvmNetwork::list_networks().join(", ")
        )
    })?;

    let rpc_url = args
        .rpc_url
        .clone()
        .unwrap_or_else(|| network.default_rpc().to_string());

    let private_key = args.private_key.ok_or_else(|| {
        anyhow!("No deployer key provided - pass --private-key or set BASELINE_DEPLOYER_KEY")
    })?;
    let signer: PrivateKeySigner = private_key
        .parse()
        .context("Invalid deployer private key")?;
    let deployer_address = signer.address();

    let wallet = EthereumWallet::from(signer);
    let provider = ProviderBuilder::new()
        .wallet(wallet)
        .connect_http(rpc_url.parse().context("Invalid RPC URL")?);

    info!("Deploying to {} via {}", network.name, rpc_url);
    info!("Deployer account: 0x{:x}", deployer_address);

    let balance = provider.get_balance(deployer_address).await?;
    info!("Account balance: {} wei", balance);

    let chain_id = provider.get_chain_id().await?;
    if chain_id != network.chain_id {
        warn!(
            "Node reports chain id {} but {} expects {}",
            chain_id, network.name, network.chain_id
        );
    }

    let artifacts = artifacts::load_all(&args.artifacts)?;
    let deployed = deployer::deploy_contracts(&provider, &artifacts).await?;

    if let Some(explorer) = &network.explorer {
        info!(
            "Posts contract: {}/address/0x{:x}",
            explorer, deployed.posts
        );
    }

    let manifest = DeploymentManifest::new(
        &args.network,
        chain_id,
        &format!("0x{:x}", deployer_address),
        ManifestContracts {
            profiles: format!("0x{:x}", deployed.profiles),
            posts: format!("0x{:x}", deployed.posts),
            comments: format!("0x{:x}", deployed.comments),
            follow: format!("0x{:x}", deployed.follow),
        },
    );

    info!("=== Deployment summary ===");
    info!("{}", serde_json::to_string_pretty(&manifest)?);

    let path = manifest.write(&args.out)?;
    info!("Deployment info saved to: {}", path.display());

    Ok(())
}
