//! Contract deployment in dependency order

use crate::artifacts::ContractArtifact;
use alloy::network::TransactionBuilder;
use alloy::primitives::Address;
use alloy::providers::Provider;
use alloy::rpc::types::TransactionRequest;
use alloy::sol_types::SolValue;
use anyhow::{anyhow, Context, Result};
use tracing::info;

/// Addresses of the four deployed contracts
#[derive(Debug, Clone, Copy)]
pub struct DeployedContracts {
    /// Profiles contract
    pub profiles: Address,
    /// Posts contract
    pub posts: Address,
    /// Comments contract
    pub comments: Address,
    /// Follow contract
    pub follow: Address,
}

/// Deploy one contract: creation bytecode plus the ABI-encoded constructor
/// address arguments, settled on the receipt.
async fn deploy_one<P: Provider>(
    provider: &P,
    artifact: &ContractArtifact,
    constructor_args: &[Address],
) -> Result<Address> {
    let mut code = artifact.bytecode.clone();
    for arg in constructor_args {
        code.extend_from_slice(&arg.abi_encode());
    }

    let tx = TransactionRequest::default().with_deploy_code(code);

    let receipt = provider
        .send_transaction(tx)
        .await
        .with_context(|| format!("Failed to submit {} deployment", artifact.name))?
        .get_receipt()
        .await
        .with_context(|| format!("Failed to confirm {} deployment", artifact.name))?;

    if !receipt.status() {
        return Err(anyhow!(
            "{} deployment reverted (tx 0x{:x})",
            artifact.name,
            receipt.transaction_hash
        ));
    }

    let address = receipt
        .contract_address
        .ok_or_else(|| anyhow!("{} receipt carries no contract address", artifact.name))?;

    info!("{} deployed to: 0x{:x}", artifact.name, address);
    Ok(address)
}

/// Deploy Profiles → Posts → Comments → Follow.
///
/// Posts and Follow take the Profiles address as their constructor
/// dependency; Comments takes both Profiles and Posts.
pub async fn deploy_contracts<P: Provider>(
    provider: &P,
    artifacts: &[ContractArtifact],
) -> Result<DeployedContracts> {
    let [profiles_art, posts_art, comments_art, follow_art] = artifacts else {
        return Err(anyhow!(
            "Expected 4 artifacts (Profiles, Posts, Comments, Follow), got {}",
            artifacts.len()
        ));
    };

    info!("=== Deploying Profiles contract ===");
    let profiles = deploy_one(provider, profiles_art, &[]).await?;

    info!("=== Deploying Posts contract ===");
    let posts = deploy_one(provider, posts_art, &[profiles]).await?;

    info!("=== Deploying Comments contract ===");
    let comments = deploy_one(provider, comments_art, &[profiles, posts]).await?;

    info!("=== Deploying Follow contract ===");
    let follow = deploy_one(provider, follow_art, &[profiles]).await?;

    Ok(DeployedContracts {
        profiles,
        posts,
        comments,
        follow,
    })
}
