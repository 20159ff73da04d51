//! Implementations of the various deploy scripts

use std::{str::FromStr, sync::Arc};

use ethers::{
    abi::{Address, Contract},
    contract::ContractFactory,
    providers::Middleware,
    types::Bytes,
    utils::hex::FromHex,
};
use tracing::{debug, info};

use crate::{
    cli::DeployFactoryArgs,
    constants::{FACTORY_ABI, FACTORY_BYTECODE, FACTORY_CONTRACT_KEY, NUM_DEPLOY_CONFIRMATIONS},
    errors::ScriptError,
    utils::write_deployed_address,
};

/// Deploy the factory contract, logging the deployer account and the
/// deployed address
pub async fn deploy_factory(
    args: DeployFactoryArgs,
    client: Arc<impl Middleware>,
) -> Result<(), ScriptError> {
    let deployer = client.default_sender().ok_or_else(|| {
        ScriptError::ClientInitialization("client has no sender attached".to_string())
    })?;

    let balance = client
        .get_balance(deployer, None /* block */)
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;

    println!("Deploying contracts with the account: {:#x}", deployer);
    println!("Account balance: {}", balance);

    let factory_address =
        deploy_factory_contract(client, &args.nft_implementation, &args.marketplace).await?;

    println!("Factory address: {:#x}", factory_address);

    if let Some(deployments_file) = args.deployments_file {
        write_deployed_address(&deployments_file, FACTORY_CONTRACT_KEY, factory_address)?;
        info!("Recorded factory address in {}", deployments_file);
    }

    Ok(())
}

/// Deploys the factory contract with the given constructor arguments,
/// returning its address once the deployment transaction has been confirmed
pub async fn deploy_factory_contract(
    client: Arc<impl Middleware>,
    nft_implementation: &str,
    marketplace: &str,
) -> Result<Address, ScriptError> {
    // Get factory contract ABI and bytecode
    let abi: Contract = serde_json::from_str(FACTORY_ABI)
        .map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

    let bytecode = Bytes::from_hex(FACTORY_BYTECODE)
        .map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

    let factory = ContractFactory::new(abi, bytecode, client);

    // Parse factory contract constructor arguments
    let nft_implementation_address = Address::from_str(nft_implementation)
        .map_err(|e| ScriptError::CalldataConstruction(e.to_string()))?;

    let marketplace_address = Address::from_str(marketplace)
        .map_err(|e| ScriptError::CalldataConstruction(e.to_string()))?;

    // Deploy factory contract
    debug!("Deploying factory contract...");
    let factory_contract = factory
        .deploy((nft_implementation_address, marketplace_address))
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?
        .confirmations(NUM_DEPLOY_CONFIRMATIONS)
        .send()
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

    Ok(factory_contract.address())
}
