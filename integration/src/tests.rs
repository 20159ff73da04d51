//! Integration tests for factory deployment & brand onboarding

use std::{str::FromStr, sync::Arc};

use ethers::abi::Address;
use eyre::Result;
use scripts::{commands::deploy_factory_contract, utils::LocalWalletHttpClient};
use tracing::info;

use crate::{
    abis::FactoryContract,
    constants::{
        TEST_BRAND_ADMIN_ADDRESS, TEST_BRAND_ID, TEST_BRAND_NAME,
        TEST_BRAND_ROYALTY_RECIPIENT_ADDRESS, TEST_MARKETPLACE_ADDRESS,
        TEST_NFT_IMPLEMENTATION_ADDRESS,
    },
};

/// Deploys the factory with the test constructor arguments, waiting until the
/// deployment transaction has been confirmed
async fn deploy_test_factory(client: Arc<LocalWalletHttpClient>) -> Result<Address> {
    let factory_address = deploy_factory_contract(
        client,
        TEST_NFT_IMPLEMENTATION_ADDRESS,
        TEST_MARKETPLACE_ADDRESS,
    )
    .await?;

    Ok(factory_address)
}

pub(crate) async fn test_factory_deployment(client: Arc<LocalWalletHttpClient>) -> Result<()> {
    let factory_address = deploy_test_factory(client).await?;
    info!("Factory deployed at {:#x}", factory_address);

    Ok(())
}

pub(crate) async fn test_onboard_brand(client: Arc<LocalWalletHttpClient>) -> Result<()> {
    let factory_address = deploy_test_factory(client.clone()).await?;
    let factory = FactoryContract::new(factory_address, client);

    let admin = Address::from_str(TEST_BRAND_ADMIN_ADDRESS)?;
    let royalty_recipient = Address::from_str(TEST_BRAND_ROYALTY_RECIPIENT_ADDRESS)?;

    // wait until the onboarding transaction is mined
    factory
        .onboard_brand(
            TEST_BRAND_ID.to_string(),
            TEST_BRAND_NAME.to_string(),
            admin,
            royalty_recipient,
        )
        .send()
        .await?
        .await?;

    Ok(())
}
