//! Basic tests for the brand Factory contract. These assume that a devnet is
//! already running locally.

use clap::Parser;
use cli::{Cli, Tests};
use eyre::Result;
use scripts::utils::setup_client;
use tests::{test_factory_deployment, test_onboard_brand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod abis;
mod cli;
mod constants;
mod tests;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let Cli {
        test,
        priv_key,
        rpc_url,
    } = Cli::parse();

    let client = setup_client(&priv_key, &rpc_url).await?;

    match test {
        Tests::FactoryDeployment => test_factory_deployment(client).await?,
        Tests::OnboardBrand => test_onboard_brand(client).await?,
    }

    Ok(())
}
