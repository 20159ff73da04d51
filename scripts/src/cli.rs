//! Definitions of CLI arguments and commands for deploy scripts

use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use ethers::providers::Middleware;

use crate::{commands::deploy_factory, errors::ScriptError};

/// Scripts for deploying the brand Factory contract
#[derive(Parser)]
pub struct Cli {
    /// Private key of the deployer
    // TODO: Better key management
    #[arg(short, long, env = "PKEY")]
    pub priv_key: String,

    /// Network RPC URL
    #[arg(short, long, env = "RPC_URL", default_value = "http://localhost:8545")]
    pub rpc_url: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    DeployFactory(DeployFactoryArgs),
}

/// Deploy the brand Factory contract.
///
/// The factory provisions a dedicated NFT contract for each onboarded brand by
/// cloning the implementation passed to its constructor, and authorizes the
/// given marketplace on every clone.
#[derive(Args)]
pub struct DeployFactoryArgs {
    /// NFT implementation contract address in hex
    #[arg(short, long)]
    pub nft_implementation: String,

    /// Marketplace contract address in hex
    #[arg(short, long)]
    pub marketplace: String,

    /// Optional path to the deployments file in which to record the
    /// deployed factory address
    #[arg(short, long)]
    pub deployments_file: Option<String>,
}

impl Command {
    pub async fn run(self, client: Arc<impl Middleware>) -> Result<(), ScriptError> {
        match self {
            Command::DeployFactory(args) => deploy_factory(args, client).await,
        }
    }
}
