use clap::Parser;
use scripts::{cli::Cli, errors::ScriptError, utils::setup_client};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let Cli {
        priv_key,
        rpc_url,
        command,
    } = Cli::parse();

    let client = setup_client(&priv_key, &rpc_url).await?;

    command.run(client).await
}
