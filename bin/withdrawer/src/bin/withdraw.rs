//! Withdraw the deployed `Lock` contract's balance into the deployer account.
//!
//! The signing key is read from the environment variable the selected
//! network lists under `accounts` (`PRIVATE_KEY` in the shipped config).
//! A `.env` file in the working directory is loaded first.

use binding::lock::LOCK_ADDRESS;
use clap::Parser;
use config::ToolchainConfig;
use std::path::PathBuf;
use tracing::{debug, info};
use withdrawer::{chain::connect, run};

#[derive(Parser)]
#[command(name = "withdraw")]
#[command(about = "Withdraw the balance of the deployed Lock contract")]
struct Cli {
    /// Path to the toolchain configuration file
    #[arg(short, long, default_value = "hardhat.toml")]
    config: PathBuf,

    /// Network to run against (defaults to the config's default network)
    #[arg(short, long)]
    network: Option<String>,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Some(path) = config::load_dotenv(".")? {
        debug!("Loaded environment from {}", path.display());
    }
    let config = ToolchainConfig::from_file(&cli.config)?;
    let network = config.network(cli.network.as_deref())?;

    info!("Loaded config:");
    info!("  Network: {}", network.name);
    info!("  RPC URL: {}", network.url.as_deref().unwrap_or("<none>"));
    info!("  Chain ID: {:?}", network.chain_id);
    debug!(
        solc = %config.solidity.version,
        optimizer = ?config.solidity.settings.optimizer,
        paths = ?config.resolved_paths(),
        "Compiler settings"
    );

    let chain = connect(&network).await?;

    let mut stdout = std::io::stdout();
    run(&chain, LOCK_ADDRESS, &mut stdout).await?;

    Ok(())
}
