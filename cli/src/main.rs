//! coinpay: submit asset transfers through a remote signer/executor.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use coinpay_types::{AssetType, SuiAddress};
use coinpay_wallet_core::{
    init_logging, ActiveAccount, CoinCache, ReconciliationTrigger, RpcClient, RpcResync,
    TransferRequest, TransferService, WalletConfig,
};

#[derive(Parser)]
#[command(name = "coinpay", about = "Wallet transfer client")]
struct Cli {
    /// Path to a TOML configuration file. CLI flags and env vars override it.
    #[arg(long, env = "COINPAY_CONFIG")]
    config: Option<PathBuf>,

    /// JSON-RPC endpoint of the signer/executor.
    #[arg(long, env = "COINPAY_RPC_URL")]
    rpc_url: Option<String>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "COINPAY_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "COINPAY_LOG_FORMAT")]
    log_format: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Send coins from the active account.
    Transfer {
        /// Sending account (becomes the active identity).
        #[arg(long, env = "COINPAY_ACCOUNT")]
        from: String,

        /// Recipient address.
        #[arg(long)]
        to: String,

        /// Asset type tag; defaults to the native fee asset.
        #[arg(long)]
        asset: Option<String>,

        /// Exact amount to send. Required unless --all is given.
        #[arg(long, required_unless_present = "all", conflicts_with = "all")]
        amount: Option<u64>,

        /// Send the whole native balance, net of gas.
        #[arg(long)]
        all: bool,

        /// Gas budget; defaults to the configured value.
        #[arg(long)]
        gas_budget: Option<u64>,
    },
    /// List coins owned by an account.
    Coins {
        #[arg(long, env = "COINPAY_ACCOUNT")]
        owner: String,

        #[arg(long)]
        asset: Option<String>,
    },
}

fn load_config(cli: &Cli) -> anyhow::Result<WalletConfig> {
    let mut config = match &cli.config {
        Some(path) => WalletConfig::from_toml_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => WalletConfig::default(),
    };
    if let Some(url) = &cli.rpc_url {
        config.rpc_url = url.clone();
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if let Some(format) = &cli.log_format {
        config.log_format = format.clone();
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_logging(config.log_format(), &config.log_level)?;

    let client = Arc::new(RpcClient::from_config(&config)?);
    tracing::debug!(rpc_url = client.url(), "rpc client ready");

    match cli.command {
        Command::Transfer {
            from,
            to,
            asset,
            amount,
            all,
            gas_budget,
        } => {
            let sender = SuiAddress::parse(from).context("invalid --from address")?;
            let account = Arc::new(ActiveAccount::with_address(sender.clone()));

            let coins = Arc::new(CoinCache::with_coins(
                client
                    .owned_coins(&sender, None)
                    .await
                    .context("fetching owned coins")?,
            ));

            let resync = Arc::new(RpcResync::new(
                Arc::clone(&client),
                account.clone(),
                Arc::clone(&coins),
            ));
            let (trigger, worker) = ReconciliationTrigger::spawn(resync);

            let service = TransferService::new(
                account,
                coins.clone(),
                client.clone(),
                trigger,
                config.native_asset.clone(),
            );

            let request = TransferRequest {
                asset_type: asset
                    .map(AssetType::new)
                    .unwrap_or_else(|| config.native_asset.clone()),
                amount: amount.unwrap_or(0),
                recipient: to,
                gas_budget: gas_budget.unwrap_or(config.default_gas_budget),
                spend_all: all,
            };

            let result = service.submit_transfer(request).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);

            // Let the post-transfer resync finish before exiting.
            drop(service);
            if let Err(e) = worker.await {
                tracing::warn!("reconciliation worker ended abnormally: {e}");
            }
            tracing::info!(coins = coins.len(), "local coin snapshot refreshed");
        }
        Command::Coins { owner, asset } => {
            let owner = SuiAddress::parse(owner).context("invalid --owner address")?;
            let asset = asset.map(AssetType::new);
            let coins = client.owned_coins(&owner, asset.as_ref()).await?;
            println!("{}", serde_json::to_string_pretty(&coins)?);
        }
    }

    Ok(())
}
