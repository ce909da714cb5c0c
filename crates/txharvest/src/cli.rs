use std::path::PathBuf;

use clap::Parser;

/// Txharvest — rebuild a local transaction dataset by walking spend
/// references from one seed transaction.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Path to the seed transaction JSON document.
    #[arg(long)]
    pub seed: PathBuf,

    /// Output dataset path (JSONL; created if missing, appended otherwise).
    #[arg(long, default_value = "transactions.jsonl")]
    pub out: PathBuf,

    /// Transaction lookup API base URL.
    #[arg(
        long,
        default_value = "https://api.blockcypher.com/v1/btc/main",
        env = "TXHARVEST_API_URL"
    )]
    pub api_url: String,

    /// API token appended as a `token` query parameter on each request.
    #[arg(long, env = "TXHARVEST_API_TOKEN")]
    pub token: Option<String>,
}
