mod cli;

use clap::Parser;
use eyre::WrapErr;

use txharvest_core::source::HttpTxSource;
use txharvest_core::store::{self, JsonlStore};
use txharvest_core::Crawler;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .init();

    let seed = store::read_seed(&args.seed)
        .wrap_err_with(|| format!("load seed document from {}", args.seed.display()))?;
    tracing::info!(
        block_hash = seed.block_hash.as_deref().unwrap_or("not available"),
        "seed loaded"
    );

    let source = HttpTxSource::new(&args.api_url, args.token.as_deref());
    let mut dataset = JsonlStore::open(&args.out)
        .wrap_err_with(|| format!("open dataset file {}", args.out.display()))?;

    let mut crawler = Crawler::seeded(&seed);
    let report = crawler.run(&source, &mut dataset).await;

    println!();
    println!("  Crawl complete:");
    println!("    fetched:   {}", report.fetched);
    println!(
        "    persisted: {} -> {}",
        report.persisted,
        dataset.path().display()
    );
    if report.fetch_failures > 0 || report.store_failures > 0 {
        println!(
            "    failures:  {} fetch, {} store (see log)",
            report.fetch_failures, report.store_failures
        );
    }
    println!();

    Ok(())
}
