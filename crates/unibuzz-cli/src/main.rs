mod collect;
mod report;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "unibuzz")]
#[command(about = "Fetch logos and campus images for colleges and write a URL manifest")]
struct Cli {
    /// Restrict the run to a single college (by id from the records file)
    #[arg(long)]
    college: Option<String>,

    /// Load and validate records, print what would be fetched, and exit
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Nothing else happens until the credential is known to be present.
    let config = unibuzz_core::load_app_config()
        .context("configuration error: set BING_API_KEY in the environment or a .env file")?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    tracing::debug!(?config, "configuration loaded");

    collect::run_collect(&config, cli.college.as_deref(), cli.dry_run).await
}
