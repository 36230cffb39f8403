use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use topology_check::config::{load_config, CheckerConfig};
use topology_check::ConnectivityChecker;

#[derive(Parser)]
#[command(name = "topology-check")]
#[command(about = "Smoke-check the input/output servers of a running topology", long_about = None)]
struct Cli {
    /// Optional TOML config file; defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the input server endpoint.
    #[arg(long)]
    producer_url: Option<String>,

    /// Override the output server base URL.
    #[arg(long)]
    consumer_url: Option<String>,

    /// Override the number of producer trials.
    #[arg(long)]
    trials: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "topology_check=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => CheckerConfig::default(),
    };
    if let Some(url) = cli.producer_url {
        config.producer.endpoint = url;
    }
    if let Some(url) = cli.consumer_url {
        config.consumer.base_url = url;
    }
    if let Some(trials) = cli.trials {
        config.producer.trials = trials;
    }

    tracing::info!(
        producer_endpoint = %config.producer.endpoint,
        consumer_base_url = %config.consumer.base_url,
        trials = config.producer.trials,
        "Testing topology"
    );

    let checker = ConnectivityChecker::new(config)?;
    let report = checker.run().await;

    print!("{}", report.render());

    // Phase failures are reported in text only; the exit code stays 0.
    Ok(())
}
