use clap::Parser;

use usage_receiver::config::validation::validate_probe_config;
use usage_receiver::config::ConfigError;
use usage_receiver::observability::logging;
use usage_receiver::probe::{Probe, ProbeOutcome, TransactionUsage};
use usage_receiver::ProbeConfig;

#[derive(Parser)]
#[command(name = "usage-probe")]
#[command(about = "Send one synthetic usage payload to the test receiver", long_about = None)]
struct Cli {
    /// Receiver URL [default: http://localhost:8080/receiver]
    #[arg(short, long)]
    url: Option<String>,

    /// Request timeout in seconds [default: 10]
    #[arg(short, long)]
    timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    logging::init("usage_receiver=warn");

    let mut config = ProbeConfig::default();
    if let Some(url) = cli.url {
        config.url = url;
    }
    if let Some(timeout_secs) = cli.timeout_secs {
        config.timeout_secs = timeout_secs;
    }
    validate_probe_config(&config).map_err(ConfigError::Validation)?;

    println!("🧪 Testing usage data publisher connection");
    println!("{}", "=".repeat(50));

    let payload = TransactionUsage::sample();
    println!("📤 Sending test data to receiver...");

    let outcome = match Probe::new(&config) {
        Ok(probe) => {
            println!("🎯 URL: {}", probe.url());
            println!("📦 Data: {}", serde_json::to_string_pretty(&payload)?);
            probe.send(&payload).await
        }
        Err(e) => ProbeOutcome::Failed(e),
    };
    println!("{outcome}");

    Ok(())
}
