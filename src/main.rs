use anyhow::Result;
use snip::config::Config;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    init_tracing(&config);

    snip::server::run(config).await
}

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured log level. `LOG_FORMAT=json`
/// switches to JSON output for log aggregation setups.
fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    if config.log_format == "json" {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
