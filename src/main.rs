use anyhow::Result;
use clap::Parser;
use login_gate::config::Config;
use login_gate::server;
use tracing_subscriber::EnvFilter;

/// Command-line overrides for environment configuration.
#[derive(Parser)]
#[command(name = "login-gate", version, about = "Presence-gated login service")]
struct Cli {
    /// Bind address (overrides LISTEN)
    #[arg(long)]
    listen: Option<String>,

    /// Redirect destination for accepted logins (overrides DESTINATION_PATH)
    #[arg(long)]
    destination: Option<String>,

    /// Log output format: text or json (overrides LOG_FORMAT)
    #[arg(long)]
    log_format: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(listen) = cli.listen {
        config.listen_addr = listen;
    }
    if let Some(destination) = cli.destination {
        config.destination_path = destination;
    }
    if let Some(log_format) = cli.log_format {
        config.log_format = log_format;
    }
    config.validate()?;

    init_tracing(&config);
    config.print_summary();

    server::run(config).await
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
