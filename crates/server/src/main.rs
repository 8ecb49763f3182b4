use clap::Parser;
use clap::builder::BoolishValueParser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use warden_server::{ConfigOverrides, Warden, WardenConfig};

#[derive(Parser)]
#[command(name = "warden")]
#[command(about = "Trading-symbol and deal lifecycle manager", long_about = None)]
struct Args {
    /// Load configuration from JSON file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address, host:port or :port
    #[arg(long, env = "WARDEN_ADDR")]
    addr: Option<String>,

    /// Comma-separated operator user ids
    #[arg(long, env = "USER_OPERATORS_LIST")]
    operators: Option<String>,

    /// Comma-separated viewer user ids
    #[arg(long, env = "USER_VIEWERS_LIST")]
    viewers: Option<String>,

    /// Storage backend: memory or mongo
    #[arg(long, env = "WARDEN_STORAGE")]
    storage: Option<String>,

    /// MongoDB connection string
    #[arg(long, env = "MONGO_DSN")]
    mongo_uri: Option<String>,

    /// MongoDB database name
    #[arg(long, env = "MONGO_DB_NAME")]
    database: Option<String>,

    /// Reset storage and load the starter set at startup (true/false, 1/0, yes/no)
    #[arg(long, env = "MONGO_INIT_DB", value_parser = BoolishValueParser::new())]
    seed: Option<bool>,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            addr: self.addr.clone(),
            operators: self.operators.clone(),
            viewers: self.viewers.clone(),
            backend: self.storage.clone(),
            mongo_uri: self.mongo_uri.clone(),
            database: self.database.clone(),
            seed: self.seed,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warden_server=info,warden_storage=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            WardenConfig::from_file(path)?
        }
        None => {
            tracing::info!("Using default configuration");
            WardenConfig::default()
        }
    };
    let config = config.with_overrides(args.overrides())?;

    tracing::info!("Storage backend: {}", config.storage.backend);
    let warden = Warden::from_config(config).await?;

    tracing::info!("Starting Warden");
    tracing::info!("REST API: http://{}/api/v1/", warden.config.server.addr());
    tracing::info!("Available endpoints:");
    tracing::info!("  GET  /health");
    tracing::info!("  GET  /api/v1/symbols");
    tracing::info!("  POST /api/v1/symbols/{{symbol}}/{{prepare|start|stop|suspend|resume}}");
    tracing::info!("  GET  /api/v1/balances");
    tracing::info!("  GET  /api/v1/limits");
    tracing::info!("  PUT  /api/v1/limits");
    tracing::info!("  GET  /api/v1/deals/active?all=true");
    tracing::info!("  GET  /api/v1/deals/potential");
    tracing::info!("  POST /api/v1/deals/close");

    warden.run().await?;
    Ok(())
}
