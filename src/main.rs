use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hero_counters::api::{build_app, state::AppState};
use hero_counters::config::AppConfig;
use hero_counters::lookup::{load_counters, load_names, LookupError};
use hero_counters::messages::{
    COUNTER_SOURCE_UNAVAILABLE, ENTER_HERO_NAME, HERO_LIST_UNAVAILABLE, HERO_NOT_FOUND,
    NO_COUNTERS_YET,
};
use hero_counters::storage::HeroStore;

#[derive(Parser)]
#[command(name = "hero-counters")]
#[command(about = "Look up which heroes counter a hero, ranked by win rate")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: PathBuf,

    /// Hero dataset path (overrides config)
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Keep the parsed dataset in memory until the file changes
    #[arg(long)]
    cache: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        /// Bind address
        #[arg(long)]
        host: Option<String>,

        /// Port number
        #[arg(long)]
        port: Option<u16>,

        /// Directory of hero images to serve
        #[arg(long)]
        static_dir: Option<PathBuf>,

        /// Log all HTTP requests
        #[arg(long)]
        access_log: bool,
    },

    /// List hero names and images
    Names {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the heroes that counter NAME
    Counters {
        name: String,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config from {:?}", cli.config))?;
    if let Some(data_file) = cli.data_file {
        config.data_file = data_file;
    }
    if cli.cache {
        config.cache_dataset = true;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::debug!("Starting hero-counters v{}", env!("CARGO_PKG_VERSION"));

    let store = HeroStore::new(&config.storage());

    match cli.command {
        Commands::Serve {
            host,
            port,
            static_dir,
            access_log,
        } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if static_dir.is_some() {
                config.server.static_dir = static_dir;
            }
            config.validate()?;

            tracing::info!(
                "Serving heroes from {:?} (cache: {})",
                store.path(),
                store.is_cached()
            );
            let app = build_app(AppState::new(store), &config.server, access_log)?;
            let addr = format!("{}:{}", config.server.host, config.server.port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Listening on http://{}", addr);
            axum::serve(listener, app).await?;
        }
        Commands::Names { json } => {
            let names = load_names(&store).await.context(HERO_LIST_UNAVAILABLE)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&names)?);
            } else {
                for entry in &names {
                    println!("{:<24} {}", entry.name, entry.image);
                }
            }
        }
        Commands::Counters { name, json } => {
            let target = name.trim();
            if target.is_empty() {
                bail!(ENTER_HERO_NAME);
            }

            let counters = match load_counters(&store, target).await {
                Ok(counters) => counters,
                Err(LookupError::TargetNotFound(_)) => bail!(HERO_NOT_FOUND),
                Err(LookupError::DataUnavailable(e)) => {
                    return Err(anyhow::Error::new(e).context(COUNTER_SOURCE_UNAVAILABLE));
                }
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&counters)?);
            } else if counters.is_empty() {
                println!("{}", NO_COUNTERS_YET);
            } else {
                println!("{:<4} {:<24} {:<16} {:>9}  Image", "#", "Hero", "Type", "Win rate");
                for (rank, counter) in counters.iter().enumerate() {
                    println!(
                        "{:<4} {:<24} {:<16} {:>9}  {}",
                        rank + 1,
                        counter.name,
                        counter.hero_type,
                        counter.win_rate,
                        counter.image
                    );
                }
            }
        }
    }

    Ok(())
}
