//! CLI entrypoint for the Trivia API
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use trivia_infrastructure::{ConfigLoader, FileConfig, FileLogFormat, SqliteTriviaStore};
use trivia_presentation::{AppState, Cli, build_router};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration, then let CLI flags win
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("failed to load configuration")?
    };
    apply_overrides(&cli, &mut config);

    if cli.show_config {
        ConfigLoader::print_config_sources();
        println!();
        println!("Effective configuration:");
        println!("{}", ConfigLoader::render(&config)?);
        return Ok(());
    }

    config.validate().context("invalid configuration")?;

    init_logging(&cli, &config)?;

    info!("Starting Trivia API");

    // === Dependency Injection ===
    // Create infrastructure adapter (SQLite store)
    let store = SqliteTriviaStore::open(&config.database.path, config.database.pool_size)
        .with_context(|| format!("failed to open database {}", config.database.path))?;
    store
        .ensure_schema()
        .context("failed to create database schema")?;
    if config.database.seed {
        let inserted = store
            .seed_sample_data()
            .context("failed to seed sample data")?;
        if inserted > 0 {
            info!("Loaded {} sample questions", inserted);
        }
    }

    let app = build_router(AppState::new(Arc::new(store)));

    let address = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    info!("Listening on http://{}", listener.local_addr()?);

    serve(listener, app).await?;

    info!("Shut down cleanly");
    Ok(())
}

fn apply_overrides(cli: &Cli, config: &mut FileConfig) {
    if let Some(host) = &cli.host {
        config.server.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(path) = &cli.database {
        config.database.path = path.clone();
    }
    if cli.seed {
        config.database.seed = true;
    }
}

/// Initialize logging.
///
/// `-v`/`-q` take precedence, then `RUST_LOG`, then `[logging] filter`.
fn init_logging(cli: &Cli, config: &FileConfig) -> Result<()> {
    let filter = match cli.log_filter_override() {
        Some(directive) => EnvFilter::new(directive),
        None => match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::try_new(&config.logging.filter)
                .with_context(|| format!("invalid log filter {:?}", config.logging.filter))?,
        },
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match config.logging.format {
        FileLogFormat::Pretty => builder.pretty().init(),
        FileLogFormat::Compact => builder.compact().init(),
        FileLogFormat::Json => builder.json().init(),
    }
    Ok(())
}

async fn serve(listener: tokio::net::TcpListener, app: axum::Router) -> Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl-C, shutting down"),
        Err(e) => {
            warn!("Could not listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
