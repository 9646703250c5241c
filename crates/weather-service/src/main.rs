//! Weather Service - HTTP API for city weather observations.
//!
//! Run with: `cargo run -p weather-service`

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use axum::Router;
use clap::{Parser, Subcommand, ValueEnum};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use weather_service::{AppState, Config, api, config::default_config_path};
use weather_store::{QueryEngine, QueryMode};

/// Weather Service - HTTP REST API for city weather observations.
#[derive(Parser, Debug)]
#[command(name = "weather-service")]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Path to configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Bind address (overrides config).
    #[arg(short, long, global = true)]
    bind: Option<String>,

    /// Query mode for current weather and history (overrides config).
    #[arg(short, long, global = true, value_enum)]
    query_mode: Option<QueryModeArg>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the service in the foreground (default behavior).
    Run,

    /// Write a default configuration file.
    InitConfig {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },

    /// Load and validate the configuration, then exit.
    CheckConfig,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum QueryModeArg {
    /// Bind caller values as parameters.
    Parameterized,
    /// Concatenate caller values into the query text.
    Raw,
}

impl From<QueryModeArg> for QueryMode {
    fn from(arg: QueryModeArg) -> Self {
        match arg {
            QueryModeArg::Parameterized => QueryMode::Parameterized,
            QueryModeArg::Raw => QueryMode::Raw,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    match args.command {
        Some(Command::InitConfig { force }) => init_config(args.config, force),
        Some(Command::CheckConfig) => check_config(&args),
        Some(Command::Run) | None => run_server(args).await,
    }
}

fn init_config(path: Option<PathBuf>, force: bool) -> anyhow::Result<()> {
    let path = path.unwrap_or_else(default_config_path);
    if path.exists() && !force {
        anyhow::bail!(
            "Config file {} already exists (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save(&path)?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}

fn check_config(args: &Args) -> anyhow::Result<()> {
    let config = load_config(args)?;
    config.validate()?;
    println!("Configuration is valid");
    println!("  bind: {}", config.server.bind);
    println!("  query mode: {:?}", config.query.mode);
    Ok(())
}

fn load_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default().unwrap_or_default(),
    };

    // Override config with CLI args
    if let Some(bind) = &args.bind {
        config.server.bind = bind.clone();
    }
    if let Some(mode) = args.query_mode {
        config.query.mode = mode.into();
    }

    Ok(config)
}

async fn run_server(args: Args) -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("weather_service=info".parse()?)
                .add_directive("weather_store=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    let config = load_config(&args)?;
    config.validate()?;

    if config.query.mode == QueryMode::Raw {
        warn!("Query mode is raw: caller values are concatenated into query text");
    }

    let addr: SocketAddr = config
        .server
        .bind
        .parse()
        .with_context(|| format!("Invalid bind address {}", config.server.bind))?;

    let state = AppState::new(QueryEngine::new(), config);

    // Build the router
    let app = Router::new()
        .merge(api::router())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
