//! grade-adjuster - time-based grade adjustment service
//!
//! # Usage
//!
//! ```bash
//! # Serve on the default address (127.0.0.1:5000)
//! cargo run --release
//!
//! # Custom bind address and config file
//! ./grade-adjuster --addr 0.0.0.0:8080 --config /etc/grade-adjuster/grade_config.toml
//!
//! # Query
//! curl 'http://127.0.0.1:5000/predict?grade=5&time_taken=30'
//! ```
//!
//! # Environment Variables
//!
//! - `GRADE_CONFIG`: Path to the TOML config file
//! - `GRADE_SERVER_ADDR`: Bind address (overridden by `--addr`)
//! - `GRADE_CORS_ORIGINS`: Comma-separated allowed CORS origins
//! - `RUST_LOG`: Logging level (default: info)

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use grade_adjuster::config::ServiceConfig;
use grade_adjuster::preprocessing::Preprocessor;
use grade_adjuster::{create_app, AppState};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "grade-adjuster")]
#[command(about = "Time-based grade adjustment HTTP service")]
#[command(version)]
struct CliArgs {
    /// Override the server address (default: "127.0.0.1:5000")
    #[arg(short, long, env = "GRADE_SERVER_ADDR", value_name = "HOST:PORT")]
    addr: Option<String>,

    /// Path to the TOML config file (takes precedence over GRADE_CONFIG)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}

// ============================================================================
// HTTP Server
// ============================================================================

async fn serve(addr: &str, state: AppState, cancel_token: CancellationToken) -> Result<()> {
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            cancel_token.cancelled().await;
            info!("[HttpServer] Received shutdown signal");
        })
        .await
        .map_err(|e| {
            error!("[HttpServer] Server error: {}", e);
            anyhow::anyhow!("HTTP server error: {}", e)
        })?;

    info!("[HttpServer] Graceful shutdown complete");
    Ok(())
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.log_json);

    let mut config = ServiceConfig::load(args.config.as_deref())
        .context("Failed to load service configuration")?;
    if let Some(addr) = args.addr {
        config.server.addr = addr;
    }
    config.validate().context("Invalid service configuration")?;

    if args.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    info!(
        fast_secs = config.rule.fast_threshold_secs,
        slow_secs = config.rule.slow_threshold_secs,
        min_grade = config.rule.min_grade,
        max_grade = config.rule.max_grade,
        "Adjustment rule"
    );

    let preprocessor = Preprocessor::load(&config.preprocessing.artifact_path)
        .context("Failed to load preprocessing artifact")?;
    let state = AppState::new(config.rule, preprocessor);

    // Graceful shutdown via Ctrl+C
    let cancel_token = CancellationToken::new();
    let shutdown_token = cancel_token.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        info!("Received Ctrl+C, initiating shutdown...");
        shutdown_token.cancel();
    });

    serve(&config.server.addr, state, cancel_token).await?;

    info!("grade-adjuster shutdown complete");
    Ok(())
}
