//! Sketch classifier web service - Main entry point
//!
//! Serves the drawing and guessing-game pages, classifies submitted canvas
//! drawings with a pre-trained ONNX model, and tracks game sessions in
//! memory.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use qdc_core::{LabelSet, ModelStore};
use qdc_web::api::{self, AppContext};
use qdc_web::config::{ServiceConfig, TomlConfig};
use qdc_web::sessions::{spawn_eviction_task, SessionRegistry};
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for qdc-web
#[derive(Parser, Debug)]
#[command(name = "qdc-web")]
#[command(about = "Sketch classifier web service")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "QDC_PORT")]
    port: Option<u16>,

    /// Path to the ONNX model artifact
    #[arg(short, long, env = "QDC_MODEL_PATH")]
    model: Option<PathBuf>,

    /// Path to the JSON class label file
    #[arg(short, long, env = "QDC_LABELS_PATH")]
    labels: Option<PathBuf>,

    /// Optional TOML config file
    #[arg(short, long, env = "QDC_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "qdc_web=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let toml_config = args
        .config
        .as_deref()
        .map(TomlConfig::load)
        .unwrap_or_default();
    let config = ServiceConfig::resolve(&toml_config, args.port, args.model, args.labels);

    info!("Starting sketch classifier service on port {}", config.port);

    // Load labels and model. Neither failure is fatal: the service starts
    // degraded and the affected endpoints return errors instead.
    let labels = match LabelSet::load(&config.labels_path) {
        Ok(labels) => Arc::new(labels),
        Err(e) => {
            warn!("Class labels unavailable: {}", e);
            Arc::new(LabelSet::from_vec(Vec::new()))
        }
    };
    let model = Arc::new(ModelStore::load(&config.model_path));

    // Session registry with background eviction
    let sessions = Arc::new(SessionRegistry::with_ttl(config.session_ttl));
    let _eviction = spawn_eviction_task(Arc::clone(&sessions), config.eviction_interval);

    let ctx = AppContext {
        model,
        labels,
        sessions,
    };
    let app = api::create_router(ctx);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Starting HTTP server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
