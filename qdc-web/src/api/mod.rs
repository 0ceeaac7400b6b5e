//! HTTP API for the sketch classifier

pub mod handlers;
pub mod pages;

use axum::{
    routing::{get, post},
    Router,
};
use qdc_core::{LabelSet, ModelStore};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::sessions::SessionRegistry;

/// Application state shared across handlers. The model and label set are
/// immutable after startup; the session registry synchronizes internally.
#[derive(Clone)]
pub struct AppContext {
    pub model: Arc<ModelStore>,
    pub labels: Arc<LabelSet>,
    pub sessions: Arc<SessionRegistry>,
}

/// Create the API router
pub fn create_router(ctx: AppContext) -> Router {
    Router::new()
        // Front-end pages
        .route("/", get(pages::index_page))
        .route("/game", get(pages::game_page))
        // Health check
        .route("/health", get(handlers::health))
        // Classifier endpoints
        .route("/predict", post(handlers::predict))
        // Game endpoints
        .route("/get_random_class", get(handlers::get_random_class))
        .route("/submit_drawing", post(handlers::submit_drawing))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(ctx)
}
