//! HTTP request handlers
//!
//! Thin glue over the core crate: decode the canvas image, run the
//! classifier, rank the output. Request fields are `Option` so that missing
//! fields surface as 400 responses with the service's error envelope, and
//! bodies are read through `ApiJson`, which maps extractor rejections
//! (malformed JSON, wrong-typed fields) to the same envelope.

use crate::api::AppContext;
use crate::error::{ApiError, ApiJson, ApiResult};
use axum::{extract::State, Json};
use qdc_core::{preprocess, rank, Prediction, TOP_K};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: String,
    module: String,
    version: String,
    model_loaded: bool,
    class_count: usize,
}

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    image_data: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    success: bool,
    predictions: Vec<Prediction>,
}

#[derive(Debug, Serialize)]
pub struct RandomClassResponse {
    success: bool,
    class_name: String,
    session_id: String,
}

#[derive(Debug, Deserialize)]
pub struct SubmitDrawingRequest {
    image_data: Option<String>,
    session_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SubmitDrawingResponse {
    success: bool,
    #[serde(rename = "match")]
    is_match: bool,
    predictions: Vec<Prediction>,
    target_class: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /health - Health check endpoint
pub async fn health(State(ctx): State<AppContext>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        module: "qdc-web".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model_loaded: ctx.model.is_available(),
        class_count: ctx.labels.len(),
    })
}

/// POST /predict - Classify a drawing and return the top-5 predictions
pub async fn predict(
    State(ctx): State<AppContext>,
    ApiJson(req): ApiJson<PredictRequest>,
) -> ApiResult<Json<PredictResponse>> {
    let image_data = req
        .image_data
        .ok_or_else(|| ApiError::BadRequest("No image data provided".to_string()))?;

    let predictions = run_classifier(&ctx, &image_data)?;

    Ok(Json(PredictResponse {
        success: true,
        predictions,
    }))
}

/// GET /get_random_class - Start a game round with a random target class
pub async fn get_random_class(
    State(ctx): State<AppContext>,
) -> ApiResult<Json<RandomClassResponse>> {
    let class_name = ctx
        .labels
        .choose_random()
        .ok_or_else(|| ApiError::Unavailable("class label set is not loaded".to_string()))?
        .to_string();

    let session_id = ctx.sessions.start(&class_name);
    info!("Started game session {} with target '{}'", session_id, class_name);

    Ok(Json(RandomClassResponse {
        success: true,
        class_name,
        session_id: session_id.to_string(),
    }))
}

/// POST /submit_drawing - Check a drawing against the session's target class
pub async fn submit_drawing(
    State(ctx): State<AppContext>,
    ApiJson(req): ApiJson<SubmitDrawingRequest>,
) -> ApiResult<Json<SubmitDrawingResponse>> {
    let image_data = req
        .image_data
        .ok_or_else(|| ApiError::BadRequest("No image data provided".to_string()))?;
    let session_id = req
        .session_id
        .ok_or_else(|| ApiError::BadRequest("No session id provided".to_string()))?;

    // Opportunistic cleanup alongside the background eviction task
    ctx.sessions.sweep();

    let session_id = Uuid::parse_str(&session_id)
        .map_err(|_| ApiError::BadRequest("Invalid or expired session".to_string()))?;
    let target_class = ctx
        .sessions
        .lookup(&session_id)
        .ok_or_else(|| ApiError::BadRequest("Invalid or expired session".to_string()))?;

    let predictions = run_classifier(&ctx, &image_data)?;
    let is_match = predictions
        .first()
        .map(|p| p.class == target_class)
        .unwrap_or(false);

    info!(
        "Session {}: target '{}', top prediction '{}', match={}",
        session_id,
        target_class,
        predictions.first().map(|p| p.class.as_str()).unwrap_or("-"),
        is_match
    );

    Ok(Json(SubmitDrawingResponse {
        success: true,
        is_match,
        predictions,
        target_class,
    }))
}

/// Normalize the canvas image, run inference, and rank the output.
fn run_classifier(ctx: &AppContext, image_data: &str) -> ApiResult<Vec<Prediction>> {
    let tensor = preprocess::decode_canvas_image(image_data)?;
    let probabilities = ctx.model.predict(tensor)?;
    let predictions = rank::top_k(&probabilities, &ctx.labels, TOP_K)?;
    Ok(predictions)
}
