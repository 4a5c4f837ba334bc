//! Mock prediction endpoint.

use std::time::Duration;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ApiError;

/// Confidence tiers reported alongside a prediction.
const CONFIDENCE_LEVELS: [&str; 3] = ["low", "medium", "high"];

/// Simulated processing delay bounds, in seconds.
const MIN_DELAY_SECS: f64 = 0.1;
const MAX_DELAY_SECS: f64 = 0.5;

#[derive(Deserialize)]
pub struct PredictRequest {
    /// Arbitrary feature payload; accepted and discarded.
    pub input: Map<String, Value>,
}

#[derive(Serialize)]
pub struct PredictResponse {
    pub prediction: u8,
    pub confidence: &'static str,
}

/// POST /predict — returns a random classification after a random delay.
///
/// Sleeps for a uniform delay in [0.1, 0.5] s to simulate inference
/// latency, then draws the label and confidence tier independently.
/// A malformed body is rejected by the `Json` extractor before any of
/// this runs.
#[tracing::instrument(skip(payload))]
pub async fn predict(
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let Json(_request) = payload?;

    // thread_rng is not Send, so each draw stays on its own side of the await.
    let delay = rand::thread_rng().gen_range(MIN_DELAY_SECS..=MAX_DELAY_SECS);
    tokio::time::sleep(Duration::from_secs_f64(delay)).await;

    let (prediction, confidence) = {
        let mut rng = rand::thread_rng();
        let prediction: u8 = rng.gen_range(0..=1);
        let confidence = CONFIDENCE_LEVELS[rng.gen_range(0..CONFIDENCE_LEVELS.len())];
        (prediction, confidence)
    };

    tracing::debug!(delay_secs = delay, prediction, confidence, "served mock prediction");

    Ok(Json(PredictResponse {
        prediction,
        confidence,
    }))
}
