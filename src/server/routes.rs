//! HTTP routes.
//!
//! - `POST /api/verify-business` — `{ country, businessId }` → `VerificationResult`
//! - `GET  /api/jurisdictions` — supported jurisdictions and their aliases
//! - `GET  /health` — liveness probe

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{DefaultBodyLimit, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use super::error::AppError;
use crate::core::{
    Jurisdiction, VerificationRequest, VerificationResult, VerificationType, Verifier,
    ViesTransport,
};

const MAX_BODY_BYTES: usize = 64 * 1024;

/// Shared state handed to every handler.
pub struct AppState<T> {
    pub verifier: Arc<Verifier<T>>,
}

impl<T> Clone for AppState<T> {
    fn clone(&self) -> Self {
        Self {
            verifier: Arc::clone(&self.verifier),
        }
    }
}

/// One entry of `GET /api/jurisdictions`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JurisdictionInfo {
    pub country: String,
    pub verification_type: VerificationType,
    pub aliases: Vec<String>,
    /// Whether the check queries a live registry rather than the format only.
    pub registry_lookup: bool,
}

/// Build the application router around a verifier.
pub fn router<T: ViesTransport + 'static>(verifier: Arc<Verifier<T>>) -> Router {
    Router::new()
        .route("/api/verify-business", post(verify_business::<T>))
        .route("/api/jurisdictions", get(list_jurisdictions))
        .route("/health", get(health))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { verifier })
}

async fn verify_business<T: ViesTransport + 'static>(
    State(state): State<AppState<T>>,
    payload: Result<Json<VerificationRequest>, JsonRejection>,
) -> Result<Json<VerificationResult>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    Ok(Json(state.verifier.verify_request(&request).await))
}

async fn list_jurisdictions() -> Json<Vec<JurisdictionInfo>> {
    Json(
        Jurisdiction::ALL
            .iter()
            .map(|&j| JurisdictionInfo {
                country: j.label().to_string(),
                verification_type: j.verification_type(),
                aliases: j.aliases().map(String::from).collect(),
                registry_lookup: j == Jurisdiction::EuropeanUnion,
            })
            .collect(),
    )
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
