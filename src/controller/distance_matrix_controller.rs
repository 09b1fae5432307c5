use std::sync::Arc;
use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::controller::{optional_param, AppState};
use crate::helpers::api_error::{ApiError, Operation};
use crate::repositories::google_maps_repo::GoogleMapsRepo;

const DISTANCE_MATRIX: Operation = Operation {
    name: "Distance matrix",
    rejected: "Distance matrix calculation failed",
    internal: "Internal server error during distance matrix calculation",
};

pub const DEFAULT_TRAVEL_MODE: &str = "driving";

pub fn router(app_state: AppState) -> Router {
    let google_maps_repo = Arc::new(GoogleMapsRepo::new(
        app_state.http_client,
        &app_state.config,
    ));

    Router::new()
        .route("/distance-matrix", post(calculate_distance_matrix))
        .route_layer(Extension(google_maps_repo))
}

#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct DistanceMatrixRequest {
    pub origins: Option<Vec<String>>,
    pub destinations: Option<Vec<String>>,
    pub mode: Option<String>,
}

pub async fn calculate_distance_matrix(
    Extension(google_maps_repo): Extension<Arc<GoogleMapsRepo>>,
    body: Result<Json<DistanceMatrixRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = body?;
    let (origins, destinations) = match (body.origins, body.destinations) {
        (Some(origins), Some(destinations)) if !origins.is_empty() && !destinations.is_empty() => {
            (origins, destinations)
        }
        _ => return Err(ApiError::validation("Origins and destinations are required in request body")),
    };
    let mode = optional_param(body.mode).unwrap_or_else(|| DEFAULT_TRAVEL_MODE.to_string());

    let matrix = google_maps_repo
        .distance_matrix(&origins, &destinations, &mode)
        .await
        .map_err(|e| ApiError::from_google_maps(&DISTANCE_MATRIX, e))?;

    Ok(Json(matrix))
}
