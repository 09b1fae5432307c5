use std::sync::Arc;
use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use crate::controller::{required_param, AppState};
use crate::helpers::api_error::{ApiError, Operation};
use crate::models::geocode::{GeocodeResponse, GeocodeResult, ReverseGeocodeResult};
use crate::repositories::google_maps_repo::GoogleMapsRepo;

const GEOCODING: Operation = Operation {
    name: "Geocoding",
    rejected: "Geocoding failed",
    internal: "Internal server error during geocoding",
};

const REVERSE_GEOCODING: Operation = Operation {
    name: "Reverse geocoding",
    rejected: "Reverse geocoding failed",
    internal: "Internal server error during reverse geocoding",
};

pub const MISSING_COORDINATES: &str = "Latitude and longitude parameters are required";

pub fn router(app_state: AppState) -> Router {
    let google_maps_repo = Arc::new(GoogleMapsRepo::new(
        app_state.http_client,
        &app_state.config,
    ));

    Router::new()
        .route("/geocode", get(geocode_address))
        .route("/reverse-geocode", get(reverse_geocode_coordinates))
        .route_layer(Extension(google_maps_repo))
}

#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct GeocodeParam {
    pub address: Option<String>,
}

pub async fn geocode_address(
    Extension(google_maps_repo): Extension<Arc<GoogleMapsRepo>>,
    query: Result<Query<GeocodeParam>, QueryRejection>,
) -> Result<Json<GeocodeResponse<GeocodeResult>>, ApiError> {
    let Query(query) = query?;
    let address = required_param(query.address, "Address parameter is required")?;

    let results = google_maps_repo
        .geocode(&address)
        .await
        .map_err(|e| ApiError::from_google_maps(&GEOCODING, e))?;

    Ok(Json(GeocodeResponse { results }))
}

#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct ReverseGeocodeParam {
    pub lat: Option<String>,
    pub lng: Option<String>,
}

pub async fn reverse_geocode_coordinates(
    Extension(google_maps_repo): Extension<Arc<GoogleMapsRepo>>,
    query: Result<Query<ReverseGeocodeParam>, QueryRejection>,
) -> Result<Json<GeocodeResponse<ReverseGeocodeResult>>, ApiError> {
    let Query(query) = query?;
    let lat = required_param(query.lat, MISSING_COORDINATES)?;
    let lng = required_param(query.lng, MISSING_COORDINATES)?;

    let results = google_maps_repo
        .reverse_geocode(&lat, &lng)
        .await
        .map_err(|e| ApiError::from_google_maps(&REVERSE_GEOCODING, e))?;

    Ok(Json(GeocodeResponse { results }))
}
