use std::sync::Arc;
use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::controller::geocode_controller::MISSING_COORDINATES;
use crate::controller::{optional_param, parse_radius, required_param, AppState};
use crate::helpers::api_error::{ApiError, Operation};
use crate::models::place::NearbySearchResponse;
use crate::repositories::google_maps_repo::GoogleMapsRepo;

const PLACES_SEARCH: Operation = Operation {
    name: "Places search",
    rejected: "Places search failed",
    internal: "Internal server error during places search",
};

const AUTOCOMPLETE: Operation = Operation {
    name: "Autocomplete",
    rejected: "Autocomplete failed",
    internal: "Internal server error during autocomplete",
};

/// Mounted under `/places`.
pub fn router(app_state: AppState) -> Router {
    let google_maps_repo = Arc::new(GoogleMapsRepo::new(
        app_state.http_client,
        &app_state.config,
    ));

    Router::new()
        .route("/nearby", get(search_nearby_places))
        .route("/autocomplete", get(autocomplete_places))
        .route_layer(Extension(google_maps_repo))
}

#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct NearbySearchParam {
    pub lat: Option<String>,
    pub lng: Option<String>,
    pub radius: Option<String>,
    #[serde(rename = "type")]
    pub place_type: Option<String>,
}

pub async fn search_nearby_places(
    Extension(google_maps_repo): Extension<Arc<GoogleMapsRepo>>,
    query: Result<Query<NearbySearchParam>, QueryRejection>,
) -> Result<Json<NearbySearchResponse>, ApiError> {
    let Query(query) = query?;
    let lat = required_param(query.lat, MISSING_COORDINATES)?;
    let lng = required_param(query.lng, MISSING_COORDINATES)?;
    let radius = parse_radius(query.radius)?;
    let place_type = optional_param(query.place_type);

    let places = google_maps_repo
        .nearby_search(&lat, &lng, radius, place_type.as_deref())
        .await
        .map_err(|e| ApiError::from_google_maps(&PLACES_SEARCH, e))?;

    Ok(Json(places))
}

#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct AutocompleteParam {
    pub input: Option<String>,
    pub lat: Option<String>,
    pub lng: Option<String>,
    pub radius: Option<String>,
}

pub async fn autocomplete_places(
    Extension(google_maps_repo): Extension<Arc<GoogleMapsRepo>>,
    query: Result<Query<AutocompleteParam>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let Query(query) = query?;
    let input = required_param(query.input, "Input parameter is required")?;
    let location = match (optional_param(query.lat), optional_param(query.lng)) {
        (Some(lat), Some(lng)) => Some((lat, lng)),
        (None, None) => None,
        _ => return Err(ApiError::validation("Latitude and longitude must be provided together")),
    };
    let radius = parse_radius(query.radius)?;

    let predictions = google_maps_repo
        .autocomplete(
            &input,
            location.as_ref().map(|(lat, lng)| (lat.as_str(), lng.as_str())),
            radius,
        )
        .await
        .map_err(|e| ApiError::from_google_maps(&AUTOCOMPLETE, e))?;

    Ok(Json(predictions))
}
