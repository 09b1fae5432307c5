use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use crate::config::Config;
use crate::models::geocode::{GeocodeResponse, GeocodeResult, ReverseGeocodeResult};
use crate::models::place::NearbySearchResponse;

pub const GEOCODE_PATH: &str = "/maps/api/geocode/json";
pub const NEARBY_SEARCH_PATH: &str = "/maps/api/place/nearbysearch/json";
pub const DISTANCE_MATRIX_PATH: &str = "/maps/api/distancematrix/json";
pub const AUTOCOMPLETE_PATH: &str = "/maps/api/place/autocomplete/json";

const STATUS_OK: &str = "OK";

#[derive(Debug, Error)]
pub enum GoogleMapsError {
    #[error("Google Maps API key is not configured")]
    MissingApiKey,
    #[error("Google Maps responded with status {status}")]
    Rejected {
        status: String,
        error_message: Option<String>,
    },
    #[error("request to Google Maps failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected Google Maps payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client for the handful of Google Maps web service operations the gateway proxies.
/// Every call is a single `GET` carrying the configured `key`.
pub struct GoogleMapsRepo {
    http_client: Client,
    base_url: String,
    api_key: Option<String>,
    default_radius: u32,
}

impl GoogleMapsRepo {
    pub fn new(
        http_client: Client,
        config: &Config,
    ) -> Self {
        Self {
            http_client,
            base_url: config.google_maps_base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key().map(str::to_string),
            default_radius: config.default_radius,
        }
    }

    async fn call<T: DeserializeOwned>(
        &self,
        path: &str,
        mut params: Vec<(&'static str, String)>,
    ) -> Result<T, GoogleMapsError> {
        let api_key = self.api_key
            .as_deref()
            .ok_or(GoogleMapsError::MissingApiKey)?;
        params.push(("key", api_key.to_string()));

        let body: Value = self.http_client
            .get(format!("{}{}", self.base_url, path))
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        check_status(&body)?;
        Ok(serde_json::from_value(body)?)
    }

    pub async fn geocode(
        &self,
        address: &str,
    ) -> Result<Vec<GeocodeResult>, GoogleMapsError> {
        let response: GeocodeResponse<GeocodeResult> = self
            .call(GEOCODE_PATH, vec![("address", address.to_string())])
            .await?;
        Ok(response.results)
    }

    pub async fn reverse_geocode(
        &self,
        lat: &str,
        lng: &str,
    ) -> Result<Vec<ReverseGeocodeResult>, GoogleMapsError> {
        let response: GeocodeResponse<ReverseGeocodeResult> = self
            .call(GEOCODE_PATH, vec![("latlng", format!("{},{}", lat, lng))])
            .await?;
        Ok(response.results)
    }

    pub async fn nearby_search(
        &self,
        lat: &str,
        lng: &str,
        radius: Option<u32>,
        place_type: Option<&str>,
    ) -> Result<NearbySearchResponse, GoogleMapsError> {
        let mut params = vec![
            ("location", format!("{},{}", lat, lng)),
            ("radius", radius.unwrap_or(self.default_radius).to_string()),
        ];
        if let Some(place_type) = place_type {
            params.push(("type", place_type.to_string()));
        }

        self.call(NEARBY_SEARCH_PATH, params).await
    }

    pub async fn distance_matrix(
        &self,
        origins: &[String],
        destinations: &[String],
        mode: &str,
    ) -> Result<Value, GoogleMapsError> {
        self.call(
            DISTANCE_MATRIX_PATH,
            vec![
                ("origins", origins.join("|")),
                ("destinations", destinations.join("|")),
                ("mode", mode.to_string()),
            ],
        ).await
    }

    /// `location` biases predictions towards a point; the radius only applies alongside it.
    pub async fn autocomplete(
        &self,
        input: &str,
        location: Option<(&str, &str)>,
        radius: Option<u32>,
    ) -> Result<Value, GoogleMapsError> {
        let mut params = vec![("input", input.to_string())];
        if let Some((lat, lng)) = location {
            params.push(("location", format!("{},{}", lat, lng)));
            params.push(("radius", radius.unwrap_or(self.default_radius).to_string()));
        }

        self.call(AUTOCOMPLETE_PATH, params).await
    }
}

/// Google reports failures in the body's `status` field, usually alongside HTTP 200.
fn check_status(body: &Value) -> Result<(), GoogleMapsError> {
    let status = body.get("status").and_then(Value::as_str);
    if status == Some(STATUS_OK) {
        return Ok(());
    }

    Err(GoogleMapsError::Rejected {
        status: status.unwrap_or("MISSING").to_string(),
        error_message: body
            .get("error_message")
            .and_then(Value::as_str)
            .map(str::to_string),
    })
}
