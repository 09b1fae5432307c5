use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

pub fn router() -> Router {
    Router::new().route("/", get(get_service_descriptor))
}

#[derive(Serialize, Debug)]
pub struct EndpointDescriptor {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

#[derive(Serialize, Debug)]
pub struct ServiceDescriptor {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: &'static [EndpointDescriptor],
}

const ENDPOINTS: &[EndpointDescriptor] = &[
    EndpointDescriptor { method: "GET", path: "/health", description: "Health check" },
    EndpointDescriptor { method: "GET", path: "/geocode", description: "Geocode address to coordinates" },
    EndpointDescriptor { method: "GET", path: "/reverse-geocode", description: "Reverse geocode coordinates to address" },
    EndpointDescriptor { method: "GET", path: "/places/nearby", description: "Find places nearby" },
    EndpointDescriptor { method: "POST", path: "/distance-matrix", description: "Calculate distance/time matrix" },
    EndpointDescriptor { method: "GET", path: "/places/autocomplete", description: "Location autocomplete" },
];

async fn get_service_descriptor() -> Json<ServiceDescriptor> {
    Json(ServiceDescriptor {
        message: "GMaps Location Service",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: ENDPOINTS,
    })
}
