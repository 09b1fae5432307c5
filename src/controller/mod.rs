use std::net::SocketAddr;
use anyhow::Context;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use crate::config::Config;
use crate::helpers::api_error::ApiError;
use crate::helpers::handler_404::page_not_found_handler;

pub mod distance_matrix_controller;
pub mod geocode_controller;
pub mod health_check;
pub mod places_controller;
pub mod service_descriptor;


/// Shared by every router; the HTTP client's connection pool is the only state that
/// crosses requests.
#[derive(Clone)]
pub struct AppState {
    pub http_client: reqwest::Client,
    pub config: Config,
}

pub async fn serve(
    config: &Config,
) -> anyhow::Result<()> {
    let http_client = reqwest::Client::builder()
        .build()
        .context("Error building the Google Maps HTTP client")?;

    let app_state = AppState {
        http_client,
        config: config.clone(),
    };

    let application = router_endpoints(app_state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_methods([
                            Method::GET,
                            Method::POST,
                            Method::OPTIONS
                        ])
                        .allow_origin(allowed_origins(&config.origin_urls))
                        .allow_headers([CONTENT_TYPE])
                )
        );

    let address = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("GMaps Location Service listening on: {}", address);
    axum::Server::bind(&address)
        .serve(application.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Error spinning up the API server")
}

pub fn router_endpoints(app_state: AppState) -> Router {
    Router::new()
        .merge(service_descriptor::router())
        .merge(health_check::router())
        .merge(geocode_controller::router(app_state.clone()))
        .merge(distance_matrix_controller::router(app_state.clone()))
        .nest("/places", places_controller::router(app_state))
        .fallback(page_not_found_handler)
}

fn allowed_origins(origin_urls: &str) -> AllowOrigin {
    if origin_urls.trim() == "*" {
        return AllowOrigin::any();
    }

    let origins = origin_urls
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty() && *origin != "*")
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring invalid CORS origin {}: {}", origin, e);
                None
            }
        })
        .collect::<Vec<HeaderValue>>();

    AllowOrigin::list(origins)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal due to: {}", e);
        return std::future::pending().await;
    }
    info!("Shutdown signal received, draining in-flight requests");
}

/// Required query/body value; blank counts as absent.
pub fn required_param(value: Option<String>, message: &str) -> Result<String, ApiError> {
    optional_param(value).ok_or_else(|| ApiError::validation(message))
}

pub fn optional_param(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub fn parse_radius(value: Option<String>) -> Result<Option<u32>, ApiError> {
    match optional_param(value) {
        None => Ok(None),
        Some(raw) => match raw.trim().parse::<u32>() {
            Ok(radius) if radius > 0 => Ok(Some(radius)),
            _ => Err(ApiError::validation("Radius must be a positive integer")),
        },
    }
}
