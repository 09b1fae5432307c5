use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use time::OffsetDateTime;

pub fn router() -> Router {
    Router::new().route("/health", get(get_health_check))
}

#[derive(Serialize, Debug)]
pub struct HealthStatus {
    pub status: &'static str,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

/// Liveness only, never touches Google Maps or the credential.
async fn get_health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthStatus {
            status: "OK",
            timestamp: OffsetDateTime::now_utc(),
        }),
    )
}
