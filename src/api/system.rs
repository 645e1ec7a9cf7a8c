use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::{debug, error, info, warn};
use utoipa::ToSchema;

/// Severity accepted from the frontend logger; anything else is rejected at
/// deserialization.
#[derive(Debug, Clone, Copy, Default, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
}

fn default_message() -> String {
    "Frontend log".to_string()
}

/// Typed replacement for the frontend's free-form log payload: known fields
/// with defaults, everything else captured as structured context.
#[derive(Debug, Deserialize, ToSchema)]
pub struct FrontendLogEntry {
    #[serde(default)]
    pub level: LogLevel,

    #[serde(default = "default_message")]
    #[schema(example = "Navigation failed")]
    pub message: String,

    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub context: Map<String, Value>,
}

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = Object, example = json!({"status": "ok"}))
    ),
    tag = "System"
)]
pub async fn health_check() -> impl Responder {
    debug!("Health check requested");
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

/// Receive frontend logs for centralized aggregation
#[utoipa::path(
    post,
    path = "/api/logs",
    request_body = FrontendLogEntry,
    responses(
        (status = 200, description = "Log entry forwarded", body = Object, example = json!({"success": true}))
    ),
    tag = "System"
)]
pub async fn receive_frontend_log(entry: web::Json<FrontendLogEntry>) -> impl Responder {
    let FrontendLogEntry {
        level,
        message,
        context,
    } = entry.into_inner();

    match level {
        LogLevel::Error => error!(context = ?context, "[frontend] {}", message),
        LogLevel::Warn => warn!(context = ?context, "[frontend] {}", message),
        LogLevel::Info => info!(context = ?context, "[frontend] {}", message),
        LogLevel::Debug => debug!(context = ?context, "[frontend] {}", message),
    }

    HttpResponse::Ok().json(json!({ "success": true }))
}
