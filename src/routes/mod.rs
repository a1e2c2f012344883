//! HTTP surface. Handlers only translate between JSON and the services.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use log::{error, warn};
use serde_json::json;

use crate::{error::ServiceError, AppState};

mod devices;
mod readings;
mod users;

/// Build the service router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/data", post(readings::save_reading))
        .route("/analysis/:device_id", get(readings::analyze_device))
        .route("/devices", get(devices::list_devices))
        .route("/users", post(users::register_user))
        .route("/user-analysis/:user_id", get(users::analyze_user))
        .with_state(state)
}

fn message(text: &str) -> Response {
    Json(json!({ "message": text })).into_response()
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServiceError::Validation(_) => {
                warn!("Rejected request: {self}");
                StatusCode::BAD_REQUEST
            }
            ServiceError::Storage(_) => {
                error!("Request failed: {self}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
