use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{analysis::UserAnalysis, error::ServiceError, AppState};

use super::message;

const NO_DEVICES_MESSAGE: &str = "no devices";
const NO_DATA_MESSAGE: &str = "no data for any device";

/// Body of `POST /users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    pub user_id: String,
    pub device_ids: Vec<String>,
}

/// `POST /users`
pub async fn register_user(
    State(state): State<AppState>,
    payload: Result<Json<RegisterUserRequest>, JsonRejection>,
) -> Result<Response, ServiceError> {
    let Json(request) =
        payload.map_err(|rejection| ServiceError::Validation(rejection.body_text()))?;
    let count = state
        .directory
        .register_user(&request.user_id, &request.device_ids)
        .await?;
    Ok(message(&format!(
        "registered {count} device(s) for user {}",
        request.user_id
    )))
}

/// `GET /user-analysis/:user_id`
pub async fn analyze_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Response, ServiceError> {
    let response = match state.analyzer.analyze_user(&user_id).await? {
        UserAnalysis::NoDevices => message(NO_DEVICES_MESSAGE),
        UserAnalysis::NoData => message(NO_DATA_MESSAGE),
        UserAnalysis::Devices(stats) => Json(stats).into_response(),
    };
    Ok(response)
}
