use axum::{extract::State, Json};

use crate::{error::ServiceError, AppState};

/// `GET /devices`
pub async fn list_devices(State(state): State<AppState>) -> Result<Json<Vec<String>>, ServiceError> {
    Ok(Json(state.directory.list_devices().await?))
}
