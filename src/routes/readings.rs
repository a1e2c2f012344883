use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    analysis::DeviceAnalysis,
    db::TimeRange,
    error::ServiceError,
    ingest::{IngestReceipt, ReadingInput},
    AppState,
};

use super::message;

const NO_DATA_MESSAGE: &str = "no data";

/// `POST /data`
pub async fn save_reading(
    State(state): State<AppState>,
    payload: Result<Json<ReadingInput>, JsonRejection>,
) -> Result<Json<IngestReceipt>, ServiceError> {
    let Json(input) = payload.map_err(|rejection| ServiceError::Validation(rejection.body_text()))?;
    let receipt = state.ingestor.ingest(input).await?;
    Ok(Json(receipt))
}

/// `GET /analysis/:device_id?start=..&end=..`
pub async fn analyze_device(
    State(state): State<AppState>,
    Path(device_id): Path<String>,
    query: Result<Query<TimeRange>, QueryRejection>,
) -> Result<Response, ServiceError> {
    let Query(range) = query.map_err(|rejection| ServiceError::Validation(rejection.body_text()))?;
    let response = match state.analyzer.analyze_device(&device_id, &range).await? {
        DeviceAnalysis::Stats(summary) => Json(summary).into_response(),
        DeviceAnalysis::NoData => message(NO_DATA_MESSAGE),
    };
    Ok(response)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use super::*;
    use crate::routes::test_support::{body_json, state};

    fn reading(device_id: &str, x: f64, y: f64, z: f64) -> Result<Json<ReadingInput>, JsonRejection> {
        Ok(Json(ReadingInput {
            device_id: device_id.to_string(),
            x,
            y,
            z,
        }))
    }

    #[tokio::test]
    async fn test_save_reading_acknowledges() {
        let (_dir, _db, state) = state();

        let Json(receipt) = save_reading(State(state), reading("d1", 1.0, 2.0, 3.0))
            .await
            .unwrap();

        assert_eq!(receipt.message, "saved");
        assert!(receipt.timestamp.ends_with('Z'));
    }

    #[tokio::test]
    async fn test_save_reading_rejects_empty_device() {
        let (_dir, _db, state) = state();

        let response = save_reading(State(state), reading("", 1.0, 2.0, 3.0))
            .await
            .unwrap_err()
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_analyze_device_returns_stats() {
        let (_dir, _db, state) = state();
        for (x, y, z) in [(1.0, 2.0, 3.0), (0.0, 0.0, 1.0)] {
            save_reading(State(state.clone()), reading("d1", x, y, z))
                .await
                .unwrap();
        }

        let response = analyze_device(
            State(state),
            Path("d1".to_string()),
            Ok(Query(TimeRange::unbounded())),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "min": 1.0, "max": 6.0, "count": 2, "sum": 7.0, "median": 3.5 })
        );
    }

    #[tokio::test]
    async fn test_analyze_device_without_data() {
        let (_dir, _db, state) = state();

        let response = analyze_device(
            State(state),
            Path("unknown".to_string()),
            Ok(Query(TimeRange::since("2024-01-01"))),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "message": "no data" }));
    }
}
