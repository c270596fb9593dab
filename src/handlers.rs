use crate::entries::{insert_entry, rollback_last, validate_entry};
use crate::errors::AppError;
use crate::models::{MessageResponse, ProjectSummary};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::summary::build_summary;
use crate::ui::render_index;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Html,
    Json,
};
use serde_json::Value;
use tracing::{error, info, warn};

pub async fn index() -> Html<&'static str> {
    Html(render_index())
}

pub async fn create_entry(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let body = payload.ok().map(|Json(body)| body);
    let entry = validate_entry(body.as_ref()).inspect_err(|err| warn!("rejected work entry: {err}"))?;

    let mut data = state.work_log.lock().await;
    let stored = insert_entry(&mut data, entry).clone();

    if let Err(err) = persist_data(&state.data_path, &data).await {
        rollback_last(&mut data);
        error!("error adding work entry: {}", err.message);
        return Err(AppError::storage("Failed to log work entry due to a server error"));
    }

    info!(
        id = stored.id,
        "entry added: {}, {}, {} hours",
        stored.project_number,
        stored.worker_name,
        stored.work_time_hours
    );

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Work entry logged successfully".to_string(),
        }),
    ))
}

pub async fn get_summary(State(state): State<AppState>) -> Result<Json<Vec<ProjectSummary>>, AppError> {
    let data = state.work_log.lock().await;
    let summary = build_summary(&data);
    info!("work summary retrieved: {} projects", summary.len());
    Ok(Json(summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entries::{insert_entry, validate_entry};
    use crate::models::AppData;
    use axum::response::IntoResponse;
    use serde_json::json;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("work_log_handlers_{}_{name}", std::process::id()));
        path
    }

    fn seeded_log() -> AppData {
        let mut data = AppData::default();
        let body = json!({ "project_number": "P1", "worker_name": "Dana", "work_time_hours": 2 });
        insert_entry(&mut data, validate_entry(Some(&body)).unwrap());
        data
    }

    #[tokio::test]
    async fn created_entry_is_stored() {
        let path = temp_path("created.json");
        let state = AppState::new(path.clone(), AppData::default());
        let body = json!({ "project_number": "P9", "worker_name": "Ola", "work_time_hours": 1.5 });

        let (status, Json(reply)) = create_entry(State(state.clone()), Ok(Json(body))).await.unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(reply.message, "Work entry logged successfully");
        assert_eq!(state.work_log.lock().await.entries.len(), 1);

        let _ = tokio::fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn failed_write_returns_500_and_rolls_back() {
        // A directory at the data path makes the final rename fail.
        let dir = temp_path("blocked_dir");
        tokio::fs::create_dir_all(&dir).await.unwrap();
        let before = seeded_log();
        let state = AppState::new(dir.clone(), before.clone());
        let body = json!({ "project_number": "P2", "worker_name": "Ola", "work_time_hours": 3 });

        let err = create_entry(State(state.clone()), Ok(Json(body))).await.unwrap_err();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let reply: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(reply, json!({ "error": "Failed to log work entry due to a server error" }));

        {
            let data = state.work_log.lock().await;
            assert_eq!(data.entries, before.entries);
            assert_eq!(data.next_id, before.next_id);
        }

        let Json(summary) = get_summary(State(state)).await.unwrap();
        let projects: Vec<&str> = summary.iter().map(|row| row.project_number.as_str()).collect();
        assert_eq!(projects, ["P1"]);

        let _ = tokio::fs::remove_dir(&dir).await;
    }

    #[tokio::test]
    async fn invalid_body_is_rejected_before_storage() {
        let state = AppState::new(temp_path("never_written.json"), AppData::default());
        let body = json!({ "project_number": "P1", "worker_name": "Dana", "work_time_hours": -1 });

        let err = create_entry(State(state.clone()), Ok(Json(body))).await.unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Work time must be a positive number");
        assert!(state.work_log.lock().await.entries.is_empty());
    }
}
