//! Task Endpoints
//! Mission: CRUD handlers for the task collection

use crate::{
    api::routes::{ApiError, AppState},
    models::{Task, TaskFields},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;

/// List all tasks - GET /tasks
pub async fn list_tasks(State(state): State<AppState>) -> Json<Vec<Task>> {
    Json(state.tasks.list())
}

/// Create a task - POST /tasks
///
/// Stamps `createdAt` and `updatedAt` with the same clock reading.
pub async fn create_task(
    State(state): State<AppState>,
    Json(fields): Json<TaskFields>,
) -> (StatusCode, Json<Task>) {
    let now = Utc::now();
    let task = state.tasks.insert_with(|id| Task::new(id, fields, now));
    (StatusCode::CREATED, Json(task))
}

/// Update a task - PUT /tasks/:id
///
/// Full replace of the mutable fields; refreshes `updatedAt`.
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(fields): Json<TaskFields>,
) -> Result<Json<Task>, ApiError> {
    let now = Utc::now();
    state
        .tasks
        .update_with(id, |task| task.apply(fields, now))
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// Delete a task - DELETE /tasks/:id
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    if state.tasks.remove(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TaskPriority, TaskStatus};

    fn test_state() -> AppState {
        AppState::new()
    }

    fn sample() -> TaskFields {
        TaskFields {
            title: "Restock shelves".to_string(),
            description: "Aisle 3".to_string(),
            status: TaskStatus::Assigned,
            priority: TaskPriority::High,
            due_date: None,
            assigned_to: "demo".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_stamps_both_timestamps_equal() {
        let state = test_state();

        let (status, Json(task)) = create_task(State(state), Json(sample())).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(task.id, 1);
        assert_eq!(task.created_at, task.updated_at);
    }

    #[tokio::test]
    async fn test_update_refreshes_updated_at_only() {
        let state = test_state();
        let (_, Json(created)) = create_task(State(state.clone()), Json(sample())).await;

        let before_update = Utc::now();
        let updated = update_task(
            State(state),
            Path(created.id),
            Json(TaskFields {
                status: TaskStatus::Completed,
                ..sample()
            }),
        )
        .await
        .unwrap();

        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.status, TaskStatus::Completed);
        assert!(updated.updated_at >= created.created_at);
        assert!(updated.updated_at >= before_update);
    }

    #[tokio::test]
    async fn test_update_missing_id_is_not_found() {
        let state = test_state();

        let result = update_task(State(state), Path(5), Json(sample())).await;
        assert!(matches!(result, Err(ApiError::NotFound)));
    }

    #[tokio::test]
    async fn test_task_ids_independent_from_products() {
        let state = test_state();
        state
            .products
            .insert_with(|id| crate::models::Product::new(id, Default::default()));

        let (_, Json(task)) = create_task(State(state), Json(sample())).await;
        assert_eq!(task.id, 1);
    }
}
