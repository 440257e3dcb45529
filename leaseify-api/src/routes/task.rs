//! Maintenance-task REST API Routes
//!
//! CRUD handlers plus the completion toggle used by the dashboard
//! checklist.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use leaseify_core::{MaintenanceTask, TaskId, TaskPriority};
use uuid::Uuid;

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
    types::{CreateTaskRequest, ListTasksRequest, ListTasksResponse, UpdateTaskRequest},
    validation::{HasUpdates, ValidateNonEmpty},
};

/// POST /api/v1/tasks - Open a new maintenance task
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/api/v1/tasks",
    tag = "Tasks",
    request_body = CreateTaskRequest,
    responses(
        (status = 201, description = "Task created successfully", body = MaintenanceTask),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 404, description = "Referenced property not found", body = ApiError),
    )
))]
pub async fn create_task(
    State(state): State<AppState>,
    Json(req): Json<CreateTaskRequest>,
) -> ApiResult<impl IntoResponse> {
    req.title.validate_non_empty("title")?;

    state
        .store
        .properties
        .get(req.property_id.as_uuid())
        .ok_or_else(|| ApiError::entity_not_found("Property", req.property_id))?;

    let now = Utc::now();
    let task = MaintenanceTask {
        task_id: TaskId::generate(),
        property_id: req.property_id,
        title: req.title,
        description: req.description,
        priority: req.priority.unwrap_or(TaskPriority::Medium),
        is_completed: false,
        created_at: now,
        updated_at: now,
    };

    state.store.tasks.insert(task.task_id.as_uuid(), task.clone());

    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /api/v1/tasks - List maintenance tasks with filters
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/api/v1/tasks",
    tag = "Tasks",
    params(
        ("property_id" = Option<String>, Query, description = "Filter by property ID"),
        ("include_completed" = Option<bool>, Query, description = "When false, completed tasks are filtered out"),
    ),
    responses(
        (status = 200, description = "List of tasks", body = ListTasksResponse),
    )
))]
pub async fn list_tasks(
    State(state): State<AppState>,
    Query(params): Query<ListTasksRequest>,
) -> ApiResult<impl IntoResponse> {
    let mut tasks = state.store.tasks.list();

    if let Some(property_id) = params.property_id {
        tasks.retain(|t| t.property_id == property_id);
    }
    if params.include_completed == Some(false) {
        tasks.retain(|t| !t.is_completed);
    }

    let total = tasks.len() as i32;
    Ok(Json(ListTasksResponse { tasks, total }))
}

/// GET /api/v1/tasks/{id} - Get task by ID
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/api/v1/tasks/{id}",
    tag = "Tasks",
    params(("id" = Uuid, Path, description = "Task ID")),
    responses(
        (status = 200, description = "Task details", body = MaintenanceTask),
        (status = 404, description = "Task not found", body = ApiError),
    )
))]
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let task = state
        .store
        .tasks
        .get(id)
        .ok_or_else(|| ApiError::entity_not_found("MaintenanceTask", id))?;

    Ok(Json(task))
}

/// PATCH /api/v1/tasks/{id} - Update task
#[cfg_attr(feature = "openapi", utoipa::path(
    patch,
    path = "/api/v1/tasks/{id}",
    tag = "Tasks",
    request_body = UpdateTaskRequest,
    params(("id" = Uuid, Path, description = "Task ID")),
    responses(
        (status = 200, description = "Task updated successfully", body = MaintenanceTask),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 404, description = "Task not found", body = ApiError),
    )
))]
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateTaskRequest>,
) -> ApiResult<impl IntoResponse> {
    req.validate_has_updates()?;
    if let Some(ref title) = req.title {
        title.validate_non_empty("title")?;
    }

    let task = state.store.tasks.update(id, |t| {
        if let Some(title) = req.title {
            t.title = title;
        }
        if let Some(description) = req.description {
            t.description = Some(description);
        }
        if let Some(priority) = req.priority {
            t.priority = priority;
        }
        if let Some(is_completed) = req.is_completed {
            t.is_completed = is_completed;
        }
        t.updated_at = Utc::now();
    })?;

    Ok(Json(task))
}

/// POST /api/v1/tasks/{id}/toggle - Flip a task's completion flag
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/api/v1/tasks/{id}/toggle",
    tag = "Tasks",
    params(("id" = Uuid, Path, description = "Task ID")),
    responses(
        (status = 200, description = "Task toggled", body = MaintenanceTask),
        (status = 404, description = "Task not found", body = ApiError),
    )
))]
pub async fn toggle_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let task = state.store.tasks.update(id, |t| {
        t.is_completed = !t.is_completed;
        t.updated_at = Utc::now();
    })?;

    Ok(Json(task))
}

/// DELETE /api/v1/tasks/{id} - Delete task
#[cfg_attr(feature = "openapi", utoipa::path(
    delete,
    path = "/api/v1/tasks/{id}",
    tag = "Tasks",
    params(("id" = Uuid, Path, description = "Task ID")),
    responses(
        (status = 204, description = "Task deleted successfully"),
        (status = 404, description = "Task not found", body = ApiError),
    )
))]
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state.store.tasks.remove(id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Create the task routes router.
pub fn create_router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/", axum::routing::post(create_task))
        .route("/", axum::routing::get(list_tasks))
        .route("/:id", axum::routing::get(get_task))
        .route("/:id", axum::routing::patch(update_task))
        .route("/:id", axum::routing::delete(delete_task))
        .route("/:id/toggle", axum::routing::post(toggle_task))
}
