//! Task HTTP routes.
//!
//! Each handler performs exactly one storage call and maps the result to a
//! JSON response. The index page and its script are compiled into the binary.
//! A `null` body is treated like `{}`.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use log::{debug, info};
use serde::Serialize;

use crate::error::ApiError;
use crate::model::{NewTask, Task, TaskPatch};
use crate::store::Store;

const INDEX_HTML: &str = include_str!("../templates/index.html");
const APP_JS: &str = include_str!("../static/app.js");

#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Store,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    fn new(message: &'static str) -> Json<Self> {
        Json(Self { message })
    }
}

pub fn task_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/static/app.js", get(app_js_handler))
        .route("/tasks", get(list_tasks_handler).post(create_task_handler))
        .route(
            "/tasks/{id}",
            get(get_task_handler)
                .put(update_task_handler)
                .delete(delete_task_handler),
        )
        .with_state(state)
}

async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn app_js_handler() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/javascript; charset=utf-8")], APP_JS)
}

async fn list_tasks_handler(State(state): State<AppState>) -> Result<Json<Vec<Task>>, ApiError> {
    Ok(Json(state.store.list().await?))
}

async fn get_task_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Task>, ApiError> {
    match state.store.get(id).await? {
        Some(task) => Ok(Json(task)),
        None => {
            debug!("task {id} not found");
            Err(ApiError::NotFound)
        }
    }
}

async fn create_task_handler(
    State(state): State<AppState>,
    Json(task): Json<Option<NewTask>>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let id = state.store.create(task.unwrap_or_default()).await?;
    info!("created task {id}");
    Ok((StatusCode::CREATED, MessageResponse::new("Task created")))
}

async fn update_task_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<Option<TaskPatch>>,
) -> Result<Json<MessageResponse>, ApiError> {
    if state.store.update(id, patch.unwrap_or_default()).await?.is_none() {
        debug!("update of missing task {id}");
        return Err(ApiError::NotFound);
    }
    info!("updated task {id}");
    Ok(MessageResponse::new("Updated"))
}

async fn delete_task_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let removed = state.store.delete(id).await?;
    info!("deleted task {id} ({removed} row(s))");
    Ok(MessageResponse::new("Deleted"))
}
