//! Task API endpoints
//!
//! RESTful API for the task CRUD operations.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use tareas_core::task::{Task, TaskRepository};
use tareas_core::Error;

use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub titulo: Option<String>,
    #[serde(default)]
    pub descripcion: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ListTasksResponse {
    pub tareas: Vec<Task>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct TaskMessageResponse {
    pub mensaje: String,
    pub tarea: Task,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub mensaje: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Map a store error onto its status code and JSON body.
fn error_response(err: Error) -> (StatusCode, Json<ErrorResponse>) {
    let status = match err {
        Error::EmptyTitle => StatusCode::BAD_REQUEST,
        Error::TaskNotFound(_) => StatusCode::NOT_FOUND,
    };
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /tareas - List all tasks
async fn list_tasks(
    State(state): State<AppState>,
) -> Result<Json<ListTasksResponse>, (StatusCode, Json<ErrorResponse>)> {
    let (tareas, total) = state.task_store().list().await.map_err(error_response)?;
    Ok(Json(ListTasksResponse { tareas, total }))
}

/// POST /tareas - Create a new task
///
/// The body is optional so that a missing or non-JSON body yields the same
/// 400 validation error as an empty title, instead of a framework rejection.
async fn create_task(
    State(state): State<AppState>,
    payload: Option<Json<CreateTaskRequest>>,
) -> Result<(StatusCode, Json<TaskMessageResponse>), (StatusCode, Json<ErrorResponse>)> {
    let (titulo, descripcion) = match payload {
        Some(Json(req)) => (req.titulo.unwrap_or_default(), req.descripcion),
        None => (String::new(), None),
    };

    let tarea = state
        .task_store()
        .create(&titulo, descripcion)
        .await
        .map_err(error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(TaskMessageResponse {
            mensaje: "Tarea creada exitosamente".to_string(),
            tarea,
        }),
    ))
}

/// PUT /tareas/{id}/completar - Mark a task as completed
async fn complete_task(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<TaskMessageResponse>, (StatusCode, Json<ErrorResponse>)> {
    let tarea = state
        .task_store()
        .complete(id)
        .await
        .map_err(error_response)?;

    Ok(Json(TaskMessageResponse {
        mensaje: "Tarea completada".to_string(),
        tarea,
    }))
}

/// DELETE /tareas/{id} - Delete a task
async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ErrorResponse>)> {
    state.task_store().delete(id).await.map_err(error_response)?;

    Ok(Json(MessageResponse {
        mensaje: "Tarea eliminada exitosamente".to_string(),
    }))
}

// ============================================================================
// Router
// ============================================================================

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tareas", get(list_tasks).post(create_task))
        .route("/tareas/{id}/completar", put(complete_task))
        .route("/tareas/{id}", delete(delete_task))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::state::AppState;

    fn app() -> axum::Router {
        super::router().with_state(AppState::new())
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn req(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn list_starts_empty() {
        let app = app();

        let response = app.oneshot(req("GET", "/tareas")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let payload = body_json(response).await;
        assert_eq!(payload["total"], 0);
        assert_eq!(payload["tareas"], json!([]));
    }

    #[tokio::test]
    async fn create_returns_201_with_task() {
        let app = app();

        let response = app
            .oneshot(post_json("/tareas", json!({"titulo": "Buy milk"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let payload = body_json(response).await;
        assert_eq!(payload["mensaje"], "Tarea creada exitosamente");
        assert_eq!(payload["tarea"]["id"], 1);
        assert_eq!(payload["tarea"]["titulo"], "Buy milk");
        assert_eq!(payload["tarea"]["descripcion"], "");
        assert_eq!(payload["tarea"]["completada"], false);
        assert!(payload["tarea"].get("fecha_creacion").is_some());
        assert!(payload["tarea"].get("fecha_completada").is_none());
    }

    #[tokio::test]
    async fn create_with_empty_body_is_rejected() {
        let app = app();

        let response = app
            .clone()
            .oneshot(post_json("/tareas", json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let payload = body_json(response).await;
        assert_eq!(payload["error"], "El título es obligatorio");

        // Store must be untouched
        let list = app.oneshot(req("GET", "/tareas")).await.unwrap();
        let payload = body_json(list).await;
        assert_eq!(payload["total"], 0);
    }

    #[tokio::test]
    async fn create_with_missing_body_is_rejected() {
        let app = app();

        let response = app.oneshot(req("POST", "/tareas")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let payload = body_json(response).await;
        assert_eq!(payload["error"], "El título es obligatorio");
    }

    #[tokio::test]
    async fn complete_unknown_id_is_404() {
        let app = app();

        let response = app
            .oneshot(req("PUT", "/tareas/42/completar"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let payload = body_json(response).await;
        assert_eq!(payload["error"], "Tarea no encontrada");
    }

    #[tokio::test]
    async fn delete_unknown_id_is_404() {
        let app = app();

        let response = app.oneshot(req("DELETE", "/tareas/42")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let payload = body_json(response).await;
        assert_eq!(payload["error"], "Tarea no encontrada");
    }

    #[tokio::test]
    async fn full_task_lifecycle() {
        let app = app();

        // Create two tasks
        let first = app
            .clone()
            .oneshot(post_json("/tareas", json!({"titulo": "Buy milk"})))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::CREATED);
        let first = body_json(first).await;
        assert_eq!(first["tarea"]["id"], 1);
        assert_eq!(first["tarea"]["completada"], false);

        let second = app
            .clone()
            .oneshot(post_json(
                "/tareas",
                json!({"titulo": "Walk dog", "descripcion": "evening"}),
            ))
            .await
            .unwrap();
        let second = body_json(second).await;
        assert_eq!(second["tarea"]["id"], 2);
        assert_eq!(second["tarea"]["descripcion"], "evening");

        // List shows both
        let list = app.clone().oneshot(req("GET", "/tareas")).await.unwrap();
        let list = body_json(list).await;
        assert_eq!(list["total"], 2);

        // Complete the first
        let completed = app
            .clone()
            .oneshot(req("PUT", "/tareas/1/completar"))
            .await
            .unwrap();
        assert_eq!(completed.status(), StatusCode::OK);
        let completed = body_json(completed).await;
        assert_eq!(completed["mensaje"], "Tarea completada");
        assert_eq!(completed["tarea"]["completada"], true);
        assert!(completed["tarea"].get("fecha_completada").is_some());

        // Delete the second
        let deleted = app.clone().oneshot(req("DELETE", "/tareas/2")).await.unwrap();
        assert_eq!(deleted.status(), StatusCode::OK);
        let deleted = body_json(deleted).await;
        assert_eq!(deleted["mensaje"], "Tarea eliminada exitosamente");

        let list = app.clone().oneshot(req("GET", "/tareas")).await.unwrap();
        let list = body_json(list).await;
        assert_eq!(list["total"], 1);

        // Deleting it again is a 404
        let again = app.oneshot(req("DELETE", "/tareas/2")).await.unwrap();
        assert_eq!(again.status(), StatusCode::NOT_FOUND);
    }
}
