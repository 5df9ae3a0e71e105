//! API info endpoint

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;

async fn api_info() -> Json<Value> {
    Json(json!({
        "mensaje": "🚀 API de Tareas funcionando!",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "GET /": "Frontend de la aplicación",
            "GET /api": "Información de la API",
            "GET /tareas": "Ver todas las tareas",
            "POST /tareas": "Crear nueva tarea",
            "PUT /tareas/{id}/completar": "Completar una tarea",
            "DELETE /tareas/{id}": "Eliminar una tarea"
        }
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api", get(api_info))
}
