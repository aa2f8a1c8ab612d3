//! HTTP handlers for the department endpoints

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use helpdesk_core::EntityId;

use crate::dto::department::DepartmentRequest;
use crate::error::ApiError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}", get(get_by_id).put(update).delete(remove))
}

async fn create(
    State(state): State<AppState>,
    Json(request): Json<DepartmentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let created = state.departments.create(request)?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let departments = state.departments.get_all();
    if departments.is_empty() {
        return Err(ApiError::not_found("No departments found."));
    }
    Ok(Json(departments))
}

async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.departments.get(id)?))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(request): Json<DepartmentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.departments.update(id, request)?))
}

async fn remove(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.departments.delete(id)?))
}
