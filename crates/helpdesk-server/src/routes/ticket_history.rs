//! HTTP handlers for the ticket-history endpoints

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use helpdesk_core::EntityId;

use crate::dto::ticket_history::{TicketHistoryCreateRequest, TicketHistoryUpdateRequest};
use crate::error::ApiError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}", get(get_by_id).put(update).delete(remove))
}

async fn create(
    State(state): State<AppState>,
    Json(request): Json<TicketHistoryCreateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let created = state.ticket_history.create(request)?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let entries = state.ticket_history.get_all();
    if entries.is_empty() {
        return Err(ApiError::not_found("No ticket history found."));
    }
    Ok(Json(entries))
}

async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.ticket_history.get(id)?))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(request): Json<TicketHistoryUpdateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.ticket_history.update(id, request)?))
}

async fn remove(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.ticket_history.delete(id)?))
}
