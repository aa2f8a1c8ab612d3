//! HTTP handlers for the ticket endpoints

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use helpdesk_core::EntityId;

use crate::dto::ticket::{TicketCreateRequest, TicketUpdateRequest};
use crate::error::ApiError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}", get(get_by_id).put(update).delete(remove))
}

async fn create(
    State(state): State<AppState>,
    Json(request): Json<TicketCreateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let created = state.tickets.create(request)?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let tickets = state.tickets.get_all();
    if tickets.is_empty() {
        return Err(ApiError::not_found("No tickets found."));
    }
    Ok(Json(tickets))
}

async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.tickets.get(id)?))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(request): Json<TicketUpdateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.tickets.update(id, request)?))
}

async fn remove(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.tickets.delete(id)?))
}
