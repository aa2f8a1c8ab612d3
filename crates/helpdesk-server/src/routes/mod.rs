//! The axum router for the REST surface
//!
//! One module per entity, each contributing the conventional five endpoints:
//! POST `/`, GET `/`, GET `/{id}`, PUT `/{id}`, DELETE `/{id}`.

use axum::Router;

use crate::state::AppState;

pub mod department;
pub mod employee;
pub mod support_agent;
pub mod ticket;
pub mod ticket_category;
pub mod ticket_comment;
pub mod ticket_history;
pub mod ticket_priority;
pub mod ticket_status;

/// Assemble the full `/api` surface.
pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/api/departments", department::router())
        .nest("/api/employees", employee::router())
        .nest("/api/support-agents", support_agent::router())
        .nest("/api/tickets", ticket::router())
        .nest("/api/ticket-statuses", ticket_status::router())
        .nest("/api/ticket-priorities", ticket_priority::router())
        .nest("/api/ticket-categories", ticket_category::router())
        .nest("/api/ticket-comments", ticket_comment::router())
        .nest("/api/ticket-history", ticket_history::router())
}
