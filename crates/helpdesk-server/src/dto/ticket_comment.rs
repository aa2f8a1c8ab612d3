//! Ticket-comment request/response shapes

use chrono::{DateTime, Utc};
use helpdesk_core::{required_fields, EntityId};
use serde::{Deserialize, Serialize};

/// Payload for creating or updating a comment. No required markers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketCommentRequest {
    pub ticket_id: EntityId,
    pub content: String,
    pub author_name: Option<String>,
}

required_fields!(TicketCommentRequest {});

/// A comment with its ticket's title attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketCommentResponse {
    pub id: EntityId,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub author_name: Option<String>,
    pub ticket_name: Option<String>,
}
