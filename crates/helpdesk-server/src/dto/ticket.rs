//! Ticket request/response shapes

use chrono::{DateTime, Utc};
use helpdesk_core::{required_fields, EntityId};
use serde::{Deserialize, Serialize};

use super::employee::EmployeeResponse;
use super::support_agent::SupportAgentSummary;
use super::ticket_category::TicketCategorySummary;
use super::ticket_history::TicketHistorySummary;
use super::ticket_priority::TicketPrioritySummary;
use super::ticket_status::TicketStatusSummary;

/// Payload for submitting a new ticket, optionally with inline comments.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketCreateRequest {
    pub title: String,
    pub description: String,
    pub employee_id: EntityId,
    pub support_agent_id: Option<EntityId>,
    pub ticket_category_id: EntityId,
    pub ticket_status_id: EntityId,
    pub ticket_priority_id: EntityId,
    #[serde(default)]
    pub comments: Vec<TicketCommentInline>,
}

required_fields!(TicketCreateRequest {
    title,
    description,
    ticket_category_id,
});

/// A comment submitted together with its ticket.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketCommentInline {
    pub content: String,
    pub author_name: Option<String>,
}

/// Payload for editing an existing ticket's text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketUpdateRequest {
    pub title: String,
    pub description: String,
}

required_fields!(TicketUpdateRequest {
    title => "Title is required.",
    description => "Description is required.",
});

/// Response to a ticket submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketCreateResponse {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub submitted_at: DateTime<Utc>,
    pub support_agent_name: Option<String>,
}

/// Response to a ticket edit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketUpdateResponse {
    pub id: EntityId,
    pub title: String,
    pub description: String,
}

/// A fully joined ticket: lookups, the submitting employee with their
/// department, the assigned agent, and the change log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketResponse {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub submitted_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub employee: Option<EmployeeResponse>,
    pub support_agent: Option<SupportAgentSummary>,
    pub status: Option<TicketStatusSummary>,
    pub priority: Option<TicketPrioritySummary>,
    pub category: Option<TicketCategorySummary>,
    pub history: Vec<TicketHistorySummary>,
}

/// Minimal ticket reference embedded in lookup-detail responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketSummary {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub submitted_at: DateTime<Utc>,
}
