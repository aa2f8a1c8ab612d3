//! Ticket-priority request/response shapes

use helpdesk_core::{required_fields, EntityId};
use serde::{Deserialize, Serialize};

use super::ticket::TicketSummary;

/// Payload for creating or renaming a priority level.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketPriorityRequest {
    pub name: String,
}

required_fields!(TicketPriorityRequest {
    name,
});

/// Minimal priority reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketPrioritySummary {
    pub id: EntityId,
    pub name: String,
}

/// A priority with the tickets currently carrying it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketPriorityDetail {
    pub id: EntityId,
    pub name: String,
    pub tickets: Vec<TicketSummary>,
}
