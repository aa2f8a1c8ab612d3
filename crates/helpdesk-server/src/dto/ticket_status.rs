//! Ticket-status request/response shapes

use helpdesk_core::{required_fields, EntityId};
use serde::{Deserialize, Serialize};

use super::ticket::TicketSummary;

/// Payload for creating or renaming a status. No required markers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketStatusRequest {
    pub name: String,
}

required_fields!(TicketStatusRequest {});

/// Minimal status reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketStatusSummary {
    pub id: EntityId,
    pub name: String,
}

/// A status with the tickets currently in it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketStatusDetail {
    pub id: EntityId,
    pub name: String,
    pub tickets: Vec<TicketSummary>,
}

/// Update response carrying both versions of the renamed status.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketStatusUpdateResponse {
    pub old_version: TicketStatusSummary,
    pub new_version: TicketStatusSummary,
}
