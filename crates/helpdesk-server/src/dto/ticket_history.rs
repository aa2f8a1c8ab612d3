//! Ticket-history request/response shapes

use chrono::{DateTime, Utc};
use helpdesk_core::{required_fields, EntityId};
use serde::{Deserialize, Serialize};

/// Payload for recording a change-log entry. The timestamp is optional; the
/// store stamps the insertion time when it is absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketHistoryCreateRequest {
    pub change_description: String,
    pub timestamp: Option<DateTime<Utc>>,
    pub ticket_id: EntityId,
}

required_fields!(TicketHistoryCreateRequest {});

/// Payload for editing a change-log entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketHistoryUpdateRequest {
    pub change_description: String,
    pub timestamp: Option<DateTime<Utc>>,
}

required_fields!(TicketHistoryUpdateRequest {});

/// A change-log entry with its ticket's title attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketHistoryResponse {
    pub id: EntityId,
    pub change_description: String,
    pub timestamp: DateTime<Utc>,
    pub ticket_name: Option<String>,
}

/// Change-log entry embedded in a ticket response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketHistorySummary {
    pub id: EntityId,
    pub change_description: String,
    pub timestamp: DateTime<Utc>,
}
