//! Support-agent request/response shapes

use helpdesk_core::{required_fields, EntityId};
use serde::{Deserialize, Serialize};

use super::ticket::TicketSummary;

/// Payload for creating or updating a support agent. Carries no required
/// markers; only the schema's name bound applies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportAgentRequest {
    pub name: String,
    pub specialization: String,
}

required_fields!(SupportAgentRequest {});

/// A support agent with the tickets currently assigned to them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportAgentResponse {
    pub id: EntityId,
    pub name: String,
    pub specialization: String,
    pub tickets: Vec<TicketSummary>,
}

/// Minimal agent reference embedded in ticket responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportAgentSummary {
    pub id: EntityId,
    pub name: String,
    pub specialization: String,
}
