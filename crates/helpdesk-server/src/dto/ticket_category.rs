//! Ticket-category request/response shapes

use helpdesk_core::{required_fields, EntityId};
use serde::{Deserialize, Serialize};

use super::ticket::TicketSummary;

/// Payload for creating or renaming a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketCategoryRequest {
    pub name: String,
}

required_fields!(TicketCategoryRequest {
    name,
});

/// Minimal category reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketCategorySummary {
    pub id: EntityId,
    pub name: String,
}

/// A category with the tickets filed under it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketCategoryDetail {
    pub id: EntityId,
    pub name: String,
    pub tickets: Vec<TicketSummary>,
}
