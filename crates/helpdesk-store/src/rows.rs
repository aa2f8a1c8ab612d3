//! Insert records: entity data minus the store-assigned columns
//!
//! Ids and generated timestamps are filled in by the store; callers supply
//! everything else. Optional timestamps carry a caller-provided value through
//! unchanged.

use chrono::{DateTime, Utc};
use helpdesk_core::EntityId;

#[derive(Debug, Clone)]
pub struct NewDepartment {
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub department_id: EntityId,
}

#[derive(Debug, Clone)]
pub struct NewSupportAgent {
    pub name: String,
    pub specialization: String,
}

#[derive(Debug, Clone)]
pub struct NewTicketStatus {
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct NewTicketPriority {
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct NewTicketCategory {
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct NewTicket {
    pub title: String,
    pub description: String,
    /// Stamped with the insertion time when absent.
    pub submitted_at: Option<DateTime<Utc>>,
    pub employee_id: EntityId,
    pub support_agent_id: Option<EntityId>,
    pub ticket_status_id: EntityId,
    pub ticket_priority_id: EntityId,
    pub ticket_category_id: EntityId,
}

#[derive(Debug, Clone)]
pub struct NewTicketComment {
    pub ticket_id: EntityId,
    pub content: String,
    pub author_name: Option<String>,
    /// Stamped with the insertion time when absent.
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct NewTicketHistory {
    pub ticket_id: EntityId,
    pub change_description: String,
    /// Stamped with the insertion time when absent.
    pub timestamp: Option<DateTime<Utc>>,
}
