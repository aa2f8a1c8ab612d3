//! Entity model for the helpdesk domain
//!
//! Plain data structs mirroring the nine relational tables. Relationships are
//! expressed through foreign-key ids; the graph itself lives in
//! [`crate::relations`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Store-assigned integer identifier. Ids are 1-based; zero and negative
/// values never refer to a row.
pub type EntityId = i32;

/// An organizational department employees belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: EntityId,
    pub name: String,
}

/// An employee who can submit tickets and belongs to a single department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub department_id: EntityId,
}

/// A support agent who can be assigned to tickets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportAgent {
    pub id: EntityId,
    pub name: String,
    pub specialization: String,
}

/// A support ticket submitted by an employee and optionally handled by a
/// support agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    /// Assigned by the store at insertion when the caller does not supply it.
    pub submitted_at: DateTime<Utc>,
    /// None until the ticket is resolved.
    pub resolved_at: Option<DateTime<Utc>>,
    pub employee_id: EntityId,
    /// None while the ticket is unassigned.
    pub support_agent_id: Option<EntityId>,
    pub ticket_status_id: EntityId,
    pub ticket_priority_id: EntityId,
    pub ticket_category_id: EntityId,
}

/// Workflow state a ticket is currently in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketStatus {
    pub id: EntityId,
    pub name: String,
}

/// Urgency level of a ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketPriority {
    pub id: EntityId,
    pub name: String,
}

/// Classification a ticket belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketCategory {
    pub id: EntityId,
    pub name: String,
}

/// A comment attached to a ticket. Owned by the ticket and removed with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketComment {
    pub id: EntityId,
    pub ticket_id: EntityId,
    pub content: String,
    pub author_name: Option<String>,
    /// Assigned by the store at insertion when the caller does not supply it.
    pub created_at: DateTime<Utc>,
}

/// A change-log entry tracking modifications made to a ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketHistory {
    pub id: EntityId,
    pub ticket_id: EntityId,
    pub change_description: String,
    /// Assigned by the store at insertion when the caller does not supply it.
    pub timestamp: DateTime<Utc>,
}
