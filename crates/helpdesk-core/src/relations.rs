//! Referential model: delete policies and generated columns
//!
//! The relationship graph is declared once, as data, so the delete invariants
//! can be read (and tested) in a single place. The store is the only
//! interpreter of these tables: it consults [`RELATIONSHIPS`] before removing
//! a parent row and [`GENERATED_TIMESTAMPS`] when inserting rows with
//! store-assigned audit columns.
//!
//! Copyright (c) 2025 Helpdesk Team
//! Licensed under the MIT OR Apache-2.0 license

use std::fmt;

use serde::{Deserialize, Serialize};

/// The entity tables of the relational model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Department,
    Employee,
    SupportAgent,
    Ticket,
    TicketStatus,
    TicketPriority,
    TicketCategory,
    TicketComment,
    TicketHistory,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityKind::Department => "Department",
            EntityKind::Employee => "Employee",
            EntityKind::SupportAgent => "Support Agent",
            EntityKind::Ticket => "Ticket",
            EntityKind::TicketStatus => "Ticket Status",
            EntityKind::TicketPriority => "Ticket Priority",
            EntityKind::TicketCategory => "Ticket Category",
            EntityKind::TicketComment => "Ticket Comment",
            EntityKind::TicketHistory => "Ticket History",
        })
    }
}

/// What happens to dependent rows when their parent row is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeletePolicy {
    /// The delete is blocked while any dependent row exists.
    Restrict,
    /// Dependent rows have their foreign key cleared to unassigned as part of
    /// the same atomic operation that removes the parent.
    Nullify,
    /// Dependent rows are owned by the parent and removed with it.
    Cascade,
}

/// One edge of the relationship graph: `parent` 1 -> N `child` through
/// `foreign_key` on the child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relationship {
    pub parent: EntityKind,
    pub child: EntityKind,
    pub foreign_key: &'static str,
    pub policy: DeletePolicy,
}

/// The complete relationship graph with its delete policies.
pub const RELATIONSHIPS: &[Relationship] = &[
    Relationship {
        parent: EntityKind::Department,
        child: EntityKind::Employee,
        foreign_key: "department_id",
        policy: DeletePolicy::Restrict,
    },
    Relationship {
        parent: EntityKind::Employee,
        child: EntityKind::Ticket,
        foreign_key: "employee_id",
        policy: DeletePolicy::Restrict,
    },
    Relationship {
        parent: EntityKind::SupportAgent,
        child: EntityKind::Ticket,
        foreign_key: "support_agent_id",
        policy: DeletePolicy::Nullify,
    },
    Relationship {
        parent: EntityKind::TicketStatus,
        child: EntityKind::Ticket,
        foreign_key: "ticket_status_id",
        policy: DeletePolicy::Restrict,
    },
    Relationship {
        parent: EntityKind::TicketPriority,
        child: EntityKind::Ticket,
        foreign_key: "ticket_priority_id",
        policy: DeletePolicy::Restrict,
    },
    Relationship {
        parent: EntityKind::TicketCategory,
        child: EntityKind::Ticket,
        foreign_key: "ticket_category_id",
        policy: DeletePolicy::Restrict,
    },
    Relationship {
        parent: EntityKind::Ticket,
        child: EntityKind::TicketComment,
        foreign_key: "ticket_id",
        policy: DeletePolicy::Cascade,
    },
    Relationship {
        parent: EntityKind::Ticket,
        child: EntityKind::TicketHistory,
        foreign_key: "ticket_id",
        policy: DeletePolicy::Cascade,
    },
];

/// A timestamp column the store assigns at insertion when the caller does not
/// supply a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedTimestamp {
    pub entity: EntityKind,
    pub field: &'static str,
}

/// Timestamp columns with store-assigned insertion defaults.
pub const GENERATED_TIMESTAMPS: &[GeneratedTimestamp] = &[
    GeneratedTimestamp {
        entity: EntityKind::Ticket,
        field: "submitted_at",
    },
    GeneratedTimestamp {
        entity: EntityKind::TicketComment,
        field: "created_at",
    },
    GeneratedTimestamp {
        entity: EntityKind::TicketHistory,
        field: "timestamp",
    },
];

/// Relationships in which `parent` is the "one" side.
pub fn relationships_with_parent(
    parent: EntityKind,
) -> impl Iterator<Item = &'static Relationship> {
    RELATIONSHIPS.iter().filter(move |rel| rel.parent == parent)
}

/// Delete policy between two entity kinds, if they are directly related.
pub fn policy_between(parent: EntityKind, child: EntityKind) -> Option<DeletePolicy> {
    RELATIONSHIPS
        .iter()
        .find(|rel| rel.parent == parent && rel.child == child)
        .map(|rel| rel.policy)
}
