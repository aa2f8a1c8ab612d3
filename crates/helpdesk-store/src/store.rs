//! The store: entity tables, CRUD operations, and the delete-policy interpreter
//!
//! All tables sit behind one `RwLock`. Reads clone rows out under the shared
//! lock; every mutation, including the referential checks that guard it, runs
//! under the exclusive lock. That single write scope is what makes
//! "check dependents, then delete" safe against interleaved writers.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use tracing::debug;

use helpdesk_core::{
    relationships_with_parent, DeletePolicy, Department, Employee, EntityId, EntityKind, Error,
    Relationship, Result, SupportAgent, Ticket, TicketCategory, TicketComment, TicketHistory,
    TicketPriority, TicketStatus,
};

use crate::rows::{
    NewDepartment, NewEmployee, NewSupportAgent, NewTicket, NewTicketCategory, NewTicketComment,
    NewTicketHistory, NewTicketPriority, NewTicketStatus,
};
use crate::table::Table;

#[derive(Debug, Clone, Default)]
struct Tables {
    departments: Table<Department>,
    employees: Table<Employee>,
    support_agents: Table<SupportAgent>,
    tickets: Table<Ticket>,
    ticket_statuses: Table<TicketStatus>,
    ticket_priorities: Table<TicketPriority>,
    ticket_categories: Table<TicketCategory>,
    ticket_comments: Table<TicketComment>,
    ticket_history: Table<TicketHistory>,
}

impl Tables {
    fn contains(&self, entity: EntityKind, id: EntityId) -> bool {
        match entity {
            EntityKind::Department => self.departments.contains(id),
            EntityKind::Employee => self.employees.contains(id),
            EntityKind::SupportAgent => self.support_agents.contains(id),
            EntityKind::Ticket => self.tickets.contains(id),
            EntityKind::TicketStatus => self.ticket_statuses.contains(id),
            EntityKind::TicketPriority => self.ticket_priorities.contains(id),
            EntityKind::TicketCategory => self.ticket_categories.contains(id),
            EntityKind::TicketComment => self.ticket_comments.contains(id),
            EntityKind::TicketHistory => self.ticket_history.contains(id),
        }
    }

    /// Foreign-key existence check, the insert/update side of the schema.
    fn require(&self, entity: EntityKind, id: EntityId) -> Result<()> {
        if self.contains(entity, id) {
            Ok(())
        } else {
            Err(Error::NotFound { entity, id })
        }
    }

    fn remove_row(&mut self, entity: EntityKind, id: EntityId) {
        match entity {
            EntityKind::Department => {
                self.departments.remove(id);
            }
            EntityKind::Employee => {
                self.employees.remove(id);
            }
            EntityKind::SupportAgent => {
                self.support_agents.remove(id);
            }
            EntityKind::Ticket => {
                self.tickets.remove(id);
            }
            EntityKind::TicketStatus => {
                self.ticket_statuses.remove(id);
            }
            EntityKind::TicketPriority => {
                self.ticket_priorities.remove(id);
            }
            EntityKind::TicketCategory => {
                self.ticket_categories.remove(id);
            }
            EntityKind::TicketComment => {
                self.ticket_comments.remove(id);
            }
            EntityKind::TicketHistory => {
                self.ticket_history.remove(id);
            }
        }
    }

    /// Rows of `rel.child` whose foreign key references parent `id`.
    fn dependent_count(&self, rel: &Relationship, id: EntityId) -> usize {
        match (rel.parent, rel.child) {
            (EntityKind::Department, EntityKind::Employee) => self
                .employees
                .values()
                .filter(|e| e.department_id == id)
                .count(),
            (EntityKind::Employee, EntityKind::Ticket) => self
                .tickets
                .values()
                .filter(|t| t.employee_id == id)
                .count(),
            (EntityKind::SupportAgent, EntityKind::Ticket) => self
                .tickets
                .values()
                .filter(|t| t.support_agent_id == Some(id))
                .count(),
            (EntityKind::TicketStatus, EntityKind::Ticket) => self
                .tickets
                .values()
                .filter(|t| t.ticket_status_id == id)
                .count(),
            (EntityKind::TicketPriority, EntityKind::Ticket) => self
                .tickets
                .values()
                .filter(|t| t.ticket_priority_id == id)
                .count(),
            (EntityKind::TicketCategory, EntityKind::Ticket) => self
                .tickets
                .values()
                .filter(|t| t.ticket_category_id == id)
                .count(),
            (EntityKind::Ticket, EntityKind::TicketComment) => self
                .ticket_comments
                .values()
                .filter(|c| c.ticket_id == id)
                .count(),
            (EntityKind::Ticket, EntityKind::TicketHistory) => self
                .ticket_history
                .values()
                .filter(|h| h.ticket_id == id)
                .count(),
            _ => 0,
        }
    }

    fn clear_dependents(&mut self, rel: &Relationship, id: EntityId) {
        if let (EntityKind::SupportAgent, EntityKind::Ticket) = (rel.parent, rel.child) {
            for ticket in self.tickets.values_mut() {
                if ticket.support_agent_id == Some(id) {
                    ticket.support_agent_id = None;
                }
            }
        }
    }

    fn remove_dependents(&mut self, rel: &Relationship, id: EntityId) {
        match (rel.parent, rel.child) {
            (EntityKind::Ticket, EntityKind::TicketComment) => {
                self.ticket_comments.retain(|c| c.ticket_id != id);
            }
            (EntityKind::Ticket, EntityKind::TicketHistory) => {
                self.ticket_history.retain(|h| h.ticket_id != id);
            }
            _ => {}
        }
    }

    /// The single interpreter of the relationship table. Restrict checks run
    /// first so a blocked delete leaves every table untouched; only then are
    /// nullify and cascade edges applied.
    fn apply_delete_policy(&mut self, parent: EntityKind, id: EntityId) -> Result<()> {
        for rel in relationships_with_parent(parent) {
            if rel.policy == DeletePolicy::Restrict {
                let dependents = self.dependent_count(rel, id);
                if dependents > 0 {
                    return Err(Error::ReferentialConflict {
                        parent: rel.parent,
                        child: rel.child,
                        parent_id: id,
                        dependents,
                    });
                }
            }
        }
        for rel in relationships_with_parent(parent) {
            match rel.policy {
                DeletePolicy::Restrict => {}
                DeletePolicy::Nullify => self.clear_dependents(rel, id),
                DeletePolicy::Cascade => self.remove_dependents(rel, id),
            }
        }
        Ok(())
    }
}

/// Shared handle to the relational tables.
#[derive(Debug, Default)]
pub struct Store {
    tables: RwLock<Tables>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    // A poisoned lock means a panic mid-mutation elsewhere; recovering the
    // guard keeps readers alive instead of cascading the panic.
    fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn delete_row(&self, entity: EntityKind, id: EntityId) -> Result<()> {
        let mut tables = self.write();
        tables.require(entity, id)?;
        tables.apply_delete_policy(entity, id)?;
        tables.remove_row(entity, id);
        debug!(%entity, id, "row deleted");
        Ok(())
    }
}

// --- departments ---

impl Store {
    pub fn insert_department(&self, new: NewDepartment) -> Department {
        let mut tables = self.write();
        let row = tables
            .departments
            .insert_with(|id| Department { id, name: new.name });
        debug!(id = row.id, "department inserted");
        row
    }

    pub fn department(&self, id: EntityId) -> Result<Department> {
        self.read().departments.get(id).cloned().ok_or(Error::NotFound {
            entity: EntityKind::Department,
            id,
        })
    }

    pub fn departments(&self) -> Vec<Department> {
        self.read().departments.values().cloned().collect()
    }

    pub fn update_department(&self, id: EntityId, name: String) -> Result<Department> {
        let mut tables = self.write();
        let row = tables.departments.get_mut(id).ok_or(Error::NotFound {
            entity: EntityKind::Department,
            id,
        })?;
        row.name = name;
        Ok(row.clone())
    }

    pub fn delete_department(&self, id: EntityId) -> Result<()> {
        self.delete_row(EntityKind::Department, id)
    }

    pub fn employees_in_department(&self, id: EntityId) -> Vec<Employee> {
        self.read()
            .employees
            .values()
            .filter(|e| e.department_id == id)
            .cloned()
            .collect()
    }
}

// --- employees ---

impl Store {
    pub fn insert_employee(&self, new: NewEmployee) -> Result<Employee> {
        let mut tables = self.write();
        tables.require(EntityKind::Department, new.department_id)?;
        let row = tables.employees.insert_with(|id| Employee {
            id,
            name: new.name,
            email: new.email,
            department_id: new.department_id,
        });
        debug!(id = row.id, "employee inserted");
        Ok(row)
    }

    pub fn employee(&self, id: EntityId) -> Result<Employee> {
        self.read().employees.get(id).cloned().ok_or(Error::NotFound {
            entity: EntityKind::Employee,
            id,
        })
    }

    pub fn employees(&self) -> Vec<Employee> {
        self.read().employees.values().cloned().collect()
    }

    pub fn update_employee(&self, id: EntityId, name: String, email: String) -> Result<Employee> {
        let mut tables = self.write();
        let row = tables.employees.get_mut(id).ok_or(Error::NotFound {
            entity: EntityKind::Employee,
            id,
        })?;
        row.name = name;
        row.email = email;
        Ok(row.clone())
    }

    pub fn delete_employee(&self, id: EntityId) -> Result<()> {
        self.delete_row(EntityKind::Employee, id)
    }
}

// --- support agents ---

impl Store {
    pub fn insert_support_agent(&self, new: NewSupportAgent) -> SupportAgent {
        let mut tables = self.write();
        let row = tables.support_agents.insert_with(|id| SupportAgent {
            id,
            name: new.name,
            specialization: new.specialization,
        });
        debug!(id = row.id, "support agent inserted");
        row
    }

    pub fn support_agent(&self, id: EntityId) -> Result<SupportAgent> {
        self.read()
            .support_agents
            .get(id)
            .cloned()
            .ok_or(Error::NotFound {
                entity: EntityKind::SupportAgent,
                id,
            })
    }

    pub fn support_agents(&self) -> Vec<SupportAgent> {
        self.read().support_agents.values().cloned().collect()
    }

    pub fn update_support_agent(
        &self,
        id: EntityId,
        name: String,
        specialization: String,
    ) -> Result<SupportAgent> {
        let mut tables = self.write();
        let row = tables.support_agents.get_mut(id).ok_or(Error::NotFound {
            entity: EntityKind::SupportAgent,
            id,
        })?;
        row.name = name;
        row.specialization = specialization;
        Ok(row.clone())
    }

    pub fn delete_support_agent(&self, id: EntityId) -> Result<()> {
        self.delete_row(EntityKind::SupportAgent, id)
    }
}

// --- ticket statuses / priorities / categories ---

impl Store {
    pub fn insert_ticket_status(&self, new: NewTicketStatus) -> TicketStatus {
        let mut tables = self.write();
        tables
            .ticket_statuses
            .insert_with(|id| TicketStatus { id, name: new.name })
    }

    pub fn ticket_status(&self, id: EntityId) -> Result<TicketStatus> {
        self.read()
            .ticket_statuses
            .get(id)
            .cloned()
            .ok_or(Error::NotFound {
                entity: EntityKind::TicketStatus,
                id,
            })
    }

    pub fn ticket_statuses(&self) -> Vec<TicketStatus> {
        self.read().ticket_statuses.values().cloned().collect()
    }

    pub fn update_ticket_status(&self, id: EntityId, name: String) -> Result<TicketStatus> {
        let mut tables = self.write();
        let row = tables.ticket_statuses.get_mut(id).ok_or(Error::NotFound {
            entity: EntityKind::TicketStatus,
            id,
        })?;
        row.name = name;
        Ok(row.clone())
    }

    pub fn delete_ticket_status(&self, id: EntityId) -> Result<()> {
        self.delete_row(EntityKind::TicketStatus, id)
    }

    pub fn insert_ticket_priority(&self, new: NewTicketPriority) -> TicketPriority {
        let mut tables = self.write();
        tables
            .ticket_priorities
            .insert_with(|id| TicketPriority { id, name: new.name })
    }

    pub fn ticket_priority(&self, id: EntityId) -> Result<TicketPriority> {
        self.read()
            .ticket_priorities
            .get(id)
            .cloned()
            .ok_or(Error::NotFound {
                entity: EntityKind::TicketPriority,
                id,
            })
    }

    pub fn ticket_priorities(&self) -> Vec<TicketPriority> {
        self.read().ticket_priorities.values().cloned().collect()
    }

    pub fn update_ticket_priority(&self, id: EntityId, name: String) -> Result<TicketPriority> {
        let mut tables = self.write();
        let row = tables.ticket_priorities.get_mut(id).ok_or(Error::NotFound {
            entity: EntityKind::TicketPriority,
            id,
        })?;
        row.name = name;
        Ok(row.clone())
    }

    pub fn delete_ticket_priority(&self, id: EntityId) -> Result<()> {
        self.delete_row(EntityKind::TicketPriority, id)
    }

    pub fn insert_ticket_category(&self, new: NewTicketCategory) -> TicketCategory {
        let mut tables = self.write();
        tables
            .ticket_categories
            .insert_with(|id| TicketCategory { id, name: new.name })
    }

    pub fn ticket_category(&self, id: EntityId) -> Result<TicketCategory> {
        self.read()
            .ticket_categories
            .get(id)
            .cloned()
            .ok_or(Error::NotFound {
                entity: EntityKind::TicketCategory,
                id,
            })
    }

    pub fn ticket_categories(&self) -> Vec<TicketCategory> {
        self.read().ticket_categories.values().cloned().collect()
    }

    pub fn update_ticket_category(&self, id: EntityId, name: String) -> Result<TicketCategory> {
        let mut tables = self.write();
        let row = tables.ticket_categories.get_mut(id).ok_or(Error::NotFound {
            entity: EntityKind::TicketCategory,
            id,
        })?;
        row.name = name;
        Ok(row.clone())
    }

    pub fn delete_ticket_category(&self, id: EntityId) -> Result<()> {
        self.delete_row(EntityKind::TicketCategory, id)
    }
}

// --- tickets ---

impl Store {
    pub fn insert_ticket(&self, new: NewTicket) -> Result<Ticket> {
        let mut tables = self.write();
        tables.require(EntityKind::Employee, new.employee_id)?;
        tables.require(EntityKind::TicketStatus, new.ticket_status_id)?;
        tables.require(EntityKind::TicketPriority, new.ticket_priority_id)?;
        tables.require(EntityKind::TicketCategory, new.ticket_category_id)?;
        if let Some(agent_id) = new.support_agent_id {
            tables.require(EntityKind::SupportAgent, agent_id)?;
        }
        let submitted_at = new.submitted_at.unwrap_or_else(Utc::now);
        let row = tables.tickets.insert_with(|id| Ticket {
            id,
            title: new.title,
            description: new.description,
            submitted_at,
            resolved_at: None,
            employee_id: new.employee_id,
            support_agent_id: new.support_agent_id,
            ticket_status_id: new.ticket_status_id,
            ticket_priority_id: new.ticket_priority_id,
            ticket_category_id: new.ticket_category_id,
        });
        debug!(id = row.id, "ticket inserted");
        Ok(row)
    }

    pub fn ticket(&self, id: EntityId) -> Result<Ticket> {
        self.read().tickets.get(id).cloned().ok_or(Error::NotFound {
            entity: EntityKind::Ticket,
            id,
        })
    }

    pub fn tickets(&self) -> Vec<Ticket> {
        self.read().tickets.values().cloned().collect()
    }

    pub fn update_ticket(&self, id: EntityId, title: String, description: String) -> Result<Ticket> {
        let mut tables = self.write();
        let row = tables.tickets.get_mut(id).ok_or(Error::NotFound {
            entity: EntityKind::Ticket,
            id,
        })?;
        row.title = title;
        row.description = description;
        Ok(row.clone())
    }

    pub fn delete_ticket(&self, id: EntityId) -> Result<()> {
        self.delete_row(EntityKind::Ticket, id)
    }

    pub fn tickets_for_employee(&self, id: EntityId) -> Vec<Ticket> {
        self.read()
            .tickets
            .values()
            .filter(|t| t.employee_id == id)
            .cloned()
            .collect()
    }

    pub fn tickets_for_support_agent(&self, id: EntityId) -> Vec<Ticket> {
        self.read()
            .tickets
            .values()
            .filter(|t| t.support_agent_id == Some(id))
            .cloned()
            .collect()
    }

    pub fn tickets_for_status(&self, id: EntityId) -> Vec<Ticket> {
        self.read()
            .tickets
            .values()
            .filter(|t| t.ticket_status_id == id)
            .cloned()
            .collect()
    }

    pub fn tickets_for_priority(&self, id: EntityId) -> Vec<Ticket> {
        self.read()
            .tickets
            .values()
            .filter(|t| t.ticket_priority_id == id)
            .cloned()
            .collect()
    }

    pub fn tickets_for_category(&self, id: EntityId) -> Vec<Ticket> {
        self.read()
            .tickets
            .values()
            .filter(|t| t.ticket_category_id == id)
            .cloned()
            .collect()
    }
}

// --- ticket comments ---

impl Store {
    pub fn insert_ticket_comment(&self, new: NewTicketComment) -> Result<TicketComment> {
        let mut tables = self.write();
        tables.require(EntityKind::Ticket, new.ticket_id)?;
        let created_at = new.created_at.unwrap_or_else(Utc::now);
        let row = tables.ticket_comments.insert_with(|id| TicketComment {
            id,
            ticket_id: new.ticket_id,
            content: new.content,
            author_name: new.author_name,
            created_at,
        });
        Ok(row)
    }

    pub fn ticket_comment(&self, id: EntityId) -> Result<TicketComment> {
        self.read()
            .ticket_comments
            .get(id)
            .cloned()
            .ok_or(Error::NotFound {
                entity: EntityKind::TicketComment,
                id,
            })
    }

    pub fn ticket_comments(&self) -> Vec<TicketComment> {
        self.read().ticket_comments.values().cloned().collect()
    }

    pub fn update_ticket_comment(
        &self,
        id: EntityId,
        ticket_id: EntityId,
        content: String,
        author_name: Option<String>,
    ) -> Result<TicketComment> {
        let mut tables = self.write();
        tables.require(EntityKind::Ticket, ticket_id)?;
        let row = tables.ticket_comments.get_mut(id).ok_or(Error::NotFound {
            entity: EntityKind::TicketComment,
            id,
        })?;
        row.ticket_id = ticket_id;
        row.content = content;
        row.author_name = author_name;
        Ok(row.clone())
    }

    pub fn delete_ticket_comment(&self, id: EntityId) -> Result<()> {
        self.delete_row(EntityKind::TicketComment, id)
    }

    pub fn comments_for_ticket(&self, id: EntityId) -> Vec<TicketComment> {
        self.read()
            .ticket_comments
            .values()
            .filter(|c| c.ticket_id == id)
            .cloned()
            .collect()
    }
}

// --- ticket history ---

impl Store {
    pub fn insert_ticket_history(&self, new: NewTicketHistory) -> Result<TicketHistory> {
        let mut tables = self.write();
        tables.require(EntityKind::Ticket, new.ticket_id)?;
        let timestamp = new.timestamp.unwrap_or_else(Utc::now);
        let row = tables.ticket_history.insert_with(|id| TicketHistory {
            id,
            ticket_id: new.ticket_id,
            change_description: new.change_description,
            timestamp,
        });
        Ok(row)
    }

    pub fn ticket_history_entry(&self, id: EntityId) -> Result<TicketHistory> {
        self.read()
            .ticket_history
            .get(id)
            .cloned()
            .ok_or(Error::NotFound {
                entity: EntityKind::TicketHistory,
                id,
            })
    }

    pub fn ticket_history(&self) -> Vec<TicketHistory> {
        self.read().ticket_history.values().cloned().collect()
    }

    pub fn update_ticket_history(
        &self,
        id: EntityId,
        change_description: String,
        timestamp: Option<chrono::DateTime<Utc>>,
    ) -> Result<TicketHistory> {
        let mut tables = self.write();
        let row = tables.ticket_history.get_mut(id).ok_or(Error::NotFound {
            entity: EntityKind::TicketHistory,
            id,
        })?;
        row.change_description = change_description;
        if let Some(at) = timestamp {
            row.timestamp = at;
        }
        Ok(row.clone())
    }

    pub fn delete_ticket_history(&self, id: EntityId) -> Result<()> {
        self.delete_row(EntityKind::TicketHistory, id)
    }

    pub fn history_for_ticket(&self, id: EntityId) -> Vec<TicketHistory> {
        self.read()
            .ticket_history
            .values()
            .filter(|h| h.ticket_id == id)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn seeded() -> (Store, Ticket) {
        let store = Store::new();
        let department = store.insert_department(NewDepartment {
            name: "Support".to_string(),
        });
        let employee = store
            .insert_employee(NewEmployee {
                name: "Mira Voss".to_string(),
                email: "mira.voss@example.com".to_string(),
                department_id: department.id,
            })
            .unwrap();
        let agent = store.insert_support_agent(NewSupportAgent {
            name: "Toma Ilic".to_string(),
            specialization: "Networking".to_string(),
        });
        let status = store.insert_ticket_status(NewTicketStatus {
            name: "Open".to_string(),
        });
        let priority = store.insert_ticket_priority(NewTicketPriority {
            name: "High".to_string(),
        });
        let category = store.insert_ticket_category(NewTicketCategory {
            name: "Hardware".to_string(),
        });
        let ticket = store
            .insert_ticket(NewTicket {
                title: "VPN is down".to_string(),
                description: "Cannot reach the office network".to_string(),
                submitted_at: None,
                employee_id: employee.id,
                support_agent_id: Some(agent.id),
                ticket_status_id: status.id,
                ticket_priority_id: priority.id,
                ticket_category_id: category.id,
            })
            .unwrap();
        (store, ticket)
    }

    #[test]
    fn restrict_blocks_department_delete_and_leaves_rows_intact() {
        let (store, _) = seeded();
        let err = store.delete_department(1).unwrap_err();
        match err {
            Error::ReferentialConflict {
                parent,
                child,
                parent_id,
                dependents,
            } => {
                assert_eq!(parent, EntityKind::Department);
                assert_eq!(child, EntityKind::Employee);
                assert_eq!(parent_id, 1);
                assert_eq!(dependents, 1);
            }
            other => panic!("expected ReferentialConflict, got {other:?}"),
        }
        assert!(store.department(1).is_ok());
        assert!(store.employee(1).is_ok());
    }

    #[test]
    fn restrict_applies_to_every_lookup_table() {
        let (store, _) = seeded();
        assert!(matches!(
            store.delete_employee(1),
            Err(Error::ReferentialConflict { .. })
        ));
        assert!(matches!(
            store.delete_ticket_status(1),
            Err(Error::ReferentialConflict { .. })
        ));
        assert!(matches!(
            store.delete_ticket_priority(1),
            Err(Error::ReferentialConflict { .. })
        ));
        assert!(matches!(
            store.delete_ticket_category(1),
            Err(Error::ReferentialConflict { .. })
        ));
    }

    #[test]
    fn nullify_detaches_tickets_when_their_agent_goes() {
        let (store, ticket) = seeded();
        assert_eq!(store.ticket(ticket.id).unwrap().support_agent_id, Some(1));

        store.delete_support_agent(1).unwrap();

        assert!(store.support_agent(1).is_err());
        assert_eq!(store.ticket(ticket.id).unwrap().support_agent_id, None);
    }

    #[test]
    fn cascade_removes_owned_comments_and_history() {
        let (store, ticket) = seeded();
        store
            .insert_ticket_comment(NewTicketComment {
                ticket_id: ticket.id,
                content: "Rebooted the router".to_string(),
                author_name: Some("Toma Ilic".to_string()),
                created_at: None,
            })
            .unwrap();
        store
            .insert_ticket_history(NewTicketHistory {
                ticket_id: ticket.id,
                change_description: "Assigned to Toma".to_string(),
                timestamp: None,
            })
            .unwrap();

        store.delete_ticket(ticket.id).unwrap();

        assert!(store.ticket(ticket.id).is_err());
        assert!(store.comments_for_ticket(ticket.id).is_empty());
        assert!(store.history_for_ticket(ticket.id).is_empty());
        // owned rows cascading away must not take unrelated tables with them
        assert!(store.employee(1).is_ok());
    }

    #[test]
    fn deleting_an_owned_row_is_unconditional() {
        let (store, ticket) = seeded();
        let comment = store
            .insert_ticket_comment(NewTicketComment {
                ticket_id: ticket.id,
                content: "Checking".to_string(),
                author_name: None,
                created_at: None,
            })
            .unwrap();
        store.delete_ticket_comment(comment.id).unwrap();
        assert!(store.ticket(ticket.id).is_ok());
    }

    #[test]
    fn generated_timestamps_are_stamped_when_absent() {
        let (store, ticket) = seeded();
        assert_ne!(ticket.submitted_at, chrono::DateTime::<Utc>::default());

        let comment = store
            .insert_ticket_comment(NewTicketComment {
                ticket_id: ticket.id,
                content: "First".to_string(),
                author_name: None,
                created_at: None,
            })
            .unwrap();
        assert_ne!(comment.created_at, chrono::DateTime::<Utc>::default());
    }

    #[test]
    fn supplied_timestamps_are_preserved() {
        let (store, ticket) = seeded();
        let at = Utc.with_ymd_and_hms(2024, 11, 5, 8, 0, 0).unwrap();
        let entry = store
            .insert_ticket_history(NewTicketHistory {
                ticket_id: ticket.id,
                change_description: "Imported from the old system".to_string(),
                timestamp: Some(at),
            })
            .unwrap();
        assert_eq!(entry.timestamp, at);
    }

    #[test]
    fn inserts_reject_dangling_foreign_keys() {
        let store = Store::new();
        let err = store
            .insert_employee(NewEmployee {
                name: "Nobody".to_string(),
                email: "nobody@example.com".to_string(),
                department_id: 99,
            })
            .unwrap_err();
        assert!(matches!(
            err,
            Error::NotFound {
                entity: EntityKind::Department,
                id: 99
            }
        ));
    }

    #[test]
    fn delete_of_missing_row_reports_not_found() {
        let store = Store::new();
        assert!(matches!(
            store.delete_ticket(5),
            Err(Error::NotFound {
                entity: EntityKind::Ticket,
                id: 5
            })
        ));
    }

    #[test]
    fn every_declared_relationship_has_a_dependent_counter() {
        let (store, ticket) = seeded();
        store
            .insert_ticket_comment(NewTicketComment {
                ticket_id: ticket.id,
                content: "Counted".to_string(),
                author_name: None,
                created_at: None,
            })
            .unwrap();
        store
            .insert_ticket_history(NewTicketHistory {
                ticket_id: ticket.id,
                change_description: "Counted".to_string(),
                timestamp: None,
            })
            .unwrap();
        let tables = store.read();
        for rel in helpdesk_core::RELATIONSHIPS {
            // counting must be wired for each edge; a seeded graph has a
            // dependent on every parent with id 1
            assert!(
                tables.dependent_count(rel, 1) > 0,
                "no dependent counted for {} -> {}",
                rel.parent,
                rel.child
            );
        }
    }

    #[test]
    fn comment_update_can_move_between_tickets() {
        let (store, ticket) = seeded();
        let second = store
            .insert_ticket(NewTicket {
                title: "Monitor flickers".to_string(),
                description: "Left screen".to_string(),
                submitted_at: None,
                employee_id: 1,
                support_agent_id: None,
                ticket_status_id: 1,
                ticket_priority_id: 1,
                ticket_category_id: 1,
            })
            .unwrap();
        let comment = store
            .insert_ticket_comment(NewTicketComment {
                ticket_id: ticket.id,
                content: "Moved".to_string(),
                author_name: None,
                created_at: None,
            })
            .unwrap();

        let updated = store
            .update_ticket_comment(comment.id, second.id, "Moved".to_string(), None)
            .unwrap();
        assert_eq!(updated.ticket_id, second.id);
        assert!(store.comments_for_ticket(ticket.id).is_empty());
    }
}
