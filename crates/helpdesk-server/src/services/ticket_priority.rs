//! CRUD operations for ticket priorities

use std::sync::Arc;

use tracing::info;

use helpdesk_core::settings::check_name;
use helpdesk_core::{EntityId, Result, TicketPriority};
use helpdesk_store::{NewTicketPriority, Store};

use super::guard::{ensure_valid, ensure_valid_id, ensure_valid_with_id};
use crate::dto::ticket::TicketSummary;
use crate::dto::ticket_priority::{
    TicketPriorityDetail, TicketPriorityRequest, TicketPrioritySummary,
};

#[derive(Clone)]
pub struct TicketPriorityService {
    store: Arc<Store>,
}

impl TicketPriorityService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    pub fn create(&self, request: TicketPriorityRequest) -> Result<TicketPrioritySummary> {
        ensure_valid(&request)?;
        let name = request.name.trim().to_string();
        check_name("name", &name)?;
        let priority = self.store.insert_ticket_priority(NewTicketPriority { name });
        info!(id = priority.id, "ticket priority created");
        Ok(TicketPrioritySummary {
            id: priority.id,
            name: priority.name,
        })
    }

    pub fn get(&self, id: EntityId) -> Result<TicketPriorityDetail> {
        ensure_valid_id(id)?;
        let priority = self.store.ticket_priority(id)?;
        Ok(self.to_detail(priority))
    }

    pub fn get_all(&self) -> Vec<TicketPriorityDetail> {
        self.store
            .ticket_priorities()
            .into_iter()
            .map(|priority| self.to_detail(priority))
            .collect()
    }

    pub fn update(
        &self,
        id: EntityId,
        request: TicketPriorityRequest,
    ) -> Result<TicketPrioritySummary> {
        ensure_valid_with_id(&request, id)?;
        let name = request.name.trim().to_string();
        check_name("name", &name)?;
        let priority = self.store.update_ticket_priority(id, name)?;
        Ok(TicketPrioritySummary {
            id: priority.id,
            name: priority.name,
        })
    }

    pub fn delete(&self, id: EntityId) -> Result<String> {
        ensure_valid_id(id)?;
        self.store.delete_ticket_priority(id)?;
        info!(id, "ticket priority deleted");
        Ok(format!("Ticket Priority with ID {id} deleted successfully."))
    }

    fn to_detail(&self, priority: TicketPriority) -> TicketPriorityDetail {
        let tickets = self
            .store
            .tickets_for_priority(priority.id)
            .into_iter()
            .map(|ticket| TicketSummary {
                id: ticket.id,
                title: ticket.title,
                description: ticket.description,
                submitted_at: ticket.submitted_at,
            })
            .collect();
        TicketPriorityDetail {
            id: priority.id,
            name: priority.name,
            tickets,
        }
    }
}
