//! CRUD operations for ticket statuses
//!
//! The update response carries both versions of the renamed status so clients
//! can show what changed.

use std::sync::Arc;

use tracing::info;

use helpdesk_core::settings::check_name;
use helpdesk_core::{EntityId, Result, TicketStatus};
use helpdesk_store::{NewTicketStatus, Store};

use super::guard::{ensure_valid, ensure_valid_id, ensure_valid_with_id};
use crate::dto::ticket::TicketSummary;
use crate::dto::ticket_status::{
    TicketStatusDetail, TicketStatusRequest, TicketStatusSummary, TicketStatusUpdateResponse,
};

#[derive(Clone)]
pub struct TicketStatusService {
    store: Arc<Store>,
}

impl TicketStatusService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    pub fn create(&self, request: TicketStatusRequest) -> Result<TicketStatusSummary> {
        ensure_valid(&request)?;
        let name = request.name.trim().to_string();
        check_name("name", &name)?;
        let status = self.store.insert_ticket_status(NewTicketStatus { name });
        info!(id = status.id, "ticket status created");
        Ok(TicketStatusSummary {
            id: status.id,
            name: status.name,
        })
    }

    pub fn get(&self, id: EntityId) -> Result<TicketStatusDetail> {
        ensure_valid_id(id)?;
        let status = self.store.ticket_status(id)?;
        Ok(self.to_detail(status))
    }

    pub fn get_all(&self) -> Vec<TicketStatusDetail> {
        self.store
            .ticket_statuses()
            .into_iter()
            .map(|status| self.to_detail(status))
            .collect()
    }

    pub fn update(
        &self,
        id: EntityId,
        request: TicketStatusRequest,
    ) -> Result<TicketStatusUpdateResponse> {
        ensure_valid_with_id(&request, id)?;
        let name = request.name.trim().to_string();
        check_name("name", &name)?;
        let old = self.store.ticket_status(id)?;
        let new = self.store.update_ticket_status(id, name)?;
        Ok(TicketStatusUpdateResponse {
            old_version: TicketStatusSummary {
                id: old.id,
                name: old.name,
            },
            new_version: TicketStatusSummary {
                id: new.id,
                name: new.name,
            },
        })
    }

    pub fn delete(&self, id: EntityId) -> Result<String> {
        ensure_valid_id(id)?;
        self.store.delete_ticket_status(id)?;
        info!(id, "ticket status deleted");
        Ok(format!("Ticket Status with ID {id} deleted successfully."))
    }

    fn to_detail(&self, status: TicketStatus) -> TicketStatusDetail {
        let tickets = self
            .store
            .tickets_for_status(status.id)
            .into_iter()
            .map(|ticket| TicketSummary {
                id: ticket.id,
                title: ticket.title,
                description: ticket.description,
                submitted_at: ticket.submitted_at,
            })
            .collect();
        TicketStatusDetail {
            id: status.id,
            name: status.name,
            tickets,
        }
    }
}
