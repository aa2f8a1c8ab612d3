//! CRUD operations for ticket history entries

use std::sync::Arc;

use tracing::info;

use helpdesk_core::{EntityId, Result, TicketHistory};
use helpdesk_store::{NewTicketHistory, Store};

use super::guard::{ensure_valid, ensure_valid_id, ensure_valid_with_id};
use crate::dto::ticket_history::{
    TicketHistoryCreateRequest, TicketHistoryResponse, TicketHistoryUpdateRequest,
};

#[derive(Clone)]
pub struct TicketHistoryService {
    store: Arc<Store>,
}

impl TicketHistoryService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    pub fn create(&self, request: TicketHistoryCreateRequest) -> Result<TicketHistoryResponse> {
        ensure_valid(&request)?;
        let entry = self.store.insert_ticket_history(NewTicketHistory {
            ticket_id: request.ticket_id,
            change_description: request.change_description.trim().to_string(),
            timestamp: request.timestamp,
        })?;
        info!(id = entry.id, "ticket history entry created");
        Ok(self.to_response(entry))
    }

    pub fn get(&self, id: EntityId) -> Result<TicketHistoryResponse> {
        ensure_valid_id(id)?;
        let entry = self.store.ticket_history_entry(id)?;
        Ok(self.to_response(entry))
    }

    pub fn get_all(&self) -> Vec<TicketHistoryResponse> {
        self.store
            .ticket_history()
            .into_iter()
            .map(|entry| self.to_response(entry))
            .collect()
    }

    pub fn update(
        &self,
        id: EntityId,
        request: TicketHistoryUpdateRequest,
    ) -> Result<TicketHistoryResponse> {
        ensure_valid_with_id(&request, id)?;
        let entry = self.store.update_ticket_history(
            id,
            request.change_description.trim().to_string(),
            request.timestamp,
        )?;
        Ok(self.to_response(entry))
    }

    pub fn delete(&self, id: EntityId) -> Result<String> {
        ensure_valid_id(id)?;
        self.store.delete_ticket_history(id)?;
        info!(id, "ticket history entry deleted");
        Ok(format!("Ticket History with ID {id} deleted successfully."))
    }

    fn to_response(&self, entry: TicketHistory) -> TicketHistoryResponse {
        let ticket_name = self
            .store
            .ticket(entry.ticket_id)
            .ok()
            .map(|ticket| ticket.title);
        TicketHistoryResponse {
            id: entry.id,
            change_description: entry.change_description,
            timestamp: entry.timestamp,
            ticket_name,
        }
    }
}
