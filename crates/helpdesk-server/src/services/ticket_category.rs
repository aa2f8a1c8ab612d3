//! CRUD operations for ticket categories

use std::sync::Arc;

use tracing::info;

use helpdesk_core::settings::check_name;
use helpdesk_core::{EntityId, Result, TicketCategory};
use helpdesk_store::{NewTicketCategory, Store};

use super::guard::{ensure_valid, ensure_valid_id, ensure_valid_with_id};
use crate::dto::ticket::TicketSummary;
use crate::dto::ticket_category::{
    TicketCategoryDetail, TicketCategoryRequest, TicketCategorySummary,
};

#[derive(Clone)]
pub struct TicketCategoryService {
    store: Arc<Store>,
}

impl TicketCategoryService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    pub fn create(&self, request: TicketCategoryRequest) -> Result<TicketCategorySummary> {
        ensure_valid(&request)?;
        let name = request.name.trim().to_string();
        check_name("name", &name)?;
        let category = self.store.insert_ticket_category(NewTicketCategory { name });
        info!(id = category.id, "ticket category created");
        Ok(TicketCategorySummary {
            id: category.id,
            name: category.name,
        })
    }

    pub fn get(&self, id: EntityId) -> Result<TicketCategoryDetail> {
        ensure_valid_id(id)?;
        let category = self.store.ticket_category(id)?;
        Ok(self.to_detail(category))
    }

    pub fn get_all(&self) -> Vec<TicketCategoryDetail> {
        self.store
            .ticket_categories()
            .into_iter()
            .map(|category| self.to_detail(category))
            .collect()
    }

    pub fn update(
        &self,
        id: EntityId,
        request: TicketCategoryRequest,
    ) -> Result<TicketCategorySummary> {
        ensure_valid_with_id(&request, id)?;
        let name = request.name.trim().to_string();
        check_name("name", &name)?;
        let category = self.store.update_ticket_category(id, name)?;
        Ok(TicketCategorySummary {
            id: category.id,
            name: category.name,
        })
    }

    pub fn delete(&self, id: EntityId) -> Result<String> {
        ensure_valid_id(id)?;
        self.store.delete_ticket_category(id)?;
        info!(id, "ticket category deleted");
        Ok(format!("Ticket Category with ID {id} deleted successfully."))
    }

    fn to_detail(&self, category: TicketCategory) -> TicketCategoryDetail {
        let tickets = self
            .store
            .tickets_for_category(category.id)
            .into_iter()
            .map(|ticket| TicketSummary {
                id: ticket.id,
                title: ticket.title,
                description: ticket.description,
                submitted_at: ticket.submitted_at,
            })
            .collect();
        TicketCategoryDetail {
            id: category.id,
            name: category.name,
            tickets,
        }
    }
}
