//! CRUD operations for ticket comments

use std::sync::Arc;

use tracing::info;

use helpdesk_core::settings::check_content;
use helpdesk_core::{EntityId, Result, TicketComment};
use helpdesk_store::{NewTicketComment, Store};

use super::guard::{ensure_valid, ensure_valid_id, ensure_valid_with_id};
use crate::dto::ticket_comment::{TicketCommentRequest, TicketCommentResponse};

#[derive(Clone)]
pub struct TicketCommentService {
    store: Arc<Store>,
}

impl TicketCommentService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    pub fn create(&self, request: TicketCommentRequest) -> Result<TicketCommentResponse> {
        ensure_valid(&request)?;
        let content = request.content.trim().to_string();
        check_content("content", &content)?;
        let comment = self.store.insert_ticket_comment(NewTicketComment {
            ticket_id: request.ticket_id,
            content,
            author_name: request.author_name.map(|author| author.trim().to_string()),
            created_at: None,
        })?;
        info!(id = comment.id, "ticket comment created");
        Ok(self.to_response(comment))
    }

    pub fn get(&self, id: EntityId) -> Result<TicketCommentResponse> {
        ensure_valid_id(id)?;
        let comment = self.store.ticket_comment(id)?;
        Ok(self.to_response(comment))
    }

    pub fn get_all(&self) -> Vec<TicketCommentResponse> {
        self.store
            .ticket_comments()
            .into_iter()
            .map(|comment| self.to_response(comment))
            .collect()
    }

    /// An update may move the comment to a different ticket.
    pub fn update(
        &self,
        id: EntityId,
        request: TicketCommentRequest,
    ) -> Result<TicketCommentResponse> {
        ensure_valid_with_id(&request, id)?;
        let content = request.content.trim().to_string();
        check_content("content", &content)?;
        let comment = self.store.update_ticket_comment(
            id,
            request.ticket_id,
            content,
            request.author_name.map(|author| author.trim().to_string()),
        )?;
        Ok(self.to_response(comment))
    }

    pub fn delete(&self, id: EntityId) -> Result<String> {
        ensure_valid_id(id)?;
        self.store.delete_ticket_comment(id)?;
        info!(id, "ticket comment deleted");
        Ok(format!("Ticket Comment with ID {id} deleted successfully."))
    }

    fn to_response(&self, comment: TicketComment) -> TicketCommentResponse {
        let ticket_name = self
            .store
            .ticket(comment.ticket_id)
            .ok()
            .map(|ticket| ticket.title);
        TicketCommentResponse {
            id: comment.id,
            content: comment.content,
            created_at: comment.created_at,
            author_name: comment.author_name,
            ticket_name,
        }
    }
}
