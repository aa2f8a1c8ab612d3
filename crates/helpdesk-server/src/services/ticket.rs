//! CRUD operations for tickets
//!
//! Ticket creation accepts inline comments; they are checked against the
//! schema constraints before the ticket row is written so a rejected comment
//! leaves nothing behind.

use std::sync::Arc;

use tracing::info;

use helpdesk_core::settings::{check_content, check_name};
use helpdesk_core::{EntityId, Result, Ticket};
use helpdesk_store::{NewTicket, NewTicketComment, Store};

use super::guard::{ensure_valid, ensure_valid_id, ensure_valid_with_id};
use crate::dto::department::DepartmentSummary;
use crate::dto::employee::EmployeeResponse;
use crate::dto::support_agent::SupportAgentSummary;
use crate::dto::ticket::{
    TicketCreateRequest, TicketCreateResponse, TicketResponse, TicketUpdateRequest,
    TicketUpdateResponse,
};
use crate::dto::ticket_category::TicketCategorySummary;
use crate::dto::ticket_history::TicketHistorySummary;
use crate::dto::ticket_priority::TicketPrioritySummary;
use crate::dto::ticket_status::TicketStatusSummary;

#[derive(Clone)]
pub struct TicketService {
    store: Arc<Store>,
}

impl TicketService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    pub fn create(&self, request: TicketCreateRequest) -> Result<TicketCreateResponse> {
        ensure_valid(&request)?;
        let title = request.title.trim().to_string();
        let description = request.description.trim().to_string();
        check_name("title", &title)?;

        let mut comments = Vec::with_capacity(request.comments.len());
        for comment in request.comments {
            let content = comment.content.trim().to_string();
            check_content("content", &content)?;
            let author_name = comment.author_name.map(|author| author.trim().to_string());
            comments.push((content, author_name));
        }

        let ticket = self.store.insert_ticket(NewTicket {
            title,
            description,
            submitted_at: None,
            employee_id: request.employee_id,
            support_agent_id: request.support_agent_id,
            ticket_status_id: request.ticket_status_id,
            ticket_priority_id: request.ticket_priority_id,
            ticket_category_id: request.ticket_category_id,
        })?;
        for (content, author_name) in comments {
            self.store.insert_ticket_comment(NewTicketComment {
                ticket_id: ticket.id,
                content,
                author_name,
                created_at: None,
            })?;
        }
        info!(id = ticket.id, "ticket created");

        let support_agent_name = ticket
            .support_agent_id
            .and_then(|agent_id| self.store.support_agent(agent_id).ok())
            .map(|agent| agent.name);
        Ok(TicketCreateResponse {
            id: ticket.id,
            title: ticket.title,
            description: ticket.description,
            submitted_at: ticket.submitted_at,
            support_agent_name,
        })
    }

    pub fn get(&self, id: EntityId) -> Result<TicketResponse> {
        ensure_valid_id(id)?;
        let ticket = self.store.ticket(id)?;
        Ok(self.to_response(ticket))
    }

    pub fn get_all(&self) -> Vec<TicketResponse> {
        self.store
            .tickets()
            .into_iter()
            .map(|ticket| self.to_response(ticket))
            .collect()
    }

    pub fn update(&self, id: EntityId, request: TicketUpdateRequest) -> Result<TicketUpdateResponse> {
        ensure_valid_with_id(&request, id)?;
        let title = request.title.trim().to_string();
        let description = request.description.trim().to_string();
        check_name("title", &title)?;
        let ticket = self.store.update_ticket(id, title, description)?;
        Ok(TicketUpdateResponse {
            id: ticket.id,
            title: ticket.title,
            description: ticket.description,
        })
    }

    pub fn delete(&self, id: EntityId) -> Result<String> {
        ensure_valid_id(id)?;
        self.store.delete_ticket(id)?;
        info!(id, "ticket deleted");
        Ok(format!("Ticket with ID {id} deleted successfully."))
    }

    fn to_response(&self, ticket: Ticket) -> TicketResponse {
        let employee = self.store.employee(ticket.employee_id).ok().map(|employee| {
            let department = self
                .store
                .department(employee.department_id)
                .ok()
                .map(|department| DepartmentSummary {
                    id: department.id,
                    name: department.name,
                });
            EmployeeResponse {
                id: employee.id,
                name: employee.name,
                email: employee.email,
                department,
            }
        });
        let support_agent = ticket
            .support_agent_id
            .and_then(|agent_id| self.store.support_agent(agent_id).ok())
            .map(|agent| SupportAgentSummary {
                id: agent.id,
                name: agent.name,
                specialization: agent.specialization,
            });
        let status = self
            .store
            .ticket_status(ticket.ticket_status_id)
            .ok()
            .map(|status| TicketStatusSummary {
                id: status.id,
                name: status.name,
            });
        let priority = self
            .store
            .ticket_priority(ticket.ticket_priority_id)
            .ok()
            .map(|priority| TicketPrioritySummary {
                id: priority.id,
                name: priority.name,
            });
        let category = self
            .store
            .ticket_category(ticket.ticket_category_id)
            .ok()
            .map(|category| TicketCategorySummary {
                id: category.id,
                name: category.name,
            });
        let history = self
            .store
            .history_for_ticket(ticket.id)
            .into_iter()
            .map(|entry| TicketHistorySummary {
                id: entry.id,
                change_description: entry.change_description,
                timestamp: entry.timestamp,
            })
            .collect();
        TicketResponse {
            id: ticket.id,
            title: ticket.title,
            description: ticket.description,
            submitted_at: ticket.submitted_at,
            resolved_at: ticket.resolved_at,
            employee,
            support_agent,
            status,
            priority,
            category,
            history,
        }
    }
}
