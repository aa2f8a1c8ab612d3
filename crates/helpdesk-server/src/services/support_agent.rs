//! CRUD operations for support agents

use std::sync::Arc;

use tracing::info;

use helpdesk_core::settings::check_name;
use helpdesk_core::{EntityId, Result, SupportAgent};
use helpdesk_store::{NewSupportAgent, Store};

use super::guard::{ensure_valid, ensure_valid_id, ensure_valid_with_id};
use crate::dto::support_agent::{SupportAgentRequest, SupportAgentResponse};
use crate::dto::ticket::TicketSummary;

#[derive(Clone)]
pub struct SupportAgentService {
    store: Arc<Store>,
}

impl SupportAgentService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    pub fn create(&self, request: SupportAgentRequest) -> Result<SupportAgentResponse> {
        ensure_valid(&request)?;
        let name = request.name.trim().to_string();
        check_name("name", &name)?;
        let agent = self.store.insert_support_agent(NewSupportAgent {
            name,
            specialization: request.specialization.trim().to_string(),
        });
        info!(id = agent.id, "support agent created");
        Ok(self.to_response(agent))
    }

    pub fn get(&self, id: EntityId) -> Result<SupportAgentResponse> {
        ensure_valid_id(id)?;
        let agent = self.store.support_agent(id)?;
        Ok(self.to_response(agent))
    }

    pub fn get_all(&self) -> Vec<SupportAgentResponse> {
        self.store
            .support_agents()
            .into_iter()
            .map(|agent| self.to_response(agent))
            .collect()
    }

    pub fn update(
        &self,
        id: EntityId,
        request: SupportAgentRequest,
    ) -> Result<SupportAgentResponse> {
        ensure_valid_with_id(&request, id)?;
        let name = request.name.trim().to_string();
        check_name("name", &name)?;
        let agent =
            self.store
                .update_support_agent(id, name, request.specialization.trim().to_string())?;
        Ok(self.to_response(agent))
    }

    /// Deleting an agent never blocks: assigned tickets are detached, not
    /// removed.
    pub fn delete(&self, id: EntityId) -> Result<String> {
        ensure_valid_id(id)?;
        self.store.delete_support_agent(id)?;
        info!(id, "support agent deleted");
        Ok(format!("Support Agent with ID {id} deleted successfully."))
    }

    fn to_response(&self, agent: SupportAgent) -> SupportAgentResponse {
        let tickets = self
            .store
            .tickets_for_support_agent(agent.id)
            .into_iter()
            .map(|ticket| TicketSummary {
                id: ticket.id,
                title: ticket.title,
                description: ticket.description,
                submitted_at: ticket.submitted_at,
            })
            .collect();
        SupportAgentResponse {
            id: agent.id,
            name: agent.name,
            specialization: agent.specialization,
            tickets,
        }
    }
}
