//! Shared application state handed to every request handler

use std::sync::Arc;

use helpdesk_store::Store;

use crate::services::{
    DepartmentService, EmployeeService, SupportAgentService, TicketCategoryService,
    TicketCommentService, TicketHistoryService, TicketPriorityService, TicketService,
    TicketStatusService,
};

/// The composition root: one store, one service per entity.
#[derive(Clone)]
pub struct AppState {
    pub departments: DepartmentService,
    pub employees: EmployeeService,
    pub support_agents: SupportAgentService,
    pub tickets: TicketService,
    pub ticket_statuses: TicketStatusService,
    pub ticket_priorities: TicketPriorityService,
    pub ticket_categories: TicketCategoryService,
    pub ticket_comments: TicketCommentService,
    pub ticket_history: TicketHistoryService,
}

impl AppState {
    pub fn new(store: Arc<Store>) -> Self {
        Self {
            departments: DepartmentService::new(store.clone()),
            employees: EmployeeService::new(store.clone()),
            support_agents: SupportAgentService::new(store.clone()),
            tickets: TicketService::new(store.clone()),
            ticket_statuses: TicketStatusService::new(store.clone()),
            ticket_priorities: TicketPriorityService::new(store.clone()),
            ticket_categories: TicketCategoryService::new(store.clone()),
            ticket_comments: TicketCommentService::new(store.clone()),
            ticket_history: TicketHistoryService::new(store),
        }
    }
}
