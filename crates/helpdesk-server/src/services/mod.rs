//! CRUD services for the REST surface
//!
//! One service per entity over the shared store. Every operation runs the
//! validation engine before touching any data: creates validate the payload,
//! updates validate payload plus id, gets and deletes validate the id alone.
//! A failed outcome becomes a rejected-request error, never a panic.

pub mod department;
pub mod employee;
pub mod guard;
pub mod support_agent;
pub mod ticket;
pub mod ticket_category;
pub mod ticket_comment;
pub mod ticket_history;
pub mod ticket_priority;
pub mod ticket_status;

pub use department::DepartmentService;
pub use employee::EmployeeService;
pub use support_agent::SupportAgentService;
pub use ticket::TicketService;
pub use ticket_category::TicketCategoryService;
pub use ticket_comment::TicketCommentService;
pub use ticket_history::TicketHistoryService;
pub use ticket_priority::TicketPriorityService;
pub use ticket_status::TicketStatusService;
