//! Request and response shapes of the REST surface
//!
//! Every request type carries its required-field markers via the
//! `required_fields!` macro, placed exactly where the API contract demands a
//! value. Response shapes mirror the nesting the clients expect: departments
//! embed their employees, tickets embed their lookups and history.

pub mod department;
pub mod employee;
pub mod support_agent;
pub mod ticket;
pub mod ticket_category;
pub mod ticket_comment;
pub mod ticket_history;
pub mod ticket_priority;
pub mod ticket_status;
