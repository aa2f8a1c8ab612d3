//! Helpdesk Store - lock-guarded relational tables for the ticket service
//!
//! The store owns one table per entity and is the single interpreter of the
//! referential model declared in `helpdesk-core`: deletes consult the
//! relationship table (restrict, nullify, cascade) and inserts stamp the
//! generated timestamp columns. Every mutation, including its policy check,
//! runs under one exclusive write scope, so a failed delete touches nothing
//! and a permitted one detaches or removes dependents atomically.
//!
//! Persistence technology is deliberately out of scope for the service; this
//! crate keeps the schema's guarantees without a database underneath.

pub mod rows;
pub mod store;
pub mod table;

pub use rows::{
    NewDepartment, NewEmployee, NewSupportAgent, NewTicket, NewTicketCategory, NewTicketComment,
    NewTicketHistory, NewTicketPriority, NewTicketStatus,
};
pub use store::Store;
pub use table::Table;
