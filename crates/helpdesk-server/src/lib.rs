//! Helpdesk Server - REST surface for the ticket service
//!
//! Wires the DTO catalog, the validation-first CRUD services, and the axum
//! router over a shared store. The binary entry point in `main.rs` adds
//! configuration, logging, and the listener on top.

pub mod cli;
pub mod config;
pub mod dto;
pub mod error;
pub mod logging;
pub mod routes;
pub mod services;
pub mod state;
