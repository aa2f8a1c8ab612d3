//! Command-line interface argument parsing and definitions
//!
//! This module defines the server's flags using clap's derive API.

use clap::Parser;
use std::path::PathBuf;

/// Helpdesk server - ticket-management CRUD service
///
/// Serves the REST API for departments, employees, support agents, tickets
/// and their statuses, priorities, categories, comments, and history.
#[derive(Parser, Debug)]
#[command(name = "helpdesk", version, author, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, env = "HELPDESK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to bind, overriding the configuration file
    #[arg(short, long, env = "HELPDESK_BIND")]
    pub bind: Option<String>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
