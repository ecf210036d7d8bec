#![warn(clippy::all, missing_docs)]

//! Core domain logic for the ticket sorter.
//!
//! This crate hosts the ticket model, record parsing, the stable
//! field-based sorter, output rendering and configuration handling
//! used by the command-line front end.

pub mod collate;
pub mod config;
pub mod error;
pub mod models;
pub mod record;
pub mod render;
pub mod sort;

pub use config::AppConfig;
pub use error::{MalformedReason, TicketError};
pub use models::{Criterion, Ticket};
pub use record::{parse_record, parse_records};
pub use render::{render_ticket, write_tickets, OutputFormat};
pub use sort::{sort_records, sort_tickets, SortedTickets, SAMPLE_RECORDS};
