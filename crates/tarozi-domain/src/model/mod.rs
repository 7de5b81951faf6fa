//! Domain model types

pub mod ticket_entry;

pub use ticket_entry::{Column, TicketEntry};
