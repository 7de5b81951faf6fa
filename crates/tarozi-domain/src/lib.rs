//! Domain layer - ticket model and pure services

pub mod model;
pub mod service;

pub use model::{Column, TicketEntry};
