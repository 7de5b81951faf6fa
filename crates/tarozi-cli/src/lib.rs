//! Terminal front-end for the ticket register

pub mod devices;
pub mod output;
pub mod shell;
