//! Tarozi - weighbridge ticket register
//!
//! Records gross/tare weighings, derives net weight and price, and keeps
//! a searchable ticket table for the current session.

mod cli;
mod commands;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
