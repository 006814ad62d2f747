//! Dealer - vehicle inventory for a single dealership
//!
//! An interactive CLI to register, list, search, update and delete vehicles.

mod cli;
mod commands;
mod console;
mod logging;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
