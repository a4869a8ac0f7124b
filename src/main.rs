//! Rental Fleet - console rental vehicle fleet and reservation manager

use clap::Parser;
use rental_fleet::cli::Cli;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = rental_fleet::commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
