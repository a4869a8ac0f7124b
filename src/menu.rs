//! Interactive console menus for the two user roles
//!
//! Malformed dates and numbers are re-prompted here instead of aborting the
//! session; failed operations are reported and the menu continues.

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::domain::model::{parse_date, Driver, Schedule};
use crate::domain::{RentalCustomer, RentalManager};
use crate::error::Result;
use crate::output;
use crate::store::FleetStore;
use chrono::NaiveDate;
use std::io::{self, Write};

/// Run the interactive menu loop until the operator exits
pub fn run(config: &Config) -> Result<()> {
    let mut store = FleetStore::open(config.data_file())?;

    loop {
        println!();
        println!("Select user type:");
        println!("1. Customer");
        println!("2. Admin");
        println!("3. Exit");

        match read_line("> ")?.as_str() {
            "1" => customer_menu(&mut store)?,
            "2" => admin_menu(&mut store, config)?,
            "3" => {
                // Explicit save-then-exit, matching the designated exit path
                store.save()?;
                return Ok(());
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

fn customer_menu(system: &mut dyn RentalCustomer) -> Result<()> {
    loop {
        println!();
        println!("Customer Menu:");
        println!("1. List Available Vehicles");
        println!("2. Add Reservation");
        println!("3. Change Reservation");
        println!("4. Delete Reservation");
        println!("5. Back");

        match read_line("> ")?.as_str() {
            "1" => {
                let wanted = prompt_schedule("pickup date", "dropoff date")?;
                let make = read_line("Enter vehicle make: ")?;
                let available = system.available_vehicles(&wanted, &make);
                output::print_available_vehicles(OutputFormat::Table, &available, &make)?;
            }
            "2" => {
                let registration = read_line("Enter vehicle registration number: ")?;
                let wanted = prompt_schedule("pickup date", "dropoff date")?;
                let driver = prompt_driver()?;
                match system.add_reservation(&registration, wanted, driver) {
                    Ok(total) => {
                        println!("Reservation made successfully.");
                        println!("Total Price: {:.2}", total);
                    }
                    Err(e) => println!("{}", e),
                }
            }
            "3" => {
                let registration = read_line("Enter vehicle registration number: ")?;
                let old = prompt_schedule("old pickup date", "old dropoff date")?;
                let new = prompt_schedule("new pickup date", "new dropoff date")?;
                match system.change_reservation(&registration, &old, new) {
                    Ok(total) => {
                        println!("Reservation modified successfully.");
                        println!("Total Price: {:.2}", total);
                    }
                    Err(e) => println!("{}", e),
                }
            }
            "4" => {
                let registration = read_line("Enter vehicle registration number: ")?;
                let schedule = prompt_schedule("pickup date", "dropoff date")?;
                match system.delete_reservation(&registration, &schedule) {
                    Ok(()) => println!("Reservation deleted successfully."),
                    Err(e) => println!("{}", e),
                }
            }
            "5" => return Ok(()),
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

fn admin_menu(system: &mut dyn RentalManager, config: &Config) -> Result<()> {
    loop {
        println!();
        println!("Admin Menu:");
        println!("1. Add Vehicle");
        println!("2. Delete Vehicle");
        println!("3. List Vehicles");
        println!("4. List Ordered Vehicles");
        println!("5. Generate Report");
        println!("6. Back");

        match read_line("> ")?.as_str() {
            "1" => {
                let registration = read_line("Enter registration number: ")?;
                let make = read_line("Enter make: ")?;
                let model = read_line("Enter model: ")?;
                let price = prompt_price("Enter daily rental price: ")?;

                let vehicle =
                    crate::domain::model::Vehicle::new(registration.clone(), make, model, price);
                match system.add_vehicle(vehicle) {
                    Ok(()) => {
                        println!(
                            "Vehicle with registration number {} added successfully.",
                            registration
                        );
                        println!(
                            "Available parking lots: {}",
                            config.parking_lots as i64 - system.vehicles().len() as i64
                        );
                    }
                    Err(e) => println!("{}", e),
                }
            }
            "2" => {
                let registration = read_line("Enter registration number to delete: ")?;
                match system.delete_vehicle(&registration) {
                    Ok(removed) => {
                        println!(
                            "Vehicle {} {} with registration number {} deleted.",
                            removed.make, removed.model, registration
                        );
                        println!(
                            "Available parking lots: {}",
                            config.parking_lots as i64 - system.vehicles().len() as i64
                        );
                    }
                    Err(e) => println!("{}", e),
                }
            }
            "3" => output::print_vehicles(OutputFormat::Table, system.vehicles())?,
            "4" => {
                output::print_ordered_vehicles(OutputFormat::Table, &system.ordered_vehicles())?
            }
            "5" => {
                let name = read_line("Enter file name for the report: ")?;
                match system.generate_report(&name, &config.report_dir()) {
                    Ok(path) => println!(
                        "Report generated successfully and saved to {}",
                        path.display()
                    ),
                    Err(e) => println!("{}", e),
                }
            }
            "6" => return Ok(()),
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

/// Print a prompt and read one trimmed line from stdin
fn read_line(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    let read = io::stdin().read_line(&mut line)?;
    if read == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into());
    }
    Ok(line.trim().to_string())
}

/// Re-prompt until a well-formed dd/mm/yyyy date is entered
fn prompt_date(label: &str) -> Result<NaiveDate> {
    loop {
        let text = read_line(&format!("Enter {} (dd/mm/yyyy): ", label))?;
        match parse_date(&text) {
            Ok(date) => return Ok(date),
            Err(e) => println!("{}. Please try again.", e),
        }
    }
}

/// Re-prompt until the pair of dates forms a valid (non-inverted) schedule
fn prompt_schedule(pickup_label: &str, dropoff_label: &str) -> Result<Schedule> {
    loop {
        let pickup = prompt_date(pickup_label)?;
        let dropoff = prompt_date(dropoff_label)?;
        match Schedule::new(pickup, dropoff) {
            Ok(schedule) => return Ok(schedule),
            Err(e) => println!("{}. Please try again.", e),
        }
    }
}

fn prompt_price(prompt: &str) -> Result<f64> {
    loop {
        let text = read_line(prompt)?;
        match text.parse::<f64>() {
            Ok(price) if price >= 0.0 => return Ok(price),
            _ => println!("Invalid price \"{}\". Please try again.", text),
        }
    }
}

/// Optional driver details; blank answers leave the field empty
fn prompt_driver() -> Result<Driver> {
    println!("Driver details (leave blank to skip):");
    let name = read_line("  First name: ")?;
    let surname = read_line("  Surname: ")?;
    let date_of_birth = loop {
        let text = read_line("  Date of birth (dd/mm/yyyy): ")?;
        if text.is_empty() {
            break None;
        }
        match parse_date(&text) {
            Ok(date) => break Some(date),
            Err(e) => println!("{}. Please try again.", e),
        }
    };
    let license_number = read_line("  License number: ")?;

    Ok(Driver {
        name,
        surname,
        date_of_birth,
        license_number,
    })
}
