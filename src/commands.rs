//! Command handlers

use crate::cli::{AdminCommands, Cli, Commands, CustomerCommands, OutputFormat};
use crate::config::Config;
use crate::domain::model::{parse_date, Driver, Schedule};
use crate::domain::{RentalCustomer, RentalManager};
use crate::error::Result;
use crate::menu;
use crate::output;
use crate::store::FleetStore;
use std::path::PathBuf;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(ref path) = cli.data_file {
        config.data_file = Some(path.clone());
    }
    let format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::Menu => menu::run(&config),

        Commands::Admin { command } => cmd_admin(&config, command, format),

        Commands::Customer { command } => cmd_customer(&config, command, format),

        Commands::Config {
            show,
            set_data_file,
            set_report_dir,
            set_output,
            reset,
        } => cmd_config(
            *show,
            set_data_file.clone(),
            set_report_dir.clone(),
            *set_output,
            *reset,
        ),
    }
}

fn cmd_admin(config: &Config, command: &AdminCommands, format: OutputFormat) -> Result<()> {
    let mut store = FleetStore::open(config.data_file())?;

    match command {
        AdminCommands::AddVehicle {
            registration,
            make,
            model,
            price,
        } => {
            let vehicle = crate::domain::model::Vehicle::new(
                registration.clone(),
                make.clone(),
                model.clone(),
                *price,
            );
            store.add_vehicle(vehicle)?;
            println!(
                "Vehicle with registration number {} added successfully.",
                registration
            );
            println!(
                "Available parking lots: {}",
                store.remaining_lots(config.parking_lots)
            );
            Ok(())
        }

        AdminCommands::DeleteVehicle { registration } => {
            let removed = store.delete_vehicle(registration)?;
            println!(
                "Vehicle {} {} with registration number {} deleted.",
                removed.make, removed.model, registration
            );
            println!(
                "Available parking lots: {}",
                store.remaining_lots(config.parking_lots)
            );
            Ok(())
        }

        AdminCommands::List => output::print_vehicles(format, store.vehicles()),

        AdminCommands::ListOrdered => {
            output::print_ordered_vehicles(format, &store.ordered_vehicles())
        }

        AdminCommands::Report { name, dir } => {
            let dir = dir.clone().unwrap_or_else(|| config.report_dir());
            let path = store.generate_report(name, &dir)?;
            println!(
                "Report generated successfully and saved to {}",
                path.display()
            );
            Ok(())
        }
    }
}

fn cmd_customer(config: &Config, command: &CustomerCommands, format: OutputFormat) -> Result<()> {
    let mut store = FleetStore::open(config.data_file())?;

    match command {
        CustomerCommands::Available {
            make,
            pickup,
            dropoff,
        } => {
            let wanted = Schedule::new(parse_date(pickup)?, parse_date(dropoff)?)?;
            output::print_available_vehicles(format, &store.available_vehicles(&wanted, make), make)
        }

        CustomerCommands::Reserve {
            registration,
            pickup,
            dropoff,
            driver_name,
            driver_surname,
            driver_dob,
            driver_license,
        } => {
            let wanted = Schedule::new(parse_date(pickup)?, parse_date(dropoff)?)?;
            let driver = Driver {
                name: driver_name.clone().unwrap_or_default(),
                surname: driver_surname.clone().unwrap_or_default(),
                date_of_birth: driver_dob.as_deref().map(parse_date).transpose()?,
                license_number: driver_license.clone().unwrap_or_default(),
            };

            let total = store.add_reservation(registration, wanted, driver)?;
            println!(
                "Reservation for vehicle with registration number {} made successfully.",
                registration
            );
            println!("Total Price: {:.2}", total);
            Ok(())
        }

        CustomerCommands::Change {
            registration,
            old_pickup,
            old_dropoff,
            new_pickup,
            new_dropoff,
        } => {
            let old = Schedule::new(parse_date(old_pickup)?, parse_date(old_dropoff)?)?;
            let new = Schedule::new(parse_date(new_pickup)?, parse_date(new_dropoff)?)?;

            let total = store.change_reservation(registration, &old, new)?;
            println!(
                "Reservation for vehicle with registration number {} modified successfully.",
                registration
            );
            println!("Total Price: {:.2}", total);
            Ok(())
        }

        CustomerCommands::Cancel {
            registration,
            pickup,
            dropoff,
        } => {
            let schedule = Schedule::new(parse_date(pickup)?, parse_date(dropoff)?)?;
            store.delete_reservation(registration, &schedule)?;
            println!(
                "Reservation for vehicle with registration number {} deleted successfully.",
                registration
            );
            Ok(())
        }
    }
}

fn cmd_config(
    show: bool,
    set_data_file: Option<PathBuf>,
    set_report_dir: Option<PathBuf>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults.");
        println!("{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut changed = false;

    if let Some(path) = set_data_file {
        config.data_file = Some(path);
        changed = true;
    }
    if let Some(dir) = set_report_dir {
        config.report_dir = Some(dir);
        changed = true;
    }
    if let Some(format) = set_output {
        config.output_format = format;
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration updated.");
    }

    if show || !changed {
        println!("{}", config);
    }

    Ok(())
}
