//! Output formatting for fleet listings

use crate::cli::OutputFormat;
use crate::domain::model::{Vehicle, DATE_FORMAT};
use crate::error::Result;

/// Full vehicle listing with per-reservation detail
pub fn print_vehicles(format: OutputFormat, vehicles: &[Vehicle]) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(vehicles)?);
        return Ok(());
    }

    for vehicle in vehicles {
        println!(
            "Registration Number: {}, Make: {}",
            vehicle.registration_number, vehicle.make
        );

        if vehicle.reservations.is_empty() {
            println!("No reservations for this vehicle.");
        } else {
            println!("Reservations:");
            for reservation in &vehicle.reservations {
                println!(
                    "  Pickup: {}, Dropoff: {}, Total Price: {:.2}",
                    reservation.schedule.pickup_date.format(DATE_FORMAT),
                    reservation.schedule.dropoff_date.format(DATE_FORMAT),
                    reservation.schedule.total_price
                );
                let dob = reservation
                    .driver
                    .date_of_birth
                    .map(|d| d.format(DATE_FORMAT).to_string())
                    .unwrap_or_default();
                println!(
                    "  Driver: {} {}, DOB: {}, License: {}",
                    reservation.driver.name,
                    reservation.driver.surname,
                    dob,
                    reservation.driver.license_number
                );
            }
        }
        println!();
    }

    Ok(())
}

/// Make-ordered summary listing with reservation counts
pub fn print_ordered_vehicles(format: OutputFormat, vehicles: &[&Vehicle]) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(vehicles)?);
        return Ok(());
    }

    for vehicle in vehicles {
        println!(
            "Registration Number: {}, Make: {}, Reservations: {}",
            vehicle.registration_number,
            vehicle.make,
            vehicle.reservations.len()
        );
    }

    Ok(())
}

/// Availability listing, or a no-availability line when nothing matched
pub fn print_available_vehicles(
    format: OutputFormat,
    vehicles: &[&Vehicle],
    make: &str,
) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(vehicles)?);
        return Ok(());
    }

    if vehicles.is_empty() {
        println!("No available {} vehicles for the specified schedule.", make);
        return Ok(());
    }

    for vehicle in vehicles {
        println!(
            "Registration Number: {}, Make: {}, Daily Rental Price: {:.2}",
            vehicle.registration_number, vehicle.make, vehicle.daily_rental_price
        );
    }

    Ok(())
}
