//! Capability traits for the two console roles
//!
//! One concrete store implements both; the menu layer only ever sees the
//! trait matching the signed-in role.

use crate::domain::model::{Driver, Schedule, Vehicle};
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Administrator-facing fleet operations
pub trait RentalManager {
    /// Add a vehicle; fails if the registration number is already taken
    fn add_vehicle(&mut self, vehicle: Vehicle) -> Result<()>;

    /// Remove a vehicle and all of its reservations, returning the removed
    /// vehicle
    fn delete_vehicle(&mut self, registration: &str) -> Result<Vehicle>;

    /// All vehicles in storage order
    fn vehicles(&self) -> &[Vehicle];

    /// Vehicles sorted by make, case-insensitive
    fn ordered_vehicles(&self) -> Vec<&Vehicle>;

    /// Write a plain-text fleet report to `<report_dir>/<file_name>.txt`
    fn generate_report(&self, file_name: &str, report_dir: &Path) -> Result<PathBuf>;
}

/// Customer-facing reservation operations
pub trait RentalCustomer {
    /// Vehicles of the given make with no reservation overlapping `wanted`,
    /// cheapest daily rate first
    fn available_vehicles(&self, wanted: &Schedule, make: &str) -> Vec<&Vehicle>;

    /// Book a vehicle for the wanted period; returns the total price
    fn add_reservation(&mut self, registration: &str, wanted: Schedule, driver: Driver)
        -> Result<f64>;

    /// Move the reservation overlapping `old` to the dates of `new`; returns
    /// the recomputed total price
    fn change_reservation(&mut self, registration: &str, old: &Schedule, new: Schedule)
        -> Result<f64>;

    /// Cancel the reservation overlapping the given schedule
    fn delete_reservation(&mut self, registration: &str, schedule: &Schedule) -> Result<()>;
}
