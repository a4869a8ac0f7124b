//! Persistent fleet store
//!
//! Owns the vehicle collection, loads it from a JSON file on open and writes
//! the whole file back after every successful mutation. A save failure leaves
//! the in-memory mutation applied; the error is surfaced to the caller.

use crate::domain::capability::{RentalCustomer, RentalManager};
use crate::domain::model::{Driver, Reservation, Schedule, Vehicle, DATE_FORMAT};
use crate::error::{Error, Result};
use std::cmp::Ordering;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// JSON-file-backed store for the whole fleet
pub struct FleetStore {
    data_path: PathBuf,
    vehicles: Vec<Vehicle>,
}

impl FleetStore {
    /// Open the store at an explicit data file location
    ///
    /// A missing file yields an empty fleet; a malformed file is reported and
    /// also yields an empty fleet.
    pub fn open(data_path: PathBuf) -> Result<Self> {
        let vehicles = if data_path.exists() {
            let file = File::open(&data_path)?;
            let reader = BufReader::new(file);
            match serde_json::from_reader(reader) {
                Ok(vehicles) => {
                    log::info!("fleet loaded from {}", data_path.display());
                    vehicles
                }
                Err(e) => {
                    log::warn!(
                        "could not parse {}: {}; starting with an empty fleet",
                        data_path.display(),
                        e
                    );
                    Vec::new()
                }
            }
        } else {
            log::info!(
                "data file {} not found, starting with an empty fleet",
                data_path.display()
            );
            Vec::new()
        };

        Ok(Self {
            data_path,
            vehicles,
        })
    }

    /// Write the whole fleet to the data file, pretty-printed
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.data_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(&self.data_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.vehicles)?;
        log::debug!("fleet saved to {}", self.data_path.display());
        Ok(())
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    pub fn count(&self) -> usize {
        self.vehicles.len()
    }

    /// Parking lots left, given the lot total; negative once the fleet has
    /// outgrown the car park (informational, never enforced)
    pub fn remaining_lots(&self, total_lots: u32) -> i64 {
        total_lots as i64 - self.vehicles.len() as i64
    }

    fn vehicle_mut(&mut self, registration: &str) -> Result<&mut Vehicle> {
        self.vehicles
            .iter_mut()
            .find(|v| v.registration_number == registration)
            .ok_or_else(|| Error::VehicleNotFound(registration.to_string()))
    }
}

impl RentalManager for FleetStore {
    fn add_vehicle(&mut self, vehicle: Vehicle) -> Result<()> {
        if self
            .vehicles
            .iter()
            .any(|v| v.registration_number == vehicle.registration_number)
        {
            return Err(Error::DuplicateRegistration(vehicle.registration_number));
        }
        self.vehicles.push(vehicle);
        self.save()
    }

    fn delete_vehicle(&mut self, registration: &str) -> Result<Vehicle> {
        let index = self
            .vehicles
            .iter()
            .position(|v| v.registration_number == registration)
            .ok_or_else(|| Error::VehicleNotFound(registration.to_string()))?;

        // Reservations are owned by the vehicle and go with it
        let removed = self.vehicles.remove(index);
        self.save()?;
        Ok(removed)
    }

    fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    fn ordered_vehicles(&self) -> Vec<&Vehicle> {
        let mut ordered: Vec<&Vehicle> = self.vehicles.iter().collect();
        ordered.sort_by(|a, b| a.cmp_by_make(b));
        ordered
    }

    fn generate_report(&self, file_name: &str, report_dir: &Path) -> Result<PathBuf> {
        let file_name = file_name.trim();
        if file_name.is_empty() {
            return Err(Error::Report("file name cannot be empty".to_string()));
        }
        if self.vehicles.is_empty() {
            return Err(Error::Report(
                "no data to report, add vehicles and reservations first".to_string(),
            ));
        }

        let mut report = String::new();
        for vehicle in &self.vehicles {
            report.push_str(&format!(
                "Registration Number: {}, Make: {}, Model: {}\n",
                vehicle.registration_number, vehicle.make, vehicle.model
            ));
            report.push_str("Bookings:\n");

            if vehicle.reservations.is_empty() {
                report.push_str("  No bookings for this vehicle.\n");
            } else {
                let mut bookings: Vec<&Reservation> = vehicle.reservations.iter().collect();
                bookings.sort_by_key(|r| r.schedule.pickup_date);

                for reservation in bookings {
                    report.push_str(&format!(
                        "  Pickup: {}, Dropoff: {}, Total Price: {:.2}\n",
                        reservation.schedule.pickup_date.format(DATE_FORMAT),
                        reservation.schedule.dropoff_date.format(DATE_FORMAT),
                        reservation.schedule.total_price
                    ));
                    let dob = reservation
                        .driver
                        .date_of_birth
                        .map(|d| d.format(DATE_FORMAT).to_string())
                        .unwrap_or_default();
                    report.push_str(&format!(
                        "  Driver: {} {}, DOB: {}, License: {}\n",
                        reservation.driver.name,
                        reservation.driver.surname,
                        dob,
                        reservation.driver.license_number
                    ));
                }
            }
            report.push('\n');
        }

        let report_path = report_dir.join(format!("{}.txt", file_name));
        fs::write(&report_path, report)?;
        log::info!("report written to {}", report_path.display());
        Ok(report_path)
    }
}

impl RentalCustomer for FleetStore {
    fn available_vehicles(&self, wanted: &Schedule, make: &str) -> Vec<&Vehicle> {
        let mut available: Vec<&Vehicle> = self
            .vehicles
            .iter()
            .filter(|v| v.make == make && !v.overlaps(wanted))
            .collect();
        available.sort_by(|a, b| {
            a.daily_rental_price
                .partial_cmp(&b.daily_rental_price)
                .unwrap_or(Ordering::Equal)
        });
        available
    }

    fn add_reservation(
        &mut self,
        registration: &str,
        mut wanted: Schedule,
        driver: Driver,
    ) -> Result<f64> {
        let vehicle = self.vehicle_mut(registration)?;
        if vehicle.overlaps(&wanted) {
            return Err(Error::ScheduleConflict(registration.to_string()));
        }

        let total_price = wanted.days() as f64 * vehicle.daily_rental_price;
        wanted.total_price = total_price;
        vehicle.reservations.push(Reservation::new(wanted, driver));

        self.save()?;
        Ok(total_price)
    }

    fn change_reservation(
        &mut self,
        registration: &str,
        old: &Schedule,
        new: Schedule,
    ) -> Result<f64> {
        let vehicle = self.vehicle_mut(registration)?;
        let index = vehicle
            .reservations
            .iter()
            .position(|r| r.overlaps(old))
            .ok_or_else(|| Error::ReservationNotFound(registration.to_string()))?;

        // The reservation being moved must not conflict with itself
        let conflict = vehicle
            .reservations
            .iter()
            .enumerate()
            .any(|(i, r)| i != index && r.overlaps(&new));
        if conflict {
            return Err(Error::ScheduleConflict(registration.to_string()));
        }

        let total_price = new.days() as f64 * vehicle.daily_rental_price;
        let schedule = &mut vehicle.reservations[index].schedule;
        schedule.pickup_date = new.pickup_date;
        schedule.dropoff_date = new.dropoff_date;
        schedule.total_price = total_price;

        self.save()?;
        Ok(total_price)
    }

    fn delete_reservation(&mut self, registration: &str, schedule: &Schedule) -> Result<()> {
        let vehicle = self.vehicle_mut(registration)?;
        let index = vehicle
            .reservations
            .iter()
            .position(|r| r.overlaps(schedule))
            .ok_or_else(|| Error::ReservationNotFound(registration.to_string()))?;

        vehicle.reservations.remove(index);
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn sched(m: u32, d1: u32, d2: u32) -> Schedule {
        Schedule::new(
            NaiveDate::from_ymd_opt(2024, m, d1).unwrap(),
            NaiveDate::from_ymd_opt(2024, m, d2).unwrap(),
        )
        .unwrap()
    }

    fn open_store(dir: &Path) -> FleetStore {
        FleetStore::open(dir.join("fleet.json")).unwrap()
    }

    #[test]
    fn test_add_vehicle_rejects_duplicate_registration() {
        let dir = tempdir().unwrap();
        let mut store = open_store(dir.path());

        store
            .add_vehicle(Vehicle::new("AB12 CDE", "Honda", "Civic", 35.0))
            .unwrap();
        let second = store.add_vehicle(Vehicle::new("AB12 CDE", "Honda", "Jazz", 30.0));

        assert!(matches!(second, Err(Error::DuplicateRegistration(_))));
        assert_eq!(store.count(), 1);
        assert_eq!(store.vehicles()[0].model, "Civic");
    }

    #[test]
    fn test_remaining_lots_is_informational() {
        let dir = tempdir().unwrap();
        let mut store = open_store(dir.path());

        store
            .add_vehicle(Vehicle::new("AB12 CDE", "Honda", "Civic", 35.0))
            .unwrap();
        assert_eq!(store.remaining_lots(50), 49);

        // Over-capacity adds still succeed
        assert_eq!(store.remaining_lots(1), 0);
        store
            .add_vehicle(Vehicle::new("CD34 EFG", "Audi", "A3", 55.0))
            .unwrap();
        assert_eq!(store.remaining_lots(1), -1);
    }

    #[test]
    fn test_delete_vehicle_cascades_reservations() {
        let dir = tempdir().unwrap();
        let mut store = open_store(dir.path());

        store
            .add_vehicle(Vehicle::new("AB12 CDE", "Honda", "Civic", 35.0))
            .unwrap();
        for (d1, d2) in [(1, 3), (5, 7), (10, 12)] {
            store
                .add_reservation("AB12 CDE", sched(3, d1, d2), Driver::default())
                .unwrap();
        }
        assert_eq!(store.vehicles()[0].reservations.len(), 3);

        let removed = store.delete_vehicle("AB12 CDE").unwrap();
        assert_eq!(removed.reservations.len(), 3);
        assert_eq!(store.count(), 0);

        // Nothing about the vehicle or its bookings survives a reload either
        let reloaded = open_store(dir.path());
        assert_eq!(reloaded.count(), 0);
    }

    #[test]
    fn test_delete_vehicle_not_found() {
        let dir = tempdir().unwrap();
        let mut store = open_store(dir.path());
        assert!(matches!(
            store.delete_vehicle("ZZ99 ZZZ"),
            Err(Error::VehicleNotFound(_))
        ));
    }

    #[test]
    fn test_add_reservation_prices_by_day_span() {
        let dir = tempdir().unwrap();
        let mut store = open_store(dir.path());

        store
            .add_vehicle(Vehicle::new("AB12 CDE", "Honda", "Civic", 20.0))
            .unwrap();
        let total = store
            .add_reservation("AB12 CDE", sched(6, 1, 5), Driver::default())
            .unwrap();

        assert_eq!(total, 80.0);
        assert_eq!(store.vehicles()[0].reservations[0].schedule.total_price, 80.0);
    }

    #[test]
    fn test_add_reservation_rejects_contained_overlap() {
        let dir = tempdir().unwrap();
        let mut store = open_store(dir.path());

        store
            .add_vehicle(Vehicle::new("AB12 CDE", "Honda", "Civic", 35.0))
            .unwrap();
        store
            .add_reservation("AB12 CDE", sched(3, 1, 5), Driver::default())
            .unwrap();

        let contained = store.add_reservation("AB12 CDE", sched(3, 3, 4), Driver::default());
        assert!(matches!(contained, Err(Error::ScheduleConflict(_))));
        assert_eq!(store.vehicles()[0].reservations.len(), 1);
    }

    #[test]
    fn test_add_reservation_unknown_vehicle() {
        let dir = tempdir().unwrap();
        let mut store = open_store(dir.path());
        let result = store.add_reservation("ZZ99 ZZZ", sched(3, 1, 5), Driver::default());
        assert!(matches!(result, Err(Error::VehicleNotFound(_))));
    }

    #[test]
    fn test_change_reservation_to_adjacent_dates() {
        let dir = tempdir().unwrap();
        let mut store = open_store(dir.path());

        store
            .add_vehicle(Vehicle::new("AB12 CDE", "Honda", "Civic", 20.0))
            .unwrap();
        store
            .add_reservation("AB12 CDE", sched(3, 1, 5), Driver::default())
            .unwrap();

        // The new range touches the old one; the reservation must not
        // conflict with itself
        let total = store
            .change_reservation("AB12 CDE", &sched(3, 1, 5), sched(3, 5, 8))
            .unwrap();

        assert_eq!(total, 60.0);
        let schedule = &store.vehicles()[0].reservations[0].schedule;
        assert_eq!(schedule.pickup_date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(schedule.total_price, 60.0);
    }

    #[test]
    fn test_change_reservation_recomputes_price() {
        let dir = tempdir().unwrap();
        let mut store = open_store(dir.path());

        store
            .add_vehicle(Vehicle::new("AB12 CDE", "Honda", "Civic", 20.0))
            .unwrap();
        store
            .add_reservation("AB12 CDE", sched(6, 1, 5), Driver::default())
            .unwrap();

        let total = store
            .change_reservation("AB12 CDE", &sched(6, 1, 5), sched(6, 10, 12))
            .unwrap();
        assert_eq!(total, 40.0);
        assert_eq!(store.vehicles()[0].reservations[0].schedule.total_price, 40.0);
    }

    #[test]
    fn test_change_reservation_conflict_with_other_booking() {
        let dir = tempdir().unwrap();
        let mut store = open_store(dir.path());

        store
            .add_vehicle(Vehicle::new("AB12 CDE", "Honda", "Civic", 20.0))
            .unwrap();
        store
            .add_reservation("AB12 CDE", sched(3, 1, 5), Driver::default())
            .unwrap();
        store
            .add_reservation("AB12 CDE", sched(3, 10, 15), Driver::default())
            .unwrap();

        let result = store.change_reservation("AB12 CDE", &sched(3, 1, 5), sched(3, 12, 14));
        assert!(matches!(result, Err(Error::ScheduleConflict(_))));

        // Unchanged on failure
        assert_eq!(
            store.vehicles()[0].reservations[0].schedule.pickup_date,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
    }

    #[test]
    fn test_delete_reservation_by_overlapping_range() {
        let dir = tempdir().unwrap();
        let mut store = open_store(dir.path());

        store
            .add_vehicle(Vehicle::new("AB12 CDE", "Honda", "Civic", 20.0))
            .unwrap();
        store
            .add_reservation("AB12 CDE", sched(3, 1, 5), Driver::default())
            .unwrap();

        store
            .delete_reservation("AB12 CDE", &sched(3, 4, 4))
            .unwrap();
        assert!(store.vehicles()[0].reservations.is_empty());

        let missing = store.delete_reservation("AB12 CDE", &sched(3, 1, 5));
        assert!(matches!(missing, Err(Error::ReservationNotFound(_))));
    }

    #[test]
    fn test_available_vehicles_filter_and_order() {
        let dir = tempdir().unwrap();
        let mut store = open_store(dir.path());

        store
            .add_vehicle(Vehicle::new("H1", "Honda", "Civic", 40.0))
            .unwrap();
        store
            .add_vehicle(Vehicle::new("H2", "Honda", "Jazz", 25.0))
            .unwrap();
        store
            .add_vehicle(Vehicle::new("H3", "Honda", "CR-V", 55.0))
            .unwrap();
        store
            .add_vehicle(Vehicle::new("A1", "Audi", "A3", 20.0))
            .unwrap();

        // H3 is booked over the wanted period
        store
            .add_reservation("H3", sched(7, 1, 10), Driver::default())
            .unwrap();

        let wanted = sched(7, 5, 8);
        let available = store.available_vehicles(&wanted, "Honda");
        let regs: Vec<&str> = available
            .iter()
            .map(|v| v.registration_number.as_str())
            .collect();
        assert_eq!(regs, ["H2", "H1"]);

        // Make match is exact, case-sensitive
        assert!(store.available_vehicles(&wanted, "honda").is_empty());
    }

    #[test]
    fn test_ordered_vehicles_by_make() {
        let dir = tempdir().unwrap();
        let mut store = open_store(dir.path());

        for (reg, make) in [("H1", "honda"), ("A1", "Audi"), ("B1", "bmw")] {
            store
                .add_vehicle(Vehicle::new(reg, make, "any", 10.0))
                .unwrap();
        }

        let makes: Vec<&str> = store
            .ordered_vehicles()
            .iter()
            .map(|v| v.make.as_str())
            .collect();
        assert_eq!(makes, ["Audi", "bmw", "honda"]);
    }

    #[test]
    fn test_report_refuses_empty_name_and_empty_fleet() {
        let dir = tempdir().unwrap();
        let mut store = open_store(dir.path());

        assert!(matches!(
            store.generate_report("fleet", dir.path()),
            Err(Error::Report(_))
        ));

        store
            .add_vehicle(Vehicle::new("AB12 CDE", "Honda", "Civic", 20.0))
            .unwrap();
        assert!(matches!(
            store.generate_report("  ", dir.path()),
            Err(Error::Report(_))
        ));
    }
}
