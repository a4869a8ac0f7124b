//! Rental vehicle: fleet identity plus its owned reservations

use super::{Reservation, Schedule};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A vehicle in the fleet
///
/// The registration number is the unique key across the fleet; reservations
/// are kept in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub registration_number: String,
    pub make: String,
    pub model: String,
    pub daily_rental_price: f64,
    #[serde(default)]
    pub reservations: Vec<Reservation>,
}

impl Vehicle {
    pub fn new(
        registration_number: impl Into<String>,
        make: impl Into<String>,
        model: impl Into<String>,
        daily_rental_price: f64,
    ) -> Self {
        Self {
            registration_number: registration_number.into(),
            make: make.into(),
            model: model.into(),
            daily_rental_price,
            reservations: Vec::new(),
        }
    }

    /// True if any owned reservation overlaps the given schedule
    pub fn overlaps(&self, schedule: &Schedule) -> bool {
        self.reservations.iter().any(|r| r.overlaps(schedule))
    }

    pub fn overlaps_reservation(&self, other: &Reservation) -> bool {
        self.reservations
            .iter()
            .any(|r| r.overlaps_reservation(other))
    }

    /// Ordering by make, case-insensitive; used with a stable sort so equal
    /// makes keep storage order
    pub fn cmp_by_make(&self, other: &Vehicle) -> Ordering {
        self.make.to_lowercase().cmp(&other.make.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Driver;
    use chrono::NaiveDate;

    fn sched(m: u32, d1: u32, d2: u32) -> Schedule {
        Schedule::new(
            NaiveDate::from_ymd_opt(2024, m, d1).unwrap(),
            NaiveDate::from_ymd_opt(2024, m, d2).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_no_reservations_never_overlaps() {
        let v = Vehicle::new("AB12 CDE", "Honda", "Civic", 35.0);
        assert!(!v.overlaps(&sched(1, 1, 31)));
    }

    #[test]
    fn test_any_reservation_overlap() {
        let mut v = Vehicle::new("AB12 CDE", "Honda", "Civic", 35.0);
        v.reservations
            .push(Reservation::new(sched(3, 1, 5), Driver::default()));
        v.reservations
            .push(Reservation::new(sched(3, 20, 25), Driver::default()));

        assert!(v.overlaps(&sched(3, 4, 10)));
        assert!(v.overlaps(&sched(3, 25, 28)));
        assert!(!v.overlaps(&sched(3, 10, 15)));

        let other = Reservation::new(sched(3, 5, 6), Driver::default());
        assert!(v.overlaps_reservation(&other));
        let free = Reservation::new(sched(3, 10, 15), Driver::default());
        assert!(!v.overlaps_reservation(&free));
    }

    #[test]
    fn test_make_ordering_case_insensitive() {
        let mut vehicles = vec![
            Vehicle::new("H1", "honda", "Jazz", 30.0),
            Vehicle::new("A1", "Audi", "A3", 55.0),
            Vehicle::new("B1", "bmw", "320i", 60.0),
        ];
        vehicles.sort_by(|a, b| a.cmp_by_make(b));

        let makes: Vec<&str> = vehicles.iter().map(|v| v.make.as_str()).collect();
        assert_eq!(makes, ["Audi", "bmw", "honda"]);
    }
}
