//! Reservation: one booked schedule plus the driver it belongs to

use super::{Driver, Schedule};
use serde::{Deserialize, Serialize};

/// A booking owned by exactly one vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub schedule: Schedule,
    #[serde(default)]
    pub driver: Driver,
}

impl Reservation {
    pub fn new(schedule: Schedule, driver: Driver) -> Self {
        Self { schedule, driver }
    }

    /// Delegates to the owned schedule's overlap test
    pub fn overlaps(&self, schedule: &Schedule) -> bool {
        self.schedule.overlaps(schedule)
    }

    pub fn overlaps_reservation(&self, other: &Reservation) -> bool {
        self.schedule.overlaps(&other.schedule)
    }
}
