//! Driver identity attached to a reservation

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Renter identity for a reservation
///
/// All fields are optional in practice; a reservation taken without driver
/// details carries the default (empty) record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub license_number: String,
}

impl Driver {
    /// True if no identifying detail was captured
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.surname.is_empty()
            && self.date_of_birth.is_none()
            && self.license_number.is_empty()
    }
}
