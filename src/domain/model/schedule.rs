//! Rental schedule: a pickup/dropoff date pair and its derived total price

use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used on every console surface
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// A requested or booked rental period
///
/// The total price is derived once at booking time (days x daily rate) and
/// stored alongside the dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub pickup_date: NaiveDate,
    pub dropoff_date: NaiveDate,
    #[serde(default)]
    pub total_price: f64,
}

impl Schedule {
    /// Create a schedule, rejecting inverted ranges
    pub fn new(pickup_date: NaiveDate, dropoff_date: NaiveDate) -> Result<Self> {
        if pickup_date > dropoff_date {
            return Err(Error::InvalidSchedule {
                pickup: pickup_date,
                dropoff: dropoff_date,
            });
        }
        Ok(Self {
            pickup_date,
            dropoff_date,
            total_price: 0.0,
        })
    }

    /// Inclusive-boundary overlap test: ranges sharing an endpoint overlap
    pub fn overlaps(&self, other: &Schedule) -> bool {
        !(self.dropoff_date < other.pickup_date || self.pickup_date > other.dropoff_date)
    }

    /// Rental length in days (dropoff minus pickup)
    pub fn days(&self) -> i64 {
        (self.dropoff_date - self.pickup_date).num_days()
    }
}

/// Parse a console date in dd/mm/yyyy form
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
        .map_err(|_| Error::InvalidDate(text.trim().to_string()))
}
