//! Error types for rental-fleet

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("vehicle with registration number {0} already exists")]
    DuplicateRegistration(String),

    #[error("vehicle with registration number {0} not found")]
    VehicleNotFound(String),

    #[error("no reservation on vehicle {0} matches the given schedule")]
    ReservationNotFound(String),

    #[error("vehicle {0} is already booked for the requested schedule")]
    ScheduleConflict(String),

    #[error("invalid schedule: pickup {pickup} is after dropoff {dropoff}")]
    InvalidSchedule { pickup: NaiveDate, dropoff: NaiveDate },

    #[error("invalid date \"{0}\", expected dd/mm/yyyy")]
    InvalidDate(String),

    #[error("report error: {0}")]
    Report(String),
}

pub type Result<T> = std::result::Result<T, Error>;
