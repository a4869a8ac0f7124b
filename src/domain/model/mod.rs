//! Core value types of the rental domain

pub mod driver;
pub mod reservation;
pub mod schedule;
pub mod vehicle;

pub use driver::Driver;
pub use reservation::Reservation;
pub use schedule::{parse_date, Schedule, DATE_FORMAT};
pub use vehicle::Vehicle;
