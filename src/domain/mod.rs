//! Domain module containing core business types and the role capability traits

pub mod capability;
pub mod model;

pub use capability::{RentalCustomer, RentalManager};
pub use model::*;
