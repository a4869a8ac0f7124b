//! Fleet persistence store

pub mod fleet;

pub use fleet::FleetStore;
