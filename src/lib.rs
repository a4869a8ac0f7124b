//! Rental Fleet Library
//!
//! Console-driven rental vehicle fleet and reservation management with JSON
//! file persistence.

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod menu;
pub mod output;
pub mod store;
