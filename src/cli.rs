//! CLI definition using clap

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output format for listings
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Parser)]
#[command(name = "rental-fleet")]
#[command(version)]
#[command(about = "Console rental vehicle fleet and reservation manager")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Fleet data file override. Uses config value if not specified.
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive console menu
    Menu,

    /// Fleet administration
    Admin {
        #[command(subcommand)]
        command: AdminCommands,
    },

    /// Customer reservations
    Customer {
        #[command(subcommand)]
        command: CustomerCommands,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set the fleet data file
        #[arg(long)]
        set_data_file: Option<PathBuf>,

        /// Set the report output directory
        #[arg(long)]
        set_report_dir: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Subcommand)]
pub enum AdminCommands {
    /// Add a vehicle to the fleet
    AddVehicle {
        /// Registration number (unique across the fleet)
        registration: String,

        #[arg(long)]
        make: String,

        #[arg(long)]
        model: String,

        /// Daily rental price
        #[arg(long)]
        price: f64,
    },

    /// Delete a vehicle and all of its reservations
    DeleteVehicle {
        registration: String,
    },

    /// List vehicles with full reservation detail
    List,

    /// List vehicles ordered by make with reservation counts
    ListOrdered,

    /// Write a plain-text report of the whole fleet
    Report {
        /// Report base name (a .txt extension is appended)
        name: String,

        /// Directory for the report file. Uses config value if not specified.
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum CustomerCommands {
    /// List vehicles of a make that are free over a date range
    Available {
        /// Vehicle make (exact match)
        make: String,

        /// Pickup date (dd/mm/yyyy)
        #[arg(long)]
        pickup: String,

        /// Dropoff date (dd/mm/yyyy)
        #[arg(long)]
        dropoff: String,
    },

    /// Reserve a vehicle over a date range
    Reserve {
        registration: String,

        /// Pickup date (dd/mm/yyyy)
        #[arg(long)]
        pickup: String,

        /// Dropoff date (dd/mm/yyyy)
        #[arg(long)]
        dropoff: String,

        /// Driver first name
        #[arg(long)]
        driver_name: Option<String>,

        /// Driver surname
        #[arg(long)]
        driver_surname: Option<String>,

        /// Driver date of birth (dd/mm/yyyy)
        #[arg(long)]
        driver_dob: Option<String>,

        /// Driver license number
        #[arg(long)]
        driver_license: Option<String>,
    },

    /// Move an existing reservation to new dates
    Change {
        registration: String,

        /// Pickup date of a range overlapping the reservation to change (dd/mm/yyyy)
        #[arg(long)]
        old_pickup: String,

        /// Dropoff date of that range (dd/mm/yyyy)
        #[arg(long)]
        old_dropoff: String,

        /// New pickup date (dd/mm/yyyy)
        #[arg(long)]
        new_pickup: String,

        /// New dropoff date (dd/mm/yyyy)
        #[arg(long)]
        new_dropoff: String,
    },

    /// Cancel the reservation overlapping a date range
    Cancel {
        registration: String,

        /// Pickup date (dd/mm/yyyy)
        #[arg(long)]
        pickup: String,

        /// Dropoff date (dd/mm/yyyy)
        #[arg(long)]
        dropoff: String,
    },
}
