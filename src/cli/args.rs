//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Args, Parser, Subcommand};

use crate::config::DataSource;

/// LightBnB - data access for users, properties and reservations
#[derive(Parser, Debug)]
#[command(name = "lightbnb")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Backing store; overrides DATA_SOURCE
    #[arg(short, long, global = true, value_enum)]
    pub source: Option<DataSource>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Search properties
    Properties(PropertiesArgs),

    /// List a guest's past reservations
    Reservations(ReservationsArgs),

    /// Look up a user
    User(UserArgs),
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to; defaults to SERVER_HOST
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port to listen on; defaults to SERVER_PORT
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Arguments for the properties command
#[derive(Parser, Debug)]
pub struct PropertiesArgs {
    /// Only listings owned by this user
    #[arg(long)]
    pub owner_id: Option<i32>,

    /// Substring of the city name
    #[arg(long)]
    pub city: Option<String>,

    /// Lowest nightly price, in currency units
    #[arg(long = "min-price")]
    pub minimum_price_per_night: Option<f64>,

    /// Highest nightly price, in currency units
    #[arg(long = "max-price")]
    pub maximum_price_per_night: Option<f64>,

    /// Lowest average review rating
    #[arg(long = "min-rating")]
    pub minimum_rating: Option<f64>,

    /// Maximum number of results
    #[arg(short, long)]
    pub limit: Option<u64>,
}

/// Arguments for the reservations command
#[derive(Parser, Debug)]
pub struct ReservationsArgs {
    /// Guest id
    #[arg(short, long)]
    pub guest_id: i32,

    /// Maximum number of results
    #[arg(short, long)]
    pub limit: Option<u64>,
}

/// Arguments for the user command
#[derive(Parser, Debug)]
pub struct UserArgs {
    #[command(flatten)]
    pub lookup: UserLookup,
}

/// Exactly one way to identify the user
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct UserLookup {
    /// Look up by id
    #[arg(long)]
    pub id: Option<i32>,

    /// Look up by email (case-insensitive)
    #[arg(long)]
    pub email: Option<String>,
}
