//! Geoshell - Interactive PostGIS geometry inspection and editing.
//!
//! This crate provides a small command-line client for a spatially-enabled
//! PostgreSQL database. It holds a single synchronous connection and issues
//! raw parameterized SQL against a table of geometries stored in a fixed
//! projected spatial reference system (SRID 32637, units of meters).
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files with env overrides
//! - [`db`] - Connection setup and the raw-SQL query layer
//! - [`error`] - Error types for the crate
//! - [`cli`] - Command definitions, the interactive shell, and output helpers
//!
//! # Example
//!
//! ```no_run
//! use geoshell::config::Config;
//! use geoshell::db;
//!
//! fn main() -> geoshell::error::Result<()> {
//!     let config = Config::default();
//!     let mut conn = db::connect(&config.database)?;
//!     for row in db::queries::list_geometries(&mut conn)? {
//!         println!("{}: {}", row.identifier, row.wkt);
//!     }
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod db;
pub mod error;
