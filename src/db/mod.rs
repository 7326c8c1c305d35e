//! Database layer: connection setup and raw SQL against PostGIS.
//!
//! Every stored geometry lives in the `Objects` table in a fixed projected
//! spatial reference system, so distances, lengths, and areas all come back
//! in meters. PostGIS functions have no Diesel DSL representation, so the
//! query layer issues parameterized `sql_query` statements directly.

pub mod model;
pub mod queries;

use diesel::pg::PgConnection;
use diesel::Connection;

use crate::config::DatabaseConfig;
use crate::error::{DbError, Result};

/// Spatial reference system for every stored geometry (EPSG:32637,
/// projected UTM zone, linear unit meters).
pub const SRID: i32 = 32637;

/// Open a single synchronous session against the configured database.
///
/// # Errors
/// Returns [`DbError::Connect`] naming the target when the session cannot
/// be established (bad credentials, unreachable host).
pub fn connect(config: &DatabaseConfig) -> Result<PgConnection> {
    PgConnection::establish(&config.url()).map_err(|source| {
        DbError::Connect {
            host: config.host.clone(),
            port: config.port,
            name: config.name.clone(),
            source,
        }
        .into()
    })
}
