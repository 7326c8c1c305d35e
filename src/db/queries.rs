//! The five raw-SQL operations against the `Objects` table.
//!
//! Each function takes the shared connection, executes one parameterized
//! statement, and returns typed rows. Nothing here prints; presentation is
//! the CLI layer's job.

use diesel::pg::PgConnection;
use diesel::sql_query;
use diesel::sql_types::{Double, Text};
use diesel::RunQueryDsl;

use super::model::{GeometryRow, MeasureRow};
use super::SRID;
use crate::error::DbError;

const LIST_SQL: &str = "SELECT identifier, ST_AsText(geometry) AS wkt FROM Objects";

const LENGTHS_SQL: &str = "SELECT identifier, ST_Length(geometry) AS measure FROM Objects \
     WHERE ST_GeometryType(geometry) = 'ST_LineString'";

const AREAS_SQL: &str = "SELECT identifier, ST_Area(geometry) AS measure FROM Objects \
     WHERE ST_GeometryType(geometry) = 'ST_Polygon'";

fn within_distance_sql() -> String {
    format!(
        "SELECT identifier, ST_AsText(geometry) AS wkt FROM Objects \
         WHERE ST_DWithin(geometry, ST_SetSRID(ST_MakePoint($1, $2), {SRID}), $3)"
    )
}

fn insert_sql() -> String {
    format!("INSERT INTO Objects (geometry) VALUES (ST_GeomFromText($1, {SRID}))")
}

/// Fetch every stored geometry as an identifier/WKT pair.
pub fn list_geometries(conn: &mut PgConnection) -> Result<Vec<GeometryRow>, DbError> {
    let rows = sql_query(LIST_SQL).load(conn)?;
    Ok(rows)
}

/// Fetch geometries within `distance` meters of the point `(x, y)`.
///
/// The point is interpreted in the fixed reference system and the boundary
/// is inclusive, per `ST_DWithin` semantics.
pub fn geometries_within_distance(
    conn: &mut PgConnection,
    x: f64,
    y: f64,
    distance: f64,
) -> Result<Vec<GeometryRow>, DbError> {
    let rows = sql_query(within_distance_sql())
        .bind::<Double, _>(x)
        .bind::<Double, _>(y)
        .bind::<Double, _>(distance)
        .load(conn)?;
    Ok(rows)
}

/// Insert one geometry from its WKT rendering.
///
/// A single auto-committed statement; on error the database is unchanged.
/// Returns the number of inserted rows.
pub fn insert_geometry(conn: &mut PgConnection, wkt: &str) -> Result<usize, DbError> {
    let inserted = sql_query(insert_sql()).bind::<Text, _>(wkt).execute(conn)?;
    Ok(inserted)
}

/// Compute the length of every LineString geometry, in meters.
///
/// Rows of any other geometry type are excluded, not reported as zero.
pub fn line_lengths(conn: &mut PgConnection) -> Result<Vec<MeasureRow>, DbError> {
    let rows = sql_query(LENGTHS_SQL).load(conn)?;
    Ok(rows)
}

/// Compute the area of every Polygon geometry, in square meters.
pub fn polygon_areas(conn: &mut PgConnection) -> Result<Vec<MeasureRow>, DbError> {
    let rows = sql_query(AREAS_SQL).load(conn)?;
    Ok(rows)
}
