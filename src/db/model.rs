//! Row types returned by the raw-SQL query layer.

use diesel::prelude::*;
use diesel::sql_types::{Double, Integer, Text};

/// One geometry row rendered as well-known text.
#[derive(QueryableByName, Debug, Clone, PartialEq)]
pub struct GeometryRow {
    /// Database-assigned unique identifier.
    #[diesel(sql_type = Integer)]
    pub identifier: i32,
    /// Well-known-text rendering of the geometry.
    #[diesel(sql_type = Text)]
    pub wkt: String,
}

/// One computed measurement (length or area) for a geometry row.
#[derive(QueryableByName, Debug, Clone, PartialEq)]
pub struct MeasureRow {
    /// Database-assigned unique identifier.
    #[diesel(sql_type = Integer)]
    pub identifier: i32,
    /// Computed value in the reference system's linear unit (meters, or
    /// square meters for areas).
    #[diesel(sql_type = Double)]
    pub measure: f64,
}
