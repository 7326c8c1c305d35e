//! Handlers for the geometry listing, search, and insert commands.

use diesel::pg::PgConnection;
use tabled::{Table, Tabled};
use tracing::debug;

use crate::cli::output;
use crate::db::model::GeometryRow;
use crate::db::queries;
use crate::error::Result;

#[derive(Tabled)]
struct GeometryLine {
    #[tabled(rename = "ID")]
    id: i32,
    #[tabled(rename = "Geometry (WKT)")]
    wkt: String,
}

fn print_geometry_table(rows: Vec<GeometryRow>) {
    if rows.is_empty() {
        output::note("No geometries found.");
        return;
    }

    let lines: Vec<GeometryLine> = rows
        .into_iter()
        .map(|row| GeometryLine {
            id: row.identifier,
            wkt: row.wkt,
        })
        .collect();

    let table = Table::new(lines).to_string();
    for line in table.lines() {
        println!("  {line}");
    }
}

/// List every stored geometry in WKT.
pub fn list(conn: &mut PgConnection) -> Result<()> {
    let rows = queries::list_geometries(conn)?;
    debug!(count = rows.len(), "fetched geometries");

    output::section("Stored geometries");
    print_geometry_table(rows);
    Ok(())
}

/// List geometries within `distance` meters of the point `(x, y)`.
pub fn within(conn: &mut PgConnection, x: f64, y: f64, distance: f64) -> Result<()> {
    let rows = queries::geometries_within_distance(conn, x, y, distance)?;
    debug!(count = rows.len(), x, y, distance, "fetched geometries in range");

    output::section(&format!("Geometries within {distance} m of ({x}, {y})"));
    print_geometry_table(rows);
    Ok(())
}

/// Insert one geometry from its WKT rendering.
pub fn insert(conn: &mut PgConnection, wkt: &str) -> Result<()> {
    queries::insert_geometry(conn, wkt)?;
    output::ok("Geometry added successfully");
    Ok(())
}
