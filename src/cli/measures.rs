//! Handlers for the length and area measurement commands.

use diesel::pg::PgConnection;
use tabled::{Table, Tabled};
use tracing::debug;

use crate::cli::output;
use crate::db::model::MeasureRow;
use crate::db::queries;
use crate::error::Result;

#[derive(Tabled)]
struct MeasureLine {
    #[tabled(rename = "ID")]
    id: i32,
    #[tabled(rename = "Value")]
    value: String,
}

fn print_measure_table(rows: Vec<MeasureRow>, unit: &str) {
    if rows.is_empty() {
        output::note("No matching geometries found.");
        return;
    }

    let lines: Vec<MeasureLine> = rows
        .into_iter()
        .map(|row| MeasureLine {
            id: row.identifier,
            value: format!("{:.3} {unit}", row.measure),
        })
        .collect();

    let table = Table::new(lines).to_string();
    for line in table.lines() {
        println!("  {line}");
    }
}

/// Print the length of every LineString geometry, in meters.
pub fn lengths(conn: &mut PgConnection) -> Result<()> {
    let rows = queries::line_lengths(conn)?;
    debug!(count = rows.len(), "computed lengths");

    output::section("LineString lengths");
    print_measure_table(rows, "m");
    Ok(())
}

/// Print the area of every Polygon geometry, in square meters.
pub fn areas(conn: &mut PgConnection) -> Result<()> {
    let rows = queries::polygon_areas(conn)?;
    debug!(count = rows.len(), "computed areas");

    output::section("Polygon areas");
    print_measure_table(rows, "m²");
    Ok(())
}
