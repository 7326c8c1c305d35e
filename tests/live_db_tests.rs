#![cfg(feature = "integration-tests")]
//! End-to-end tests against a live PostGIS database.
//!
//! Run with `cargo test --features integration-tests`. Connection settings
//! come from `geoshell.toml` (or the built-in defaults) with
//! `GEOSHELL_DB_PASSWORD` overriding the file password. The target
//! database must have the PostGIS extension installed.

use std::time::{SystemTime, UNIX_EPOCH};

use diesel::pg::PgConnection;
use diesel::sql_query;
use diesel::RunQueryDsl;

use geoshell::config::Config;
use geoshell::db::{self, queries, SRID};

fn connect() -> PgConnection {
    let config = Config::load_or_default("geoshell.toml").expect("load config");
    let mut conn = db::connect(&config.database).expect("connect to live database");

    let ddl = format!(
        "CREATE TABLE IF NOT EXISTS Objects \
         (identifier serial PRIMARY KEY, geometry geometry(Geometry, {SRID}))"
    );
    sql_query(ddl).execute(&mut conn).expect("ensure Objects table");

    conn
}

/// Whole-valued coordinates unique per call, so WKT renderings round-trip
/// exactly through ST_AsText.
fn unique_point() -> (f64, f64) {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let x = 100_000 + (nanos % 1_000_000) as i64;
    let y = 1_000_000 + ((nanos / 1_000_000) % 1_000_000) as i64;
    (x as f64, y as f64)
}

#[test]
fn insert_then_list_includes_geometry() {
    let mut conn = connect();
    let (x, y) = unique_point();
    let wkt = format!("POINT({x} {y})");

    let inserted = queries::insert_geometry(&mut conn, &wkt).expect("insert point");
    assert_eq!(inserted, 1);

    let rows = queries::list_geometries(&mut conn).expect("list geometries");
    assert!(
        rows.iter().any(|row| row.wkt == wkt),
        "inserted WKT missing from listing: {wkt}"
    );
}

#[test]
fn zero_distance_query_finds_inserted_point() {
    let mut conn = connect();
    let (x, y) = unique_point();
    let wkt = format!("POINT({x} {y})");

    queries::insert_geometry(&mut conn, &wkt).expect("insert point");

    let rows =
        queries::geometries_within_distance(&mut conn, x, y, 0.0).expect("query within distance");
    let row = rows
        .iter()
        .find(|row| row.wkt == wkt)
        .expect("inserted point should be within distance 0 of itself");
    assert!(row.identifier > 0);
}

#[test]
fn invalid_wkt_leaves_database_unchanged() {
    let mut conn = connect();
    let before = queries::list_geometries(&mut conn).expect("list").len();

    let result = queries::insert_geometry(&mut conn, "POINT(not numbers)");
    assert!(result.is_err(), "malformed WKT should be rejected");

    let after = queries::list_geometries(&mut conn).expect("list").len();
    assert_eq!(before, after);
}

#[test]
fn lengths_cover_exactly_linestrings() {
    let mut conn = connect();
    let (x, y) = unique_point();
    let line = format!("LINESTRING({x} {y}, {} {})", x + 3.0, y + 4.0);

    queries::insert_geometry(&mut conn, &line).expect("insert line");

    let line_id = queries::geometries_within_distance(&mut conn, x, y, 0.0)
        .expect("locate line")
        .first()
        .expect("line should pass through its start point")
        .identifier;

    let lengths = queries::line_lengths(&mut conn).expect("lengths");
    let measure = lengths
        .iter()
        .find(|row| row.identifier == line_id)
        .expect("inserted line should be measured")
        .measure;
    assert!((measure - 5.0).abs() < 1e-6, "3-4-5 line, got {measure}");
    assert!(lengths.iter().all(|row| row.measure >= 0.0));

    // The line must not show up in the area report.
    let areas = queries::polygon_areas(&mut conn).expect("areas");
    assert!(areas.iter().all(|row| row.identifier != line_id));
}

#[test]
fn areas_cover_exactly_polygons() {
    let mut conn = connect();
    let (x, y) = unique_point();
    let polygon = format!(
        "POLYGON(({x} {y}, {} {y}, {} {}, {x} {}, {x} {y}))",
        x + 2.0,
        x + 2.0,
        y + 2.0,
        y + 2.0
    );

    queries::insert_geometry(&mut conn, &polygon).expect("insert polygon");

    let polygon_id = queries::geometries_within_distance(&mut conn, x + 1.0, y + 1.0, 0.0)
        .expect("locate polygon")
        .first()
        .expect("interior point should hit the polygon")
        .identifier;

    let areas = queries::polygon_areas(&mut conn).expect("areas");
    let measure = areas
        .iter()
        .find(|row| row.identifier == polygon_id)
        .expect("inserted polygon should be measured")
        .measure;
    assert!((measure - 4.0).abs() < 1e-6, "2x2 square, got {measure}");
    assert!(areas.iter().all(|row| row.measure >= 0.0));

    let lengths = queries::line_lengths(&mut conn).expect("lengths");
    assert!(lengths.iter().all(|row| row.identifier != polygon_id));
}
