//! Command-line interface definitions.

pub mod check;
pub mod geometries;
pub mod measures;
pub mod output;
pub mod shell;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Geoshell - Interactive PostGIS geometry inspection and editing.
#[derive(Parser, Debug)]
#[command(name = "geoshell")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, default_value = "geoshell.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive menu shell (the default when no command is given)
    Shell,

    /// List every stored geometry as WKT
    List,

    /// List geometries within a distance of a point
    Within(WithinArgs),

    /// Insert a new geometry from WKT
    Insert(InsertArgs),

    /// Compute lengths of all LineString geometries
    Lengths,

    /// Compute areas of all Polygon geometries
    Areas,

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `geoshell check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file
    Config,
    /// Test connectivity to the database
    Connection,
}

/// Arguments for the `within` subcommand.
#[derive(Parser, Debug)]
#[command(allow_negative_numbers = true)]
pub struct WithinArgs {
    /// X coordinate of the reference point (meters)
    pub x: f64,

    /// Y coordinate of the reference point (meters)
    pub y: f64,

    /// Distance threshold in meters (boundary inclusive)
    pub distance: f64,
}

/// Arguments for the `insert` subcommand.
#[derive(Parser, Debug)]
pub struct InsertArgs {
    /// Geometry in well-known text, e.g. 'POINT(500000 4649776)'
    pub wkt: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn within_accepts_negative_coordinates() {
        let cli = Cli::parse_from(["geoshell", "within", "-100.5", "4649776", "25"]);
        match cli.command {
            Some(Commands::Within(args)) => {
                assert_eq!(args.x, -100.5);
                assert_eq!(args.distance, 25.0);
            }
            other => panic!("expected within command, got {other:?}"),
        }
    }

    #[test]
    fn no_subcommand_defaults_to_shell() {
        let cli = Cli::parse_from(["geoshell"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.config, PathBuf::from("geoshell.toml"));
    }
}
