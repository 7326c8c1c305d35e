use std::path::Path;

use clap::Parser;
use diesel::pg::PgConnection;
use tracing::info;

use geoshell::cli::{check, geometries, measures, output, shell, CheckCommand, Cli, Commands};
use geoshell::config::Config;
use geoshell::db;
use geoshell::error::Result;

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let conn = open_session(&cli.config)?;
            shell::run(conn)
        }
        Commands::List => {
            let mut conn = open_session(&cli.config)?;
            geometries::list(&mut conn)
        }
        Commands::Within(args) => {
            let mut conn = open_session(&cli.config)?;
            geometries::within(&mut conn, args.x, args.y, args.distance)
        }
        Commands::Insert(args) => {
            let mut conn = open_session(&cli.config)?;
            geometries::insert(&mut conn, &args.wkt)
        }
        Commands::Lengths => {
            let mut conn = open_session(&cli.config)?;
            measures::lengths(&mut conn)
        }
        Commands::Areas => {
            let mut conn = open_session(&cli.config)?;
            measures::areas(&mut conn)
        }
        Commands::Check(CheckCommand::Config) => check::config(&cli.config),
        Commands::Check(CheckCommand::Connection) => {
            let config = Config::load_or_default(&cli.config)?;
            check::connection(&config)
        }
    }
}

/// Load configuration, initialize logging, and open the shared session.
///
/// The menu and query commands start only once a session exists; a failed
/// connect halts startup with a diagnostic instead of a crash.
fn open_session(config_path: &Path) -> Result<PgConnection> {
    let config = Config::load_or_default(config_path)?;
    config.logging.init();

    let conn = db::connect(&config.database)?;
    output::ok("Connection successful");
    info!(
        host = %config.database.host,
        database = %config.database.name,
        "connected"
    );

    Ok(conn)
}
