//! Diagnostic checks for configuration and connectivity.

use std::path::Path;

use crate::cli::output;
use crate::config::Config;
use crate::db;
use crate::error::Result;

/// Validate the configuration file at `path`.
///
/// Unlike the query commands this does not fall back to built-in defaults:
/// validating a file that is not there should fail loudly.
pub fn config(path: &Path) -> Result<()> {
    let config = Config::load(path)?;

    output::ok(&format!("Config valid: {}", path.display()));
    output::key_value(
        "Database",
        format!(
            "{}:{}/{}",
            config.database.host, config.database.port, config.database.name
        ),
    );
    output::key_value("User", &config.database.user);
    output::key_value("Log level", &config.logging.level);
    println!();
    println!(
        "  Probe connectivity with {}",
        output::highlight("geoshell check connection")
    );
    Ok(())
}

/// Probe database connectivity with the configured credentials.
pub fn connection(config: &Config) -> Result<()> {
    output::progress("Connecting");

    match db::connect(&config.database) {
        Ok(_conn) => {
            output::progress_done(true);
            output::ok("Database connection established");
            Ok(())
        }
        Err(err) => {
            output::progress_done(false);
            Err(err)
        }
    }
}
