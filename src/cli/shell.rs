//! Interactive menu shell.
//!
//! The shell runs only once a connection is established. Each iteration
//! reads one menu choice; query failures are reported and the loop keeps
//! running so the user can retry, while exiting drops the connection on
//! the way out.

use dialoguer::{theme::ColorfulTheme, Input};
use diesel::pg::PgConnection;
use tracing::debug;

use crate::cli::{geometries, measures, output};
use crate::error::Result;

/// One dispatchable menu action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    ListAll,
    WithinDistance,
    Insert,
    Lengths,
    Areas,
}

/// Outcome of one line of menu input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Dispatch a query action and keep the menu running.
    Run(MenuAction),
    /// Unrecognized input; report it and keep the menu running.
    Invalid,
    /// Leave the loop and close the connection.
    Exit,
}

impl Step {
    fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => Self::Run(MenuAction::ListAll),
            "2" => Self::Run(MenuAction::WithinDistance),
            "3" => Self::Run(MenuAction::Insert),
            "4" => Self::Run(MenuAction::Lengths),
            "5" => Self::Run(MenuAction::Areas),
            "0" => Self::Exit,
            _ => Self::Invalid,
        }
    }
}

fn print_menu() {
    output::section("Choose an option");
    output::note("1: Output all geometries in WKT");
    output::note("2: Output geometries within distance from a point");
    output::note("3: Insert new geometry");
    output::note("4: Calculate lengths of LineStrings");
    output::note("5: Calculate areas of Polygons");
    output::note("0: Exit");
}

/// Run the menu loop until the user exits.
///
/// # Errors
/// Only prompt IO failures terminate the shell with an error; query
/// failures are printed and swallowed.
pub fn run(mut conn: PgConnection) -> Result<()> {
    let theme = ColorfulTheme::default();

    loop {
        print_menu();

        let line: String = Input::with_theme(&theme)
            .with_prompt("Enter your choice")
            .interact_text()?;

        match Step::parse(&line) {
            Step::Invalid => output::warn("Invalid choice, please try again."),
            Step::Exit => break,
            Step::Run(action) => {
                debug!(?action, "menu selection");
                if let Err(err) = dispatch(action, &theme, &mut conn) {
                    output::error(&err.to_string());
                }
            }
        }
    }

    // Sole owner of the session; dropping it here closes it exactly once.
    drop(conn);
    output::note("Connection closed.");
    Ok(())
}

fn dispatch(action: MenuAction, theme: &ColorfulTheme, conn: &mut PgConnection) -> Result<()> {
    match action {
        MenuAction::ListAll => geometries::list(conn),
        MenuAction::WithinDistance => prompt_within(theme, conn),
        MenuAction::Insert => prompt_insert(theme, conn),
        MenuAction::Lengths => measures::lengths(conn),
        MenuAction::Areas => measures::areas(conn),
    }
}

fn prompt_within(theme: &ColorfulTheme, conn: &mut PgConnection) -> Result<()> {
    // Input<f64> rejects unparseable text and asks again.
    let x: f64 = Input::with_theme(theme)
        .with_prompt("Enter X coordinate")
        .interact_text()?;
    let y: f64 = Input::with_theme(theme)
        .with_prompt("Enter Y coordinate")
        .interact_text()?;
    let distance: f64 = Input::with_theme(theme)
        .with_prompt("Enter distance (in meters)")
        .interact_text()?;

    geometries::within(conn, x, y, distance)
}

fn prompt_insert(theme: &ColorfulTheme, conn: &mut PgConnection) -> Result<()> {
    let wkt: String = Input::with_theme(theme)
        .with_prompt("Enter WKT geometry")
        .interact_text()?;

    geometries::insert(conn, &wkt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_map_to_menu_actions() {
        assert_eq!(Step::parse("1"), Step::Run(MenuAction::ListAll));
        assert_eq!(Step::parse("2"), Step::Run(MenuAction::WithinDistance));
        assert_eq!(Step::parse("3"), Step::Run(MenuAction::Insert));
        assert_eq!(Step::parse("4"), Step::Run(MenuAction::Lengths));
        assert_eq!(Step::parse("5"), Step::Run(MenuAction::Areas));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(Step::parse(" 4 "), Step::Run(MenuAction::Lengths));
        assert_eq!(Step::parse("0\n"), Step::Exit);
    }

    #[test]
    fn unknown_choices_keep_the_menu_running() {
        // Step::Invalid takes the warn-and-continue arm of the loop.
        assert_eq!(Step::parse("9"), Step::Invalid);
        assert_eq!(Step::parse("exit"), Step::Invalid);
        assert_eq!(Step::parse(""), Step::Invalid);
        assert_eq!(Step::parse("10"), Step::Invalid);
    }

    #[test]
    fn exit_is_the_only_terminating_choice() {
        assert_eq!(Step::parse("0"), Step::Exit);
        for input in ["1", "2", "3", "4", "5", "9", "abc", ""] {
            assert_ne!(Step::parse(input), Step::Exit, "input {input:?} must not exit");
        }
    }
}
