//! Dependents and dependencies command implementations

use archweave::{Application, Result};

use crate::cli::QueryArgs;
use crate::commands::helpers::{load_project, print_names};

/// Direction of a dependency query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Applications depending on the named one
    Dependents,
    /// Applications the named one depends on
    Dependencies,
}

/// Run dependents or dependencies command
pub fn run(args: QueryArgs, direction: Direction, verbose: bool) -> Result<()> {
    let project = load_project(&args.source, verbose)?;
    let app = project.find_application(&args.name)?;

    let found: Vec<&Application> = match direction {
        Direction::Dependents => project.find_applications_that_reference_to(app, args.transitive),
        Direction::Dependencies => project.find_dependencies_of(app, args.transitive),
    };

    if found.is_empty() {
        let what = match direction {
            Direction::Dependents => "No applications depend on",
            Direction::Dependencies => "No known dependencies for",
        };
        println!("{what} '{}'.", app.name);
        return Ok(());
    }

    print_names(found.iter().map(|a| a.name.as_str()));
    Ok(())
}
