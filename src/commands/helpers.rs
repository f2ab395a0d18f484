//! Command helper utilities

use console::Style;

use archweave::{ArchweaveError, Project, Result, build_project_from_layout};

use crate::cli::SourceArgs;

/// Build the project described by the source arguments
///
/// Non-fatal errors are printed to stderr when `verbose` is set. If no
/// project could be built, the remaining errors are printed and the first one
/// is returned.
pub fn load_project(source: &SourceArgs, verbose: bool) -> Result<Project> {
    let report = build_project_from_layout(&source.layout(), &source.options());

    match report.project {
        Some(project) => {
            if verbose {
                print_errors(&report.errors);
            }
            Ok(project)
        }
        None => {
            let mut errors = report.errors.into_iter();
            let first = errors
                .next()
                .unwrap_or_else(|| archweave::error::source::no_files(source.layout().display()));
            let rest: Vec<ArchweaveError> = errors.collect();
            print_errors(&rest);
            Err(first)
        }
    }
}

/// Print errors to stderr, one per line
pub fn print_errors(errors: &[ArchweaveError]) {
    for err in errors {
        eprintln!("{} {}", Style::new().yellow().bold().apply_to("warning:"), err);
    }
}

/// Print a bulleted list of application names
pub fn print_names<'a>(names: impl IntoIterator<Item = &'a str>) {
    for name in names {
        println!("  - {}", Style::new().cyan().apply_to(name));
    }
}
