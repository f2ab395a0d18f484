//! Validate command implementation
//!
//! Builds the project and reports every collected definition error, whether
//! or not `--verbose` is given.

use console::Style;

use archweave::{ArchweaveError, Result, build_project_from_layout};

use crate::cli::ValidateArgs;
use crate::commands::helpers::print_errors;

/// Run validate command
pub fn run(args: ValidateArgs) -> Result<()> {
    let report = build_project_from_layout(&args.source.layout(), &args.source.options());

    let Some(project) = report.project else {
        let mut errors = report.errors.into_iter();
        let first = errors
            .next()
            .unwrap_or_else(|| archweave::error::source::no_files(args.source.layout().display()));
        print_errors(&errors.collect::<Vec<ArchweaveError>>());
        return Err(first);
    };

    print_errors(&report.errors);

    let status = if report.errors.is_empty() {
        Style::new().green().bold().apply_to("✓")
    } else {
        Style::new().yellow().bold().apply_to("!")
    };
    println!(
        "{} Project '{}': {} applications, {} warnings",
        status,
        project.name(),
        project.applications().len(),
        report.errors.len()
    );

    Ok(())
}
