//! List command implementation
//!
//! Lists every application of the project with its category, technology and
//! number of direct dependencies and dependents.

use console::Style;

use archweave::resolver::{build_dependency_list, build_reverse_list};
use archweave::{Project, Result};

use crate::cli::ListArgs;
use crate::commands::helpers::load_project;

/// Run list command
pub fn run(args: ListArgs, verbose: bool) -> Result<()> {
    let project = load_project(&args.source, verbose)?;

    if args.json {
        return print_json(&project);
    }

    list_applications(&project);
    Ok(())
}

fn print_json(project: &Project) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(project)?);
    Ok(())
}

fn list_applications(project: &Project) {
    println!(
        "{} ({} applications)",
        Style::new().bold().apply_to(project.name()),
        project.applications().len()
    );
    if let Some(description) = project.description() {
        println!("{description}");
    }
    println!();

    let dependencies = build_dependency_list(project);
    let dependents = build_reverse_list(project);

    for app in project.applications() {
        let technology = app.technology.as_deref().unwrap_or("-");
        println!(
            "  {} [{}] {}",
            Style::new().bold().yellow().apply_to(&app.name),
            app.category,
            Style::new().dim().apply_to(technology)
        );
        println!(
            "    {} {}  {} {}",
            Style::new().bold().apply_to("depends on:"),
            dependencies.get(&app.name).map_or(0, Vec::len),
            Style::new().bold().apply_to("used by:"),
            dependents.get(&app.name).map_or(0, Vec::len)
        );
    }
}
