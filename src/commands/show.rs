//! Show command implementation

use console::Style;

use archweave::{Application, Project, Result};

use crate::cli::ShowArgs;
use crate::commands::helpers::{load_project, print_names};

macro_rules! print_optional {
    ($label:expr, $value:expr) => {
        if let Some(v) = $value {
            println!("  {} {}", Style::new().bold().apply_to($label), v);
        }
    };
}

/// Run show command
pub fn run(args: ShowArgs, verbose: bool) -> Result<()> {
    let project = load_project(&args.source, verbose)?;
    let app = project.find_application(&args.name)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(app)?);
        return Ok(());
    }

    show_application(&project, app);
    Ok(())
}

fn show_application(project: &Project, app: &Application) {
    println!("{}", Style::new().bold().yellow().apply_to(&app.name));
    println!("  {} {}", Style::new().bold().apply_to("Category:"), app.category);
    print_optional!("Technology:", &app.technology);
    print_optional!("Group:", &app.group);
    print_optional!("Team:", &app.team);
    print_optional!("Summary:", &app.summary);
    print_optional!("Description:", &app.description);

    if !app.properties.is_empty() {
        println!("  {}", Style::new().bold().apply_to("Properties:"));
        for (key, value) in &app.properties {
            println!("    {key}: {value}");
        }
    }

    if !app.dependencies.is_empty() {
        println!("  {}", Style::new().bold().apply_to("Dependencies:"));
        for dep in &app.dependencies {
            let mut line = format!("{}", Style::new().cyan().apply_to(&dep.reference));
            if let Some(relationship) = &dep.relationship {
                line.push_str(&format!(" ({relationship})"));
            }
            if let Some(label) = &dep.label {
                line.push_str(&format!(" \"{label}\""));
            }
            if !project.contains(&dep.reference) {
                line.push_str(&format!(" {}", Style::new().red().apply_to("[undefined]")));
            }
            println!("    - {line}");
        }
    }

    let dependents = project.find_applications_that_reference_to(app, false);
    if !dependents.is_empty() {
        println!("  {}", Style::new().bold().apply_to("Used by:"));
        print_names(dependents.iter().map(|d| d.name.as_str()));
    }
}
