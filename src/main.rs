//! archweave - architecture model builder
//!
//! Command line front end: builds a project model from definition folders and
//! prints it or answers dependency queries about it.

use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::dependents::Direction;

fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    let result = match cli.command {
        Commands::Validate(args) => commands::validate::run(args),
        Commands::List(args) => commands::list::run(args, verbose),
        Commands::Show(args) => commands::show::run(args, verbose),
        Commands::Dependents(args) => {
            commands::dependents::run(args, Direction::Dependents, verbose)
        }
        Commands::Dependencies(args) => {
            commands::dependents::run(args, Direction::Dependencies, verbose)
        }
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
