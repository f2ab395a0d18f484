//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use archweave::{BuildOptions, Layout};

/// archweave - architecture model builder
///
/// Builds a project model from definition files and queries its dependencies.
#[derive(Parser, Debug)]
#[command(
    name = "archweave",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Build and query architecture models from definition files",
    long_about = "archweave reads YAML and JSON definition files describing a project, its \
                  applications and their dependencies, merges partial definitions spread over \
                  several files, and answers dependency queries over the resulting model.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  archweave validate ./architecture\n    \
                  archweave list ./architecture --project \"Team A\"\n    \
                  archweave show checkout ./architecture\n    \
                  archweave dependents payments ./architecture --transitive"
)]
pub struct Cli {
    /// Print non-fatal definition errors
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the project and report every definition error
    Validate(ValidateArgs),

    /// List applications of the project
    List(ListArgs),

    /// Show one application
    Show(ShowArgs),

    /// List applications that depend on an application
    Dependents(QueryArgs),

    /// List applications an application depends on
    Dependencies(QueryArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Where definitions are read from and how they are built
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Definition folders, read in the given order
    #[arg(value_name = "PATH", num_args = 1.., default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Project variant to build
    #[arg(long, short = 'p', env = "ARCHWEAVE_PROJECT")]
    pub project: Option<String>,

    /// Fail on any definition or reference error
    #[arg(long, env = "ARCHWEAVE_STRICT")]
    pub strict: bool,

    /// Glob of definition files to skip, relative to each folder
    #[arg(long, value_name = "GLOB")]
    pub exclude: Vec<String>,
}

impl SourceArgs {
    pub fn layout(&self) -> Layout {
        Layout::new(self.paths.iter().cloned())
    }

    pub fn options(&self) -> BuildOptions {
        BuildOptions {
            strict: self.strict,
            project_name: self.project.clone(),
            exclude: self.exclude.clone(),
        }
    }
}

/// Arguments for the validate command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Validate the current folder:\n    archweave validate\n\n\
                  Validate a named project variant:\n    archweave validate ./defs --project \"Team A\"\n\n\
                  Fail on dangling references:\n    archweave validate ./defs --strict")]
pub struct ValidateArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List applications:\n    archweave list ./defs\n\n\
                  Print the model as JSON:\n    archweave list ./defs --json")]
pub struct ListArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Print the whole project as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show an application:\n    archweave show checkout ./defs\n\n\
                  Print it as JSON:\n    archweave show checkout ./defs --json")]
pub struct ShowArgs {
    /// Application name (case-sensitive)
    pub name: String,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Print the application as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the dependents and dependencies commands
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Direct dependents:\n    archweave dependents payments ./defs\n\n\
                  Follow edges transitively:\n    archweave dependencies checkout ./defs --transitive")]
pub struct QueryArgs {
    /// Application name (case-sensitive)
    pub name: String,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Follow dependency edges transitively
    #[arg(long, short = 't')]
    pub transitive: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    archweave completions --shell bash > ~/.bash_completion.d/archweave\n\n\
                  Generate zsh completions:\n    archweave completions --shell zsh > ~/.zfunc/_archweave")]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(long, value_enum, ignore_case = true)]
    pub shell: Shell,
}
