//! Configuration handling for archweave
//!
//! This module contains:
//! - [`definition`] - The YAML/JSON definition file format and its raw records
//! - [`options`] - Options controlling a project build

pub mod definition;
pub mod options;

pub use definition::{
    ApplicationDefinition, Definition, DefinitionFormat, DependencyDefinition, ProjectDefinition,
    RawRecord,
};
pub use options::BuildOptions;
