//! Reference resolution for built projects
//!
//! References stay plain names; nothing here turns them into pointers.
//! This module handles:
//! - Final validation of dependency references
//! - Adjacency views used for reporting

pub mod graph;
pub mod validation;

pub use graph::{build_dependency_list, build_reverse_list};
pub use validation::validate_references;
