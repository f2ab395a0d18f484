//! Command implementations for the archweave CLI

pub mod completions;
pub mod dependents;
pub mod helpers;
pub mod list;
pub mod show;
pub mod validate;
