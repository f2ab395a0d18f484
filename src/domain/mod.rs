//! Domain model for archweave
//!
//! This module contains the built architecture model: a [`Project`] owning its
//! [`Application`]s, each owning its [`Dependency`] list. Dependencies refer to
//! their target by name only, so cycles and forward references need no special
//! handling.

pub mod application;
pub mod category;
pub mod project;

pub use application::{Application, Dependency};
pub use category::Category;
pub use project::{FULL_REPOSITORY_NAME, Project};
