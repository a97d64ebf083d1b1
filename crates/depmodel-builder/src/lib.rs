//! Dependency model engine.
//!
//! A [`DependencyModelBuilder`] collects dependencies and artifact
//! classifications from any number of contributors and freezes them into an
//! immutable [`DependencyModel`]. Exclusions are applied only when freezing.

pub mod builder;
pub mod filter;
pub mod model;

pub use builder::DependencyModelBuilder;
pub use model::DependencyModel;
