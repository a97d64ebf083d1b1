//! Core data types for depmodel.
//!
//! This crate defines the values a dependency model is made of: artifact
//! keys and coordinates, resolved dependencies, capability contracts,
//! platform imports, the classification property keys contributed by
//! extensions, the TOML model descriptor, and global configuration.
//!
//! Nothing here performs network I/O; file access is limited to the
//! descriptor, properties, and config loaders.

/// Packaging type assumed when a coordinate does not name one.
pub const DEFAULT_TYPE: &str = "jar";

pub mod artifact;
pub mod capability;
pub mod config;
pub mod dependency;
pub mod descriptor;
pub mod platform;
pub mod properties;
