//! Shared utilities for depmodel.
//!
//! This crate provides the cross-cutting concerns used by the other depmodel
//! crates: the unified error type and a couple of filesystem helpers.

pub mod errors;
pub mod fs;
