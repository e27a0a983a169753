//! Foundation types for Easy CLI.
//!
//! Shared by every crate in the workspace: the error taxonomy returned by
//! commands and capabilities, and the TOML-backed shell configuration.

pub mod config;
pub mod error;
