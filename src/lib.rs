//! Shared library for `PwePlanner`
//! Contains the degree-plan engine used by the CLI target

pub mod core;
pub mod logger;
pub mod shared;

pub use shared::*;
