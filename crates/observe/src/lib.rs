//! This crate is intended to contain code that is required to provide or
//! improve the observability of a system. For now that is the logging
//! initialization shared by the binaries.
pub mod config;
pub mod tracing;

pub use config::Config;
