//! Platform layer for bandwise.
//!
//! - [`env`] -- [`Environment`](env::Environment) trait with native and
//!   in-memory implementations.
//! - [`config_loader`] -- config file discovery, parsing, and environment
//!   overrides.

pub mod config_loader;
pub mod env;

pub use config_loader::load_config;
pub use env::{Environment, MapEnvironment, NativeEnvironment};
