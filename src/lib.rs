pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod import;
pub mod test_utils;
pub mod utils;

pub use error::{AimpError, Result};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
