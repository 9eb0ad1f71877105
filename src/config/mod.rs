//! Configuration loading and management for the shift tracker.
//!
//! This module loads the YAML configuration file covering the HTTP server,
//! the storage backend and display formatting.
//!
//! # Example
//!
//! ```no_run
//! use shift_tracker::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/tracker.yaml").unwrap();
//! println!("Database: {}", config.storage().database_url);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, DisplayConfig, ServerConfig, StorageBackend, StorageConfig};
