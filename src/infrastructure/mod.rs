//! Infrastructure layer - Configuration files and logging

pub mod config;
pub mod logging;

pub use config::{SchemaConfig, TagEntry, CONFIG_FILE_NAME};
pub use logging::init_logging;
