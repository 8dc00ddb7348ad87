//! `.asismap.toml` configuration.
//!
//! Searched from the current directory upwards; every section is optional and
//! missing values fall back to defaults.

mod core;
mod loader;

pub use self::core::{
    AsismapConfig, OutputConfig, ScratchConfig, DEFAULT_LINKED_FILE_NAME, DEFAULT_REPORT_PREFIX,
};
pub use loader::{directory_ancestors, load_config, parse_and_validate_config, CONFIG_FILE_NAME};
