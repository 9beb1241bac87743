//! Persisted configuration
//!
//! - `toml_config` - TomlConfigRepository implementation

mod toml_config;

pub use toml_config::{
    backup_path, parse_config, to_toml_string, TomlConfigRepository, DEFAULT_CONFIG_FILE,
};
