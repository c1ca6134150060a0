//! Grid configuration for the browser build
//!
//! `config.toml` next to `Cargo.toml` is compiled in. If it does not parse or
//! fails validation the `contracts` defaults are used instead.

use contracts::shared::config::{load_config, GridConfig};

const BUNDLED_CONFIG: &str = include_str!("../../config.toml");

pub fn app_config() -> GridConfig {
    match load_config(Some(BUNDLED_CONFIG)) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("config.toml rejected ({}), falling back to defaults", e);
            GridConfig::default()
        }
    }
}
