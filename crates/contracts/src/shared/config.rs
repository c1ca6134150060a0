use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GridConfig {
    pub api: ApiConfig,
    pub grid: GridSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Collection endpoint, queried with `?page=<n>`
    pub endpoint: String,
    /// Fields requested from the API; empty means the API default set
    pub fields: Vec<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GridSettings {
    pub page_size: usize,
}

/// Largest `limit` the collection API accepts
pub const MAX_PAGE_SIZE: usize = 100;

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.artic.edu/api/v1/artworks".to_string(),
            fields: crate::domain::a001_artwork::Artwork::FIELDS
                .iter()
                .map(|f| f.to_string())
                .collect(),
        }
    }
}

impl Default for GridSettings {
    fn default() -> Self {
        Self { page_size: 12 }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            grid: GridSettings::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

impl GridConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid("api.endpoint is empty".to_string()));
        }
        if self.grid.page_size == 0 || self.grid.page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::Invalid(format!(
                "grid.page_size must be within 1..={}, got {}",
                MAX_PAGE_SIZE, self.grid.page_size
            )));
        }
        Ok(())
    }
}

/// Load configuration
///
/// `raw` TOML overrides the `Default` values key by key; without it the
/// defaults are used as is.
pub fn load_config(raw: Option<&str>) -> Result<GridConfig, ConfigError> {
    let config: GridConfig = match raw {
        Some(raw) => {
            log::info!("Loading grid config from override");
            toml::from_str(raw)?
        }
        None => {
            log::info!("Using default grid configuration");
            GridConfig::default()
        }
    };

    config.validate()?;
    Ok(config)
}
