use lexi_srs::{
    DEFAULT_AGAIN_DELAY_MINUTES, DEFAULT_INTERVALS_DAYS, SchedulerConfig, SrsError,
};
use serde::Deserialize;

/// Deployment environment, selects logging format and security defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub const fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Service configuration read from environment variables.
///
/// | Variable                  | Default                  |
/// |---------------------------|--------------------------|
/// | `ENV`                     | `development`            |
/// | `HOST`                    | `0.0.0.0`                |
/// | `PORT`                    | `3000`                   |
/// | `ALLOWED_ORIGINS`         | `http://localhost:8080`  |
/// | `SRS_INTERVALS_DAYS`      | `1,3,7,14,30,90,180,365` |
/// | `SRS_AGAIN_DELAY_MINUTES` | `10`                     |
/// | `MAX_CATALOG_SIZE`        | `10000`                  |
#[derive(Clone, Debug, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub env: Environment,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
    #[serde(default = "default_intervals_days")]
    pub srs_intervals_days: Vec<u32>,
    #[serde(default = "default_again_delay_minutes")]
    pub srs_again_delay_minutes: u32,
    #[serde(default = "default_max_catalog_size")]
    pub max_catalog_size: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    3000
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:8080".to_string()]
}

fn default_intervals_days() -> Vec<u32> {
    DEFAULT_INTERVALS_DAYS.to_vec()
}

const fn default_again_delay_minutes() -> u32 {
    DEFAULT_AGAIN_DELAY_MINUTES
}

const fn default_max_catalog_size() -> usize {
    10_000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            env: Environment::default(),
            host: default_host(),
            port: default_port(),
            allowed_origins: default_allowed_origins(),
            srs_intervals_days: default_intervals_days(),
            srs_again_delay_minutes: default_again_delay_minutes(),
            max_catalog_size: default_max_catalog_size(),
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }

    /// Build the configuration from explicit key/value pairs.
    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validated scheduler parameters.
    pub fn scheduler_config(&self) -> Result<SchedulerConfig, SrsError> {
        SchedulerConfig::new(
            self.srs_intervals_days.clone(),
            self.srs_again_delay_minutes,
        )
    }
}
