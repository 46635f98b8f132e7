//! CLI configuration

use datalabel_sdk::EngineConfig;
use serde::{Deserialize, Serialize};

/// Default location of the optional config file, without extension
pub const CONFIG_FILE: &str = "config/datalabel";

/// Environment variable prefix (`DATALABEL_MODEL`, `DATALABEL_BATCH_SIZE`, ...)
pub const ENV_PREFIX: &str = "DATALABEL";

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Model name
    pub model: String,

    /// Inference endpoint base URL
    pub base_url: String,

    /// Per-call inference timeout, in seconds
    pub timeout_secs: u64,

    /// Rows per model request
    pub batch_size: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        let engine = EngineConfig::default();
        Self {
            model: engine.model,
            base_url: engine.base_url,
            timeout_secs: engine.timeout_secs,
            batch_size: engine.batch_size,
        }
    }
}

/// Values given on the command line; `None` keeps the configured value
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub batch_size: Option<usize>,
}

impl CliConfig {
    /// Load configuration from `.env`, the config file and the environment
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();
        Self::load_from(CONFIG_FILE)
    }

    /// Load configuration using `path` as the config file
    pub fn load_from(path: &str) -> anyhow::Result<Self> {
        let config_result = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build();

        match config_result {
            Ok(cfg) => cfg
                .try_deserialize()
                .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e)),
            Err(e) => {
                tracing::warn!("Could not read config ({}), using default configuration", e);
                Ok(Self::default())
            }
        }
    }

    /// Apply command-line overrides
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(model) = overrides.model {
            self.model = model;
        }
        if let Some(base_url) = overrides.base_url {
            self.base_url = base_url;
        }
        if let Some(timeout_secs) = overrides.timeout_secs {
            self.timeout_secs = timeout_secs;
        }
        if let Some(batch_size) = overrides.batch_size {
            self.batch_size = batch_size;
        }
        self
    }

    /// Engine configuration for these settings
    pub fn to_engine_config(&self) -> EngineConfig {
        EngineConfig::new()
            .with_model(self.model.clone())
            .with_base_url(self.base_url.clone())
            .with_timeout_secs(self.timeout_secs)
            .with_batch_size(self.batch_size)
    }
}
