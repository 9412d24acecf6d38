use std::path::Path;

use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use graph_serialization_json::JsonCodecConfig;
use serde::{Deserialize, Serialize};

/// Prefix for environment overrides, e.g. `GRAPH_CODEC__CODEC__PRETTY=true`.
pub const ENV_PREFIX: &str = "GRAPH_CODEC__";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub codec: JsonCodecConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when neither `RUST_LOG` nor `-v` is given.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_owned(),
        }
    }
}

impl AppConfig {
    /// Layered config:
    /// 1) defaults -> 2) YAML (if provided) -> 3) env (`GRAPH_CODEC__*`)
    ///
    /// # Errors
    /// Returns an error if the file is missing or any layer fails to deserialize.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            if !path.is_file() {
                anyhow::bail!("config file does not exist: {}", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }
        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("invalid configuration")
    }

    /// 4) CLI flags win over every other layer.
    pub fn apply_cli_overrides(&mut self, pretty: bool) {
        if pretty {
            self.codec.pretty = true;
        }
    }
}
