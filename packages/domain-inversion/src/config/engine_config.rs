//! Engine configuration

use super::error::{ConfigError, ConfigResult};
use super::io::{ConfigExportV1, EngineOverrides};
use super::preset::Preset;
use super::validation::Validatable;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Upper bound accepted for `max_depth`
pub const MAX_DEPTH_LIMIT: usize = 4096;

const SUPPORTED_VERSIONS: &[u32] = &[1];

/// Engine settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Preset the settings were derived from
    pub preset: Preset,

    /// Deepest nesting accepted when decoding a domain (1..=4096)
    pub max_depth: usize,

    /// Treat `=` clauses on other fields as never blocking an AND
    pub constrained_equality: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::preset(Preset::Standard)
    }
}

impl EngineConfig {
    pub fn preset(preset: Preset) -> Self {
        match preset {
            Preset::Standard => Self {
                preset,
                max_depth: 128,
                constrained_equality: true,
            },
            Preset::Strict => Self {
                preset,
                max_depth: 64,
                constrained_equality: false,
            },
        }
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn constrained_equality(mut self, enabled: bool) -> Self {
        self.constrained_equality = enabled;
        self
    }

    fn apply(mut self, overrides: &EngineOverrides) -> Self {
        if let Some(max_depth) = overrides.max_depth {
            self = self.max_depth(max_depth);
        }
        if let Some(enabled) = overrides.constrained_equality {
            self = self.constrained_equality(enabled);
        }
        self
    }

    /// Load and validate a YAML v1 file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        debug!(path = %path.as_ref().display(), "loading engine config");
        Self::from_yaml_str(&content)
    }

    /// Parse and validate YAML v1 text
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let export: ConfigExportV1 = serde_yaml::from_str(content)?;

        let version = export.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let preset: Preset = export.preset.parse()?;
        let mut config = Self::preset(preset);
        if let Some(overrides) = &export.overrides {
            config = config.apply(overrides);
        }

        config.validate()?;
        Ok(config)
    }

    /// Export as YAML v1; every setting is written as an override
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let export = ConfigExportV1 {
            version: Some(1),
            preset: self.preset.to_string(),
            overrides: Some(EngineOverrides {
                max_depth: Some(self.max_depth),
                constrained_equality: Some(self.constrained_equality),
            }),
        };

        Ok(serde_yaml::to_string(&export)?)
    }
}

impl Validatable for EngineConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_depth == 0 || self.max_depth > MAX_DEPTH_LIMIT {
            return Err(ConfigError::range_with_hint(
                format!("{}.max_depth", self.config_name()),
                self.max_depth,
                1,
                MAX_DEPTH_LIMIT,
                "Domain nesting depth must be at least 1",
            ));
        }
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "EngineConfig"
    }
}
