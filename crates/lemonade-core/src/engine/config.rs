use crate::core::models::lattice_box::LatticeBox;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::{info, instrument};

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Box size along axis '{axis}' must be positive, got {size}")]
    InvalidBoxSize { axis: char, size: u32 },
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Invalid configuration in '{path}': {source}")]
    Invalid { path: String, source: ConfigError },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LatticeConfig {
    pub box_size: [u32; 3],
    #[serde(default)]
    pub periodic: [bool; 3],
}

impl LatticeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (axis, &size) in ['x', 'y', 'z'].into_iter().zip(self.box_size.iter()) {
            if size == 0 {
                return Err(ConfigError::InvalidBoxSize { axis, size });
            }
        }
        Ok(())
    }

    pub fn lattice_box(&self) -> LatticeBox {
        LatticeBox::new(self.box_size, self.periodic)
    }
}

/// Which built-in features a system starts with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct FeatureConfig {
    pub confine_to_box: bool,
    pub excluded_volume: bool,
    pub attributes: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SystemConfig {
    pub lattice: LatticeConfig,
    #[serde(default)]
    pub features: FeatureConfig,
}

impl SystemConfig {
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let path_str = path.to_string_lossy().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io {
            path: path_str.clone(),
            source: e,
        })?;
        let config = Self::parse(&content, path_str)?;
        info!(
            box_size = ?config.lattice.box_size,
            periodic = ?config.lattice.periodic,
            "Loaded system configuration."
        );
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigLoadError> {
        Self::parse(content, "<string>".to_string())
    }

    fn parse(content: &str, path: String) -> Result<Self, ConfigLoadError> {
        let config: SystemConfig = toml::from_str(content).map_err(|e| ConfigLoadError::Toml {
            path: path.clone(),
            source: e,
        })?;
        config
            .lattice
            .validate()
            .map_err(|e| ConfigLoadError::Invalid { path, source: e })?;
        Ok(config)
    }
}

#[derive(Default)]
pub struct SystemConfigBuilder {
    box_size: Option<[u32; 3]>,
    periodic: Option<[bool; 3]>,
    confine_to_box: Option<bool>,
    excluded_volume: Option<bool>,
    attributes: Option<bool>,
}

impl SystemConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn box_size(mut self, x: u32, y: u32, z: u32) -> Self {
        self.box_size = Some([x, y, z]);
        self
    }
    pub fn periodic(mut self, x: bool, y: bool, z: bool) -> Self {
        self.periodic = Some([x, y, z]);
        self
    }
    pub fn confine_to_box(mut self, enabled: bool) -> Self {
        self.confine_to_box = Some(enabled);
        self
    }
    pub fn excluded_volume(mut self, enabled: bool) -> Self {
        self.excluded_volume = Some(enabled);
        self
    }
    pub fn attributes(mut self, enabled: bool) -> Self {
        self.attributes = Some(enabled);
        self
    }

    pub fn build(self) -> Result<SystemConfig, ConfigError> {
        let lattice = LatticeConfig {
            box_size: self
                .box_size
                .ok_or(ConfigError::MissingParameter("box_size"))?,
            periodic: self.periodic.unwrap_or_default(),
        };
        lattice.validate()?;
        Ok(SystemConfig {
            lattice,
            features: FeatureConfig {
                confine_to_box: self.confine_to_box.unwrap_or(false),
                excluded_volume: self.excluded_volume.unwrap_or(false),
                attributes: self.attributes.unwrap_or(false),
            },
        })
    }
}
