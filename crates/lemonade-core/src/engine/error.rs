use super::config::{ConfigError, ConfigLoadError};
use crate::core::features::FeatureError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    ConfigLoad(#[from] ConfigLoadError),

    #[error("Feature '{feature}' failed to synchronize: {source}")]
    Feature {
        feature: &'static str,
        #[source]
        source: FeatureError,
    },
}
