use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::thresholds::ScoringProfile;
use crate::reference::{DimensionMap, ReferenceTables};

/// Optional JSON overrides; any field left out keeps its built-in value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub profile: ScoringProfile,
    pub reference: ReferenceTables,
    /// When absent the map is derived from `reference.indicators`.
    pub dimension_map: Option<DimensionMap>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

impl Settings {
    pub fn dimension_map(&self) -> DimensionMap {
        self.dimension_map
            .clone()
            .unwrap_or_else(|| DimensionMap::from_tables(&self.reference))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.profile.thresholds;
        if t.medio_min > t.alto_min {
            return Err(ConfigError::Invalid(format!(
                "medio_min ({}) must not exceed alto_min ({})",
                t.medio_min, t.alto_min
            )));
        }
        if t.weakness_below > t.strength_min {
            return Err(ConfigError::Invalid(format!(
                "weakness_below ({}) must not exceed strength_min ({})",
                t.weakness_below, t.strength_min
            )));
        }
        if !(t.total_medio_min <= t.total_medio_alto_min
            && t.total_medio_alto_min <= t.total_alto_min)
        {
            return Err(ConfigError::Invalid(
                "total cut points must be ascending".to_string(),
            ));
        }
        if t.likert_max <= 0.0 {
            return Err(ConfigError::Invalid(
                "likert_max must be positive".to_string(),
            ));
        }
        if self.profile.competency_palette.is_empty() {
            return Err(ConfigError::Invalid(
                "competency_palette must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let settings: Settings = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    settings.validate()?;
    tracing::info!("loaded settings from {}", path.display());
    Ok(settings)
}

#[cfg(test)]
#[path = "../tests/src_inline/config/tests.rs"]
mod tests;
