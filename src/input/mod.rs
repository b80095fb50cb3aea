use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

pub mod lenient;
pub mod payloads;

pub use payloads::{
    IceSummary, IceSummaryResponse, IepmResponse, IepmScore, ImprovementActionPayload,
    RawCompetencyResult, RawDimensionResult, RawIndicatorResult,
};

/// Instrument-neutral result entry fed to the normalizers.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResult {
    pub id: i64,
    pub score: f64,
    pub label: Option<String>,
}

impl RawResult {
    pub fn new(id: i64, score: f64) -> Self {
        Self {
            id,
            score,
            label: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{} is not valid JSON: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub fn read_json(path: &Path) -> Result<Value, InputError> {
    let text = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| InputError::Json {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_ice_summary(path: &Path) -> Result<IceSummaryResponse, InputError> {
    let value = read_json(path)?;
    let response = IceSummaryResponse::from_value(value);
    tracing::info!(
        "loaded ICE payload {}: {} result entries",
        path.display(),
        response.resultados.len()
    );
    Ok(response)
}

pub fn load_iepm(path: &Path) -> Result<IepmResponse, InputError> {
    let value = read_json(path)?;
    let response = IepmResponse::from_value(value);
    tracing::info!(
        "loaded IEPM payload {}: {} indicators, {} dimensions",
        path.display(),
        response.indicadores.len(),
        response.dimensiones.len()
    );
    Ok(response)
}

/// Decodes a loose `resultados` value (array of `{idCompetencia, puntuacionCompetencia}`).
pub fn raw_competencies_from_value(value: Value) -> Vec<RawResult> {
    lenient::list_from_value::<RawCompetencyResult>(value)
        .iter()
        .filter_map(RawCompetencyResult::to_raw)
        .collect()
}

/// Decodes a loose `indicadores` value (array of `{idIndicador, valor}`).
pub fn raw_indicators_from_value(value: Value) -> Vec<RawResult> {
    lenient::list_from_value::<RawIndicatorResult>(value)
        .iter()
        .filter_map(RawIndicatorResult::to_raw)
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
