pub mod json;
pub mod text;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::levels::TotalLevel;
use crate::model::results::CanonicalCompetency;
use crate::pipeline::stage2_indicators::IepmReport;
use crate::pipeline::stage3_summary::{LevelCounts, ScoreStatistics, SwotBuckets};
use crate::pipeline::stage4_compare::{ComparisonRow, OverallConsistency};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IceReport {
    #[serde(rename = "competencias")]
    pub competencies: Vec<CanonicalCompetency>,
    #[serde(rename = "valorIceTotal")]
    pub ice_total: f64,
    #[serde(rename = "nivelIceTotal")]
    pub ice_total_level: TotalLevel,
    #[serde(rename = "estadisticas")]
    pub statistics: Option<ScoreStatistics>,
    #[serde(rename = "niveles")]
    pub levels: LevelCounts,
    #[serde(rename = "foda")]
    pub swot: SwotBuckets,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    #[serde(rename = "comparacion")]
    pub rows: Vec<ComparisonRow>,
    #[serde(rename = "promedioIce")]
    pub ice_average: f64,
    #[serde(rename = "promedioIepm")]
    pub iepm_average: f64,
    #[serde(rename = "consistencia")]
    pub consistency: OverallConsistency,
}

#[derive(Debug, Clone, Default)]
pub struct ReportBundle {
    pub ice: Option<IceReport>,
    pub iepm: Option<IepmReport>,
    pub comparison: Option<ComparisonReport>,
}

impl ReportBundle {
    pub fn is_empty(&self) -> bool {
        let ice_empty = self
            .ice
            .as_ref()
            .is_none_or(|r| r.competencies.is_empty());
        let iepm_empty = self
            .iepm
            .as_ref()
            .is_none_or(|r| r.indicators.is_empty() && r.dimensions.is_empty());
        ice_empty && iepm_empty
    }
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub fn format_f64_3(v: f64) -> String {
    format!("{:.3}", v)
}

pub fn format_f64_2(v: f64) -> String {
    format!("{:.2}", v)
}

pub fn format_percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
