use serde::{Deserialize, Serialize};

use crate::model::levels::{CompetencyLevel, SwotBucket};
use crate::model::results::CanonicalCompetency;
use crate::model::thresholds::LevelThresholds;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreStatistics {
    pub promedio: f64,
    pub maximo: f64,
    pub minimo: f64,
    pub total: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelCounts {
    pub alto: usize,
    pub medio: usize,
    pub bajo: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SwotBuckets {
    pub fortalezas: Vec<CanonicalCompetency>,
    pub oportunidades: Vec<CanonicalCompetency>,
    pub debilidades: Vec<CanonicalCompetency>,
}

pub fn score_statistics(values: &[f64]) -> Option<ScoreStatistics> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().sum();
    let maximo = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let minimo = values.iter().copied().fold(f64::INFINITY, f64::min);
    Some(ScoreStatistics {
        promedio: round3(sum / values.len() as f64),
        maximo: round3(maximo),
        minimo: round3(minimo),
        total: values.len(),
    })
}

pub fn competency_statistics(competencies: &[CanonicalCompetency]) -> Option<ScoreStatistics> {
    let scores: Vec<f64> = competencies.iter().map(|c| c.score).collect();
    score_statistics(&scores)
}

pub fn level_counts(competencies: &[CanonicalCompetency]) -> LevelCounts {
    let mut counts = LevelCounts::default();
    for c in competencies {
        match c.level {
            CompetencyLevel::Alto => counts.alto += 1,
            CompetencyLevel::Medio => counts.medio += 1,
            CompetencyLevel::Bajo => counts.bajo += 1,
        }
    }
    counts
}

pub fn swot_buckets(
    competencies: &[CanonicalCompetency],
    thresholds: &LevelThresholds,
) -> SwotBuckets {
    let mut buckets = SwotBuckets::default();
    for c in competencies {
        let target = match SwotBucket::from_score(c.score, thresholds) {
            SwotBucket::Fortaleza => &mut buckets.fortalezas,
            SwotBucket::Oportunidad => &mut buckets.oportunidades,
            SwotBucket::Debilidad => &mut buckets.debilidades,
        };
        target.push(c.clone());
    }
    buckets
}

pub fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_summary.rs"]
mod tests;
