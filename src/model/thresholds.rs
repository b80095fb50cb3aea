use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::palette::{COMPETENCY_PALETTE, DIMENSION_PALETTE, owned};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelThresholds {
    pub medio_min: f64,
    pub alto_min: f64,
    pub strength_min: f64,
    pub weakness_below: f64,
    pub recommendation_gap: f64,
    pub neutral_gap: f64,
    pub likert_max: f64,
    /// Cut points for instrument totals on the 0..100 scale.
    pub total_medio_min: f64,
    pub total_medio_alto_min: f64,
    pub total_alto_min: f64,
}

impl LevelThresholds {
    pub fn default_v1() -> Self {
        Self {
            medio_min: 0.6,
            alto_min: 0.8,
            strength_min: 0.7,
            weakness_below: 0.5,
            recommendation_gap: 0.2,
            neutral_gap: 0.05,
            likert_max: 5.0,
            total_medio_min: 40.0,
            total_medio_alto_min: 60.0,
            total_alto_min: 80.0,
        }
    }
}

impl Default for LevelThresholds {
    fn default() -> Self {
        Self::default_v1()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringProfile {
    pub thresholds: LevelThresholds,
    pub competency_palette: Vec<String>,
    pub dimension_palette: Vec<String>,
    /// ICE competency id -> IEPM dimension id used when comparing instruments.
    pub competency_dimensions: BTreeMap<i64, i64>,
    pub fallback_dimension: i64,
}

impl ScoringProfile {
    pub fn default_v1() -> Self {
        Self {
            thresholds: LevelThresholds::default_v1(),
            competency_palette: owned(COMPETENCY_PALETTE),
            dimension_palette: owned(DIMENSION_PALETTE),
            competency_dimensions: COMPETENCY_DIMENSIONS.iter().copied().collect(),
            fallback_dimension: 1,
        }
    }

    pub fn dimension_for_competency(&self, competency_id: i64) -> i64 {
        self.competency_dimensions
            .get(&competency_id)
            .copied()
            .unwrap_or(self.fallback_dimension)
    }

    /// Converts a 0..5 Likert value to a rounded 0..100 percentage.
    pub fn percentage(&self, valor: f64) -> i64 {
        if self.thresholds.likert_max <= 0.0 {
            return 0;
        }
        (valor / self.thresholds.likert_max * 100.0).round() as i64
    }
}

impl Default for ScoringProfile {
    fn default() -> Self {
        Self::default_v1()
    }
}

const COMPETENCY_DIMENSIONS: &[(i64, i64)] = &[
    (1, 1),
    (2, 3),
    (3, 1),
    (4, 1),
    (5, 2),
    (6, 2),
    (7, 1),
    (8, 2),
    (9, 1),
    (10, 3),
];
