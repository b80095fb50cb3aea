use serde::{Deserialize, Serialize};

use crate::model::thresholds::LevelThresholds;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompetencyLevel {
    Bajo,
    Medio,
    Alto,
}

impl CompetencyLevel {
    pub fn from_score(score: f64, thresholds: &LevelThresholds) -> Self {
        if score < thresholds.medio_min {
            CompetencyLevel::Bajo
        } else if score < thresholds.alto_min {
            CompetencyLevel::Medio
        } else {
            CompetencyLevel::Alto
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompetencyLevel::Bajo => "Bajo",
            CompetencyLevel::Medio => "Medio",
            CompetencyLevel::Alto => "Alto",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IepmLevel {
    #[serde(rename = "Muy Bajo")]
    MuyBajo,
    Bajo,
    Medio,
    Alto,
    #[serde(rename = "N/A")]
    NoDisponible,
}

impl IepmLevel {
    /// Accepts either a 0..1 ratio or a raw 0..5 Likert value; anything above
    /// one is treated as Likert and scaled down first.
    pub fn from_score(puntaje: f64, thresholds: &LevelThresholds) -> Self {
        let ratio = if puntaje > 1.0 {
            puntaje / thresholds.likert_max
        } else {
            puntaje
        };
        if !(0.0..=1.0).contains(&ratio) {
            return IepmLevel::NoDisponible;
        }
        if ratio < 0.3 {
            IepmLevel::MuyBajo
        } else if ratio < thresholds.medio_min {
            IepmLevel::Bajo
        } else if ratio < thresholds.alto_min {
            IepmLevel::Medio
        } else {
            IepmLevel::Alto
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IepmLevel::MuyBajo => "Muy Bajo",
            IepmLevel::Bajo => "Bajo",
            IepmLevel::Medio => "Medio",
            IepmLevel::Alto => "Alto",
            IepmLevel::NoDisponible => "N/A",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            IepmLevel::MuyBajo => "#FF3333",
            IepmLevel::Bajo => "#FF6E6E",
            IepmLevel::Medio => "#FFE066",
            IepmLevel::Alto => "#7CFFCB",
            IepmLevel::NoDisponible => "#999999",
        }
    }
}

/// Level of an instrument total expressed on the 0..100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TotalLevel {
    Bajo,
    Medio,
    #[serde(rename = "Medio-Alto")]
    MedioAlto,
    Alto,
}

impl TotalLevel {
    pub fn from_total(total: f64, thresholds: &LevelThresholds) -> Self {
        if total >= thresholds.total_alto_min {
            TotalLevel::Alto
        } else if total >= thresholds.total_medio_alto_min {
            TotalLevel::MedioAlto
        } else if total >= thresholds.total_medio_min {
            TotalLevel::Medio
        } else {
            TotalLevel::Bajo
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TotalLevel::Bajo => "Bajo",
            TotalLevel::Medio => "Medio",
            TotalLevel::MedioAlto => "Medio-Alto",
            TotalLevel::Alto => "Alto",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwotBucket {
    Fortaleza,
    Oportunidad,
    Debilidad,
}

impl SwotBucket {
    pub fn from_score(score: f64, thresholds: &LevelThresholds) -> Self {
        if score >= thresholds.strength_min {
            SwotBucket::Fortaleza
        } else if score < thresholds.weakness_below {
            SwotBucket::Debilidad
        } else {
            SwotBucket::Oportunidad
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/levels.rs"]
mod tests;
