use serde::{Deserialize, Serialize};

use crate::model::results::{CanonicalCompetency, CanonicalDimension};
use crate::model::thresholds::ScoringProfile;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    #[serde(rename = "competencia")]
    pub competency: String,
    #[serde(rename = "iceScore")]
    pub ice_score: f64,
    #[serde(rename = "iepmScore")]
    pub iepm_score: f64,
    #[serde(rename = "diferencia")]
    pub difference: f64,
    #[serde(rename = "recomendacion")]
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallConsistency {
    #[serde(rename = "correlacion")]
    pub ratio: f64,
    #[serde(rename = "analisis")]
    pub analysis: String,
    #[serde(rename = "recomendacionesIntegradas")]
    pub recommendations: Vec<String>,
}

pub fn compare_instruments(
    ice: &[CanonicalCompetency],
    dimensions: &[CanonicalDimension],
    profile: &ScoringProfile,
) -> Vec<ComparisonRow> {
    if ice.is_empty() || dimensions.is_empty() {
        return Vec::new();
    }
    let gap = profile.thresholds.recommendation_gap;
    ice.iter()
        .map(|competency| {
            let dimension_id = profile.dimension_for_competency(competency.id);
            let iepm_score = dimensions
                .iter()
                .find(|d| d.id == dimension_id)
                .map(|d| d.score / profile.thresholds.likert_max)
                .unwrap_or(0.0);
            let difference = competency.score - iepm_score;
            ComparisonRow {
                competency: competency.name.clone(),
                ice_score: competency.score,
                iepm_score,
                difference,
                recommendation: recommendation_for(difference, &competency.name, gap),
            }
        })
        .collect()
}

fn recommendation_for(difference: f64, competency: &str, gap: f64) -> String {
    if difference > gap {
        format!("Excelente desempeño en {competency}. Mantener y potenciar esta fortaleza.")
    } else if difference < -gap {
        format!("Área de oportunidad en {competency}. Se recomienda capacitación específica.")
    } else {
        format!("Desempeño balanceado en {competency}. Continuar con el desarrollo actual.")
    }
}

pub fn is_neutral_difference(difference: f64, profile: &ScoringProfile) -> bool {
    difference.abs() <= profile.thresholds.neutral_gap
}

pub fn ice_average(ice: &[CanonicalCompetency]) -> f64 {
    if ice.is_empty() {
        return 0.0;
    }
    ice.iter().map(|c| c.score).sum::<f64>() / ice.len() as f64
}

pub fn iepm_average(dimensions: &[CanonicalDimension], profile: &ScoringProfile) -> f64 {
    if dimensions.is_empty() {
        return 0.0;
    }
    dimensions
        .iter()
        .map(|d| d.score / profile.thresholds.likert_max)
        .sum::<f64>()
        / dimensions.len() as f64
}

/// Totals are on the backend's 0..100 scale.
pub fn overall_consistency(
    ice_total: f64,
    iepm_total: f64,
    action_recommendations: Option<&str>,
) -> OverallConsistency {
    let max = ice_total.max(iepm_total);
    let min = ice_total.min(iepm_total);
    let ratio = if max > 0.0 { min / max } else { 0.0 };

    let diff = (ice_total - iepm_total).abs();
    let analysis = if diff < 10.0 {
        "Existe una alta consistencia entre los resultados ICE e IEPM, indicando un perfil emprendedor equilibrado."
    } else if diff < 20.0 {
        "Se observa una correlación moderada entre ICE e IEPM, con algunas áreas de oportunidad."
    } else {
        "Los resultados muestran diferencias significativas entre ICE e IEPM, sugiriendo áreas específicas de desarrollo."
    };

    OverallConsistency {
        ratio,
        analysis: analysis.to_string(),
        recommendations: integrated_recommendations(ice_total, iepm_total, action_recommendations),
    }
}

fn integrated_recommendations(
    ice_total: f64,
    iepm_total: f64,
    action_recommendations: Option<&str>,
) -> Vec<String> {
    let mut out = Vec::new();
    if ice_total > 70.0 {
        out.push(
            "Aprovechar la alta capacidad de innovación para desarrollar productos únicos"
                .to_string(),
        );
    } else if ice_total < 50.0 {
        out.push(
            "Enfocarse en fortalecer las dimensiones de creatividad e innovación".to_string(),
        );
    }

    if iepm_total > 70.0 {
        out.push(
            "Utilizar el fuerte perfil emprendedor para liderar nuevos proyectos".to_string(),
        );
    } else if iepm_total < 50.0 {
        out.push(
            "Trabajar en el desarrollo de habilidades emprendedoras fundamentales".to_string(),
        );
    }

    if let Some(text) = action_recommendations {
        out.extend(split_sentences(text));
    }

    if out.is_empty() {
        out.push("Continuar desarrollando habilidades emprendedoras".to_string());
    }
    out
}

pub fn split_sentences(text: &str) -> Vec<String> {
    text.split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_compare.rs"]
mod tests;
