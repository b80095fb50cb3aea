use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::input::{IepmResponse, RawResult};
use crate::model::levels::IepmLevel;
use crate::model::palette::dimension_color;
use crate::model::results::{CanonicalDimension, CanonicalIndicator};
use crate::model::thresholds::ScoringProfile;
use crate::pipeline::stage1_competencies::{finite_or_zero, fold_scores};
use crate::reference::{DimensionMap, Focus, IndicatorInfo, ReferenceTables};

const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IepmOverall {
    pub puntaje: f64,
    pub valoracion: String,
    pub criterio: String,
    pub nivel: IepmLevel,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImprovementAction {
    pub descripcion: String,
    pub recomendaciones: String,
    pub rango: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IepmReport {
    #[serde(rename = "resultadoTotal")]
    pub total: IepmOverall,
    #[serde(rename = "porDimension")]
    pub dimensions: Vec<CanonicalDimension>,
    #[serde(rename = "porIndicador")]
    pub indicators: Vec<CanonicalIndicator>,
    #[serde(rename = "accionRecomendada")]
    pub action: ImprovementAction,
}

pub fn normalize_indicators(
    raw: &[RawResult],
    ref_table: &[IndicatorInfo],
    dimension_map: &DimensionMap,
) -> Vec<CanonicalIndicator> {
    normalize_indicators_with(raw, ref_table, dimension_map, &ScoringProfile::default_v1())
}

/// IEPM ids are already flat, so unlike the ICE path there is no band folding;
/// repeats are merged with the same pairwise average.
pub fn normalize_indicators_with(
    raw: &[RawResult],
    ref_table: &[IndicatorInfo],
    dimension_map: &DimensionMap,
    profile: &ScoringProfile,
) -> Vec<CanonicalIndicator> {
    let folded = fold_scores(positive_ids(raw, "indicator"));
    folded
        .into_iter()
        .map(|(id, valor)| {
            let name = ref_table
                .iter()
                .find(|i| i.id == id)
                .map(|i| i.name.clone())
                .unwrap_or_else(|| format!("Indicador {id}"));
            let dimension_id = dimension_map.dimension_of(id);
            CanonicalIndicator {
                id,
                name,
                dimension_id,
                dimension_name: dimension_map.dimension_name(dimension_id),
                score: valor,
                percentage: profile.percentage(valor),
            }
        })
        .collect()
}

pub fn normalize_dimensions(
    raw: &[RawResult],
    dimension_map: &DimensionMap,
    profile: &ScoringProfile,
) -> Vec<CanonicalDimension> {
    fold_scores(positive_ids(raw, "dimension"))
        .into_iter()
        .map(|(id, valor)| canonical_dimension(id, valor, dimension_map, profile))
        .collect()
}

/// Plain mean of indicator values per dimension, for payloads that carry
/// indicators but no dimension breakdown.
pub fn dimensions_from_indicators(
    indicators: &[CanonicalIndicator],
    dimension_map: &DimensionMap,
    profile: &ScoringProfile,
) -> Vec<CanonicalDimension> {
    let mut sums: BTreeMap<i64, (f64, usize)> = BTreeMap::new();
    for indicator in indicators {
        let slot = sums.entry(indicator.dimension_id).or_insert((0.0, 0));
        slot.0 += indicator.score;
        slot.1 += 1;
    }
    sums.into_iter()
        .map(|(id, (sum, n))| canonical_dimension(id, sum / n as f64, dimension_map, profile))
        .collect()
}

pub fn assemble_iepm(
    response: &IepmResponse,
    tables: &ReferenceTables,
    dimension_map: &DimensionMap,
    profile: &ScoringProfile,
) -> IepmReport {
    let indicators = normalize_indicators_with(
        &response.raw_indicators(),
        &tables.indicators,
        dimension_map,
        profile,
    );

    let raw_dimensions = response.raw_dimensions();
    let dimensions = if raw_dimensions.is_empty() && !indicators.is_empty() {
        tracing::info!("IEPM payload has no dimension breakdown; deriving it from indicators");
        dimensions_from_indicators(&indicators, dimension_map, profile)
    } else {
        normalize_dimensions(&raw_dimensions, dimension_map, profile)
    };

    let puntaje = response.total();
    let nivel = IepmLevel::from_score(puntaje, &profile.thresholds);
    let valoracion = response
        .iepm
        .as_ref()
        .and_then(|s| s.valoracion.as_deref())
        .map(or_not_available)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    let action = response.accion_mejora.as_ref();
    let descripcion = action
        .and_then(|a| a.descripcion.as_deref())
        .map(or_not_available)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let recomendaciones = action
        .and_then(|a| a.recomendaciones.as_deref())
        .map(or_not_available)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let rango = match action {
        Some(a) => format!("{}-{}", a.rango_min, a.rango_max),
        None => "0-0".to_string(),
    };

    if indicators.len() != dimension_map.assignments.len() {
        tracing::warn!(
            "expected {} IEPM indicators, normalized {}",
            dimension_map.assignments.len(),
            indicators.len()
        );
    }

    IepmReport {
        total: IepmOverall {
            puntaje,
            valoracion,
            criterio: descripcion.clone(),
            nivel,
            color: nivel.color().to_string(),
        },
        dimensions,
        indicators,
        action: ImprovementAction {
            descripcion,
            recomendaciones,
            rango,
        },
    }
}

pub fn indicators_by_dimension(
    indicators: &[CanonicalIndicator],
    dimension_id: i64,
) -> Vec<&CanonicalIndicator> {
    indicators
        .iter()
        .filter(|i| i.dimension_id == dimension_id)
        .collect()
}

pub fn indicators_by_focus<'a>(
    indicators: &'a [CanonicalIndicator],
    tables: &ReferenceTables,
    focus: Focus,
) -> Vec<&'a CanonicalIndicator> {
    indicators
        .iter()
        .filter(|i| tables.focus_of(i.id) == focus)
        .collect()
}

fn canonical_dimension(
    id: i64,
    valor: f64,
    dimension_map: &DimensionMap,
    profile: &ScoringProfile,
) -> CanonicalDimension {
    CanonicalDimension {
        id,
        name: dimension_map.dimension_name(id),
        score: valor,
        percentage: profile.percentage(valor),
        color: dimension_color(&profile.dimension_palette, id),
    }
}

fn positive_ids<'a>(
    raw: &'a [RawResult],
    kind: &'static str,
) -> impl Iterator<Item = (i64, f64)> + 'a {
    raw.iter().filter_map(move |r| {
        if r.id >= 1 {
            Some((r.id, finite_or_zero(r.score)))
        } else {
            tracing::debug!("discarding {kind} result with id {}", r.id);
            None
        }
    })
}

fn or_not_available(s: &str) -> String {
    if s.trim().is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_indicators.rs"]
mod tests;
