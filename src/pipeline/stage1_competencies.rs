use std::collections::BTreeMap;

use crate::input::RawResult;
use crate::model::ids::{ICE_COMPETENCY_COUNT, canonical_competency_id, is_canonical_competency};
use crate::model::levels::CompetencyLevel;
use crate::model::palette::cyclic_color;
use crate::model::results::CanonicalCompetency;
use crate::model::thresholds::ScoringProfile;
use crate::reference::CompetencyInfo;

pub const UNKNOWN_DESCRIPTION: &str = "Sin descripción";

pub fn normalize_competencies(
    raw: &[RawResult],
    ref_table: &[CompetencyInfo],
) -> Vec<CanonicalCompetency> {
    normalize_competencies_with(raw, ref_table, &ScoringProfile::default_v1())
}

pub fn normalize_competencies_with(
    raw: &[RawResult],
    ref_table: &[CompetencyInfo],
    profile: &ScoringProfile,
) -> Vec<CanonicalCompetency> {
    let folded = fold_scores(raw.iter().filter_map(|r| {
        let id = canonical_competency_id(r.id);
        if is_canonical_competency(id) {
            Some((id, finite_or_zero(r.score)))
        } else {
            tracing::debug!("discarding competency result with id {}", r.id);
            None
        }
    }));

    let out: Vec<CanonicalCompetency> = folded
        .into_iter()
        .map(|(id, score)| {
            let (name, description) = match ref_table.iter().find(|c| c.id == id) {
                Some(info) => (info.name.clone(), info.description.clone()),
                None => (
                    format!("Competencia {id}"),
                    UNKNOWN_DESCRIPTION.to_string(),
                ),
            };
            CanonicalCompetency {
                id,
                score,
                name,
                description,
                color: cyclic_color(&profile.competency_palette, id),
                level: CompetencyLevel::from_score(score, &profile.thresholds),
            }
        })
        .collect();

    if !out.is_empty() && out.len() as i64 != ICE_COMPETENCY_COUNT {
        tracing::warn!(
            "expected {} ICE competencies, normalized {}",
            ICE_COMPETENCY_COUNT,
            out.len()
        );
    }
    out
}

/// NaN and infinite scores count as zero.
pub fn finite_or_zero(score: f64) -> f64 {
    if score.is_finite() { score } else { 0.0 }
}

/// Merges scores sharing an id. A repeat replaces the stored value with the
/// average of the two, so three or more repeats weigh later entries more
/// heavily than a plain mean would. Keys come back in ascending order.
pub fn fold_scores(entries: impl IntoIterator<Item = (i64, f64)>) -> BTreeMap<i64, f64> {
    let mut folded: BTreeMap<i64, f64> = BTreeMap::new();
    for (id, score) in entries {
        folded
            .entry(id)
            .and_modify(|stored| *stored = (*stored + score) / 2.0)
            .or_insert(score);
    }
    folded
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_competencies.rs"]
mod tests;
