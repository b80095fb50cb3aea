use super::*;
use crate::reference::load_reference_tables;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn table() -> Vec<CompetencyInfo> {
    load_reference_tables().competencies
}

#[test]
fn test_empty_input_gives_empty_output() {
    assert!(normalize_competencies(&[], &table()).is_empty());
}

#[test]
fn test_banded_ids_collapse_to_canonical() {
    let raw = vec![
        RawResult::new(1001, 0.5),
        RawResult::new(2010, 0.9),
        RawResult::new(3005, 0.7),
    ];
    let out = normalize_competencies(&raw, &table());
    let ids: Vec<i64> = out.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 5, 10]);
}

#[test]
fn test_duplicate_ids_average_pairwise() {
    let raw = vec![RawResult::new(1, 0.8), RawResult::new(1001, 0.4)];
    let out = normalize_competencies(&raw, &table());
    assert_eq!(out.len(), 1);
    assert!(approx(out[0].score, 0.6));
    assert_eq!(out[0].level, CompetencyLevel::Medio);
}

#[test]
fn test_three_way_collision_uses_running_fold() {
    let raw = vec![
        RawResult::new(2, 0.9),
        RawResult::new(12, 0.1),
        RawResult::new(1002, 0.1),
    ];
    let out = normalize_competencies(&raw, &table());
    assert_eq!(out.len(), 1);
    assert!(approx(out[0].score, 0.3));
}

#[test]
fn test_out_of_range_ids_dropped() {
    let raw = vec![
        RawResult::new(0, 0.9),
        RawResult::new(-4, 0.9),
        RawResult::new(4, 0.2),
    ];
    let out = normalize_competencies(&raw, &table());
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].id, 4);
}

#[test]
fn test_output_sorted_and_unique() {
    let raw: Vec<RawResult> = (1..=30).rev().map(|id| RawResult::new(id, 0.5)).collect();
    let out = normalize_competencies(&raw, &table());
    let ids: Vec<i64> = out.iter().map(|c| c.id).collect();
    assert_eq!(ids, (1..=10).collect::<Vec<_>>());
}

#[test]
fn test_unknown_reference_uses_placeholder() {
    let refs = vec![CompetencyInfo {
        id: 1,
        name: "Liderazgo".to_string(),
        description: "Guía".to_string(),
    }];
    let out = normalize_competencies(&[RawResult::new(7, 0.5)], &refs);
    assert_eq!(out[0].name, "Competencia 7");
    assert_eq!(out[0].description, UNKNOWN_DESCRIPTION);
}

#[test]
fn test_reference_name_and_palette_color() {
    let tables = table();
    let out = normalize_competencies(&[RawResult::new(3, 0.85)], &tables);
    let expected = tables.iter().find(|c| c.id == 3).unwrap();
    assert_eq!(out[0].name, expected.name);
    assert_eq!(out[0].description, expected.description);
    assert_eq!(out[0].color, "#3f51b5");
    assert_eq!(out[0].level, CompetencyLevel::Alto);
}

#[test]
fn test_scenario_two_results() {
    let raw = vec![RawResult::new(10, 0.75), RawResult::new(3, 0.5)];
    let out = normalize_competencies(&raw, &table());
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].id, 3);
    assert!(approx(out[0].score, 0.5));
    assert_eq!(out[0].level, CompetencyLevel::Bajo);
    assert_eq!(out[1].id, 10);
    assert!(approx(out[1].score, 0.75));
    assert_eq!(out[1].level, CompetencyLevel::Medio);
}

#[test]
fn test_custom_profile_thresholds() {
    let mut profile = ScoringProfile::default_v1();
    profile.thresholds.medio_min = 0.4;
    let out = normalize_competencies_with(&[RawResult::new(1, 0.45)], &table(), &profile);
    assert_eq!(out[0].level, CompetencyLevel::Medio);
}

#[test]
fn test_fold_scores_sorted_keys() {
    let folded = fold_scores([(3, 1.0), (1, 0.2), (3, 0.0)]);
    let keys: Vec<i64> = folded.keys().copied().collect();
    assert_eq!(keys, vec![1, 3]);
    assert!(approx(folded[&3], 0.5));
}

#[test]
fn test_non_finite_scores_count_as_zero() {
    let raw = vec![
        RawResult::new(1, f64::NAN),
        RawResult::new(2, f64::INFINITY),
        RawResult::new(3, f64::NEG_INFINITY),
    ];
    let out = normalize_competencies(&raw, &table());
    assert_eq!(out.len(), 3);
    for c in &out {
        assert_eq!(c.score, 0.0);
        assert_eq!(c.level, CompetencyLevel::Bajo);
    }
    let value = serde_json::to_value(&out[0]).unwrap();
    assert_eq!(value["puntuacionCompetencia"], 0.0);
}

#[test]
fn test_non_finite_score_in_collision_folds_as_zero() {
    let raw = vec![RawResult::new(4, 0.8), RawResult::new(1004, f64::NAN)];
    let out = normalize_competencies(&raw, &table());
    assert!(approx(out[0].score, 0.4));
}
