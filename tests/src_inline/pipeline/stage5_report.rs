use super::*;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("emprende_report_test_{}_{}", std::process::id(), id));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn ice_payload() -> IceSummaryResponse {
    IceSummaryResponse::from_value(json!({
        "resultados": [
            {"idCompetencia": 1001, "puntuacionCompetencia": 0.8},
            {"idCompetencia": 1, "puntuacionCompetencia": 0.4},
            {"idCompetencia": 2010, "puntuacionCompetencia": 0.75}
        ],
        "resumen": {"valorIceTotal": 72.0}
    }))
}

fn iepm_payload() -> IepmResponse {
    IepmResponse::from_value(json!({
        "iepm": {"iepm": 3.5, "valoracion": "Bueno"},
        "indicadores": [{"idIndicador": 1, "valor": 4.0}, {"idIndicador": 8, "valor": 2.0}],
        "accionMejora": {"recomendaciones": "Buscar mentoría. Ampliar red."}
    }))
}

fn build(ice: Option<&IceSummaryResponse>, iepm: Option<&IepmResponse>) -> ReportBundle {
    let tables = ReferenceTables::default();
    let map = DimensionMap::builtin();
    let profile = ScoringProfile::default_v1();
    build_bundle(&ReportInput {
        ice,
        iepm,
        tables: &tables,
        dimension_map: &map,
        profile: &profile,
    })
}

#[test]
fn test_build_ice_report_folds_and_summarises() {
    let report = build_ice_report(
        &ice_payload(),
        &ReferenceTables::default(),
        &ScoringProfile::default_v1(),
    );
    assert_eq!(report.competencies.len(), 2);
    assert!((report.competencies[0].score - 0.6).abs() < 1e-9);
    assert_eq!(report.ice_total, 72.0);
    assert_eq!(report.ice_total_level, TotalLevel::MedioAlto);
    assert_eq!(report.levels.medio, 2);
    assert_eq!(report.statistics.unwrap().total, 2);
}

#[test]
fn test_bundle_with_both_instruments_has_comparison() {
    let ice = ice_payload();
    let iepm = iepm_payload();
    let bundle = build(Some(&ice), Some(&iepm));
    let cmp = bundle.comparison.expect("comparison");
    assert_eq!(cmp.rows.len(), 2);
    assert!(cmp
        .consistency
        .recommendations
        .contains(&"Buscar mentoría".to_string()));
    // dimensions derived from indicators 1 (dim 1) and 8 (dim 3)
    assert_eq!(bundle.iepm.unwrap().dimensions.len(), 2);
}

#[test]
fn test_bundle_single_instrument_has_no_comparison() {
    let ice = ice_payload();
    let bundle = build(Some(&ice), None);
    assert!(bundle.ice.is_some());
    assert!(bundle.iepm.is_none());
    assert!(bundle.comparison.is_none());
}

#[test]
fn test_comparison_skips_na_recommendations() {
    let ice = ice_payload();
    let iepm = IepmResponse::from_value(json!({
        "iepm": {"iepm": 60.0},
        "dimensiones": [{"idDimension": 1, "valor": 3.0}]
    }));
    let bundle = build(Some(&ice), Some(&iepm));
    let recs = bundle.comparison.unwrap().consistency.recommendations;
    assert!(!recs.iter().any(|r| r == "N/A"));
}

#[test]
fn test_write_reports_all_formats() {
    let dir = make_temp_dir();
    let ice = ice_payload();
    let iepm = iepm_payload();
    let bundle = build(Some(&ice), Some(&iepm));
    let written =
        write_reports(&bundle, &ReferenceTables::default(), &dir, ReportFormat::All).unwrap();
    assert_eq!(written.len(), 4);
    for name in ["ice.json", "iepm.json", "comparison.json", "report.txt"] {
        assert!(dir.join(name).exists(), "missing {name}");
    }
    let ice_json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.join("ice.json")).unwrap()).unwrap();
    assert_eq!(ice_json["competencias"][1]["idCompetencia"], 10);
}

#[test]
fn test_write_reports_text_only() {
    let dir = make_temp_dir().join("nested");
    let ice = ice_payload();
    let bundle = build(Some(&ice), None);
    let written =
        write_reports(&bundle, &ReferenceTables::default(), &dir, ReportFormat::Text).unwrap();
    assert_eq!(written, vec![dir.join("report.txt")]);
    assert!(!dir.join("ice.json").exists());
}
