use super::*;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("emprende_input_test_{}_{}", std::process::id(), id));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_competencies_accept_numeric_strings() {
    let raw = raw_competencies_from_value(json!([
        {"idCompetencia": "1001", "puntuacionCompetencia": "0.75"},
        {"idCompetencia": 3, "puntuacionCompetencia": 0.5, "nombre": "X", "color": "#000"}
    ]));
    assert_eq!(raw.len(), 2);
    assert_eq!(raw[0].id, 1001);
    assert!((raw[0].score - 0.75).abs() < 1e-12);
    assert_eq!(raw[1].label.as_deref(), Some("X"));
}

#[test]
fn test_competencies_non_array_is_empty() {
    assert!(raw_competencies_from_value(json!({"idCompetencia": 1})).is_empty());
    assert!(raw_competencies_from_value(json!("nope")).is_empty());
    assert!(raw_competencies_from_value(Value::Null).is_empty());
}

#[test]
fn test_competencies_bad_score_becomes_zero_and_bad_id_dropped() {
    let raw = raw_competencies_from_value(json!([
        {"idCompetencia": 2, "puntuacionCompetencia": "abc"},
        {"idCompetencia": 4, "puntuacionCompetencia": null},
        {"idCompetencia": 2.5, "puntuacionCompetencia": 0.9},
        {"puntuacionCompetencia": 0.9},
        "garbage"
    ]));
    assert_eq!(raw.len(), 2);
    assert_eq!(raw[0], RawResult::new(2, 0.0));
    assert_eq!(raw[1], RawResult::new(4, 0.0));
}

#[test]
fn test_indicators_decode() {
    let raw = raw_indicators_from_value(json!([
        {"idIndicador": 1, "valor": 4.2},
        {"idIndicador": "8", "valor": "3"}
    ]));
    assert_eq!(raw, vec![RawResult::new(1, 4.2), RawResult::new(8, 3.0)]);
}

#[test]
fn test_lenient_id_accepts_integral_float() {
    assert_eq!(lenient::id_from_value(&json!(12.0)), Some(12));
    assert_eq!(lenient::id_from_value(&json!(12.5)), None);
    assert_eq!(lenient::id_from_value(&json!(" 7 ")), Some(7));
    assert_eq!(lenient::id_from_value(&json!(true)), None);
}

#[test]
fn test_ice_summary_from_object_and_bare_array() {
    let obj = IceSummaryResponse::from_value(json!({
        "resultados": [{"idCompetencia": 1, "puntuacionCompetencia": 0.8}],
        "resumen": {"valorIceTotal": 0.72}
    }));
    assert_eq!(obj.raw_results(), vec![RawResult {
        id: 1,
        score: 0.8,
        label: None
    }]);
    assert!((obj.ice_total() - 0.72).abs() < 1e-12);

    let bare = IceSummaryResponse::from_value(json!([
        {"idCompetencia": 5, "puntuacionCompetencia": 0.4}
    ]));
    assert_eq!(bare.resultados.len(), 1);
    assert_eq!(bare.ice_total(), 0.0);

    let junk = IceSummaryResponse::from_value(json!(17));
    assert!(junk.resultados.is_empty());
}

#[test]
fn test_ice_summary_resultados_object_degrades() {
    let resp = IceSummaryResponse::from_value(json!({"resultados": {"a": 1}}));
    assert!(resp.resultados.is_empty());
    assert!(resp.resumen.is_none());
}

#[test]
fn test_iepm_response_decode() {
    let resp = IepmResponse::from_value(json!({
        "iepm": {"iepm": 3.8, "valoracion": "Bueno"},
        "dimensiones": [{"idDimension": 1, "valor": 4.0}],
        "indicadores": [{"idIndicador": 2, "valor": 3.5}, {"valor": 1.0}],
        "accionMejora": {"descripcion": "d", "recomendaciones": "r", "rangoMin": 3, "rangoMax": 4}
    }));
    assert!((resp.total() - 3.8).abs() < 1e-12);
    assert_eq!(resp.raw_dimensions(), vec![RawResult::new(1, 4.0)]);
    assert_eq!(resp.raw_indicators(), vec![RawResult::new(2, 3.5)]);
    let action = resp.accion_mejora.unwrap();
    assert_eq!(action.recomendaciones.as_deref(), Some("r"));
    assert_eq!(action.rango_max, 4.0);
}

#[test]
fn test_iepm_response_non_object_is_empty() {
    let resp = IepmResponse::from_value(json!([1, 2, 3]));
    assert!(resp.iepm.is_none());
    assert_eq!(resp.total(), 0.0);
}

#[test]
fn test_load_ice_summary_from_file() {
    let dir = make_temp_dir();
    let path = dir.join("ice.json");
    std::fs::write(
        &path,
        r#"{"resultados":[{"idCompetencia":2010,"puntuacionCompetencia":0.9}],"resumen":{"valorIceTotal":0.9}}"#,
    )
    .unwrap();
    let resp = load_ice_summary(&path).unwrap();
    assert_eq!(resp.raw_results()[0].id, 2010);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = make_temp_dir();
    let err = load_iepm(&dir.join("missing.json")).unwrap_err();
    assert!(matches!(err, InputError::Io { .. }));
}

#[test]
fn test_load_non_json_is_json_error() {
    let dir = make_temp_dir();
    let path = dir.join("bad.json");
    std::fs::write(&path, "not json").unwrap();
    let err = load_ice_summary(&path).unwrap_err();
    assert!(matches!(err, InputError::Json { .. }));
    assert!(err.to_string().contains("bad.json"));
}
