use serde::Deserialize;
use serde_json::Value;

use crate::input::RawResult;
use crate::input::lenient;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawCompetencyResult {
    #[serde(rename = "idCompetencia", default, deserialize_with = "lenient::id")]
    pub id: Option<i64>,
    #[serde(
        rename = "puntuacionCompetencia",
        default,
        deserialize_with = "lenient::score"
    )]
    pub score: f64,
    #[serde(rename = "nombre", default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawIndicatorResult {
    #[serde(rename = "idIndicador", default, deserialize_with = "lenient::id")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::score")]
    pub valor: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawDimensionResult {
    #[serde(rename = "idDimension", default, deserialize_with = "lenient::id")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::score")]
    pub valor: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct IceSummary {
    #[serde(rename = "valorIceTotal", default, deserialize_with = "lenient::score")]
    pub valor_ice_total: f64,
}

/// Body of `GET Encuesta/resultados-resumen/{emprendedor}/{encuesta}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct IceSummaryResponse {
    #[serde(default, deserialize_with = "lenient::list")]
    pub resultados: Vec<RawCompetencyResult>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub resumen: Option<IceSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct IepmScore {
    #[serde(default, deserialize_with = "lenient::score")]
    pub iepm: f64,
    #[serde(default, deserialize_with = "lenient::text")]
    pub valoracion: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ImprovementActionPayload {
    #[serde(default, deserialize_with = "lenient::text")]
    pub descripcion: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub recomendaciones: Option<String>,
    #[serde(rename = "rangoMin", default, deserialize_with = "lenient::score")]
    pub rango_min: f64,
    #[serde(rename = "rangoMax", default, deserialize_with = "lenient::score")]
    pub rango_max: f64,
}

/// Body of `GET IepmCalculation/Resultado/{emprendedor}/{encuesta}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct IepmResponse {
    #[serde(default, deserialize_with = "lenient::optional")]
    pub iepm: Option<IepmScore>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub dimensiones: Vec<RawDimensionResult>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub indicadores: Vec<RawIndicatorResult>,
    #[serde(
        rename = "accionMejora",
        default,
        deserialize_with = "lenient::optional"
    )]
    pub accion_mejora: Option<ImprovementActionPayload>,
}

impl RawCompetencyResult {
    pub fn to_raw(&self) -> Option<RawResult> {
        Some(RawResult {
            id: self.id?,
            score: self.score,
            label: self.name.clone(),
        })
    }
}

impl RawIndicatorResult {
    pub fn to_raw(&self) -> Option<RawResult> {
        Some(RawResult {
            id: self.id?,
            score: self.valor,
            label: None,
        })
    }
}

impl RawDimensionResult {
    pub fn to_raw(&self) -> Option<RawResult> {
        Some(RawResult {
            id: self.id?,
            score: self.valor,
            label: None,
        })
    }
}

impl IceSummaryResponse {
    /// A bare array is accepted as the `resultados` list; any other
    /// non-object yields an empty response.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Array(_) => Self {
                resultados: lenient::list_from_value(value),
                resumen: None,
            },
            Value::Object(_) => serde_json::from_value(value).unwrap_or_else(|err| {
                tracing::warn!("ICE summary payload could not be decoded: {err}");
                Self::default()
            }),
            other => {
                tracing::warn!(
                    "ICE summary payload is a {}; treating as empty",
                    lenient::value_kind(&other)
                );
                Self::default()
            }
        }
    }

    pub fn raw_results(&self) -> Vec<RawResult> {
        collect_raw(&self.resultados, RawCompetencyResult::to_raw)
    }

    pub fn ice_total(&self) -> f64 {
        self.resumen
            .as_ref()
            .map(|r| r.valor_ice_total)
            .unwrap_or(0.0)
    }
}

impl IepmResponse {
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(_) => serde_json::from_value(value).unwrap_or_else(|err| {
                tracing::warn!("IEPM payload could not be decoded: {err}");
                Self::default()
            }),
            other => {
                tracing::warn!(
                    "IEPM payload is a {}; treating as empty",
                    lenient::value_kind(&other)
                );
                Self::default()
            }
        }
    }

    pub fn raw_indicators(&self) -> Vec<RawResult> {
        collect_raw(&self.indicadores, RawIndicatorResult::to_raw)
    }

    pub fn raw_dimensions(&self) -> Vec<RawResult> {
        collect_raw(&self.dimensiones, RawDimensionResult::to_raw)
    }

    pub fn total(&self) -> f64 {
        self.iepm.as_ref().map(|s| s.iepm).unwrap_or(0.0)
    }
}

fn collect_raw<T>(items: &[T], convert: impl Fn(&T) -> Option<RawResult>) -> Vec<RawResult> {
    let mut out = Vec::with_capacity(items.len());
    let mut dropped = 0usize;
    for item in items {
        match convert(item) {
            Some(raw) => out.push(raw),
            None => dropped += 1,
        }
    }
    if dropped > 0 {
        tracing::debug!("dropped {dropped} result entries without a usable id");
    }
    out
}
