use serde::{Deserialize, Serialize};

use crate::model::levels::CompetencyLevel;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalCompetency {
    #[serde(rename = "idCompetencia")]
    pub id: i64,
    #[serde(rename = "puntuacionCompetencia")]
    pub score: f64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    pub color: String,
    #[serde(rename = "nivel")]
    pub level: CompetencyLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalIndicator {
    #[serde(rename = "idIndicador")]
    pub id: i64,
    #[serde(rename = "indicador")]
    pub name: String,
    #[serde(rename = "idDimension")]
    pub dimension_id: i64,
    #[serde(rename = "dimension")]
    pub dimension_name: String,
    #[serde(rename = "puntaje")]
    pub score: f64,
    #[serde(rename = "porcentaje")]
    pub percentage: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalDimension {
    #[serde(rename = "idDimension")]
    pub id: i64,
    #[serde(rename = "dimension")]
    pub name: String,
    #[serde(rename = "puntaje")]
    pub score: f64,
    #[serde(rename = "porcentaje")]
    pub percentage: i64,
    pub color: String,
}
