pub mod defs;
pub mod loader;
pub mod mapping;

use serde::{Deserialize, Serialize};

pub use defs::Focus;
pub use loader::load_reference_tables;
pub use mapping::DimensionMap;

/// Wire shape `{ id, nombre, descripcion }` of a competency reference entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetencyInfo {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorInfo {
    #[serde(rename = "idIndicador")]
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "enfoque")]
    pub focus: Focus,
    #[serde(rename = "idDimension")]
    pub dimension_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionInfo {
    #[serde(rename = "idDimension")]
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
}

/// Missing tables in a config override fall back to the built-in ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceTables {
    pub competencies: Vec<CompetencyInfo>,
    pub indicators: Vec<IndicatorInfo>,
    pub dimensions: Vec<DimensionInfo>,
}

impl ReferenceTables {
    pub fn indicator(&self, id: i64) -> Option<&IndicatorInfo> {
        self.indicators.iter().find(|i| i.id == id)
    }

    /// Focus of an indicator; unknown indicators are attributed to the entrepreneur.
    pub fn focus_of(&self, indicator_id: i64) -> Focus {
        self.indicator(indicator_id)
            .map(|i| i.focus)
            .unwrap_or(Focus::Emprendedor)
    }
}

impl Default for ReferenceTables {
    fn default() -> Self {
        load_reference_tables()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/reference/tests.rs"]
mod tests;
