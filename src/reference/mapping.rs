use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::reference::ReferenceTables;

/// Indicator -> dimension assignment for the IEPM instrument.
///
/// The assignment is plain data so a deployment can swap instrument revisions
/// through configuration. The built-in map is the static table of the
/// 8-indicator revision; indicators it does not list fall into
/// `fallback_dimension`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionMap {
    pub assignments: BTreeMap<i64, i64>,
    pub names: BTreeMap<i64, String>,
    #[serde(default = "default_fallback_dimension")]
    pub fallback_dimension: i64,
}

fn default_fallback_dimension() -> i64 {
    1
}

impl DimensionMap {
    pub fn from_tables(tables: &ReferenceTables) -> Self {
        let assignments = tables
            .indicators
            .iter()
            .map(|i| (i.id, i.dimension_id))
            .collect();
        let names = tables
            .dimensions
            .iter()
            .map(|d| (d.id, d.name.clone()))
            .collect();
        Self {
            assignments,
            names,
            fallback_dimension: default_fallback_dimension(),
        }
    }

    pub fn builtin() -> Self {
        Self::from_tables(&ReferenceTables::default())
    }

    pub fn dimension_of(&self, indicator_id: i64) -> i64 {
        self.assignments
            .get(&indicator_id)
            .copied()
            .unwrap_or(self.fallback_dimension)
    }

    pub fn dimension_name(&self, dimension_id: i64) -> String {
        self.names
            .get(&dimension_id)
            .cloned()
            .unwrap_or_else(|| format!("Dimensión {dimension_id}"))
    }

    pub fn dimension_ids(&self) -> Vec<i64> {
        self.names.keys().copied().collect()
    }
}

impl Default for DimensionMap {
    fn default() -> Self {
        Self::builtin()
    }
}
