use crate::reference::defs::{
    CompetencyDef, DimensionDef, IndicatorDef, builtin_competencies, builtin_dimensions,
    builtin_indicators,
};
use crate::reference::{CompetencyInfo, DimensionInfo, IndicatorInfo, ReferenceTables};

pub fn load_reference_tables() -> ReferenceTables {
    ReferenceTables {
        competencies: builtin_competencies().iter().map(competency_info).collect(),
        indicators: builtin_indicators().iter().map(indicator_info).collect(),
        dimensions: builtin_dimensions().iter().map(dimension_info).collect(),
    }
}

fn competency_info(def: &CompetencyDef) -> CompetencyInfo {
    CompetencyInfo {
        id: def.id,
        name: def.name.to_string(),
        description: def.description.to_string(),
    }
}

fn indicator_info(def: &IndicatorDef) -> IndicatorInfo {
    IndicatorInfo {
        id: def.id,
        name: def.name.to_string(),
        focus: def.focus,
        dimension_id: def.dimension_id,
    }
}

fn dimension_info(def: &DimensionDef) -> DimensionInfo {
    DimensionInfo {
        id: def.id,
        name: def.name.to_string(),
    }
}
