use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Focus {
    Cliente,
    Emprendedor,
    Trabajador,
}

impl Focus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Focus::Cliente => "Cliente",
            Focus::Emprendedor => "Emprendedor",
            Focus::Trabajador => "Trabajador",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CompetencyDef {
    pub id: i64,
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct IndicatorDef {
    pub id: i64,
    pub name: &'static str,
    pub focus: Focus,
    pub dimension_id: i64,
}

#[derive(Debug, Clone, Copy)]
pub struct DimensionDef {
    pub id: i64,
    pub name: &'static str,
}

const BUILTIN_COMPETENCIES: &[CompetencyDef] = &[
    CompetencyDef {
        id: 1,
        name: "Comportamiento Emprendedor",
        description: "Iniciativa y actitud emprendedora",
    },
    CompetencyDef {
        id: 2,
        name: "Creatividad",
        description: "Capacidad de generar ideas innovadoras",
    },
    CompetencyDef {
        id: 3,
        name: "Liderazgo",
        description: "Habilidad para dirigir y motivar equipos",
    },
    CompetencyDef {
        id: 4,
        name: "Personalidad Proactiva",
        description: "Anticipación y acción preventiva",
    },
    CompetencyDef {
        id: 5,
        name: "Tolerancia a la Incertidumbre",
        description: "Manejo de situaciones ambiguas",
    },
    CompetencyDef {
        id: 6,
        name: "Trabajo en Equipo",
        description: "Colaboración y comunicación efectiva",
    },
    CompetencyDef {
        id: 7,
        name: "Pensamiento Estratégico",
        description: "Visión a largo plazo y planificación",
    },
    CompetencyDef {
        id: 8,
        name: "Proyección Social",
        description: "Responsabilidad social y comunitaria",
    },
    CompetencyDef {
        id: 9,
        name: "Orientación Financiera",
        description: "Gestión de recursos económicos",
    },
    CompetencyDef {
        id: 10,
        name: "Orientación Tecnológica e Innovación",
        description: "Adopción de tecnología e innovación",
    },
];

// 8-indicator revision of the instrument.
const BUILTIN_INDICATORS: &[IndicatorDef] = &[
    IndicatorDef {
        id: 1,
        name: "Índice de Satisfacción del Cliente",
        focus: Focus::Cliente,
        dimension_id: 1,
    },
    IndicatorDef {
        id: 2,
        name: "Ingresos",
        focus: Focus::Emprendedor,
        dimension_id: 1,
    },
    IndicatorDef {
        id: 3,
        name: "Tiempo de Obtención de Permisos",
        focus: Focus::Emprendedor,
        dimension_id: 1,
    },
    IndicatorDef {
        id: 4,
        name: "Accesibilidad de la Instalación",
        focus: Focus::Cliente,
        dimension_id: 2,
    },
    IndicatorDef {
        id: 5,
        name: "Gastos de Transportación",
        focus: Focus::Trabajador,
        dimension_id: 2,
    },
    IndicatorDef {
        id: 6,
        name: "Comodidad del Trabajador",
        focus: Focus::Trabajador,
        dimension_id: 2,
    },
    IndicatorDef {
        id: 7,
        name: "Capacidad Tecnológica",
        focus: Focus::Emprendedor,
        dimension_id: 3,
    },
    IndicatorDef {
        id: 8,
        name: "Liderazgo Creativo con Énfasis Innovador",
        focus: Focus::Emprendedor,
        dimension_id: 3,
    },
];

const BUILTIN_DIMENSIONS: &[DimensionDef] = &[
    DimensionDef {
        id: 1,
        name: "Calidad y Eficiencia Laboral",
    },
    DimensionDef {
        id: 2,
        name: "Infraestructura Laboral",
    },
    DimensionDef {
        id: 3,
        name: "Tecnología e Innovación",
    },
];

pub fn builtin_competencies() -> &'static [CompetencyDef] {
    BUILTIN_COMPETENCIES
}

pub fn builtin_indicators() -> &'static [IndicatorDef] {
    BUILTIN_INDICATORS
}

pub fn builtin_dimensions() -> &'static [DimensionDef] {
    BUILTIN_DIMENSIONS
}
