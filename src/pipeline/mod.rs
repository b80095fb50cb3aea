pub mod stage1_competencies;
pub mod stage2_indicators;
pub mod stage3_summary;
pub mod stage4_compare;
pub mod stage5_report;

pub use stage1_competencies::{normalize_competencies, normalize_competencies_with};
pub use stage2_indicators::{
    assemble_iepm, dimensions_from_indicators, normalize_dimensions, normalize_indicators,
    normalize_indicators_with,
};
pub use stage5_report::{ReportFormat, ReportInput, build_bundle, write_reports};
