//! Normalization and aggregation of ICE and IEPM entrepreneurship survey scores.
//!
//! Raw backend results are folded onto canonical competency/indicator ids,
//! labeled from static reference tables and summarised for reports.

pub mod comments;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod reference;
pub mod report;

pub use error::{Error, Result};
pub use input::RawResult;
pub use model::{CanonicalCompetency, CanonicalDimension, CanonicalIndicator, CompetencyLevel};
pub use pipeline::{normalize_competencies, normalize_indicators};
pub use reference::{CompetencyInfo, DimensionMap, IndicatorInfo, ReferenceTables};
