pub mod ids;
pub mod levels;
pub mod palette;
pub mod results;
pub mod thresholds;

pub use ids::canonical_competency_id;
pub use levels::{CompetencyLevel, IepmLevel, SwotBucket, TotalLevel};
pub use results::{CanonicalCompetency, CanonicalDimension, CanonicalIndicator};
pub use thresholds::{LevelThresholds, ScoringProfile};
