// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod comparison;
pub mod config;
pub mod depreciation;
pub mod errors;
pub mod formatting;
pub mod recommendation;
pub mod report;
pub mod source;
pub mod vehicle;

// Re-export commonly used types
pub use crate::comparison::{
    compare, reference_metrics, tally, AggregateVerdict, Comparator, ComparisonMetric,
    ComparisonOutcome, Direction, Extraction, Side, ValueDisplay, Winner,
};
pub use crate::config::AutocompareConfig;
pub use crate::depreciation::{
    curve::{analyze as analyze_curve, CurveAnalysis, HoldAdvice},
    project, DepreciationModel, Projection, ProjectionRequest,
};
pub use crate::errors::{Error, Result};
pub use crate::recommendation::{summarize, Recommendation, RecommendationKind};
pub use crate::report::{build_report, ComparisonReport, OutputFormat};
pub use crate::source::{CatalogSource, DemoSource, SelectionCriteria, SourceError, VehicleSource};
pub use crate::vehicle::{NumericField, SpecField, VehicleRecord, VehicleSpecs};
