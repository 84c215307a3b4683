//! Vehicle data sources.
//!
//! The comparison core never fetches anything itself: a [`VehicleSource`]
//! resolves a user's brand/model/year selection into a [`VehicleRecord`]
//! first, and only when both sides resolve is the comparison run.

mod catalog;
mod demo;

pub use catalog::{check_record, CatalogSource};
pub use demo::DemoSource;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::vehicle::VehicleRecord;

/// Why a source could not produce a record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("No vehicle found for {criteria}")]
    NotFound { criteria: String },

    #[error("Data source temporarily unavailable: {message}")]
    Transient { message: String },
}

impl SourceError {
    pub fn not_found(criteria: &SelectionCriteria) -> Self {
        Self::NotFound {
            criteria: criteria.to_string(),
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transient { .. })
    }
}

/// A completed brand/model/year selection
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionCriteria {
    pub brand: String,
    pub model: String,
    pub year: i32,
}

impl SelectionCriteria {
    pub fn new(brand: impl Into<String>, model: impl Into<String>, year: i32) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            year,
        }
    }

    /// Identifier given to records built from this selection
    pub fn record_id(&self) -> String {
        format!("{}-{}-{}", self.brand, self.model, self.year)
    }

    /// Whether `record` is what this selection asks for.
    ///
    /// Brand and model compare case-insensitively, the year exactly.
    pub fn matches(&self, record: &VehicleRecord) -> bool {
        record.brand.eq_ignore_ascii_case(&self.brand)
            && record.model.eq_ignore_ascii_case(&self.model)
            && record.year == self.year
    }
}

impl fmt::Display for SelectionCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.brand, self.model, self.year)
    }
}

impl FromStr for SelectionCriteria {
    type Err = String;

    /// Parse `BRAND/MODEL/YEAR`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').map(str::trim).collect();
        match parts.as_slice() {
            [brand, model, year] if !brand.is_empty() && !model.is_empty() => {
                let year = year
                    .parse::<i32>()
                    .map_err(|e| format!("Invalid year '{}': {}", year, e))?;
                Ok(Self::new(*brand, *model, year))
            }
            _ => Err(format!(
                "Invalid selection '{}'. Expected BRAND/MODEL/YEAR",
                s
            )),
        }
    }
}

/// Anything that can turn a selection into a record
pub trait VehicleSource {
    fn resolve(&self, criteria: &SelectionCriteria) -> Result<VehicleRecord, SourceError>;
}

/// Resolve both sides, failing if either one does not resolve.
pub fn resolve_pair<S: VehicleSource + ?Sized>(
    source: &S,
    first: &SelectionCriteria,
    second: &SelectionCriteria,
) -> Result<(VehicleRecord, VehicleRecord), SourceError> {
    let a = source.resolve(first)?;
    let b = source.resolve(second)?;
    Ok((a, b))
}
