use std::fs;
use std::path::Path;

use log::debug;

use super::{SelectionCriteria, SourceError, VehicleSource};
use crate::errors::{Error, Result};
use crate::vehicle::VehicleRecord;

/// A fixed list of records loaded from a JSON array.
///
/// Every record is validated on load, so anything this source resolves
/// already satisfies the model invariants.
#[derive(Debug, Clone, Default)]
pub struct CatalogSource {
    records: Vec<VehicleRecord>,
}

impl CatalogSource {
    pub fn from_records(records: Vec<VehicleRecord>) -> Result<Self> {
        for record in &records {
            check_record(record)?;
        }
        Ok(Self { records })
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        let records: Vec<VehicleRecord> = serde_json::from_str(contents)?;
        Self::from_records(records)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::file_system("Failed to read vehicle catalog", path, e))?;
        let catalog = Self::from_json(&contents)?;
        debug!(
            "Loaded {} vehicles from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[VehicleRecord] {
        &self.records
    }
}

impl VehicleSource for CatalogSource {
    fn resolve(&self, criteria: &SelectionCriteria) -> std::result::Result<VehicleRecord, SourceError> {
        self.records
            .iter()
            .find(|record| criteria.matches(record))
            .cloned()
            .ok_or_else(|| SourceError::not_found(criteria))
    }
}

/// Reject a record that breaks the model invariants
pub fn check_record(record: &VehicleRecord) -> Result<()> {
    record.validate().map_err(|violations| {
        Error::validation(
            record.id.clone(),
            violations.iter().map(ToString::to_string).collect(),
        )
    })
}
