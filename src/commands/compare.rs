//! `compare`: two records from JSON files

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info_span;

use crate::cli::RenderArgs;
use crate::source::check_record;
use crate::vehicle::VehicleRecord;

/// Read, parse and validate one record file
pub fn load_record(path: &Path) -> Result<VehicleRecord> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read vehicle record {}", path.display()))?;
    let record: VehicleRecord = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse vehicle record {}", path.display()))?;
    check_record(&record)?;
    Ok(record)
}

pub fn handle_compare_command(first: &Path, second: &Path, render: &RenderArgs) -> Result<()> {
    let _span = info_span!("compare", first = %first.display(), second = %second.display()).entered();

    let first = load_record(first)?;
    let second = load_record(second)?;
    super::run_comparison(&first, &second, render)
}
