//! `lookup`: both sides resolved through a JSON catalog

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info_span;

use crate::cli::RenderArgs;
use crate::source::{resolve_pair, CatalogSource, SelectionCriteria};

pub fn handle_lookup_command(
    catalog: &Path,
    first: &SelectionCriteria,
    second: &SelectionCriteria,
    render: &RenderArgs,
) -> Result<()> {
    let _span = info_span!("lookup", catalog = %catalog.display()).entered();

    let source = CatalogSource::from_path(catalog)
        .with_context(|| format!("Failed to load catalog {}", catalog.display()))?;
    let (first, second) =
        resolve_pair(&source, first, second).context("Could not resolve both vehicles")?;

    super::run_comparison(&first, &second, render)
}
