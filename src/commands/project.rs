//! `project`: depreciation curve for one vehicle

use anyhow::{Context, Result};
use chrono::Datelike;
use tracing::info_span;

use crate::cli::RenderArgs;
use crate::depreciation::ProjectionRequest;
use crate::report::projection::{build_projection_report, render_projection};

pub struct ProjectArgs {
    pub price: f64,
    pub depreciation: f64,
    pub years: u32,
    pub annual_km: f64,
    pub current_km: f64,
    pub base_year: Option<i32>,
}

pub fn handle_project_command(args: ProjectArgs, render: &RenderArgs) -> Result<()> {
    let _span = info_span!("project", years = args.years).entered();

    let config = super::load_settings(render)?;
    let request = ProjectionRequest {
        list_price: args.price,
        current_depreciation: args.depreciation,
        current_km: args.current_km,
        annual_km: args.annual_km,
        base_year: args
            .base_year
            .unwrap_or_else(|| chrono::Local::now().year()),
        years: args.years,
    };

    let report = build_projection_report(request, &config.projection)
        .context("Cannot project depreciation")?;
    let rendered = render_projection(
        &report,
        render.format,
        &config.display.currency_symbol,
        super::formatting_for(render, &config),
    )?;
    super::emit(&rendered, render.output.as_deref())
}
