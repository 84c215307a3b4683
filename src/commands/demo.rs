//! `demo`: the two built-in synthesized vehicles

use anyhow::{Context, Result};
use tracing::info_span;

use crate::cli::RenderArgs;
use crate::comparison::Side;
use crate::source::{DemoSource, VehicleSource};

pub fn handle_demo_command(render: &RenderArgs) -> Result<()> {
    let _span = info_span!("demo").entered();

    let (first, second) = DemoSource::default_selections();
    let first = DemoSource::new(Side::First)
        .resolve(&first)
        .context("Demo source failed")?;
    let second = DemoSource::new(Side::Second)
        .resolve(&second)
        .context("Demo source failed")?;

    super::run_comparison(&first, &second, render)
}
