//! Command handlers. Everything that touches the file system or stdout
//! lives here; the comparison core stays pure.

pub mod compare;
pub mod demo;
pub mod init;
pub mod lookup;
pub mod project;

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use crate::cli::RenderArgs;
use crate::config::{load_config, load_config_from_path, AutocompareConfig};
use crate::formatting::{ColorMode, EmojiMode, FormattingConfig};
use crate::report::{build_report, render};
use crate::vehicle::VehicleRecord;

/// Explicit `--config` must load; otherwise search quietly
pub(crate) fn load_settings(render: &RenderArgs) -> Result<AutocompareConfig> {
    match &render.config {
        Some(path) => load_config_from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(load_config()),
    }
}

/// Files never get escape codes; `--plain` forces ASCII on stdout too.
/// An explicit `--color` wins over the environment.
pub(crate) fn formatting_for(render: &RenderArgs, config: &AutocompareConfig) -> FormattingConfig {
    if render.plain || render.output.is_some() {
        return FormattingConfig::plain();
    }
    match render.color {
        Some(ColorMode::Never) => FormattingConfig::new(ColorMode::Never, EmojiMode::Never),
        Some(mode) => FormattingConfig::new(mode, EmojiMode::Auto),
        None => FormattingConfig::from_env(config.display.color),
    }
}

pub(crate) fn emit(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            info!(path = %path.display(), "report written");
        }
        None => println!("{}", content),
    }
    Ok(())
}

/// Compare two resolved records and write the report
pub(crate) fn run_comparison(
    first: &VehicleRecord,
    second: &VehicleRecord,
    render_args: &RenderArgs,
) -> Result<()> {
    let config = load_settings(render_args)?;
    let metrics = config.metrics();
    let report = build_report(first, second, &metrics);
    let rendered = render(&report, render_args.format, formatting_for(render_args, &config))?;
    emit(&rendered, render_args.output.as_deref())
}
