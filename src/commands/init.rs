use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE_NAME;

pub const DEFAULT_CONFIG: &str = r#"# autocompare configuration

[display]
# Symbol placed in front of prices
currency_symbol = "€"
# auto, always or never
color = "auto"

[projection]
initial_rate = 0.09
decay_factor = 0.85
km_coefficient = 0.20
km_reference = 20000.0

# Replace the default metric set by listing metrics here, e.g.
#
# [[metrics]]
# category = "Top speed"
# description = "Maximum speed"
# extraction = { parsed = "top_speed" }
# direction = "higher_is_better"
"#;

pub fn init_config(force: bool) -> Result<()> {
    let path = init_config_in(Path::new("."), force)?;
    println!("Created {} configuration file", path.display());
    Ok(())
}

/// Write the default config into `dir`, returning its path
pub fn init_config_in(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    Ok(config_path)
}
