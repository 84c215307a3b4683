use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::AutocompareConfig;
use crate::depreciation::DepreciationModel;
use crate::errors::{Error, Result};

/// Project-level configuration file name
pub const CONFIG_FILE_NAME: &str = ".autocompare.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse config from a TOML string, repairing invalid sections.
///
/// An invalid projection model or an empty metric list is reported and
/// replaced with defaults rather than failing the whole file.
pub fn parse_and_validate_config(contents: &str) -> std::result::Result<AutocompareConfig, String> {
    let mut config = toml::from_str::<AutocompareConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;

    if let Err(e) = config.projection.validate() {
        log::warn!("Invalid projection settings: {}. Using defaults.", e);
        config.projection = DepreciationModel::default();
    }

    if matches!(config.metrics, Some(ref metrics) if metrics.is_empty()) {
        log::warn!("Empty metric list in configuration. Using the reference metrics.");
        config.metrics = None;
    }

    Ok(config)
}

/// Try loading config from a specific path, logging why it was skipped
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<AutocompareConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Per-user configuration file, e.g. `~/.config/autocompare/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("autocompare").join("config.toml"))
}

/// Find and load configuration.
///
/// Searches the current directory and its ancestors for
/// `.autocompare.toml`, then the per-user config file, then falls back to
/// defaults. Never fails.
pub fn load_config() -> AutocompareConfig {
    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return AutocompareConfig::default();
        }
    };

    directory_ancestors(current, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .chain(user_config_path())
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            AutocompareConfig::default()
        })
}

/// Load an explicitly requested config file; any failure is an error.
pub fn load_config_from_path(path: &Path) -> Result<AutocompareConfig> {
    let contents = read_config_file(path)
        .map_err(|e| Error::file_system("Failed to read config file", path, e))?;
    parse_and_validate_config(&contents).map_err(Error::Configuration)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatting::ColorMode;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn parses_full_config() {
        let config = parse_and_validate_config(indoc! {r#"
            [display]
            currency_symbol = "$"
            color = "never"

            [projection]
            initial_rate = 0.1

            [[metrics]]
            category = "Top speed"
            extraction = { parsed = "top_speed" }
            direction = "higher_is_better"

            [[metrics]]
            category = "Price"
            extraction = { direct = "price" }
            direction = "lower_is_better"
            display = { currency = { symbol = "$" } }
        "#})
        .unwrap();

        assert_eq!(config.display.currency_symbol, "$");
        assert_eq!(config.display.color, ColorMode::Never);
        assert_eq!(config.projection.initial_rate, 0.1);
        assert_eq!(config.projection.decay_factor, 0.85);
        assert_eq!(config.metrics().len(), 2);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let result = parse_and_validate_config("invalid toml [[ content");
        assert!(result.unwrap_err().contains("Failed to parse"));
    }

    #[test]
    fn invalid_projection_replaced_with_defaults() {
        let config = parse_and_validate_config(indoc! {r#"
            [projection]
            decay_factor = 3.0
        "#})
        .unwrap();
        assert_eq!(config.projection, DepreciationModel::default());
    }

    #[test]
    fn empty_metric_list_falls_back_to_reference() {
        let config = parse_and_validate_config("metrics = []").unwrap();
        assert!(config.metrics.is_none());
        assert_eq!(config.metrics().len(), 6);
    }

    #[test]
    fn directory_ancestors_walks_up() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c"), 10).collect();
        assert_eq!(
            dirs,
            vec![
                PathBuf::from("/a/b/c"),
                PathBuf::from("/a/b"),
                PathBuf::from("/a"),
                PathBuf::from("/"),
            ]
        );
    }

    #[test]
    fn directory_ancestors_respects_depth() {
        assert_eq!(directory_ancestors(PathBuf::from("/a/b/c"), 2).count(), 2);
    }

    #[test]
    fn explicit_path_loads_or_errors() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[display]\ncurrency_symbol = \"£\"\n").unwrap();
        assert_eq!(
            load_config_from_path(&path).unwrap().display.currency_symbol,
            "£"
        );

        fs::write(&path, "display = 3").unwrap();
        assert!(matches!(
            load_config_from_path(&path),
            Err(Error::Configuration(_))
        ));

        let missing = temp.path().join("missing.toml");
        assert!(matches!(
            load_config_from_path(&missing),
            Err(Error::FileSystem { .. })
        ));
    }

    #[test]
    fn missing_file_is_skipped_quietly() {
        let temp = TempDir::new().unwrap();
        assert!(try_load_config_from_path(&temp.path().join("nope.toml")).is_none());
    }
}
