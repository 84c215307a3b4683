//! Configuration loaded from `.autocompare.toml`.

mod core;
mod display;
mod loader;

pub use self::core::AutocompareConfig;
pub use display::DisplayConfig;
pub use loader::{
    directory_ancestors, load_config, load_config_from_path, parse_and_validate_config,
    user_config_path, CONFIG_FILE_NAME,
};
