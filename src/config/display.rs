use serde::{Deserialize, Serialize};

use crate::formatting::ColorMode;

/// Display configuration for output formatting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Symbol prefixed to prices (default: €)
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Terminal color handling (auto/always/never)
    #[serde(default)]
    pub color: ColorMode,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            color: ColorMode::default(),
        }
    }
}

fn default_currency_symbol() -> String {
    "€".to_string()
}
