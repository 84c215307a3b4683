//! Vehicle record model.
//!
//! A [`VehicleRecord`] is the unit of comparison. Commercial and rating
//! attributes are plain numbers; technical attributes are kept as the
//! formatted strings the data source supplied ("184 CV", "7.1 s") so they can
//! be shown back to the user exactly as received. Magnitudes are pulled out
//! of those strings on demand by [`quantity::leading_number`].

pub mod quantity;
mod validation;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use validation::{validate, Violation};

/// Years over which `depreciation` is estimated
pub const DEPRECIATION_HORIZON_YEARS: u32 = 3;

/// One vehicle, fully resolved by a data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub id: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// List price, currency-agnostic
    pub price: f64,
    /// Expected value loss in percent over [`DEPRECIATION_HORIZON_YEARS`]
    pub depreciation: f64,
    pub specs: VehicleSpecs,
    #[serde(default)]
    pub features: Vec<String>,
    /// User rating on a 0-5 scale
    pub rating: f64,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
}

impl VehicleRecord {
    /// "Brand Model", as shown in headings
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }

    /// Read a direct numeric attribute
    pub fn numeric(&self, field: NumericField) -> f64 {
        match field {
            NumericField::Price => self.price,
            NumericField::Depreciation => self.depreciation,
            NumericField::Rating => self.rating,
            NumericField::Year => f64::from(self.year),
        }
    }

    /// Read a formatted technical attribute
    pub fn spec(&self, field: SpecField) -> &str {
        self.specs.get(field)
    }

    /// Check every model invariant, see [`validate`]
    pub fn validate(&self) -> Result<(), Vec<Violation>> {
        validate(self)
    }
}

impl fmt::Display for VehicleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.brand, self.model, self.year)
    }
}

/// Technical attributes, as formatted text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleSpecs {
    pub engine: String,
    pub power: String,
    pub fuel: String,
    pub consumption: String,
    pub emissions: String,
    pub transmission: String,
    /// 0-100 km/h time
    pub acceleration: String,
    pub top_speed: String,
    pub weight: String,
    /// Length x width x height
    pub dimensions: String,
}

impl VehicleSpecs {
    pub fn get(&self, field: SpecField) -> &str {
        match field {
            SpecField::Engine => &self.engine,
            SpecField::Power => &self.power,
            SpecField::Fuel => &self.fuel,
            SpecField::Consumption => &self.consumption,
            SpecField::Emissions => &self.emissions,
            SpecField::Transmission => &self.transmission,
            SpecField::Acceleration => &self.acceleration,
            SpecField::TopSpeed => &self.top_speed,
            SpecField::Weight => &self.weight,
            SpecField::Dimensions => &self.dimensions,
        }
    }
}

/// Attributes stored as numbers on the record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericField {
    Price,
    Depreciation,
    Rating,
    Year,
}

/// Attributes stored as formatted text in [`VehicleSpecs`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecField {
    Engine,
    Power,
    Fuel,
    Consumption,
    Emissions,
    Transmission,
    Acceleration,
    TopSpeed,
    Weight,
    Dimensions,
}

impl SpecField {
    /// Fields whose text is expected to encode a magnitude
    pub const MEASURED: [SpecField; 4] = [
        SpecField::Power,
        SpecField::Consumption,
        SpecField::Acceleration,
        SpecField::TopSpeed,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SpecField::Engine => "engine",
            SpecField::Power => "power",
            SpecField::Fuel => "fuel",
            SpecField::Consumption => "consumption",
            SpecField::Emissions => "emissions",
            SpecField::Transmission => "transmission",
            SpecField::Acceleration => "acceleration",
            SpecField::TopSpeed => "top_speed",
            SpecField::Weight => "weight",
            SpecField::Dimensions => "dimensions",
        }
    }
}
