//! Year-by-year depreciation projection.
//!
//! Starting from a vehicle's current value (list price less its current
//! depreciation), each projected year applies an annual loss rate made of a
//! base rate that shrinks geometrically with age plus a mileage term that
//! stays proportional to the distance driven that year. The result is the
//! classic steep-then-flattening depreciation curve.
//!
//! [`curve::analyze`] reads the curve back: when the yearly loss drops below
//! common thresholds, where it slows down the most, and a hold/sell hint.

pub mod curve;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Longest projection accepted
pub const MAX_PROJECTION_YEARS: u32 = 50;

/// Tunable constants of the depreciation curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepreciationModel {
    /// Base yearly loss rate before the first decay step
    #[serde(default = "default_initial_rate")]
    pub initial_rate: f64,

    /// Factor applied to the base rate every year
    #[serde(default = "default_decay_factor")]
    pub decay_factor: f64,

    /// Extra loss rate for driving `km_reference` kilometres in a year
    #[serde(default = "default_km_coefficient")]
    pub km_coefficient: f64,

    #[serde(default = "default_km_reference")]
    pub km_reference: f64,
}

impl Default for DepreciationModel {
    fn default() -> Self {
        Self {
            initial_rate: default_initial_rate(),
            decay_factor: default_decay_factor(),
            km_coefficient: default_km_coefficient(),
            km_reference: default_km_reference(),
        }
    }
}

fn default_initial_rate() -> f64 {
    0.09
}

fn default_decay_factor() -> f64 {
    0.85
}

fn default_km_coefficient() -> f64 {
    0.20
}

fn default_km_reference() -> f64 {
    20_000.0
}

impl DepreciationModel {
    pub fn validate(&self) -> Result<()> {
        let in_unit = |v: f64| v.is_finite() && (0.0..=1.0).contains(&v);
        if !in_unit(self.initial_rate) {
            return Err(Error::Configuration(format!(
                "initial_rate {} outside [0, 1]",
                self.initial_rate
            )));
        }
        if !in_unit(self.decay_factor) {
            return Err(Error::Configuration(format!(
                "decay_factor {} outside [0, 1]",
                self.decay_factor
            )));
        }
        if !self.km_coefficient.is_finite() || self.km_coefficient < 0.0 {
            return Err(Error::Configuration(format!(
                "km_coefficient {} must be non-negative",
                self.km_coefficient
            )));
        }
        if !self.km_reference.is_finite() || self.km_reference <= 0.0 {
            return Err(Error::Configuration(format!(
                "km_reference {} must be positive",
                self.km_reference
            )));
        }
        Ok(())
    }
}

/// What to project
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRequest {
    pub list_price: f64,
    /// Depreciation already suffered, percent of list price
    pub current_depreciation: f64,
    pub current_km: f64,
    pub annual_km: f64,
    pub base_year: i32,
    pub years: u32,
}

/// One year on the curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub year: i32,
    pub km: f64,
    pub value: f64,
    /// Total loss against the list price, percent
    pub cumulative_depreciation: f64,
    /// Loss during this year; absent for the starting point
    pub annual_loss: Option<f64>,
    /// Loss during this year as percent of the previous value
    pub annual_loss_pct: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub list_price: f64,
    /// Starting point first, then one point per projected year
    pub points: Vec<ProjectionPoint>,
}

impl Projection {
    /// Starting point; `None` only for a hand-built empty projection
    pub fn start(&self) -> Option<&ProjectionPoint> {
        self.points.first()
    }

    pub fn end(&self) -> Option<&ProjectionPoint> {
        self.points.last()
    }

    /// `(year, loss percent)` for every projected year, in order
    pub fn yearly_losses(&self) -> Vec<(i32, f64)> {
        self.points
            .iter()
            .filter_map(|p| p.annual_loss_pct.map(|pct| (p.year, pct)))
            .collect()
    }
}

/// Project the value of a vehicle over `request.years` years.
pub fn project(request: &ProjectionRequest, model: &DepreciationModel) -> Result<Projection> {
    validate_request(request)?;
    model.validate()?;

    let list_price = request.list_price;
    let start_value = list_price * (1.0 - request.current_depreciation / 100.0);

    let mut points = Vec::with_capacity(request.years as usize + 1);
    points.push(ProjectionPoint {
        year: request.base_year,
        km: request.current_km,
        value: start_value,
        cumulative_depreciation: request.current_depreciation,
        annual_loss: None,
        annual_loss_pct: None,
    });

    let km_effect = (request.annual_km / model.km_reference) * model.km_coefficient;
    let mut base_rate = model.initial_rate;
    let mut previous = start_value;

    for i in 1..=request.years {
        base_rate *= model.decay_factor;
        let annual_rate = base_rate + km_effect;
        let value = (previous * (1.0 - annual_rate)).max(0.0);
        let loss = previous - value;

        points.push(ProjectionPoint {
            year: request.base_year + i as i32,
            km: request.current_km + request.annual_km * f64::from(i),
            value,
            cumulative_depreciation: (list_price - value) / list_price * 100.0,
            annual_loss: Some(loss),
            annual_loss_pct: Some(if previous > 0.0 {
                loss / previous * 100.0
            } else {
                0.0
            }),
        });
        previous = value;
    }

    Ok(Projection { list_price, points })
}

fn validate_request(request: &ProjectionRequest) -> Result<()> {
    if !request.list_price.is_finite() || request.list_price <= 0.0 {
        return Err(Error::Projection(format!(
            "list price must be positive, got {}",
            request.list_price
        )));
    }
    if !(0.0..=100.0).contains(&request.current_depreciation) {
        return Err(Error::Projection(format!(
            "current depreciation {} outside [0, 100]",
            request.current_depreciation
        )));
    }
    if request.years == 0 || request.years > MAX_PROJECTION_YEARS {
        return Err(Error::Projection(format!(
            "years must be between 1 and {}, got {}",
            MAX_PROJECTION_YEARS, request.years
        )));
    }
    if request.base_year.checked_add(request.years as i32).is_none() {
        return Err(Error::Projection(format!(
            "base year {} plus {} years is out of range",
            request.base_year, request.years
        )));
    }
    if !request.annual_km.is_finite() || request.annual_km < 0.0 {
        return Err(Error::Projection(format!(
            "annual km must be non-negative, got {}",
            request.annual_km
        )));
    }
    if !request.current_km.is_finite() || request.current_km < 0.0 {
        return Err(Error::Projection(format!(
            "current km must be non-negative, got {}",
            request.current_km
        )));
    }
    Ok(())
}
