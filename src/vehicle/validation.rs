//! Record invariants.
//!
//! Validation collects every violation instead of stopping at the first, so a
//! broken catalog entry can be fixed in one pass.

use super::quantity::leading_number;
use super::{SpecField, VehicleRecord};
use std::fmt;

/// One broken invariant on a record
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    pub field: &'static str,
    pub message: String,
}

impl Violation {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Check `price >= 0`, `depreciation` in [0, 100], `rating` in [0, 5] and
/// that measured spec fields never carry a negative magnitude.
///
/// Spec text without any digits is valid; the comparator treats it as
/// indeterminate.
pub fn validate(record: &VehicleRecord) -> Result<(), Vec<Violation>> {
    let violations: Vec<Violation> = [
        check_price(record.price),
        check_range("depreciation", record.depreciation, 0.0, 100.0),
        check_range("rating", record.rating, 0.0, 5.0),
    ]
    .into_iter()
    .flatten()
    .chain(
        SpecField::MEASURED
            .iter()
            .filter_map(|&field| check_magnitude(field, record.spec(field))),
    )
    .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

fn check_price(price: f64) -> Option<Violation> {
    if !price.is_finite() {
        Some(Violation::new("price", "must be a finite number"))
    } else if price < 0.0 {
        Some(Violation::new("price", format!("{} is negative", price)))
    } else {
        None
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Option<Violation> {
    if !value.is_finite() || value < min || value > max {
        Some(Violation::new(
            field,
            format!("{} outside [{}, {}]", value, min, max),
        ))
    } else {
        None
    }
}

fn check_magnitude(field: SpecField, text: &str) -> Option<Violation> {
    match leading_number(text) {
        Some(value) if value < 0.0 => Some(Violation::new(
            field.name(),
            format!("'{}' encodes a negative magnitude", text),
        )),
        _ => None,
    }
}
