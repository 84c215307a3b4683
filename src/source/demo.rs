use super::{SelectionCriteria, SourceError, VehicleSource};
use crate::comparison::Side;
use crate::vehicle::{VehicleRecord, VehicleSpecs};

/// Synthesizes a plausible record for any selection.
///
/// Brand, model and year come from the selection; every other attribute is
/// canned data that depends only on which side of the comparison the source
/// feeds. Useful for demos and for exercising the pipeline without a
/// catalog.
#[derive(Debug, Clone, Copy)]
pub struct DemoSource {
    side: Side,
}

impl DemoSource {
    pub fn new(side: Side) -> Self {
        Self { side }
    }

    /// The two default selections used by the `demo` command
    pub fn default_selections() -> (SelectionCriteria, SelectionCriteria) {
        (
            SelectionCriteria::new("BMW", "Serie 3", 2023),
            SelectionCriteria::new("Mercedes", "Classe C", 2023),
        )
    }

    /// Records for [`DemoSource::default_selections`]
    pub fn default_pair() -> (VehicleRecord, VehicleRecord) {
        let (first, second) = Self::default_selections();
        (
            synthesize(&first, Side::First),
            synthesize(&second, Side::Second),
        )
    }
}

impl VehicleSource for DemoSource {
    fn resolve(&self, criteria: &SelectionCriteria) -> Result<VehicleRecord, SourceError> {
        Ok(synthesize(criteria, self.side))
    }
}

fn synthesize(criteria: &SelectionCriteria, side: Side) -> VehicleRecord {
    let first = side == Side::First;
    let pick = |a: &str, b: &str| (if first { a } else { b }).to_string();

    VehicleRecord {
        id: criteria.record_id(),
        brand: criteria.brand.clone(),
        model: criteria.model.clone(),
        year: criteria.year,
        image: None,
        price: if first { 45000.0 } else { 48000.0 },
        depreciation: if first { 15.0 } else { 18.0 },
        specs: VehicleSpecs {
            engine: pick("2.0L Turbo", "1.5L Turbo"),
            power: pick("184 CV", "170 CV"),
            fuel: "Petrol".into(),
            consumption: pick("6.2 L/100km", "6.8 L/100km"),
            emissions: pick("142 g/km", "155 g/km"),
            transmission: "Automatic 8-speed".into(),
            acceleration: pick("7.1 s", "7.8 s"),
            top_speed: pick("235 km/h", "230 km/h"),
            weight: pick("1515 kg", "1590 kg"),
            dimensions: pick("4709 x 1827 x 1442 mm", "4686 x 1810 x 1447 mm"),
        },
        features: [
            "GPS navigation",
            "Automatic climate control",
            "Parking sensors",
            "Bluetooth",
            "Cruise control",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        rating: if first { 4.5 } else { 4.3 },
        pros: vec![
            pick("Strong performance", "Elegant design"),
            pick("Good road holding", "Superior comfort"),
            "Advanced technology".into(),
        ],
        cons: vec![
            pick("High price", "High consumption"),
            "Costly maintenance".into(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_follow_the_selection() {
        let source = DemoSource::new(Side::Second);
        let criteria = SelectionCriteria::new("Audi", "A4", 2021);
        let car = source.resolve(&criteria).unwrap();
        assert_eq!(car.id, "Audi-A4-2021");
        assert_eq!(car.brand, "Audi");
        assert_eq!(car.year, 2021);
        assert_eq!(car.specs.power, "170 CV");
    }

    #[test]
    fn default_pair_is_valid() {
        let (a, b) = DemoSource::default_pair();
        assert!(a.validate().is_ok());
        assert!(b.validate().is_ok());
        assert_eq!(a.price, 45000.0);
        assert_eq!(b.price, 48000.0);
    }
}
