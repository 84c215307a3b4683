// Property tests for compare, tally and summarize

use autocompare::comparison::{
    compare, reference_metrics, tally, ComparisonMetric, ComparisonOutcome, Direction,
    Extraction, Winner,
};
use autocompare::recommendation::{classify, RecommendationKind};
use autocompare::vehicle::{NumericField, SpecField, VehicleRecord, VehicleSpecs};
use proptest::prelude::*;

fn spec_text() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..5000).prop_map(|n| format!("{} CV", n)),
        (0.0f64..30.0).prop_map(|n| format!("{:.1} L/100km", n)),
        Just("n/d".to_string()),
        Just(String::new()),
    ]
}

prop_compose! {
    fn vehicle()(
        price in 0.0f64..200_000.0,
        depreciation in 0.0f64..100.0,
        rating in 0.0f64..5.0,
        power in spec_text(),
        consumption in spec_text(),
        acceleration in spec_text(),
        pros in prop::collection::vec("[a-z]{3,10}", 0..5),
    ) -> VehicleRecord {
        VehicleRecord {
            id: "generated".into(),
            brand: "Brand".into(),
            model: "Model".into(),
            year: 2023,
            image: None,
            price,
            depreciation,
            specs: VehicleSpecs {
                power,
                consumption,
                acceleration,
                ..VehicleSpecs::default()
            },
            features: vec![],
            rating,
            pros,
            cons: vec![],
        }
    }
}

proptest! {
    #[test]
    fn compare_is_deterministic(a in vehicle(), b in vehicle()) {
        let metrics = reference_metrics("€");
        prop_assert_eq!(compare(&a, &b, &metrics), compare(&a, &b, &metrics));
    }

    #[test]
    fn outcomes_follow_metric_order(a in vehicle(), b in vehicle()) {
        let metrics = reference_metrics("$");
        let outcomes = compare(&a, &b, &metrics);
        prop_assert_eq!(outcomes.len(), metrics.len());
        for (outcome, metric) in outcomes.iter().zip(&metrics) {
            prop_assert_eq!(&outcome.category, &metric.category);
        }
    }

    #[test]
    fn swapping_sides_flips_every_winner(a in vehicle(), b in vehicle()) {
        let metrics = reference_metrics("€");
        let forward = compare(&a, &b, &metrics);
        let backward = compare(&b, &a, &metrics);
        for (f, r) in forward.iter().zip(&backward) {
            prop_assert_eq!(f.winner, r.winner.flip());
            prop_assert_eq!(&f.first_value, &r.second_value);
        }
    }

    #[test]
    fn direction_decides_numeric_metrics(x in 0.0f64..1e6, y in 0.0f64..1e6) {
        prop_assume!(x != y);
        let mut a = blank();
        let mut b = blank();
        a.price = x;
        b.price = y;

        let lower = ComparisonMetric::new("p", "", Extraction::Direct(NumericField::Price), Direction::LowerIsBetter);
        let higher = ComparisonMetric::new("p", "", Extraction::Direct(NumericField::Price), Direction::HigherIsBetter);

        let smaller_wins = if x < y { Winner::First } else { Winner::Second };
        prop_assert_eq!(compare(&a, &b, &[lower])[0].winner, smaller_wins);
        prop_assert_eq!(compare(&a, &b, &[higher])[0].winner, smaller_wins.flip());
    }

    #[test]
    fn direction_decides_parsed_spec_metrics(x in 0u32..5000, y in 0u32..5000) {
        prop_assume!(x != y);
        let mut a = blank();
        let mut b = blank();
        a.specs.power = format!("{} CV", x);
        b.specs.power = format!("{} CV", y);

        let higher = ComparisonMetric::new("Power", "", Extraction::Parsed(SpecField::Power), Direction::HigherIsBetter);
        let lower = ComparisonMetric::new("Power", "", Extraction::Parsed(SpecField::Power), Direction::LowerIsBetter);

        let larger_wins = if x > y { Winner::First } else { Winner::Second };
        let outcome = &compare(&a, &b, &[higher])[0];
        prop_assert_eq!(outcome.winner, larger_wins);
        prop_assert_eq!(&outcome.first_value, &a.specs.power);
        prop_assert_eq!(compare(&a, &b, &[lower])[0].winner, larger_wins.flip());
    }

    #[test]
    fn tally_of_repeated_outcomes(n1 in 0usize..20, n2 in 0usize..20, n3 in 0usize..20) {
        let outcomes: Vec<ComparisonOutcome> = std::iter::repeat(outcome_for(Winner::First))
            .take(n1)
            .chain(std::iter::repeat(outcome_for(Winner::Second)).take(n2))
            .chain(std::iter::repeat(outcome_for(Winner::Tie)).take(n3))
            .collect();

        let verdict = tally(&outcomes);
        prop_assert_eq!(verdict.first_wins, n1);
        prop_assert_eq!(verdict.second_wins, n2);
        prop_assert_eq!(verdict.ties, n3);

        let expected = if n1 > n2 {
            Winner::First
        } else if n2 > n1 {
            Winner::Second
        } else {
            Winner::Tie
        };
        prop_assert_eq!(verdict.winner, expected);
    }

    #[test]
    fn digitless_specs_always_tie(text in "[a-zA-Z /]{0,12}", other in spec_text()) {
        let mut a = blank();
        let mut b = blank();
        a.specs.power = text;
        b.specs.power = other;
        let metric = ComparisonMetric::new("Power", "", Extraction::Parsed(SpecField::Power), Direction::HigherIsBetter);
        prop_assert_eq!(compare(&a, &b, &[metric])[0].winner, Winner::Tie);
    }

    #[test]
    fn tally_counts_add_up(a in vehicle(), b in vehicle()) {
        let outcomes = compare(&a, &b, &reference_metrics("€"));
        let verdict = tally(&outcomes);
        prop_assert_eq!(verdict.total(), outcomes.len());

        let expected = match verdict.first_wins.cmp(&verdict.second_wins) {
            std::cmp::Ordering::Greater => Winner::First,
            std::cmp::Ordering::Less => Winner::Second,
            std::cmp::Ordering::Equal => Winner::Tie,
        };
        prop_assert_eq!(verdict.winner, expected);
    }

    #[test]
    fn at_most_one_side_is_superior(
        own in 0usize..10,
        other in 0usize..10,
        p1 in 0.0f64..1e5,
        p2 in 0.0f64..1e5,
    ) {
        let a = classify(own, other, p1, p2);
        let b = classify(other, own, p2, p1);
        prop_assert!(!(a == RecommendationKind::Superior && b == RecommendationKind::Superior));
        prop_assert!(!(a == RecommendationKind::BestValue && b == RecommendationKind::BestValue));
    }
}

fn blank() -> VehicleRecord {
    VehicleRecord {
        id: "blank".into(),
        brand: "Brand".into(),
        model: "Model".into(),
        year: 2020,
        image: None,
        price: 0.0,
        depreciation: 0.0,
        specs: VehicleSpecs::default(),
        features: vec![],
        rating: 0.0,
        pros: vec![],
        cons: vec![],
    }
}

fn outcome_for(winner: Winner) -> ComparisonOutcome {
    ComparisonOutcome {
        category: "Metric".into(),
        description: String::new(),
        direction: Direction::HigherIsBetter,
        first_value: "1".into(),
        second_value: "2".into(),
        winner,
    }
}
