use serde::{Deserialize, Serialize};

use super::Projection;

/// Yearly-loss thresholds, in percent, checked by [`analyze`]
pub const LOSS_THRESHOLDS: [f64; 3] = [8.0, 5.0, 3.0];

/// Difference between first and last yearly loss, in percentage points,
/// above which the curve counts as flattening
const FLATTENING_SPREAD: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdCrossing {
    pub threshold: f64,
    /// First year whose loss is below the threshold, if any
    pub year: Option<i32>,
}

/// The largest drop between two consecutive yearly losses
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Slowdown {
    pub year: i32,
    pub from_pct: f64,
    pub to_pct: f64,
}

impl Slowdown {
    pub fn drop(&self) -> f64 {
        self.from_pct - self.to_pct
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodLoss {
    pub start_value: f64,
    pub end_value: f64,
    pub amount: f64,
    pub percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "year", rename_all = "snake_case")]
pub enum HoldAdvice {
    /// Yearly loss falls under 5% from this year on
    HoldUntil(i32),
    /// Yearly loss falls under 8% from this year on but stays significant
    Significant(i32),
    /// Yearly loss stays high across the whole period
    SustainedLoss,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveAnalysis {
    pub crossings: Vec<ThresholdCrossing>,
    pub slowdown: Option<Slowdown>,
    pub period: PeriodLoss,
    /// Whether the yearly loss shrinks markedly between first and last year
    pub flattening: bool,
    pub advice: HoldAdvice,
}

impl CurveAnalysis {
    pub fn crossing_year(&self, threshold: f64) -> Option<i32> {
        year_for(&self.crossings, threshold)
    }
}

/// Read the shape of a projected curve
pub fn analyze(projection: &Projection) -> CurveAnalysis {
    let yearly = projection.yearly_losses();

    let crossings: Vec<ThresholdCrossing> = LOSS_THRESHOLDS
        .iter()
        .map(|&threshold| ThresholdCrossing {
            threshold,
            year: first_below(&yearly, threshold),
        })
        .collect();

    let advice = match (year_for(&crossings, 5.0), year_for(&crossings, 8.0)) {
        (Some(year), _) => HoldAdvice::HoldUntil(year),
        (None, Some(year)) => HoldAdvice::Significant(year),
        (None, None) => HoldAdvice::SustainedLoss,
    };

    let flattening = match (yearly.first(), yearly.last()) {
        (Some(&(_, first)), Some(&(_, last))) => first - last > FLATTENING_SPREAD,
        _ => false,
    };

    CurveAnalysis {
        crossings,
        slowdown: steepest_slowdown(&yearly),
        period: period_loss(projection),
        flattening,
        advice,
    }
}

fn first_below(yearly: &[(i32, f64)], threshold: f64) -> Option<i32> {
    yearly
        .iter()
        .find(|&&(_, loss)| loss < threshold)
        .map(|&(year, _)| year)
}

fn year_for(crossings: &[ThresholdCrossing], threshold: f64) -> Option<i32> {
    crossings
        .iter()
        .find(|c| c.threshold == threshold)
        .and_then(|c| c.year)
}

/// The year in which the loss rate fell the most compared to the year
/// before; the earliest one wins on equal drops.
fn steepest_slowdown(yearly: &[(i32, f64)]) -> Option<Slowdown> {
    yearly
        .windows(2)
        .map(|pair| Slowdown {
            year: pair[1].0,
            from_pct: pair[0].1,
            to_pct: pair[1].1,
        })
        .fold(None::<Slowdown>, |best, candidate| match best {
            Some(best) if best.drop() >= candidate.drop() => Some(best),
            _ => Some(candidate),
        })
}

fn period_loss(projection: &Projection) -> PeriodLoss {
    let (start_value, end_value) = match (projection.start(), projection.end()) {
        (Some(start), Some(end)) => (start.value, end.value),
        _ => (0.0, 0.0),
    };
    let amount = start_value - end_value;
    PeriodLoss {
        start_value,
        end_value,
        amount,
        percent: if start_value > 0.0 {
            amount / start_value * 100.0
        } else {
            0.0
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::depreciation::{project, DepreciationModel, ProjectionPoint, ProjectionRequest};

    fn curve(losses: &[f64]) -> Projection {
        let mut value = 10_000.0;
        let mut points = vec![ProjectionPoint {
            year: 2025,
            km: 0.0,
            value,
            cumulative_depreciation: 0.0,
            annual_loss: None,
            annual_loss_pct: None,
        }];
        for (i, &pct) in losses.iter().enumerate() {
            let loss = value * pct / 100.0;
            value -= loss;
            points.push(ProjectionPoint {
                year: 2026 + i as i32,
                km: 0.0,
                value,
                cumulative_depreciation: 0.0,
                annual_loss: Some(loss),
                annual_loss_pct: Some(pct),
            });
        }
        Projection {
            list_price: 10_000.0,
            points,
        }
    }

    #[test]
    fn finds_first_year_below_each_threshold() {
        let analysis = analyze(&curve(&[12.0, 9.0, 7.0, 4.5, 2.0]));
        assert_eq!(analysis.crossing_year(8.0), Some(2028));
        assert_eq!(analysis.crossing_year(5.0), Some(2029));
        assert_eq!(analysis.crossing_year(3.0), Some(2030));
        assert_eq!(analysis.advice, HoldAdvice::HoldUntil(2029));
        assert!(analysis.flattening);
    }

    #[test]
    fn only_eight_percent_crossed_is_significant() {
        let analysis = analyze(&curve(&[10.0, 7.5, 6.0]));
        assert_eq!(analysis.advice, HoldAdvice::Significant(2027));
        assert!(!analysis.flattening);
    }

    #[test]
    fn high_losses_throughout_are_sustained() {
        let analysis = analyze(&curve(&[20.0, 19.0, 18.5]));
        assert_eq!(analysis.advice, HoldAdvice::SustainedLoss);
        assert_eq!(analysis.crossing_year(8.0), None);
    }

    #[test]
    fn steepest_slowdown_reports_year_and_percents() {
        let analysis = analyze(&curve(&[15.0, 10.0, 9.0, 4.0]));
        let slowdown = analysis.slowdown.unwrap();
        // 15 -> 10 and 9 -> 4 drop equally; the earlier one wins
        assert_eq!(slowdown.year, 2027);
        assert_eq!(slowdown.from_pct, 15.0);
        assert_eq!(slowdown.to_pct, 10.0);
        assert_eq!(slowdown.drop(), 5.0);
    }

    #[test]
    fn empty_projection_analyzes_without_panicking() {
        let analysis = analyze(&Projection {
            list_price: 10_000.0,
            points: vec![],
        });
        assert_eq!(analysis.slowdown, None);
        assert_eq!(analysis.advice, HoldAdvice::SustainedLoss);
        assert_eq!(analysis.period.amount, 0.0);
    }

    #[test]
    fn deserialized_start_only_projection_is_harmless() {
        let projection: Projection = serde_json::from_str(
            r#"{"list_price": 1000.0, "points": [{"year": 2024, "km": 0.0, "value": 900.0,
                "cumulative_depreciation": 10.0, "annual_loss": null, "annual_loss_pct": null}]}"#,
        )
        .unwrap();
        let analysis = analyze(&projection);
        assert_eq!(analysis.crossing_year(8.0), None);
        assert_eq!(analysis.period.amount, 0.0);
    }

    #[test]
    fn single_year_has_no_slowdown() {
        let analysis = analyze(&curve(&[10.0]));
        assert_eq!(analysis.slowdown, None);
    }

    #[test]
    fn period_loss_spans_start_to_end() {
        let analysis = analyze(&curve(&[10.0, 10.0]));
        assert!((analysis.period.amount - 1_900.0).abs() < 1e-9);
        assert!((analysis.period.percent - 19.0).abs() < 1e-9);
    }

    #[test]
    fn low_mileage_projection_settles_below_five_percent() {
        let request = ProjectionRequest {
            list_price: 35_000.0,
            current_depreciation: 20.0,
            current_km: 40_000.0,
            annual_km: 0.0,
            base_year: 2025,
            years: 6,
        };
        let projection = project(&request, &DepreciationModel::default()).unwrap();
        let analysis = analyze(&projection);
        // yearly rates: 7.65, 6.50, 5.53, 4.70, ...
        assert_eq!(analysis.crossing_year(8.0), Some(2026));
        assert_eq!(analysis.advice, HoldAdvice::HoldUntil(2029));
    }
}
