//! Fixed wording for recommendation tiers and report notes.

pub const SUPERIOR: &str = "Recommended choice for superior performance and characteristics.";
pub const BEST_VALUE: &str = "Most affordable option with good value for money.";
pub const ALTERNATIVE: &str = "Valid alternative with interesting specific strengths.";

/// Caveats attached to every report
pub const CONSIDERATIONS: [&str; 3] = [
    "Depreciation can vary with market conditions and how well the vehicle is maintained.",
    "Real-world consumption may differ from the declared figures depending on driving style.",
    "Always factor maintenance and insurance costs into the final decision.",
];

pub fn considerations() -> Vec<String> {
    CONSIDERATIONS.iter().map(|s| s.to_string()).collect()
}
