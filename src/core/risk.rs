//! Qualitative classification of assumed return rates

use std::fmt::Display;

/// How optimistic a return assumption is. Thresholds are inclusive upper
/// bounds: a rate of exactly 3, 5 or 7 belongs to the lower bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskProfile {
    Conservative,
    Moderate,
    Aggressive,
    VeryAggressive,
}

impl RiskProfile {
    pub fn classify(rate_pct: f64) -> Self {
        if rate_pct <= 3.0 {
            RiskProfile::Conservative
        } else if rate_pct <= 5.0 {
            RiskProfile::Moderate
        } else if rate_pct <= 7.0 {
            RiskProfile::Aggressive
        } else {
            RiskProfile::VeryAggressive
        }
    }
}

impl Display for RiskProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                RiskProfile::Conservative => "Conservative",
                RiskProfile::Moderate => "Moderate",
                RiskProfile::Aggressive => "Aggressive",
                RiskProfile::VeryAggressive => "Very Aggressive",
            }
        )
    }
}
