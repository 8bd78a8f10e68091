//! Perpetuity calculation engine
//!
//! Computes the principal required to sustain a desired passive income
//! indefinitely: `net worth = annual income / (rate / 100)`. All functions
//! here are pure; invalid input collapses to `None` rather than an error,
//! since the surface has no error channel, only a neutral empty state.

use crate::core::currency::Currency;
use std::fmt::Display;
use std::str::FromStr;
use tracing::debug;

/// Bounds for the interactive return-rate control. The control snaps to
/// integer steps within these bounds; the engine itself accepts any
/// positive rate.
pub const RATE_MIN: u8 = 2;
pub const RATE_MAX: u8 = 8;
pub const RATE_DEFAULT: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Frequency {
    #[default]
    Monthly,
    Yearly,
}

impl Frequency {
    pub const ALL: [Frequency; 2] = [Frequency::Monthly, Frequency::Yearly];

    pub fn periods_per_year(&self) -> f64 {
        match self {
            Frequency::Monthly => 12.0,
            Frequency::Yearly => 1.0,
        }
    }

    /// Parses a frequency label, falling back to the default for anything
    /// outside the supported set.
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| {
            debug!("Unknown frequency {s:?}, falling back to monthly");
            Frequency::default()
        })
    }
}

impl Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Frequency::Monthly => "Monthly",
                Frequency::Yearly => "Yearly",
            }
        )
    }
}

impl FromStr for Frequency {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monthly" => Ok(Frequency::Monthly),
            "yearly" => Ok(Frequency::Yearly),
            _ => Err(anyhow::anyhow!("Unsupported frequency: {}", s)),
        }
    }
}

/// Parses free-form income text. Empty, non-numeric, non-positive and
/// non-finite input all yield `None`.
pub fn parse_income(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    (value.is_finite() && value > 0.0).then_some(value)
}

/// Converts a periodic amount to its yearly equivalent.
pub fn annualize(income: f64, frequency: Frequency) -> f64 {
    income * frequency.periods_per_year()
}

/// Applies the perpetuity formula. Returns `None` when income is NaN or
/// non-positive, or when the rate is non-positive. No rounding happens
/// here; precision loss is deferred to display formatting.
pub fn required_net_worth(income: f64, frequency: Frequency, rate_pct: f64) -> Option<f64> {
    if income.is_nan() || income <= 0.0 || rate_pct <= 0.0 {
        return None;
    }
    Some(annualize(income, frequency) / (rate_pct / 100.0))
}

/// A computed result, carrying everything the presentation layer renders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub annual_income: f64,
    pub rate_pct: f64,
    pub required_net_worth: f64,
}

impl Projection {
    /// The calculation breakdown, e.g.
    /// `Annual income of €30,000 ÷ 4% = €750,000`.
    pub fn breakdown(&self, currency: Currency) -> String {
        format!(
            "Annual income of {} ÷ {}% = {}",
            currency.format(self.annual_income),
            self.rate_pct,
            currency.format(self.required_net_worth)
        )
    }

    pub fn assumption(&self) -> String {
        format!(
            "This assumes a {}% annual return on your investments.",
            self.rate_pct
        )
    }

    pub fn badge(&self) -> String {
        format!("Based on {}% annual return", self.rate_pct)
    }
}

/// The four inputs of the calculator, owned by the presentation layer and
/// recomputed in full on every change. Evaluation is a pure function of
/// this tuple, so redundant recomputation is always safe.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    pub income: String,
    pub frequency: Frequency,
    pub currency: Currency,
    pub return_rate: f64,
}

impl Default for CalculatorState {
    fn default() -> Self {
        CalculatorState {
            income: String::new(),
            frequency: Frequency::default(),
            currency: Currency::default(),
            return_rate: f64::from(RATE_DEFAULT),
        }
    }
}

impl CalculatorState {
    pub fn evaluate(&self) -> Option<Projection> {
        let income = parse_income(&self.income)?;
        let net_worth = required_net_worth(income, self.frequency, self.return_rate)?;
        Some(Projection {
            annual_income: annualize(income, self.frequency),
            rate_pct: self.return_rate,
            required_net_worth: net_worth,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_income_rejects_invalid_text() {
        assert_eq!(parse_income(""), None);
        assert_eq!(parse_income("abc"), None);
        assert_eq!(parse_income("-5"), None);
        assert_eq!(parse_income("0"), None);
        assert_eq!(parse_income("inf"), None);
        assert_eq!(parse_income("NaN"), None);
    }

    #[test]
    fn test_parse_income_accepts_positive_numbers() {
        assert_eq!(parse_income("2500"), Some(2500.0));
        assert_eq!(parse_income(" 2500 "), Some(2500.0));
        assert_eq!(parse_income("2500.50"), Some(2500.50));
    }

    #[test]
    fn test_required_net_worth_worked_examples() {
        assert_eq!(
            required_net_worth(2500.0, Frequency::Monthly, 4.0),
            Some(750000.0)
        );
        assert_eq!(
            required_net_worth(30000.0, Frequency::Yearly, 4.0),
            Some(750000.0)
        );
        assert_eq!(
            required_net_worth(1000.0, Frequency::Monthly, 8.0),
            Some(150000.0)
        );
    }

    #[test]
    fn test_required_net_worth_rejects_bad_input() {
        assert_eq!(required_net_worth(f64::NAN, Frequency::Monthly, 4.0), None);
        assert_eq!(required_net_worth(0.0, Frequency::Monthly, 4.0), None);
        assert_eq!(required_net_worth(-5.0, Frequency::Monthly, 4.0), None);
        assert_eq!(required_net_worth(2500.0, Frequency::Monthly, 0.0), None);
        assert_eq!(required_net_worth(2500.0, Frequency::Monthly, -1.0), None);
    }

    #[test]
    fn test_strictly_decreasing_in_rate() {
        let mut previous = f64::INFINITY;
        for rate in 1..=20 {
            let worth = required_net_worth(2500.0, Frequency::Monthly, f64::from(rate)).unwrap();
            assert!(worth < previous, "rate {rate} should lower the requirement");
            previous = worth;
        }
    }

    #[test]
    fn test_strictly_increasing_in_income() {
        let mut previous = 0.0;
        for income in (500..=10000).step_by(500) {
            let worth = required_net_worth(f64::from(income), Frequency::Yearly, 4.0).unwrap();
            assert!(worth > previous, "income {income} should raise the requirement");
            previous = worth;
        }
    }

    #[test]
    fn test_engine_accepts_rates_outside_control_bounds() {
        // The interactive control stops at 2..=8 but the engine does not.
        assert_eq!(
            required_net_worth(1000.0, Frequency::Yearly, 0.5),
            Some(200000.0)
        );
        assert_eq!(
            required_net_worth(1000.0, Frequency::Yearly, 50.0),
            Some(2000.0)
        );
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let state = CalculatorState {
            income: "2500".to_string(),
            frequency: Frequency::Monthly,
            currency: Currency::Eur,
            return_rate: 4.0,
        };
        let first = state.evaluate();
        for _ in 0..10 {
            assert_eq!(state.evaluate(), first);
        }
    }

    #[test]
    fn test_evaluate_default_state_is_empty() {
        assert_eq!(CalculatorState::default().evaluate(), None);
    }

    #[test]
    fn test_breakdown_string() {
        let projection = CalculatorState {
            income: "2500".to_string(),
            frequency: Frequency::Monthly,
            currency: Currency::Eur,
            return_rate: 4.0,
        }
        .evaluate()
        .unwrap();

        assert_eq!(
            projection.breakdown(Currency::Eur),
            "Annual income of €30,000 ÷ 4% = €750,000"
        );
        assert_eq!(
            projection.assumption(),
            "This assumes a 4% annual return on your investments."
        );
        assert_eq!(projection.badge(), "Based on 4% annual return");
    }

    #[test]
    fn test_breakdown_keeps_fractional_rates() {
        let projection = CalculatorState {
            income: "1000".to_string(),
            frequency: Frequency::Yearly,
            currency: Currency::Usd,
            return_rate: 2.5,
        }
        .evaluate()
        .unwrap();

        assert_eq!(
            projection.breakdown(Currency::Usd),
            "Annual income of $1,000 ÷ 2.5% = $40,000"
        );
    }

    #[test]
    fn test_frequency_parse_lenient() {
        assert_eq!(Frequency::parse_lenient("yearly"), Frequency::Yearly);
        assert_eq!(Frequency::parse_lenient("Monthly"), Frequency::Monthly);
        assert_eq!(Frequency::parse_lenient("weekly"), Frequency::Monthly);
    }
}
