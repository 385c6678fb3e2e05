//! Outcome calculator: closed-form mock indicators derived from lever values.

use crate::domain::levers::LeverValues;

pub const INTEREST_RATE: &str = "Interest Rate";
pub const FISCAL_STIMULUS: &str = "Fiscal Stimulus";
pub const MINIMUM_WAGE: &str = "Minimum Wage";
pub const CORPORATE_TAX_RATE: &str = "Corporate Tax Rate";

/// The fixed set of indicators every simulation produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Gdp,
    InflationRate,
    GiniCoefficient,
}

impl Outcome {
    pub const ALL: [Outcome; 3] = [Outcome::Gdp, Outcome::InflationRate, Outcome::GiniCoefficient];

    /// Display label, including the unit.
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Gdp => "GDP (billions)",
            Outcome::InflationRate => "Inflation Rate (%)",
            Outcome::GiniCoefficient => "Gini Coefficient",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|outcome| outcome.label() == label)
    }
}

/// Computed indicator values. Values are kept at full precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutcomeSet {
    pub gdp: f64,
    pub inflation_rate: f64,
    pub gini_coefficient: f64,
}

impl OutcomeSet {
    pub fn get(&self, outcome: Outcome) -> f64 {
        match outcome {
            Outcome::Gdp => self.gdp,
            Outcome::InflationRate => self.inflation_rate,
            Outcome::GiniCoefficient => self.gini_coefficient,
        }
    }

    /// Iterate in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Outcome, f64)> + '_ {
        Outcome::ALL.into_iter().map(|outcome| (outcome, self.get(outcome)))
    }

    /// Copy with every value rounded to two decimals, as shown to users.
    pub fn rounded(&self) -> Self {
        Self {
            gdp: round2(self.gdp),
            inflation_rate: round2(self.inflation_rate),
            gini_coefficient: round2(self.gini_coefficient),
        }
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format a value the way results are displayed: rounded, two decimals.
pub fn format_rounded(value: f64) -> String {
    format!("{:.2}", round2(value))
}

/// Compute the outcome set for a simulation.
///
/// All scenarios share the same formulas; `scenario` is only used for tracing.
/// Levers absent from `levers` count as zero.
pub fn calculate(scenario: &str, levers: &LeverValues) -> OutcomeSet {
    let interest_rate = levers.value_or_zero(INTEREST_RATE);
    let fiscal_stimulus = levers.value_or_zero(FISCAL_STIMULUS);
    let minimum_wage = levers.value_or_zero(MINIMUM_WAGE);
    let corporate_tax_rate = levers.value_or_zero(CORPORATE_TAX_RATE);

    let outcomes = OutcomeSet {
        gdp: 1000.0 + 3.0 * fiscal_stimulus - 15.0 * interest_rate,
        inflation_rate: (5.0 - 0.3 * interest_rate + 0.002 * fiscal_stimulus).max(0.0),
        gini_coefficient: 40.0 + 0.1 * minimum_wage - 0.05 * corporate_tax_rate,
    };

    tracing::debug!(
        scenario,
        gdp = outcomes.gdp,
        inflation_rate = outcomes.inflation_rate,
        gini_coefficient = outcomes.gini_coefficient,
        "Computed outcomes"
    );
    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
    }

    #[test]
    fn empty_levers_yield_baseline() {
        let outcomes = calculate("Anything", &LeverValues::new());
        assert_eq!(outcomes.gdp, 1000.0);
        assert_eq!(outcomes.inflation_rate, 5.0);
        assert_eq!(outcomes.gini_coefficient, 40.0);
    }

    #[test]
    fn tax_reform_example() {
        let levers = LeverValues::new()
            .with(INTEREST_RATE, 2.0)
            .with(FISCAL_STIMULUS, 500.0)
            .with(MINIMUM_WAGE, 15.0)
            .with(CORPORATE_TAX_RATE, 21.0);

        let outcomes = calculate("Tax Reform", &levers);
        assert_close(outcomes.gdp, 2470.0);
        assert_close(outcomes.inflation_rate, 5.4);
        assert_close(outcomes.gini_coefficient, 40.45);
    }

    #[test]
    fn inflation_clamps_at_zero() {
        let levers = LeverValues::new().with(INTEREST_RATE, 50.0);
        assert_eq!(calculate("Tightening", &levers).inflation_rate, 0.0);
    }

    #[test]
    fn unrecognized_levers_are_ignored() {
        let levers = LeverValues::new().with("Carbon Tax", 80.0);
        assert_eq!(calculate("Climate", &levers), calculate("Climate", &LeverValues::new()));
    }

    #[test]
    fn scenario_name_does_not_change_formulas() {
        let levers = LeverValues::new().with(INTEREST_RATE, 3.0).with(MINIMUM_WAGE, 12.0);
        assert_eq!(calculate("A", &levers), calculate("B", &levers));
    }

    #[test]
    fn labels_round_trip() {
        for outcome in Outcome::ALL {
            assert_eq!(Outcome::from_label(outcome.label()), Some(outcome));
        }
        assert_eq!(Outcome::from_label("Unemployment"), None);
    }

    #[test]
    fn rounding_keeps_two_decimals() {
        let set = OutcomeSet { gdp: 2470.004, inflation_rate: 5.4049, gini_coefficient: 40.456 };
        let rounded = set.rounded();
        assert_eq!(rounded.gdp, 2470.0);
        assert_eq!(rounded.inflation_rate, 5.4);
        assert_close(rounded.gini_coefficient, 40.46);
    }

    #[test]
    fn formatted_values_parse_back_to_rounded_values() {
        for value in [2470.0, 5.399999999999999, 40.449999999999996, 0.125, 1234.5678] {
            let parsed: f64 = format_rounded(value).parse().unwrap();
            assert_eq!(parsed, round2(value));
        }
    }

    proptest! {
        #[test]
        fn inflation_is_never_negative(
            rate in -1.0e6f64..1.0e6,
            stimulus in -1.0e6f64..1.0e6,
            wage in -1.0e6f64..1.0e6,
            tax in -1.0e6f64..1.0e6,
        ) {
            let levers = LeverValues::new()
                .with(INTEREST_RATE, rate)
                .with(FISCAL_STIMULUS, stimulus)
                .with(MINIMUM_WAGE, wage)
                .with(CORPORATE_TAX_RATE, tax);
            prop_assert!(calculate("prop", &levers).inflation_rate >= 0.0);
        }

        #[test]
        fn calculation_is_deterministic(rate in 0.0f64..20.0, stimulus in 0.0f64..2000.0) {
            let levers = LeverValues::new().with(INTEREST_RATE, rate).with(FISCAL_STIMULUS, stimulus);
            prop_assert_eq!(calculate("prop", &levers), calculate("prop", &levers));
        }
    }
}
