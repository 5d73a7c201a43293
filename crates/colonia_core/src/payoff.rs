//! Evolutionary-game payoffs and the per-step defect draw.
//!
//! `x` is the cooperation propensity of the adopted strategy and `n` the
//! population size at the time of evaluation.

use crate::error::{Result, SimError};
use colonia_data::{Decision, Strategy};
use rand::Rng;

/// Payoff for cooperating: `3x / n`. Undefined for an empty population.
pub fn cooperate_payoff(propensity: f64, population: usize) -> Result<f64> {
    if population == 0 {
        return Err(SimError::UndefinedPayoff {
            kind: "cooperate",
            population,
            minimum: 0,
        });
    }
    Ok((3.0 * propensity) / population as f64)
}

/// Payoff for defecting: `(5x + n - x + 1) / (n - 1)`. Undefined unless at
/// least two colonies exist.
pub fn defect_payoff(propensity: f64, population: usize) -> Result<f64> {
    if population <= 1 {
        return Err(SimError::UndefinedPayoff {
            kind: "defect",
            population,
            minimum: 1,
        });
    }
    let n = population as f64;
    let x = propensity;
    Ok((5.0 * x + n - x + 1.0) / (n - 1.0))
}

/// Payoff matching a decision.
pub fn payoff(decision: Decision, propensity: f64, population: usize) -> Result<f64> {
    match decision {
        Decision::Cooperate => cooperate_payoff(propensity, population),
        Decision::Defect => defect_payoff(propensity, population),
    }
}

/// Draws the defect flag for a propensity.
///
/// A uniform draw in `[0, 1)` at or above the propensity means defect, so a
/// propensity of 1.0 never defects and 0.0 always does.
pub fn draw_defect<R: Rng + ?Sized>(propensity: f64, rng: &mut R) -> bool {
    rng.gen::<f64>() >= propensity
}

pub fn decide<R: Rng + ?Sized>(strategy: Strategy, rng: &mut R) -> Decision {
    Decision::from_defect(draw_defect(strategy.propensity(), rng))
}

/// Parses a strategy label, naming the label on failure.
pub fn parse_strategy(label: &str) -> Result<Strategy> {
    Strategy::from_label(label).ok_or_else(|| SimError::InvalidStrategy(label.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_cooperate_scenario() {
        let p = cooperate_payoff(Strategy::C.propensity(), 4).unwrap();
        assert!((p - 0.375).abs() < 1e-12);
    }

    #[test]
    fn test_defect_formula() {
        // x = 0.5, n = 4: (2.5 + 4 - 0.5 + 1) / 3 = 7 / 3
        let p = defect_payoff(0.5, 4).unwrap();
        assert!((p - 7.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_populations() {
        assert!(matches!(
            cooperate_payoff(0.5, 0),
            Err(SimError::UndefinedPayoff { kind: "cooperate", .. })
        ));
        assert!(matches!(
            defect_payoff(0.5, 1),
            Err(SimError::UndefinedPayoff { kind: "defect", population: 1, .. })
        ));
        assert!(defect_payoff(0.5, 0).is_err());
    }

    #[test]
    fn test_payoff_dispatch() {
        assert_eq!(
            payoff(Decision::Cooperate, 1.0, 3).unwrap(),
            cooperate_payoff(1.0, 3).unwrap()
        );
        assert_eq!(
            payoff(Decision::Defect, 1.0, 3).unwrap(),
            defect_payoff(1.0, 3).unwrap()
        );
    }

    #[test]
    fn test_parse_strategy() {
        assert_eq!(parse_strategy("d").unwrap(), Strategy::D);
        let err = parse_strategy("z").unwrap_err();
        assert_eq!(err, SimError::InvalidStrategy("z".into()));
        assert!(err.to_string().contains("\"z\""));
    }

    #[test]
    fn test_pure_strategies_are_fixed() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1000 {
            assert_eq!(decide(Strategy::A, &mut rng), Decision::Cooperate);
            assert_eq!(decide(Strategy::E, &mut rng), Decision::Defect);
        }
    }

    #[test]
    fn test_mixed_strategy_defects_sometimes() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let defections = (0..2000)
            .filter(|_| decide(Strategy::C, &mut rng).defects())
            .count();
        assert!((800..1200).contains(&defections), "got {defections}");
    }
}
