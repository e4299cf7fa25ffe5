//! Output formatters for computed results

pub mod human;
pub mod jsonl;

pub use human::HumanFormatter;
pub use jsonl::JsonlFormatter;

use crate::euclid::{self, Reduction};

/// A computed GCD together with the reductions that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GcdOutcome {
    pub a: i32,
    pub b: i32,
    pub gcd: i32,
    pub steps: Vec<Reduction>,
}

impl GcdOutcome {
    /// Runs the Euclidean algorithm on `a` and `b`, recording every reduction
    pub fn compute(a: i32, b: i32) -> Self {
        let steps: Vec<Reduction> = euclid::reductions(a, b).collect();
        let gcd = steps.last().map_or(a, |last| last.a);
        GcdOutcome { a, b, gcd, steps }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_agrees_with_gcd() {
        for (a, b) in [(48, 18), (17, 5), (-12, 8), (0, 5), (0, 0), (i32::MIN, -1)] {
            let outcome = GcdOutcome::compute(a, b);
            assert_eq!(outcome.gcd, euclid::gcd(a, b));
            assert_eq!(outcome.steps.first(), Some(&Reduction { a, b }));
        }
    }
}
