//! Feedback adapters: how rule weights react to evaluation outcomes.
//!
//! Every rule an agent scans during a turn receives exactly one feedback call:
//!
//! - [`FeedbackAdapter::on_match`] for the rule that fired
//! - [`FeedbackAdapter::on_unmatch`] for rules whose pattern did not apply
//! - [`FeedbackAdapter::on_invalid`] for rules whose pattern applied but whose
//!   target cell was occupied
//!
//! The resulting weight is a crude fitness signal. The matching engine never
//! reads it, so adapters are free to pick any scale.
//!
//! # Adapters
//!
//! | Adapter                    | match | unmatch | invalid | bounds       |
//! |----------------------------|-------|---------|---------|--------------|
//! | [`DefaultFeedbackAdapter`] | +1    | -1      | -100    | none         |
//! | [`BoundedFeedbackAdapter`] | +1    | -1      | -100    | `[min, max]` |

use std::fmt;

use philosophers_engine::Rule;
use tracing::debug;

pub const MATCH_REWARD: f64 = 1.0;
pub const UNMATCH_PENALTY: f64 = 1.0;
pub const INVALID_PENALTY: f64 = 100.0;

/// Adjusts a rule's weight after it has been evaluated against a board.
pub trait FeedbackAdapter: fmt::Debug {
    /// Called for the rule that matched and determined the move.
    fn on_match(&self, rule: &mut Rule);

    /// Called for a scanned rule whose pattern did not apply.
    fn on_unmatch(&self, rule: &mut Rule);

    /// Called for a scanned rule whose pattern applied but proposed an occupied cell.
    fn on_invalid(&self, rule: &mut Rule);
}

/// Unbounded `+1` / `-1` / `-100` feedback.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFeedbackAdapter;

impl DefaultFeedbackAdapter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl FeedbackAdapter for DefaultFeedbackAdapter {
    fn on_match(&self, rule: &mut Rule) {
        rule.weight += MATCH_REWARD;
    }

    fn on_unmatch(&self, rule: &mut Rule) {
        rule.weight -= UNMATCH_PENALTY;
    }

    fn on_invalid(&self, rule: &mut Rule) {
        debug!(%rule, "detected invalid rule");
        rule.weight -= INVALID_PENALTY;
    }
}

/// Same deltas as [`DefaultFeedbackAdapter`], with the weight clamped to
/// `[min, max]` after every update.
#[derive(Debug, Clone, Copy)]
pub struct BoundedFeedbackAdapter {
    min: f64,
    max: f64,
}

impl BoundedFeedbackAdapter {
    /// # Panics
    ///
    /// Panics if `min > max` or either bound is NaN.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        assert!(min <= max, "invalid weight bounds [{min}, {max}]");
        Self { min, max }
    }

    /// Symmetric bounds `[-bound, bound]`.
    #[must_use]
    pub fn symmetric(bound: f64) -> Self {
        Self::new(-bound, bound)
    }

    fn adjust(&self, rule: &mut Rule, delta: f64) {
        rule.weight = (rule.weight + delta).clamp(self.min, self.max);
    }
}

impl FeedbackAdapter for BoundedFeedbackAdapter {
    fn on_match(&self, rule: &mut Rule) {
        self.adjust(rule, MATCH_REWARD);
    }

    fn on_unmatch(&self, rule: &mut Rule) {
        self.adjust(rule, -UNMATCH_PENALTY);
    }

    fn on_invalid(&self, rule: &mut Rule) {
        debug!(%rule, "detected invalid rule");
        self.adjust(rule, -INVALID_PENALTY);
    }
}

#[cfg(test)]
mod tests {
    use philosophers_engine::{CellIndex, PatternCell};

    use super::*;

    fn rule() -> Rule {
        Rule::new([PatternCell::Wildcard; 9], CellIndex::new(0).unwrap())
    }

    #[test]
    fn test_default_adapter_deltas() {
        let adapter = DefaultFeedbackAdapter::new();
        let mut r = rule();
        adapter.on_match(&mut r);
        assert_eq!(r.weight, 1.0);
        adapter.on_unmatch(&mut r);
        adapter.on_unmatch(&mut r);
        assert_eq!(r.weight, -1.0);
        adapter.on_invalid(&mut r);
        assert_eq!(r.weight, -101.0);
    }

    #[test]
    fn test_bounded_adapter_clamps() {
        let adapter = BoundedFeedbackAdapter::new(-150.0, 2.0);
        let mut r = rule();
        for _ in 0..5 {
            adapter.on_match(&mut r);
        }
        assert_eq!(r.weight, 2.0);
        adapter.on_invalid(&mut r);
        assert_eq!(r.weight, -98.0);
        adapter.on_invalid(&mut r);
        assert_eq!(r.weight, -150.0);
        adapter.on_unmatch(&mut r);
        assert_eq!(r.weight, -150.0);
    }

    #[test]
    fn test_bounded_adapter_pulls_outliers_into_range() {
        let adapter = BoundedFeedbackAdapter::symmetric(10.0);
        let mut r = rule();
        r.weight = 500.0;
        adapter.on_unmatch(&mut r);
        assert_eq!(r.weight, 10.0);
    }

    #[test]
    #[should_panic(expected = "invalid weight bounds")]
    fn test_bounded_adapter_rejects_inverted_bounds() {
        let _ = BoundedFeedbackAdapter::new(1.0, -1.0);
    }
}
