//! Rule-based agents.
//!
//! A [`Philosopher`] owns an ordered [`RuleSet`] and a [`FeedbackAdapter`].
//! On its turn it scans the rules in stored order and plays the target of
//! the first rule that matches the board. Every rule it looks at gets exactly
//! one feedback call; rules after the matching one are not scanned and get
//! none.
//!
//! Rule order is a fixed priority list. Weights change during play but never
//! reorder the rules.

use philosophers_engine::{Board, CellIndex, Player, RuleEvaluation, RuleSet, evaluate_rule};
use tracing::debug;

use crate::feedback::{DefaultFeedbackAdapter, FeedbackAdapter};

/// Name of the agent playing [`Player::One`] in a standard run.
pub const PLAYER_ONE_NAME: &str = "Nietzsche";
/// Name of the agent playing [`Player::Two`] in a standard run.
pub const PLAYER_TWO_NAME: &str = "Schopenhauer";

#[derive(Debug, Clone)]
pub struct Philosopher<A = DefaultFeedbackAdapter> {
    name: String,
    rules: RuleSet,
    adapter: A,
}

impl Philosopher {
    /// Creates an agent using [`DefaultFeedbackAdapter`].
    #[must_use]
    pub fn new(name: impl Into<String>, rules: RuleSet) -> Self {
        Self::with_adapter(name, rules, DefaultFeedbackAdapter::new())
    }
}

impl<A> Philosopher<A>
where
    A: FeedbackAdapter,
{
    #[must_use]
    pub fn with_adapter(name: impl Into<String>, rules: RuleSet, adapter: A) -> Self {
        Self {
            name: name.into(),
            rules,
            adapter,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    #[must_use]
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Consumes the agent, returning its rules with their adapted weights.
    #[must_use]
    pub fn into_rules(self) -> RuleSet {
        self.rules
    }

    /// Plays one turn for `player`.
    ///
    /// Scans the rules in order:
    ///
    /// - `Unmatched` rules get [`FeedbackAdapter::on_unmatch`] and the scan continues
    /// - `Invalid` rules get [`FeedbackAdapter::on_invalid`] and the scan continues
    /// - the first `Match` writes `player`'s mark to its target, gets
    ///   [`FeedbackAdapter::on_match`], and ends the scan
    ///
    /// # Returns
    ///
    /// The cell that was played, or `None` if no rule matched. In that case the
    /// board is left unchanged and the turn is passed.
    pub fn select_move(&mut self, board: &mut Board, player: Player) -> Option<CellIndex> {
        for rule in self.rules.rules_mut() {
            match evaluate_rule(board, rule) {
                RuleEvaluation::Match(target) => {
                    // `evaluate_rule` has just checked that the target is empty.
                    board.place_unchecked(target, player);
                    self.adapter.on_match(rule);
                    debug!(agent = %self.name, %player, %target, %rule, "rule fired");
                    return Some(target);
                }
                RuleEvaluation::Unmatched => self.adapter.on_unmatch(rule),
                RuleEvaluation::Invalid => self.adapter.on_invalid(rule),
            }
        }
        debug!(agent = %self.name, %player, "no rule matched, passing");
        None
    }
}
