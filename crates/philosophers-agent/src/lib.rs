//! Rule-based tic-tac-toe agents and the simulator that pits them against each other.
//!
//! This crate builds on the board and rule primitives of `philosophers-engine`:
//!
//! 1. **Feedback** ([`feedback`]) - How a rule's weight reacts to being evaluated:
//!    rewarded when it fires, penalized when it does not apply, heavily penalized
//!    when it applies but proposes an occupied cell.
//!
//! 2. **Agents** ([`philosopher`]) - A [`Philosopher`] scans its ordered rule list
//!    and plays the first match, sending one feedback call per scanned rule.
//!
//! 3. **Simulation** ([`simulator`]) - A [`GameSimulator`] alternates turns between
//!    two agents until a line is completed or the turn cap is reached.
//!    [`run_batch`] repeats this over many games and tallies the outcomes.
//!
//! # Architecture
//!
//! ```text
//! run_batch (many games, weights persist)
//!     ↓ uses
//! GameSimulator (one game, alternating turns)
//!     ↓ uses
//! Philosopher::select_move (one turn, first match wins)
//!     ↓ uses
//! evaluate_rule + FeedbackAdapter (one rule)
//! ```
//!
//! # Design Principles
//!
//! ## Fixed Priority
//!
//! Rules are never reordered by their weights. The weight is an output of a run,
//! written back to the rule file for offline inspection or filtering, not an
//! input to move selection.
//!
//! ## Static Dispatch
//!
//! Agents are generic over their [`FeedbackAdapter`], defaulting to
//! [`DefaultFeedbackAdapter`]. The two agents in a game may use different adapters.
//!
//! ## Draws Belong to the Simulator
//!
//! The engine's line scan only reports whether someone has won. Deciding that a
//! game without a winner is over is the simulator's job: a game that reaches the
//! turn cap is a [`GameOutcome::Draw`].
//!
//! # Example
//!
//! ```
//! use philosophers_agent::{
//!     PLAYER_ONE_NAME, PLAYER_TWO_NAME, Philosopher, run_batch,
//! };
//! use philosophers_engine::{Rule, RuleSet};
//!
//! let rules = |lines: &[&str]| -> RuleSet {
//!     RuleSet::new(lines.iter().map(|l| l.parse::<Rule>().unwrap()).collect())
//! };
//! let mut nietzsche = Philosopher::new(
//!     PLAYER_ONE_NAME,
//!     rules(&["333333333\t0\t0", "333333333\t1\t0", "333333333\t2\t0"]),
//! );
//! let mut schopenhauer = Philosopher::new(
//!     PLAYER_TWO_NAME,
//!     rules(&["333333333\t3\t0", "333333333\t4\t0"]),
//! );
//!
//! let summary = run_batch(2, &mut nietzsche, &mut schopenhauer);
//! assert_eq!(summary.games, 2);
//! assert_eq!(summary.player_one_wins, 2);
//! ```

pub use self::{feedback::*, philosopher::*, simulator::*};

pub mod feedback;
pub mod philosopher;
pub mod simulator;
