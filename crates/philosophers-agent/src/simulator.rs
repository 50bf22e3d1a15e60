//! Game simulation: alternating turns between two agents on a shared board.
//!
//! # State Machine
//!
//! ```text
//!            reset()
//!               │
//!               ▼
//!   AwaitingMove { turn: 0, active: One }
//!               │ step(): turn += 1, active agent selects a move,
//!               │         board is checked for a winner
//!               ▼
//!   ┌── winner? ──────► Terminal(Win(player))
//!   ├── turn == cap? ─► Terminal(Draw)
//!   └── otherwise ────► AwaitingMove { turn, active: next }
//! ```
//!
//! Player one moves on odd turns, player two on even turns. The default cap
//! of [`TURN_CAP`] turns is one more than the number of cells, so a game that
//! fills the board without a winner still plays one final, moveless turn in
//! which the active agent scans its rules (and receives feedback) before the
//! game is declared a draw.
//!
//! A turn in which the agent finds no matching rule is simply passed.
//!
//! # Batches
//!
//! [`run_batch`] plays several games in sequence with the same two agents.
//! The board is reset between games; rule weights are not, so feedback
//! accumulates across the whole batch.

use philosophers_engine::{Board, Player};
use tracing::debug;

use crate::{feedback::FeedbackAdapter, philosopher::Philosopher};

/// Default number of turns after which a game without a winner is a draw.
pub const TURN_CAP: u8 = 10;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum GameOutcome {
    #[display("{_0} wins")]
    Win(Player),
    #[display("draw")]
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameState {
    /// `turn` turns have been played; `active` moves next.
    AwaitingMove { turn: u8, active: Player },
    Terminal(GameOutcome),
}

/// Drives one game at a time between two [`Philosopher`]s.
#[derive(Debug, Clone)]
pub struct GameSimulator {
    board: Board,
    state: GameState,
    turn_cap: u8,
}

impl Default for GameSimulator {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSimulator {
    #[must_use]
    pub fn new() -> Self {
        Self::with_turn_cap(TURN_CAP)
    }

    /// A cap of `0` produces games that are drawn before any move.
    #[must_use]
    pub fn with_turn_cap(turn_cap: u8) -> Self {
        let mut sim = Self {
            board: Board::new(),
            state: GameState::Terminal(GameOutcome::Draw),
            turn_cap,
        };
        sim.reset();
        sim
    }

    #[must_use]
    pub fn turn_cap(&self) -> u8 {
        self.turn_cap
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Clears the board and returns to the initial state.
    pub fn reset(&mut self) {
        self.board.reset();
        self.state = if self.turn_cap == 0 {
            GameState::Terminal(GameOutcome::Draw)
        } else {
            GameState::AwaitingMove {
                turn: 0,
                active: Player::for_turn(1),
            }
        };
    }

    /// Performs one transition and returns the new state.
    ///
    /// Does nothing once the game is terminal.
    pub fn step<A, B>(
        &mut self,
        player_one: &mut Philosopher<A>,
        player_two: &mut Philosopher<B>,
    ) -> GameState
    where
        A: FeedbackAdapter,
        B: FeedbackAdapter,
    {
        let GameState::AwaitingMove { .. } = self.state else {
            return self.state;
        };

        let turn = self.board.advance_turn();
        let active = Player::for_turn(turn);
        let played = match active {
            Player::One => player_one.select_move(&mut self.board, active),
            Player::Two => player_two.select_move(&mut self.board, active),
        };
        debug!(
            turn,
            %active,
            played = ?played.map(|c| c.get()),
            board = %self.board,
            "turn played"
        );

        self.state = if let Some(winner) = self.board.winner() {
            GameState::Terminal(GameOutcome::Win(winner))
        } else if turn >= self.turn_cap {
            GameState::Terminal(GameOutcome::Draw)
        } else {
            GameState::AwaitingMove {
                turn,
                active: Player::for_turn(turn + 1),
            }
        };
        self.state
    }

    /// Resets the board and plays a complete game.
    pub fn play<A, B>(
        &mut self,
        player_one: &mut Philosopher<A>,
        player_two: &mut Philosopher<B>,
    ) -> GameOutcome
    where
        A: FeedbackAdapter,
        B: FeedbackAdapter,
    {
        self.reset();
        debug!(
            player_one = player_one.name(),
            player_two = player_two.name(),
            "game started"
        );
        loop {
            if let GameState::Terminal(outcome) = self.step(player_one, player_two) {
                debug!(%outcome, turns = self.board.turn(), board = %self.board, "game finished");
                return outcome;
            }
        }
    }
}

/// Tally of outcomes over a batch of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct BatchSummary {
    pub games: usize,
    pub player_one_wins: usize,
    pub player_two_wins: usize,
    pub draws: usize,
}

impl BatchSummary {
    pub fn record(&mut self, outcome: GameOutcome) {
        self.games += 1;
        match outcome {
            GameOutcome::Win(Player::One) => self.player_one_wins += 1,
            GameOutcome::Win(Player::Two) => self.player_two_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }
}

/// Plays `count` games between the two agents with a default [`GameSimulator`].
///
/// Weights adapted in one game carry over into the next.
pub fn run_batch<A, B>(
    count: usize,
    player_one: &mut Philosopher<A>,
    player_two: &mut Philosopher<B>,
) -> BatchSummary
where
    A: FeedbackAdapter,
    B: FeedbackAdapter,
{
    let mut simulator = GameSimulator::new();
    let mut summary = BatchSummary::default();
    for _ in 0..count {
        summary.record(simulator.play(player_one, player_two));
    }
    summary
}

#[cfg(test)]
mod tests {
    use philosophers_engine::{Cell, CellIndex, PatternCell, Rule, RuleSet};

    use super::*;
    use crate::philosopher::{PLAYER_ONE_NAME as PLAYER_ONE, PLAYER_TWO_NAME as PLAYER_TWO};

    fn rules(lines: &[&str]) -> RuleSet {
        RuleSet::new(lines.iter().map(|l| l.parse::<Rule>().unwrap()).collect())
    }

    /// One rule per cell, each targeting its own cell when it is empty.
    fn fill_in_order(order: [u8; 9]) -> RuleSet {
        RuleSet::new(
            order
                .iter()
                .map(|&i| Rule::new([PatternCell::Wildcard; 9], CellIndex::new(i).unwrap()))
                .collect(),
        )
    }

    #[test]
    fn test_initial_state() {
        let sim = GameSimulator::new();
        assert_eq!(
            sim.state(),
            GameState::AwaitingMove {
                turn: 0,
                active: Player::One
            }
        );
        assert_eq!(sim.board(), &Board::EMPTY);
        assert_eq!(sim.turn_cap(), TURN_CAP);
    }

    #[test]
    fn test_zero_cap_is_drawn_immediately() {
        let mut sim = GameSimulator::with_turn_cap(0);
        let mut p1 = Philosopher::new(PLAYER_ONE, fill_in_order([0, 1, 2, 3, 4, 5, 6, 7, 8]));
        let mut p2 = Philosopher::new(PLAYER_TWO, RuleSet::default());
        assert_eq!(sim.play(&mut p1, &mut p2), GameOutcome::Draw);
        assert!(p1.rules().iter().all(|r| r.weight == 0.0));
    }

    #[test]
    fn test_player_one_wins_top_row() {
        // Player one takes 0, 1, 2; player two takes 3, 4.
        let mut p1 = Philosopher::new(PLAYER_ONE, fill_in_order([0, 1, 2, 3, 4, 5, 6, 7, 8]));
        let mut p2 = Philosopher::new(PLAYER_TWO, fill_in_order([3, 4, 5, 6, 7, 8, 0, 1, 2]));
        let mut sim = GameSimulator::new();

        assert_eq!(sim.play(&mut p1, &mut p2), GameOutcome::Win(Player::One));
        assert_eq!(sim.board().turn(), 5);
        assert_eq!(sim.board().to_string(), "111/220/000");
    }

    #[test]
    fn test_step_alternates_players() {
        let mut p1 = Philosopher::new(PLAYER_ONE, fill_in_order([0, 1, 2, 3, 4, 5, 6, 7, 8]));
        let mut p2 = Philosopher::new(PLAYER_TWO, fill_in_order([8, 7, 6, 5, 4, 3, 2, 1, 0]));
        let mut sim = GameSimulator::new();

        assert_eq!(
            sim.step(&mut p1, &mut p2),
            GameState::AwaitingMove {
                turn: 1,
                active: Player::Two
            }
        );
        assert_eq!(sim.board().cell(CellIndex::new(0).unwrap()), Cell::PlayerOne);
        assert_eq!(
            sim.step(&mut p1, &mut p2),
            GameState::AwaitingMove {
                turn: 2,
                active: Player::One
            }
        );
        assert_eq!(sim.board().cell(CellIndex::new(8).unwrap()), Cell::PlayerTwo);
    }

    #[test]
    fn test_step_after_terminal_is_noop() {
        let mut p1 = Philosopher::new(PLAYER_ONE, RuleSet::default());
        let mut p2 = Philosopher::new(PLAYER_TWO, RuleSet::default());
        let mut sim = GameSimulator::with_turn_cap(1);
        assert_eq!(sim.step(&mut p1, &mut p2), GameState::Terminal(GameOutcome::Draw));
        assert_eq!(sim.step(&mut p1, &mut p2), GameState::Terminal(GameOutcome::Draw));
        assert_eq!(sim.board().turn(), 1);
    }

    #[test]
    fn test_agents_without_moves_draw_at_cap() {
        let mut p1 = Philosopher::new(PLAYER_ONE, rules(&["111111111\t0\t0"]));
        let mut p2 = Philosopher::new(PLAYER_TWO, rules(&["222222222\t0\t0"]));
        let mut sim = GameSimulator::new();

        assert_eq!(sim.play(&mut p1, &mut p2), GameOutcome::Draw);
        assert_eq!(sim.board().turn(), TURN_CAP);
        assert_eq!(sim.board(), &{
            let mut b = Board::EMPTY;
            for _ in 0..TURN_CAP {
                b.advance_turn();
            }
            b
        });
        // Each agent scanned its single rule on each of its five turns.
        assert_eq!(p1.rules().rules()[0].weight, -5.0);
        assert_eq!(p2.rules().rules()[0].weight, -5.0);
    }

    #[test]
    fn test_full_board_plays_moveless_tenth_turn() {
        // Fills the board as 121/122/211 with no completed line.
        //   turn: 1  2  3  4  5  6  7  8  9
        //   cell: 0  1  2  4  3  5  7  6  8
        let mut p1 = Philosopher::new(PLAYER_ONE, fill_in_order([0, 2, 3, 7, 8, 1, 4, 5, 6]));
        let mut p2 = Philosopher::new(PLAYER_TWO, fill_in_order([1, 4, 5, 6, 0, 2, 3, 7, 8]));
        let mut sim = GameSimulator::new();

        assert_eq!(sim.play(&mut p1, &mut p2), GameOutcome::Draw);
        assert_eq!(sim.board().turn(), 10);
        assert!(sim.board().is_full());
        assert_eq!(sim.board().winner(), None);

        // Player two's tenth-turn scan found every target occupied.
        let p2_weights = p2.rules().iter().map(|r| r.weight).collect::<Vec<_>>();
        assert!(p2_weights.iter().all(|w| *w <= -100.0), "{p2_weights:?}");
    }

    #[test]
    fn test_run_batch_accumulates_weights() {
        let mut p1 = Philosopher::new(PLAYER_ONE, fill_in_order([0, 1, 2, 3, 4, 5, 6, 7, 8]));
        let mut p2 = Philosopher::new(PLAYER_TWO, fill_in_order([3, 4, 5, 6, 7, 8, 0, 1, 2]));

        let summary = run_batch(3, &mut p1, &mut p2);
        assert_eq!(
            summary,
            BatchSummary {
                games: 3,
                player_one_wins: 3,
                player_two_wins: 0,
                draws: 0,
            }
        );
        // Per game, rule 0 fires on turn 1 and is invalid on turns 3 and 5.
        assert_eq!(p1.rules().rules()[0].weight, 3.0 * (1.0 - 200.0));
    }

    #[test]
    fn test_batch_summary_serializes() {
        let mut summary = BatchSummary::default();
        summary.record(GameOutcome::Win(Player::Two));
        summary.record(GameOutcome::Draw);
        assert_eq!(
            serde_json::to_string(&summary).unwrap(),
            r#"{"games":2,"player_one_wins":0,"player_two_wins":1,"draws":1}"#
        );
    }
}
