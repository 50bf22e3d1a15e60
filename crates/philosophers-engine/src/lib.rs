//! Board, rules and evaluators for rule-driven tic-tac-toe.
//!
//! This crate holds the pure game data the simulation runs on:
//!
//! - [`Board`] - 3×3 grid plus turn counter, and [`evaluate_winner`] scanning
//!   the eight [`WINNING_LINES`]
//! - [`Rule`] - a 9-cell pattern with wildcards, a target cell and a weight,
//!   tested against a board by [`evaluate_rule`]
//! - [`RuleSet`] - an ordered rule list and its line-oriented text format
//!
//! # Rule Evaluation
//!
//! Testing a rule against a board has three outcomes ([`RuleEvaluation`]):
//!
//! 1. **Unmatched** - some non-wildcard pattern cell disagrees with the board
//! 2. **Invalid** - the pattern matches but the target cell is occupied
//! 3. **Match** - the pattern matches and the target cell is free
//!
//! Distinguishing "does not apply" from "applies but proposes an illegal move"
//! lets agents penalize broken rules much harder than merely irrelevant ones.
//!
//! # Rule File Format
//!
//! One rule per line: nine pattern digits (`0` empty, `1` player one,
//! `2` player two, `3` wildcard), a tab, the target cell digit (`0`-`8`),
//! a tab, and the weight as a decimal float.
//!
//! ```text
//! 113333333	2	4
//! 333333333	4	-100
//! ```
//!
//! # Example
//!
//! ```
//! use philosophers_engine::{Board, Rule, RuleEvaluation};
//!
//! let rule: Rule = "333303333\t4\t0".parse().unwrap();
//! let board = Board::new();
//! assert_eq!(rule.evaluate(&board), RuleEvaluation::Match(rule.target));
//! ```

pub use self::core::*;

pub mod core;
