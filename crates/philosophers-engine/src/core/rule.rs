use std::{fmt, str::FromStr};

use rand::{
    Rng,
    distr::{Distribution, StandardUniform},
};

use super::{
    board::Board,
    cell::{CellIndex, PatternCell},
};

/// Outcome of testing one rule against one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum RuleEvaluation {
    /// The pattern matched and the target cell is free.
    Match(CellIndex),
    /// Some non-wildcard pattern cell disagrees with the board.
    Unmatched,
    /// The pattern matched but the target cell is already occupied.
    Invalid,
}

/// A pattern-matching move rule.
///
/// When every cell of `pattern` is satisfied by the board, the rule proposes
/// placing a mark at `target`. `weight` is a fitness score adjusted by
/// feedback during simulation; only its ordering is meaningful.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub pattern: [PatternCell; CellIndex::LEN],
    pub target: CellIndex,
    pub weight: f64,
}

impl Rule {
    #[must_use]
    pub const fn new(pattern: [PatternCell; CellIndex::LEN], target: CellIndex) -> Self {
        Self {
            pattern,
            target,
            weight: 0.0,
        }
    }

    /// Shorthand for [`evaluate_rule`].
    #[must_use]
    pub fn evaluate(&self, board: &Board) -> RuleEvaluation {
        evaluate_rule(board, self)
    }
}

/// Decides whether `rule` applies to `board`.
///
/// 1. Any non-wildcard pattern cell that differs from the board yields
///    [`RuleEvaluation::Unmatched`].
/// 2. A matching pattern whose target cell is occupied yields
///    [`RuleEvaluation::Invalid`].
/// 3. Otherwise the rule yields [`RuleEvaluation::Match`] with its target.
#[must_use]
pub fn evaluate_rule(board: &Board, rule: &Rule) -> RuleEvaluation {
    let matched = rule
        .pattern
        .iter()
        .zip(board.cells())
        .all(|(pattern, cell)| pattern.matches(*cell));
    if !matched {
        return RuleEvaluation::Unmatched;
    }
    if !board.cell(rule.target).is_empty() {
        return RuleEvaluation::Invalid;
    }
    RuleEvaluation::Match(rule.target)
}

/// Samples a rule uniformly: each pattern cell from `0..=3`, the target from
/// `0..=8`, weight `0.0`.
///
/// ```
/// use philosophers_engine::Rule;
/// use rand::{Rng as _, SeedableRng as _};
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let rule: Rule = rng.random();
/// assert_eq!(rule.weight, 0.0);
/// ```
impl Distribution<Rule> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Rule {
        let pattern = std::array::from_fn(|_| {
            let digit = rng.random_range(0..PatternCell::LEN);
            PatternCell::from_digit(digit).unwrap_or(PatternCell::Wildcard)
        });
        let target = CellIndex::ALL[rng.random_range(0..CellIndex::LEN)];
        Rule::new(pattern, target)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseRuleError {
    #[display("expected 3 tab-separated fields, found {found}")]
    FieldCount { found: usize },
    #[display("pattern must have 9 cells, found {found}")]
    PatternLength { found: usize },
    #[display("invalid pattern digit {found:?} at position {position}")]
    PatternDigit { position: usize, found: char },
    #[display("invalid target cell {found:?}")]
    Target {
        #[error(not(source))]
        found: String,
    },
    #[display("invalid weight: {_0}")]
    Weight(std::num::ParseFloatError),
}

/// Formats the rule as one line of a rule file, without the newline:
/// nine pattern digits, a tab, the target digit, a tab, the weight.
impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in self.pattern {
            write!(f, "{}", cell.to_digit())?;
        }
        write!(f, "\t{}\t{}", self.target, self.weight)
    }
}

impl FromStr for Rule {
    type Err = ParseRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields = s.split('\t').collect::<Vec<_>>();
        let [pattern, target, weight] = fields[..] else {
            return Err(ParseRuleError::FieldCount {
                found: fields.len(),
            });
        };

        let found = pattern.chars().count();
        if found != CellIndex::LEN {
            return Err(ParseRuleError::PatternLength { found });
        }
        let mut cells = [PatternCell::Wildcard; CellIndex::LEN];
        for (position, (slot, ch)) in cells.iter_mut().zip(pattern.chars()).enumerate() {
            *slot = ch
                .to_digit(10)
                .and_then(|d| u8::try_from(d).ok())
                .and_then(PatternCell::from_digit)
                .ok_or(ParseRuleError::PatternDigit { position, found: ch })?;
        }

        let target = match target.as_bytes() {
            [digit @ b'0'..=b'8'] => CellIndex::new(digit - b'0'),
            _ => None,
        }
        .ok_or_else(|| ParseRuleError::Target {
            found: target.to_owned(),
        })?;

        let weight = weight.parse::<f64>().map_err(ParseRuleError::Weight)?;

        Ok(Self {
            pattern: cells,
            target,
            weight,
        })
    }
}
