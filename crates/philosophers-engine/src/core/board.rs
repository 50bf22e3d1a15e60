use std::fmt;

use tracing::trace;

use super::cell::{Cell, CellIndex, Player};

/// The eight winning lines, in the order they are scanned.
///
/// Rows first, then columns, then the two diagonals.
pub const WINNING_LINES: [[CellIndex; 3]; 8] = {
    const fn line(a: usize, b: usize, c: usize) -> [CellIndex; 3] {
        [CellIndex::ALL[a], CellIndex::ALL[b], CellIndex::ALL[c]]
    }
    [
        line(0, 1, 2),
        line(3, 4, 5),
        line(6, 7, 8),
        line(0, 3, 6),
        line(1, 4, 7),
        line(2, 5, 8),
        line(0, 4, 8),
        line(2, 4, 6),
    ]
};

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("cell {index} is already occupied")]
pub struct CellOccupiedError {
    #[error(not(source))]
    pub index: CellIndex,
}

/// A 3×3 tic-tac-toe board plus its turn counter.
///
/// Cells are stored row-major (see [`CellIndex`]). The board is mutated by one
/// cell write per turn and reset between games.
///
/// # Example
///
/// ```
/// use philosophers_engine::{Board, CellIndex, Player};
///
/// let mut board = Board::new();
/// for i in [0, 1, 2] {
///     board.place(CellIndex::new(i).unwrap(), Player::One).unwrap();
/// }
/// assert_eq!(board.winner(), Some(Player::One));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; CellIndex::LEN],
    turn: u8,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub const EMPTY: Self = Self {
        cells: [Cell::Empty; CellIndex::LEN],
        turn: 0,
    };

    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Builds a board from raw cells, with the turn counter at zero.
    #[must_use]
    pub const fn from_cells(cells: [Cell; CellIndex::LEN]) -> Self {
        Self { cells, turn: 0 }
    }

    /// Clears every cell and sets the turn counter back to zero.
    pub fn reset(&mut self) {
        *self = Self::EMPTY;
    }

    #[must_use]
    pub const fn cell(&self, index: CellIndex) -> Cell {
        self.cells[index.as_usize()]
    }

    #[must_use]
    pub const fn cells(&self) -> &[Cell; CellIndex::LEN] {
        &self.cells
    }

    /// Number of turns started in the current game.
    #[must_use]
    pub const fn turn(&self) -> u8 {
        self.turn
    }

    /// Starts the next turn and returns its 1-based number.
    pub fn advance_turn(&mut self) -> u8 {
        self.turn += 1;
        self.turn
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    #[must_use]
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|c| **c == cell).count()
    }

    /// Places `player`'s mark, failing if the cell is already taken.
    pub fn place(&mut self, index: CellIndex, player: Player) -> Result<(), CellOccupiedError> {
        if !self.cell(index).is_empty() {
            return Err(CellOccupiedError { index });
        }
        self.place_unchecked(index, player);
        Ok(())
    }

    /// Places `player`'s mark without checking whether the cell is empty.
    pub fn place_unchecked(&mut self, index: CellIndex, player: Player) {
        self.cells[index.as_usize()] = Cell::from(player);
    }

    /// Shorthand for [`evaluate_winner`].
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        evaluate_winner(self)
    }
}

/// Scans [`WINNING_LINES`] in order and returns the owner of the first
/// complete line.
///
/// Returns `None` when no line is complete, including on a full board.
/// Classifying a finished game without a winner as a draw is up to the caller.
#[must_use]
pub fn evaluate_winner(board: &Board) -> Option<Player> {
    WINNING_LINES.iter().find_map(|&[a, b, c]| {
        let first = board.cell(a);
        let player = first.player()?;
        if first == board.cell(b) && first == board.cell(c) {
            trace!(line = ?[a.get(), b.get(), c.get()], %player, "line completed");
            Some(player)
        } else {
            None
        }
    })
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(3).enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            for cell in row {
                write!(f, "{}", cell.to_digit())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn board_from_digits(digits: [u8; 9]) -> Board {
        Board::from_cells(digits.map(|d| Cell::from_digit(d).unwrap()))
    }

    fn idx(i: u8) -> CellIndex {
        CellIndex::new(i).unwrap()
    }

    #[test]
    fn test_reset_clears_cells_and_turn() {
        let mut board = board_from_digits([1, 2, 1, 0, 0, 0, 0, 0, 2]);
        board.advance_turn();
        board.advance_turn();
        board.reset();
        assert_eq!(board, Board::EMPTY);
        assert_eq!(board.turn(), 0);
        assert!(board.cells().iter().all(|c| c.is_empty()));
    }

    #[test]
    fn test_place_rejects_occupied_cell() {
        let mut board = Board::new();
        board.place(idx(4), Player::One).unwrap();
        let err = board.place(idx(4), Player::Two).unwrap_err();
        assert_eq!(err.index, idx(4));
        assert_eq!(board.cell(idx(4)), Cell::PlayerOne);
        assert_eq!(err.to_string(), "cell 4 is already occupied");
    }

    #[test]
    fn test_winner_every_line() {
        for line in WINNING_LINES {
            for player in [Player::One, Player::Two] {
                let mut board = Board::new();
                for index in line {
                    board.place_unchecked(index, player);
                }
                assert_eq!(board.winner(), Some(player), "line {line:?}");
            }
        }
    }

    #[test]
    fn test_winner_top_row_completion() {
        let mut board = board_from_digits([1, 1, 0, 2, 2, 0, 0, 0, 0]);
        assert_eq!(board.winner(), None);
        board.place(idx(2), Player::One).unwrap();
        assert_eq!(board.winner(), Some(Player::One));
    }

    #[test]
    fn test_full_board_without_line_has_no_winner() {
        let board = board_from_digits([1, 2, 1, 2, 1, 2, 2, 1, 2]);
        assert!(board.is_full());
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_first_line_in_scan_order_wins() {
        // Impossible in a real game, but must not panic.
        let board = board_from_digits([2, 2, 2, 1, 1, 1, 0, 0, 0]);
        assert_eq!(board.winner(), Some(Player::Two));
    }

    #[test]
    fn test_display_rows() {
        let board = board_from_digits([1, 1, 0, 2, 2, 0, 0, 0, 0]);
        assert_eq!(board.to_string(), "110/220/000");
    }

    proptest! {
        #[test]
        fn prop_winner_iff_uniform_line(digits in proptest::array::uniform9(0u8..3)) {
            let board = board_from_digits(digits);
            let complete: Vec<Player> = WINNING_LINES
                .iter()
                .filter_map(|&line| {
                    let cells = line.map(|i| board.cell(i));
                    let player = cells[0].player()?;
                    cells.iter().all(|c| *c == cells[0]).then_some(player)
                })
                .collect();
            prop_assert_eq!(board.winner(), complete.first().copied());
        }
    }
}
