use std::fmt;

/// One of the two marks that can be placed on the board.
///
/// Player one always moves first: odd turns belong to [`Player::One`],
/// even turns to [`Player::Two`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Returns the player whose turn it is, for a 1-based turn number.
    #[must_use]
    pub const fn for_turn(turn: u8) -> Self {
        if turn % 2 == 1 { Self::One } else { Self::Two }
    }

    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One => f.write_str("player one"),
            Self::Two => f.write_str("player two"),
        }
    }
}

/// A single board cell.
///
/// The discriminants are the digits used by the rule file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Empty = 0,
    PlayerOne = 1,
    PlayerTwo = 2,
}

impl Cell {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Returns the player occupying this cell, if any.
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Self::Empty => None,
            Self::PlayerOne => Some(Player::One),
            Self::PlayerTwo => Some(Player::Two),
        }
    }

    #[must_use]
    pub const fn to_digit(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            0 => Some(Self::Empty),
            1 => Some(Self::PlayerOne),
            2 => Some(Self::PlayerTwo),
            _ => None,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }
}

/// A single cell constraint of a rule pattern.
///
/// Same encoding as [`Cell`] plus [`PatternCell::Wildcard`], which matches
/// any board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PatternCell {
    Empty = 0,
    PlayerOne = 1,
    PlayerTwo = 2,
    Wildcard = 3,
}

impl PatternCell {
    /// Number of distinct pattern values (digits `0..=3`).
    pub const LEN: u8 = 4;

    /// Returns `true` if this constraint is satisfied by `cell`.
    #[must_use]
    pub fn matches(self, cell: Cell) -> bool {
        match self {
            Self::Wildcard => true,
            Self::Empty => cell == Cell::Empty,
            Self::PlayerOne => cell == Cell::PlayerOne,
            Self::PlayerTwo => cell == Cell::PlayerTwo,
        }
    }

    #[must_use]
    pub const fn to_digit(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            0 => Some(Self::Empty),
            1 => Some(Self::PlayerOne),
            2 => Some(Self::PlayerTwo),
            3 => Some(Self::Wildcard),
            _ => None,
        }
    }
}

impl From<Cell> for PatternCell {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Empty => PatternCell::Empty,
            Cell::PlayerOne => PatternCell::PlayerOne,
            Cell::PlayerTwo => PatternCell::PlayerTwo,
        }
    }
}

/// Index of a board cell, always in `0..=8`.
///
/// ```text
/// 0 1 2
/// 3 4 5
/// 6 7 8
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("{_0}")]
pub struct CellIndex(u8);

impl CellIndex {
    pub const LEN: usize = 9;

    pub const ALL: [Self; Self::LEN] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
    ];

    /// Returns `None` if `index` is not a valid cell index.
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < Self::LEN {
            Some(Self(index))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}
