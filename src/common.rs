//! Common types for Connect Four: marks, cells, match status and the
//! board/engine error taxonomy.

use core::fmt;

/// The chip color identifying one of the two participants in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// First player to connect; moves first. Wire character `P`.
    Purple,
    /// Second player to connect. Wire character `Y`.
    Yellow,
}

impl Mark {
    /// The other participant's mark.
    pub fn opponent(self) -> Mark {
        match self {
            Mark::Purple => Mark::Yellow,
            Mark::Yellow => Mark::Purple,
        }
    }

    /// Single-character wire representation.
    pub fn as_char(self) -> char {
        match self {
            Mark::Purple => 'P',
            Mark::Yellow => 'Y',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One square of the board. A filled cell never changes again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Filled(Mark),
}

/// Overall state of a match. `Won`, `Tied` and `Abandoned` are terminal:
/// once reached, the status never changes and no further move is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    InProgress,
    Won(Mark),
    Tied,
    /// One side's connection ended mid-match. Carries the mark of the
    /// player who did NOT disconnect, i.e. the one still owed a
    /// notification.
    Abandoned(Mark),
}

impl MatchStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, MatchStatus::InProgress)
    }
}

/// Errors returned by `Board` operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Column index outside the 7-column grid.
    OutOfBounds,
    /// All six cells of the column are already filled.
    ColumnFull,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds => write!(f, "column is out of bounds"),
            BoardError::ColumnFull => write!(f, "column is full"),
        }
    }
}

/// Reasons the engine rejects a move. Clients are told about all of these
/// with the same generic message; the distinction exists for logs and
/// tests. A rejected move never changes any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The match already ended (won, tied or abandoned).
    MatchOver,
    /// The requester moved out of turn.
    NotYourTurn,
    /// Column index outside the grid.
    OutOfBounds,
    /// Target column has no empty cell left.
    ColumnFull,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::MatchOver => write!(f, "match is already over"),
            MoveError::NotYourTurn => write!(f, "not this player's turn"),
            MoveError::OutOfBounds => write!(f, "column is out of bounds"),
            MoveError::ColumnFull => write!(f, "column is full"),
        }
    }
}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::OutOfBounds => MoveError::OutOfBounds,
            BoardError::ColumnFull => MoveError::ColumnFull,
        }
    }
}
