//! The per-match state machine. Owns one board, the turn marker and the
//! match status, and performs no I/O: its callers share it behind a mutex
//! scoped to a single match and do the socket work themselves.

use crate::board::Board;
use crate::common::{Mark, MatchStatus, MoveError};
use crate::config::COLS;

/// Outcome of an accepted move: where the chip came to rest and the match
/// status immediately afterwards. This is a single linearizable snapshot;
/// both participants are notified from it. The resting row matters because
/// gravity makes it a function of prior board state only the engine knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub row: usize,
    pub column: usize,
    pub status: MatchStatus,
}

/// A cursor position to forward to the requester's opponent. Purely
/// cosmetic; carries no validation and touches no match state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorRelay {
    pub to: Mark,
    pub x: i32,
    pub y: i32,
}

/// Result of a disconnect: which participant must be told the match is
/// over and have their connection closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisconnectOutcome {
    pub notify: Mark,
}

/// State machine for one two-player match.
///
/// `InProgress -> Won(mark) | Tied | Abandoned(mark)`; the terminal states
/// absorb. Exactly two participants (`Mark::Purple` paired first, moving
/// first) are bound for the engine's whole lifetime.
pub struct MatchEngine {
    board: Board,
    turn: Mark,
    status: MatchStatus,
}

impl MatchEngine {
    /// A fresh match: empty board, purple to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::Purple,
            status: MatchStatus::InProgress,
        }
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// Mark whose turn it is. Meaningless once the status is terminal.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Attempt a gravity drop into `column` on behalf of `requester`.
    ///
    /// A move either fully commits (board, turn and status together) or
    /// changes nothing at all. Only the mover's own mark is checked for a
    /// win, and a move that simultaneously completes a line and fills the
    /// board counts as a win, not a tie.
    pub fn submit_move(&mut self, requester: Mark, column: i32) -> Result<MoveResult, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::MatchOver);
        }
        if requester != self.turn {
            return Err(MoveError::NotYourTurn);
        }
        if column < 0 || column >= COLS as i32 {
            return Err(MoveError::OutOfBounds);
        }
        let column = column as usize;
        let row = self.board.drop_chip(column, requester)?;

        self.turn = requester.opponent();

        if self.board.four_in_a_row() == Some(requester) {
            self.status = MatchStatus::Won(requester);
        } else if self.board.is_full() {
            self.status = MatchStatus::Tied;
        }

        Ok(MoveResult {
            row,
            column,
            status: self.status,
        })
    }

    /// Stateless cursor pass-through. Allowed even after the match ended.
    pub fn relay_cursor(&self, requester: Mark, x: i32, y: i32) -> CursorRelay {
        CursorRelay {
            to: requester.opponent(),
            x,
            y,
        }
    }

    /// Record that `requester`'s connection ended. Marks the match
    /// abandoned in favor of the opponent if it was still in progress;
    /// calling it again is a no-op. The opponent named in the outcome must
    /// be notified and have their connection closed either way.
    pub fn disconnect(&mut self, requester: Mark) -> DisconnectOutcome {
        let opponent = requester.opponent();
        if !self.status.is_terminal() {
            self.status = MatchStatus::Abandoned(opponent);
        }
        DisconnectOutcome { notify: opponent }
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new()
    }
}
