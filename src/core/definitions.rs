use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::core::pieces::{PieceId, PieceType};

pub type PlayerIndex = usize;

/** Cell address on the grid, `(column, row)`. */
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub column: u8,
    pub row: u8,
}

impl Position {
    pub fn new(column: u8, row: u8) -> Position {
        Position { column, row }
    }
}

impl From<(u8, u8)> for Position {
    fn from(value: (u8, u8)) -> Self {
        Position::new(value.0, value.1)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.column, self.row)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    pub id: PieceId,
    pub kind: PieceType,
    pub player: PlayerIndex,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Empty,
    Figure(Figure),
}

/// Events produced by the input layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    PieceSelected(PieceId),
    CellActivated { column: u8, row: u8 },
    ManualAdvanceTurn,
    ResetBoard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    OwnOccupation,
}

impl RejectReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectReason::OwnOccupation => "own-occupation",
        }
    }
}

impl Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Notifications produced by the game for the renderer and the move log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Notification {
    MoveRejected {
        reason: RejectReason,
    },
    /** emitted right before the `MoveCommitted` of the capturing piece */
    PieceCaptured {
        piece: PieceId,
        kind: PieceType,
        player: PlayerIndex,
    },
    MoveCommitted {
        player: PlayerIndex,
        kind: PieceType,
        destination: Position,
    },
    PieceSelectedAck {
        kind: PieceType,
        player: PlayerIndex,
    },
    TurnChanged {
        player: PlayerIndex,
    },
    BoardReset,
}

/// Read-only view of a match, used by front ends.
pub trait MatchInterface {
    fn board_size(&self) -> u8;
    fn current_board(&self) -> Vec<Vec<Cell>>;
    fn cell(&self, column: usize, row: usize) -> Option<Cell>;
    fn current_player(&self) -> PlayerIndex;
}

#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    OutOfBounds { column: u8, row: u8, size: u8 },
    UnknownPiece(PieceId),
    UnknownPlayer(PlayerIndex),
    InvalidConfig(String),
    /** grid and registry disagree */
    Desync(String),
}

impl Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::OutOfBounds { column, row, size } => {
                write!(f, "cell {column},{row} is outside of {size}x{size} board")
            }
            GameError::UnknownPiece(id) => write!(f, "piece {id} is not on the board"),
            GameError::UnknownPlayer(player) => write!(f, "player #{player} does not exist"),
            GameError::InvalidConfig(reason) => write!(f, "invalid configuration: {reason}"),
            GameError::Desync(reason) => write!(f, "board state desynchronized: {reason}"),
        }
    }
}

impl std::error::Error for GameError {}
