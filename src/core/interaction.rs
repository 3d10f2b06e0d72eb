use log::{debug, trace};

use crate::core::definitions::{GameError, PlayerIndex, Position, RejectReason};
use crate::core::engine::Board;
use crate::core::pieces::{Piece, PieceId, PieceType};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    PieceSelected(PieceId),
}

/** Result of one committed move. */
#[derive(Debug, Clone, PartialEq)]
pub struct MoveRecord {
    pub piece: PieceId,
    pub kind: PieceType,
    pub player: PlayerIndex,
    pub from: Position,
    pub to: Position,
    pub captured: Option<Piece>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellOutcome {
    /** nothing was selected */
    Ignored,
    Rejected(RejectReason),
    Committed(MoveRecord),
}

/// Two step select-then-destination controller.
#[derive(Debug, Clone, Default)]
pub struct Interaction {
    state: InteractionState,
}

impl Interaction {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn selected(&self) -> Option<PieceId> {
        match self.state {
            InteractionState::Idle => None,
            InteractionState::PieceSelected(piece) => Some(piece),
        }
    }

    /// Selects `piece`, replacing any previous selection. Ownership and turn
    /// are not checked here.
    pub fn select<'a>(&mut self, board: &'a Board, piece: PieceId) -> Result<&'a Piece, GameError> {
        let selected = board.piece(piece).ok_or(GameError::UnknownPiece(piece))?;
        if let Some(previous) = self.selected().filter(|previous| *previous != piece) {
            trace!("Selection #{previous} replaced by #{piece}");
        }
        self.state = InteractionState::PieceSelected(piece);
        debug!("Selected {} #{piece} of player #{}", selected.kind(), selected.player());
        Ok(selected)
    }

    pub fn deselect(&mut self) {
        self.state = InteractionState::Idle;
    }

    /// Uses `position` as destination for the selected piece.
    ///
    /// A destination held by another piece of the same player is rejected and
    /// the selection is kept. Anything else commits: an opposing occupant is
    /// destroyed first, then the selected piece leaves its cell and is placed
    /// on the destination. The selection is cleared after a commit.
    pub fn activate(&mut self, board: &mut Board, position: Position) -> Result<CellOutcome, GameError> {
        board.check_bounds(position)?;
        let Some(id) = self.selected() else {
            trace!("Cell {position} activated without selection");
            return Ok(CellOutcome::Ignored);
        };
        let piece = board.piece(id).cloned().ok_or(GameError::UnknownPiece(id))?;
        let from = piece
            .position()
            .ok_or_else(|| GameError::Desync(format!("selected piece #{id} is off the board")))?;

        let occupant = board.piece_at(position).filter(|occupant| occupant.id() != id);
        if occupant.is_some_and(|occupant| occupant.player() == piece.player()) {
            debug!("Destination {position} is occupied by own piece");
            return Ok(CellOutcome::Rejected(RejectReason::OwnOccupation));
        }

        let captured = occupant.map(Piece::id).and_then(|target| board.destroy(target));
        board.clear(from)?;
        board.place(id, position)?;
        self.deselect();

        debug_assert!(board.check_invariants().is_ok(), "Commit broke the board");

        Ok(CellOutcome::Committed(MoveRecord {
            piece: id,
            kind: piece.kind(),
            player: piece.player(),
            from,
            to: position,
            captured,
        }))
    }
}
