use log::{debug, trace};

use crate::core::definitions::{GameError, PlayerIndex, Position};
use crate::core::grid::Grid;
use crate::core::pieces::{initial_layout, Piece, PieceId, PieceRegistry, PieceType};

/// Board grid together with the registry of live pieces.
///
/// Both halves are only written through this type, so a piece's recorded
/// position and the grid's occupant for that cell always agree.
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    pieces: PieceRegistry,
}

impl Board {
    pub fn new(size: u8) -> Board {
        Board {
            grid: Grid::new(size),
            pieces: PieceRegistry::new(),
        }
    }

    pub fn size(&self) -> u8 {
        self.grid.size()
    }

    pub fn contains(&self, position: Position) -> bool {
        self.grid.contains(position)
    }

    pub(crate) fn check_bounds(&self, position: Position) -> Result<(), GameError> {
        if self.contains(position) {
            Ok(())
        } else {
            Err(GameError::OutOfBounds {
                column: position.column,
                row: position.row,
                size: self.size(),
            })
        }
    }

    pub fn get(&self, position: Position) -> Option<PieceId> {
        self.grid.get(position)
    }

    pub fn piece_at(&self, position: Position) -> Option<&Piece> {
        self.get(position).and_then(|id| self.pieces.get(id))
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id)
    }

    pub fn pieces(&self) -> &PieceRegistry {
        &self.pieces
    }

    pub fn create(&mut self, kind: PieceType, player: PlayerIndex) -> PieceId {
        self.pieces.create(kind, player)
    }

    /// Puts `piece` on `position`, overwriting whatever stood there.
    ///
    /// The previous occupant is detached from the grid (its position becomes
    /// `None`) and returned; destroying it is up to the caller. A piece that
    /// already stood somewhere else is lifted from its old cell first.
    pub fn place(&mut self, piece: PieceId, position: Position) -> Result<Option<PieceId>, GameError> {
        self.check_bounds(position)?;
        let previous = self
            .pieces
            .get(piece)
            .ok_or(GameError::UnknownPiece(piece))?
            .position();
        if let Some(previous) = previous.filter(|previous| *previous != position) {
            self.grid.take(previous)?;
        }
        let displaced = self.grid.set(position, piece)?.filter(|other| *other != piece);
        if let Some(displaced) = displaced {
            if let Some(other) = self.pieces.get_mut(displaced) {
                other.set_position(None);
            }
        }
        if let Some(piece) = self.pieces.get_mut(piece) {
            piece.set_position(Some(position));
        }
        Ok(displaced)
    }

    /** Empties the cell without destroying the occupant, which is returned. */
    pub fn clear(&mut self, position: Position) -> Result<Option<PieceId>, GameError> {
        let occupant = self.grid.take(position)?;
        if let Some(piece) = occupant.and_then(|id| self.pieces.get_mut(id)) {
            piece.set_position(None);
        }
        Ok(occupant)
    }

    /** Removes the piece from the registry and from its cell. No-op on unknown ids. */
    pub fn destroy(&mut self, piece: PieceId) -> Option<Piece> {
        let removed = self.pieces.destroy(piece)?;
        if let Some(position) = removed.position() {
            // positions held by the registry are always in bounds
            if self.grid.get(position) == Some(piece) {
                self.grid.take(position).ok();
            }
        }
        Some(removed)
    }

    /** Empties every cell and drops every piece. */
    pub fn reset(&mut self) {
        trace!("Resetting board with {} pieces", self.pieces.len());
        self.grid.reset();
        self.pieces.clear();
    }

    pub fn setup_initial_positions(&mut self) -> Result<(), GameError> {
        self.reset();
        for (kind, player, position) in initial_layout(self.size()) {
            let piece = self.create(kind, player);
            self.place(piece, position)?;
        }
        debug!("Initial layout ready: {} pieces", self.pieces.len());
        Ok(())
    }

    /** Occupied cells in row-major order. */
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Piece)> + '_ {
        self.grid
            .iter()
            .filter_map(|(position, id)| self.pieces.get(id).map(|piece| (position, piece)))
    }

    /// Verifies that the grid and the registry describe the same board.
    pub fn check_invariants(&self) -> Result<(), GameError> {
        for (position, id) in self.grid.iter() {
            let piece = self
                .pieces
                .get(id)
                .ok_or_else(|| GameError::Desync(format!("cell {position} holds dead piece #{id}")))?;
            if piece.position() != Some(position) {
                return Err(GameError::Desync(format!(
                    "cell {position} holds #{id}, which thinks it is at {:?}",
                    piece.position()
                )));
            }
        }
        for piece in self.pieces.iter() {
            if let Some(position) = piece.position() {
                if self.grid.get(position) != Some(piece.id()) {
                    return Err(GameError::Desync(format!(
                        "piece #{} is not found at {position}",
                        piece.id()
                    )));
                }
            }
        }
        Ok(())
    }
}
