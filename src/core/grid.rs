use log::trace;

use crate::core::definitions::{GameError, Position};
use crate::core::pieces::PieceId;

/** Square grid of cells, each holding at most one piece identity. Row-major. */
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    size: u8,
    cells: Vec<Option<PieceId>>,
}

impl Grid {
    pub fn new(size: u8) -> Grid {
        Grid {
            size,
            cells: vec![None; size as usize * size as usize],
        }
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn contains(&self, position: Position) -> bool {
        position.column < self.size && position.row < self.size
    }

    fn index(&self, position: Position) -> Result<usize, GameError> {
        if self.contains(position) {
            Ok(position.row as usize * self.size as usize + position.column as usize)
        } else {
            Err(GameError::OutOfBounds {
                column: position.column,
                row: position.row,
                size: self.size,
            })
        }
    }

    /** `None` for empty cells and for cells outside of the grid. */
    pub fn get(&self, position: Position) -> Option<PieceId> {
        self.index(position).ok().and_then(|index| self.cells[index])
    }

    /** Writes `piece` into the cell and returns the previous occupant. */
    pub fn set(&mut self, position: Position, piece: PieceId) -> Result<Option<PieceId>, GameError> {
        let index = self.index(position)?;
        trace!("Grid {position} <- #{piece}");
        Ok(self.cells[index].replace(piece))
    }

    pub fn take(&mut self, position: Position) -> Result<Option<PieceId>, GameError> {
        let index = self.index(position)?;
        Ok(self.cells[index].take())
    }

    pub fn reset(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = None);
    }

    /** Occupied cells in row-major order. */
    pub fn iter(&self) -> impl Iterator<Item = (Position, PieceId)> + '_ {
        let size = self.size as usize;
        self.cells.iter().enumerate().filter_map(move |(index, cell)| {
            cell.map(|piece| {
                let position = Position::new((index % size) as u8, (index / size) as u8);
                (position, piece)
            })
        })
    }
}
