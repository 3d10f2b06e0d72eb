use std::collections::HashMap;
use std::fmt::{Debug, Display};

use log::trace;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::definitions::{PlayerIndex, Position};

/** Opaque piece identity. Never reused, not even after a reset. */
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(Uuid);

impl PieceId {
    pub fn new() -> PieceId {
        PieceId(Uuid::new_v4())
    }
}

impl Default for PieceId {
    fn default() -> Self {
        PieceId::new()
    }
}

impl Debug for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PieceId({})", self.0)
    }
}

impl Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceType {
    King,
    General,
    Elephant,
    Horse,
    Chariot,
    Pawn,
}

impl PieceType {
    pub const ALL: [PieceType; 6] = [
        PieceType::King,
        PieceType::General,
        PieceType::Elephant,
        PieceType::Horse,
        PieceType::Chariot,
        PieceType::Pawn,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceType::King => "king",
            PieceType::General => "general",
            PieceType::Elephant => "elephant",
            PieceType::Horse => "horse",
            PieceType::Chariot => "chariot",
            PieceType::Pawn => "pawn",
        }
    }

    /// Single letter used by text boards.
    pub fn glyph(&self) -> char {
        match self {
            PieceType::King => 'K',
            PieceType::General => 'G',
            PieceType::Elephant => 'E',
            PieceType::Horse => 'H',
            PieceType::Chariot => 'C',
            PieceType::Pawn => 'P',
        }
    }
}

impl Display for PieceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Piece {
    id: PieceId,
    kind: PieceType,
    player: PlayerIndex,
    position: Option<Position>,
}

impl Piece {
    pub fn id(&self) -> PieceId {
        self.id
    }

    pub fn kind(&self) -> PieceType {
        self.kind
    }

    pub fn player(&self) -> PlayerIndex {
        self.player
    }

    /** `None` only while the piece is detached inside a single operation. */
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: Option<Position>) {
        self.position = position;
    }
}

/// Live pieces, keyed by identity.
#[derive(Clone, Debug, Default)]
pub struct PieceRegistry {
    pieces: HashMap<PieceId, Piece>,
}

impl PieceRegistry {
    pub fn new() -> Self {
        Default::default()
    }

    /** Allocates a piece without a cell. */
    pub fn create(&mut self, kind: PieceType, player: PlayerIndex) -> PieceId {
        let id = PieceId::new();
        self.pieces.insert(
            id,
            Piece {
                id,
                kind,
                player,
                position: None,
            },
        );
        trace!("Created {kind} #{id} for player #{player}");
        id
    }

    /** Returns the removed piece the first time, `None` afterwards. */
    pub fn destroy(&mut self, id: PieceId) -> Option<Piece> {
        let removed = self.pieces.remove(&id);
        if removed.is_some() {
            trace!("Destroyed piece #{id}");
        }
        removed
    }

    pub fn get(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.pieces.get_mut(&id)
    }

    pub fn contains(&self, id: PieceId) -> bool {
        self.pieces.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.values()
    }

    pub fn iter_player(&self, player: PlayerIndex) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.values().filter(move |piece| piece.player == player)
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn clear(&mut self) {
        self.pieces.clear();
    }
}

/// Starting position for four players on a `size` x `size` board.
///
/// Every player gets a king on the center of its edge and a line of pawns
/// one cell inwards, spanning `3..size - 3`:
/// * player 0 -- west edge, pawns on column 1, king on column 0
/// * player 1 -- south edge, pawns on row `size - 2`, king on row `size - 1`
/// * player 2 -- east edge, pawns on column `size - 2`, king on column `size - 1`
/// * player 3 -- north edge, pawns on row 1, king on row 0
pub fn initial_layout(size: u8) -> Vec<(PieceType, PlayerIndex, Position)> {
    let middle = size / 2;
    let (edge, inner) = (size.saturating_sub(1), size.saturating_sub(2));
    let span = 3..size.saturating_sub(3);
    let mut layout = Vec::with_capacity(4 * (span.len() + 1));

    layout.extend(span.clone().map(|column| (PieceType::Pawn, 1, Position::new(column, inner))));
    layout.push((PieceType::King, 1, Position::new(middle, edge)));

    layout.extend(span.clone().map(|row| (PieceType::Pawn, 2, Position::new(inner, row))));
    layout.push((PieceType::King, 2, Position::new(edge, middle)));

    layout.extend(span.clone().map(|column| (PieceType::Pawn, 3, Position::new(column, 1))));
    layout.push((PieceType::King, 3, Position::new(middle, 0)));

    layout.extend(span.map(|row| (PieceType::Pawn, 0, Position::new(1, row))));
    layout.push((PieceType::King, 0, Position::new(0, middle)));

    layout
}
