pub mod core;
pub mod utils;

// module re-exports
pub use crate::core::config::{GameConfig, PlayerConfig};
pub use crate::core::definitions::{
    Cell, Figure, GameError, InputEvent, MatchInterface, Notification, PlayerIndex, Position,
    RejectReason,
};
pub use crate::core::engine::Board;
pub use crate::core::game::Game;
pub use crate::core::pieces::{Piece, PieceId, PieceType};
pub use crate::core::turn::Perspective;
