use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::definitions::{GameError, PlayerIndex};
use crate::core::pieces::PieceType;

pub const DEFAULT_BOARD_SIZE: u8 = 14;
/** Seats at the table; the starting layout names exactly four edges. */
pub const PLAYER_COUNT: usize = 4;
const MIN_BOARD_SIZE: u8 = 7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    /** display color, `#rrggbb` */
    pub color: String,
}

impl PlayerConfig {
    pub fn new(name: &str, color: &str) -> Self {
        PlayerConfig {
            name: name.to_owned(),
            color: color.to_owned(),
        }
    }

    /// Display color as RGB bytes, `None` for anything but `#rrggbb`.
    pub fn rgb(&self) -> Option<[u8; 3]> {
        let hex = self.color.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(hex.get(range)?, 16).ok();
        Some([channel(0..2)?, channel(2..4)?, channel(4..6)?])
    }
}

/// Fixed parameters of a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub board_size: u8,
    pub players: Vec<PlayerConfig>,
    pub piece_types: Vec<PieceType>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: DEFAULT_BOARD_SIZE,
            players: vec![
                PlayerConfig::new("Vermelho", "#c0392b"),
                PlayerConfig::new("Verde", "#16a34a"),
                PlayerConfig::new("Azul", "#2563eb"),
                PlayerConfig::new("Amarelo", "#f59e0b"),
            ],
            piece_types: PieceType::ALL.to_vec(),
        }
    }
}

impl GameConfig {
    pub fn with_board_size(mut self, board_size: u8) -> Self {
        self.board_size = board_size;
        self
    }

    pub fn player(&self, player: PlayerIndex) -> Result<&PlayerConfig, GameError> {
        self.players.get(player).ok_or(GameError::UnknownPlayer(player))
    }

    /** Player name, or `#index` for unknown players. */
    pub fn player_name(&self, player: PlayerIndex) -> String {
        self.player(player)
            .map(|config| config.name.clone())
            .unwrap_or_else(|_| format!("#{player}"))
    }

    pub fn supports(&self, kind: PieceType) -> bool {
        self.piece_types.contains(&kind)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.players.len() != PLAYER_COUNT {
            return Err(GameError::InvalidConfig(format!(
                "expected {PLAYER_COUNT} players, got {}",
                self.players.len()
            )));
        }
        if self.board_size < MIN_BOARD_SIZE {
            return Err(GameError::InvalidConfig(format!(
                "board size {} is smaller than {MIN_BOARD_SIZE}",
                self.board_size
            )));
        }
        for required in [PieceType::King, PieceType::Pawn] {
            if !self.supports(required) {
                return Err(GameError::InvalidConfig(format!(
                    "piece type '{required}' is needed for the starting layout"
                )));
            }
        }
        let mut seen = HashSet::new();
        if let Some(duplicate) = self.piece_types.iter().find(|kind| !seen.insert(**kind)) {
            return Err(GameError::InvalidConfig(format!(
                "piece type '{duplicate}' is listed twice"
            )));
        }
        Ok(())
    }
}
