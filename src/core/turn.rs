use std::f32::consts::{FRAC_PI_2, PI};

use crate::core::definitions::PlayerIndex;

/// Cyclic turn order `0 -> 1 -> ... -> count - 1 -> 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnTracker {
    current: PlayerIndex,
    count: usize,
}

impl TurnTracker {
    pub fn new(count: usize) -> TurnTracker {
        assert!(count > 0, "Turn order without players?!");
        TurnTracker { current: 0, count }
    }

    pub fn current(&self) -> PlayerIndex {
        self.current
    }

    pub fn player_count(&self) -> usize {
        self.count
    }

    /** Passes the turn to the next player and returns it. */
    pub fn advance(&mut self) -> PlayerIndex {
        self.current = (self.current + 1) % self.count;
        self.current
    }
}

/// Fixed viewing direction for each seat at the table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Perspective {
    player: PlayerIndex,
}

impl Perspective {
    pub fn of(player: PlayerIndex) -> Perspective {
        Perspective { player }
    }

    pub fn player(&self) -> PlayerIndex {
        self.player
    }

    /// Camera azimuth, in radians, looking at the board from the player's edge.
    pub fn angle(&self) -> f32 {
        match self.player % 4 {
            0 => PI,
            1 => -FRAC_PI_2,
            2 => 0.0,
            _ => FRAC_PI_2,
        }
    }

    /// Clockwise quarter turns to apply to a top-down board so that the
    /// player's edge ends up at the bottom. Player 1 sits at the bottom already.
    pub fn quarter_turns(&self) -> u8 {
        ((self.player + 3) % 4) as u8
    }
}
