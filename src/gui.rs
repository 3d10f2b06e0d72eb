use std::f32::consts::{FRAC_PI_4, PI};

use eframe::egui;
use quad_chess::{GameConfig, PlayerIndex};

const NEUTRAL: egui::Color32 = egui::Color32::from_rgb(0x8b, 0x8f, 0x98);

pub fn player_color(config: &GameConfig, player: PlayerIndex) -> egui::Color32 {
    config
        .player(player)
        .ok()
        .and_then(|player| player.rgb())
        .map(|[r, g, b]| egui::Color32::from_rgb(r, g, b))
        .unwrap_or(NEUTRAL)
}

/// Tiles are tinted by the player whose quarter of the board they lie in,
/// checkered by darkening every other tile.
pub fn tile_color(config: &GameConfig, column: u8, row: u8, selected: bool) -> egui::Color32 {
    let center = (config.board_size as f32 - 1.0) / 2.0;
    let angle = (row as f32 - center).atan2(column as f32 - center);
    let quadrant = if (-FRAC_PI_4..FRAC_PI_4).contains(&angle) {
        2
    } else if (FRAC_PI_4..3.0 * FRAC_PI_4).contains(&angle) {
        1
    } else if (-3.0 * FRAC_PI_4..-FRAC_PI_4).contains(&angle) {
        3
    } else {
        0
    };
    let color = player_color(config, quadrant);
    if selected {
        egui::Color32::LIGHT_GREEN
    } else if (column as u16 + row as u16) % 2 == 0 {
        color
    } else {
        color.gamma_multiply(0.82)
    }
}

/// Board cell shown at screen cell `(x, y)` after rotating the board
/// clockwise by `quarter_turns`.
pub fn board_cell(size: u8, quarter_turns: u8, x: u8, y: u8) -> (u8, u8) {
    let last = size - 1;
    (0..quarter_turns % 4).fold((x, y), |(column, row), _| (row, last - column))
}

pub fn camera_angle_degrees(angle: f32) -> f32 {
    angle * 180.0 / PI
}
