use std::fmt::Write;

use crate::core::definitions::{Cell, MatchInterface};

/// Text picture of the board, one line per row, top row first.
///
/// Every cell takes three characters: `.` for empty cells, otherwise the
/// piece glyph followed by the owner index. The selected piece is marked with
/// `*`.
pub fn text_board<M: MatchInterface + ?Sized>(game: &M) -> String {
    let mut result = String::new();
    for row in game.current_board() {
        for cell in row {
            match cell {
                Cell::Empty => result.push_str(" . "),
                Cell::Figure(figure) => {
                    let marker = if figure.selected { '*' } else { ' ' };
                    let _ = write!(result, "{}{}{marker}", figure.kind.glyph(), figure.player);
                }
            }
        }
        result.truncate(result.trim_end().len());
        result.push('\n');
    }
    result
}
