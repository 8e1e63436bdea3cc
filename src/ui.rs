//! Text rendering of boards for the console game.

use std::fmt::Write;

use crate::board::{Board, CellState};
use crate::common::Coord;

/// Render a board as a numbered grid. Ship cells are shown only when the
/// board is not concealed; the contour of a sunk ship is drawn as dots so
/// the player can see the closed-off zone.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    out.push_str("  ");
    for c in 0..board.size() {
        let _ = write!(out, "| {} ", c + 1);
    }
    out.push_str("|\n");
    for r in 0..board.size() {
        let _ = write!(out, "{} ", r + 1);
        for c in 0..board.size() {
            let glyph = match board.cell(Coord::new(r, c)) {
                CellState::Hit => 'X',
                CellState::Miss => '*',
                CellState::Buffer => '.',
                CellState::ShipPresent if !board.is_concealed() => '■',
                CellState::ShipPresent | CellState::Empty => 'O',
            };
            let _ = write!(out, "| {} ", glyph);
        }
        out.push_str("|\n");
    }
    out
}
