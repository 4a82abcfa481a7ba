//! Live piece - a variant's matrix placed on the board

use crate::shapes::{shape, ShapeMatrix};
use crate::types::PieceKind;

/// Active falling piece
///
/// `shape` starts as the variant's canonical matrix and only ever changes by
/// rotation. `(x, y)` is the top-left corner of the matrix in board
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: ShapeMatrix,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Place `kind` horizontally centered with its top row on board row 0
    pub fn spawn(kind: PieceKind, board_width: u8) -> Self {
        let shape = shape(kind);
        Self {
            kind,
            shape,
            x: spawn_column(board_width, shape.size()),
            y: 0,
        }
    }

    /// Same piece shifted by `(dx, dy)`
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same piece with its matrix turned 90° clockwise
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotated_cw(),
            ..*self
        }
    }

    /// Board coordinates of every filled cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> {
        let (x, y) = (self.x, self.y);
        self.shape
            .filled_cells()
            .into_iter()
            .map(move |(dx, dy)| (x + dx, y + dy))
    }
}

/// Column that centers a matrix of side `size`: `floor((width - size) / 2)`
pub fn spawn_column(board_width: u8, size: usize) -> i8 {
    (board_width as i16 - size as i16).div_euclid(2) as i8
}
