use serde::{Deserialize, Serialize};

use crate::piece::Piece;
use crate::shapes::ShapeMatrix;
use crate::types::{Cell, PieceKind};

fn matrix_rows(shape: &ShapeMatrix) -> Vec<Vec<bool>> {
    shape.rows().map(<[bool]>::to_vec).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Vec<Vec<bool>>,
    pub x: i8,
    pub y: i8,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            shape: matrix_rows(&value.shape),
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NextSnapshot {
    pub kind: PieceKind,
    pub shape: Vec<Vec<bool>>,
}

impl From<PieceKind> for NextSnapshot {
    fn from(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: matrix_rows(&crate::shapes::shape(kind)),
        }
    }
}

/// Everything a presenter needs to draw one frame
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    /// Rows top to bottom; each cell is `null` or the variant letter
    pub board: Vec<Vec<Cell>>,
    pub active: ActiveSnapshot,
    pub ghost_y: i8,
    pub next: NextSnapshot,
    pub score: u32,
    pub lines: u32,
    pub pieces_locked: u32,
    pub piece_id: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over
    }
}
