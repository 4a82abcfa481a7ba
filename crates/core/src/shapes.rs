//! Shape library - the fixed catalog of piece matrices
//!
//! Every variant is an N×N boolean matrix (N ≤ 4). Because the matrix is
//! square, a 90° rotation keeps the same extents, so rotation happens in place
//! without any kick table.

use arrayvec::ArrayVec;

use crate::types::PieceKind;

/// Largest matrix side in the catalog (the I piece)
pub const MAX_SHAPE_SIZE: usize = 4;

/// Offset of a filled cell relative to the piece anchor, as `(dx, dy)`
pub type CellOffset = (i8, i8);

/// Filled offsets of one matrix; at most every cell of a 4×4 matrix
pub type FilledCells = ArrayVec<CellOffset, { MAX_SHAPE_SIZE * MAX_SHAPE_SIZE }>;

/// Square boolean matrix, stored in a fixed 4×4 buffer
///
/// Only the top-left `size × size` region is meaningful; the rest stays
/// `false` so that derived equality compares exactly the live cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    size: u8,
    cells: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl ShapeMatrix {
    /// Build a matrix from rows of 0/1 values.
    ///
    /// # Panics
    ///
    /// Panics if the rows are not square or larger than [`MAX_SHAPE_SIZE`].
    pub fn from_rows<const N: usize>(rows: [[u8; N]; N]) -> Self {
        assert!(N > 0 && N <= MAX_SHAPE_SIZE, "shape side must be 1..=4");
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                cells[row][col] = value != 0;
            }
        }
        Self {
            size: N as u8,
            cells,
        }
    }

    /// Side length N
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Whether the cell at `(row, col)` is filled. Outside the matrix is empty.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.size() && col < self.size() && self.cells[row][col]
    }

    /// Local `(dx, dy)` offsets of every filled cell, row by row
    pub fn filled_cells(&self) -> FilledCells {
        let mut out = FilledCells::new();
        for row in 0..self.size() {
            for col in 0..self.size() {
                if self.cells[row][col] {
                    out.push((col as i8, row as i8));
                }
            }
        }
        out
    }

    /// 90° clockwise rotation: the cell at `(row, col)` moves to
    /// `(col, N - 1 - row)`.
    pub fn rotated_cw(&self) -> Self {
        let n = self.size();
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for row in 0..n {
            for col in 0..n {
                cells[col][n - 1 - row] = self.cells[row][col];
            }
        }
        Self {
            size: self.size,
            cells,
        }
    }

    /// Rows of the live region, for presenters
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells[..self.size()]
            .iter()
            .map(move |row| &row[..self.size()])
    }
}

/// Canonical (spawn orientation) matrix for a variant
pub fn shape(kind: PieceKind) -> ShapeMatrix {
    match kind {
        PieceKind::T => ShapeMatrix::from_rows([[0, 1, 0], [1, 1, 1], [0, 0, 0]]),
        PieceKind::O => ShapeMatrix::from_rows([[1, 1], [1, 1]]),
        PieceKind::I => ShapeMatrix::from_rows([
            [0, 0, 0, 0],
            [1, 1, 1, 1],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]),
        PieceKind::L => ShapeMatrix::from_rows([[0, 0, 1], [1, 1, 1], [0, 0, 0]]),
        PieceKind::J => ShapeMatrix::from_rows([[1, 0, 0], [1, 1, 1], [0, 0, 0]]),
        PieceKind::S => ShapeMatrix::from_rows([[0, 1, 1], [1, 1, 0], [0, 0, 0]]),
        PieceKind::Z => ShapeMatrix::from_rows([[1, 1, 0], [0, 1, 1], [0, 0, 0]]),
    }
}

/// Look up a variant's matrix by name (case-insensitive)
pub fn shape_by_name(name: &str) -> Option<ShapeMatrix> {
    PieceKind::from_str(name).map(shape)
}
