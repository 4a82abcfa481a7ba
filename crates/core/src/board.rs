//! Board module - manages the game grid
//!
//! The board is a `width × height` grid where each cell is empty or holds the
//! variant id of the piece that locked there. Storage is a flat row-major
//! vector allocated once at construction; nothing resizes it afterwards.
//! Coordinates: (x, y) with x = 0 at the left and y = 0 at the top.

use crate::types::{
    Cell, PieceKind, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, MAX_BOARD_DIMENSION,
    MIN_BOARD_DIMENSION,
};

/// Dimensions outside this range break `i8` coordinates or the I piece
fn check_dimensions(width: usize, height: usize) {
    let range = MIN_BOARD_DIMENSION as usize..=MAX_BOARD_DIMENSION as usize;
    assert!(
        range.contains(&width) && range.contains(&height),
        "board dimensions {width}x{height} outside 4..=64"
    );
}

/// The game board using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board with the default 10x20 dimensions
    pub fn new() -> Self {
        Self::with_size(DEFAULT_BOARD_WIDTH, DEFAULT_BOARD_HEIGHT)
    }

    /// Create an empty board with the given dimensions
    ///
    /// # Panics
    ///
    /// Panics if either dimension is outside `4..=64`.
    pub fn with_size(width: u8, height: u8) -> Self {
        check_dimensions(width as usize, height as usize);
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Write a cell at position (x, y).
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the board. Callers are expected to have
    /// validated placement first; an out-of-bounds write is a logic error.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) {
        let Some(idx) = self.index(x, y) else {
            panic!(
                "board write out of bounds: ({x}, {y}) on a {}x{} board",
                self.width, self.height
            );
        };
        self.cells[idx] = cell;
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if position is out of bounds
    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        x < 0 || x >= self.width as i8 || y < 0 || y >= self.height as i8
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// One row of cells, top row first
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height as usize {
            return None;
        }
        let width = self.width as usize;
        let start = y * width;
        Some(&self.cells[start..start + width])
    }

    /// All rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.width as usize)
    }

    /// Remove every full row, letting the rows above fall into place.
    ///
    /// Rows are scanned bottom to top and compacted with a two-pointer pass:
    /// each surviving row is copied down to the next free slot and the vacated
    /// rows at the top are emptied. The height never changes. Returns the
    /// number of rows removed.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.width as usize;
        let mut cleared = 0;
        let mut write_y = self.height as usize;

        for read_y in (0..self.height as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    // copy_within handles the overlap
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared
    }

    /// Write `kind` at every given cell that lies on a visible row.
    ///
    /// Cells above the top edge (y < 0) are skipped.
    ///
    /// # Panics
    ///
    /// Panics if a visible cell is out of bounds horizontally or below the
    /// floor; locked placements are always collision-checked first.
    pub fn lock_cells(&mut self, cells: impl IntoIterator<Item = (i8, i8)>, kind: PieceKind) {
        for (x, y) in cells {
            if y >= 0 {
                self.set(x, y, Some(kind));
            }
        }
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Build a board from rows, top first. Every row must have the same length.
    ///
    /// # Panics
    ///
    /// Panics on ragged input, or if either dimension is outside `4..=64`.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        check_dimensions(width, height);
        assert!(
            rows.iter().all(|row| row.len() == width),
            "all rows must have the same width"
        );
        Self {
            width: width as u8,
            height: height as u8,
            cells: rows.into_iter().flatten().collect(),
        }
    }

    /// Convert to a 2D vector (top row first)
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.rows().map(<[Cell]>::to_vec).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
