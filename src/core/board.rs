//! Board - the fixed grid the piece controller validates against
//!
//! The visible grid is 10x20 with (column, row) coordinates, row 0 at the
//! top. Rows above the visible top (negative) are permitted by the legality
//! query and treated as empty, so pieces may spawn partially above view.
//! Storage is a flat row-major array for cache locality.

use arrayvec::ArrayVec;

use crate::core::descriptor::descriptor;
use crate::types::{Cell, PieceKind, Rotation, COLUMN_COUNT, ROW_COUNT};

/// Total number of cells on the visible board
const BOARD_SIZE: usize = (COLUMN_COUNT as usize) * (ROW_COUNT as usize);

/// The read-only placement contract the piece controller depends on, plus
/// the game-over notifications it sends. `Board` is the production
/// implementation; tests substitute stubs.
pub trait BoardQuery {
    /// True iff every occupied cell of `kind` at `rotation`, translated by
    /// (column, row), is inside the horizontal extent, above the floor, and
    /// free of locked cells
    fn is_legal_placement(&self, kind: PieceKind, column: i8, row: i8, rotation: Rotation)
        -> bool;

    /// Side-effecting notification that the game has ended
    fn report_game_over(&mut self);

    /// Freeze time-based gravity progression
    fn pause_clock(&mut self);
}

/// The game board - 10 columns x 20 rows plus locked-state flags
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * COLUMN_COUNT + column)
    cells: [Cell; BOARD_SIZE],
    game_over: bool,
    clock_paused: bool,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
            game_over: false,
            clock_paused: false,
        }
    }

    /// Calculate flat index from (column, row) coordinates
    #[inline(always)]
    fn index(column: i8, row: i8) -> Option<usize> {
        if column < 0 || column >= COLUMN_COUNT as i8 || row < 0 || row >= ROW_COUNT as i8 {
            return None;
        }
        Some((row as usize) * (COLUMN_COUNT as usize) + (column as usize))
    }

    pub fn width(&self) -> u8 {
        COLUMN_COUNT
    }

    pub fn height(&self) -> u8 {
        ROW_COUNT
    }

    /// Get cell at (column, row); None if out of bounds
    pub fn get(&self, column: i8, row: i8) -> Option<Cell> {
        Self::index(column, row).map(|idx| self.cells[idx])
    }

    /// Set cell at (column, row); false if out of bounds
    pub fn set(&mut self, column: i8, row: i8, cell: Cell) -> bool {
        match Self::index(column, row) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position holds a locked cell
    pub fn is_occupied(&self, column: i8, row: i8) -> bool {
        matches!(self.get(column, row), Some(Some(_)))
    }

    /// Check if a visible row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= ROW_COUNT as usize {
            return false;
        }
        let start = row * COLUMN_COUNT as usize;
        let end = start + COLUMN_COUNT as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Lock a piece's occupied cells permanently into the grid.
    /// Fails without writing anything if any cell is outside the visible
    /// grid or already occupied.
    pub fn lock_piece(&mut self, kind: PieceKind, column: i8, row: i8, rotation: Rotation) -> bool {
        let desc = descriptor(kind);

        for (cell_row, cell_col) in desc.occupied_cells(rotation) {
            let board_col = column + cell_col;
            let board_row = row + cell_row;
            match self.get(board_col, board_row) {
                Some(None) => {}
                _ => return false,
            }
        }

        for (cell_row, cell_col) in desc.occupied_cells(rotation) {
            self.set(column + cell_col, row + cell_row, Some(kind));
        }

        true
    }

    /// Clear all full rows and return the cleared row indices in ascending
    /// order. Two-pointer compaction, zero-allocation.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, 4> {
        let mut cleared_rows = ArrayVec::new();
        let width = COLUMN_COUNT as usize;
        let mut write_row = ROW_COUNT as usize;

        // Scan from bottom to top
        for read_row in (0..ROW_COUNT as usize).rev() {
            if self.is_row_full(read_row) {
                cleared_rows.push(read_row);
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src_start = read_row * width;
                    let dst_start = write_row * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Clear the rows left open at the top
        for row in 0..write_row {
            let start = row * width;
            for cell in &mut self.cells[start..start + width] {
                *cell = None;
            }
        }

        cleared_rows.reverse();
        cleared_rows
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire grid (locked flags are untouched)
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Whether a game-over has been reported
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Whether the gravity clock has been paused
    pub fn clock_paused(&self) -> bool {
        self.clock_paused
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardQuery for Board {
    fn is_legal_placement(
        &self,
        kind: PieceKind,
        column: i8,
        row: i8,
        rotation: Rotation,
    ) -> bool {
        let desc = descriptor(kind);

        for (cell_row, cell_col) in desc.occupied_cells(rotation) {
            let board_col = column + cell_col;
            let board_row = row + cell_row;

            if board_col < 0 || board_col >= COLUMN_COUNT as i8 {
                return false;
            }
            if board_row >= ROW_COUNT as i8 {
                return false;
            }
            // Rows above the visible top are empty by policy
            if board_row >= 0 && self.is_occupied(board_col, board_row) {
                return false;
            }
        }

        true
    }

    fn report_game_over(&mut self) {
        self.game_over = true;
    }

    fn pause_clock(&mut self) {
        self.clock_paused = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::new();

        board.set(0, 0, Some(PieceKind::I));
        board.set(5, 10, Some(PieceKind::T));

        assert_eq!(board.get(0, 0), Some(Some(PieceKind::I)));
        assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));
        assert_eq!(board.get(1, 1), Some(None));
        assert_eq!(board.get(-1, 0), None);
    }

    #[test]
    fn test_game_over_and_clock_flags() {
        let mut board = Board::new();
        assert!(!board.game_over());
        assert!(!board.clock_paused());

        board.report_game_over();
        board.pause_clock();

        assert!(board.game_over());
        assert!(board.clock_paused());
    }
}
