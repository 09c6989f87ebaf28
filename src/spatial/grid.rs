//! Rectangular tile grids with boundary-aware neighbor lookup
//!
//! Every stage of the level pipeline reads and writes a [`TileGrid`]: the
//! authored quadrant, the orientation tags inferred for it, and the mirrored
//! full level. Neighbor queries never fail; any coordinate outside the grid
//! resolves to [`Probe::Boundary`], which the orientation rules treat as a
//! value of its own.

use ndarray::Array2;
use std::fmt;

use crate::io::error::{LevelError, Result};
use crate::spatial::tiles::{OrientationTag, TileCategory};

/// Authored (or mirrored) grid of tile categories
pub type QuadrantGrid = TileGrid<TileCategory>;

/// Grid of orientation tags, same shape as the category grid it describes
pub type OrientationGrid = TileGrid<OrientationTag>;

/// One of the four 4-connected neighbor directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Previous row
    Up,
    /// Next row
    Down,
    /// Previous column
    Left,
    /// Next column
    Right,
}

impl Side {
    /// All sides in lookup order
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Row and column step towards this side
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

/// Result of a neighbor query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Probe<T> {
    /// The query fell outside the grid
    Boundary,
    /// The value stored in the queried cell
    Cell(T),
}

impl<T> Probe<T> {
    /// Stored value, `None` for the boundary
    pub fn cell(self) -> Option<T> {
        match self {
            Self::Boundary => None,
            Self::Cell(value) => Some(value),
        }
    }

    /// Whether the query fell outside the grid
    pub const fn is_boundary(&self) -> bool {
        matches!(self, Self::Boundary)
    }
}

/// Immutable-by-convention rectangular grid indexed by `(row, col)`
///
/// Construction guarantees a non-empty rectangle. Only the pipeline stage
/// that produces a grid writes to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid<T> {
    cells: Array2<T>,
}

impl<T: Copy> TileGrid<T> {
    /// Create a grid with every cell set to `value`
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            cells: Array2::from_elem((rows, cols), value),
        }
    }

    /// Build a grid from row vectors
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - There are no rows, or the first row is empty
    /// - Any row length differs from the first row
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self> {
        let first = rows
            .first()
            .and_then(|row| row.first())
            .copied()
            .ok_or(LevelError::EmptyGrid)?;
        let width = rows.first().map_or(0, Vec::len);

        for (index, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(LevelError::RaggedRow {
                    row: index,
                    expected: width,
                    found: row.len(),
                });
            }
        }

        let mut grid = Self::filled(rows.len(), width, first);
        for (row_index, row) in rows.iter().enumerate() {
            for (col_index, &value) in row.iter().enumerate() {
                grid.set(row_index, col_index, value);
            }
        }
        Ok(grid)
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Grid dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Value at an in-bounds cell
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        self.cells.get((row, col)).copied()
    }

    /// Overwrite a cell, ignoring out-of-bounds writes
    pub(crate) fn set(&mut self, row: usize, col: usize, value: T) {
        if let Some(cell) = self.cells.get_mut((row, col)) {
            *cell = value;
        }
    }

    /// Look up a cell by signed coordinates
    pub fn probe(&self, row: isize, col: isize) -> Probe<T> {
        match (usize::try_from(row), usize::try_from(col)) {
            (Ok(row), Ok(col)) => self.get(row, col).map_or(Probe::Boundary, Probe::Cell),
            _ => Probe::Boundary,
        }
    }

    /// Look up the neighbor of a cell on the given side
    pub fn neighbor(&self, row: usize, col: usize, side: Side) -> Probe<T> {
        let (row_step, col_step) = side.offset();
        match (
            row.checked_add_signed(row_step),
            col.checked_add_signed(col_step),
        ) {
            (Some(row), Some(col)) => self.get(row, col).map_or(Probe::Boundary, Probe::Cell),
            _ => Probe::Boundary,
        }
    }

    /// Row-major iterator over `((row, col), value)`
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), T)> + '_ {
        self.cells.indexed_iter().map(|(index, &value)| (index, value))
    }

    /// Build a same-shaped grid by transforming every value
    pub fn map<U: Copy>(&self, f: impl FnMut(&T) -> U) -> TileGrid<U> {
        TileGrid {
            cells: self.cells.map(f),
        }
    }

    /// Borrow the backing array
    pub const fn as_array(&self) -> &Array2<T> {
        &self.cells
    }
}

impl<T: Copy + fmt::Display> fmt::Display for TileGrid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            for value in row {
                write!(f, "{value}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
