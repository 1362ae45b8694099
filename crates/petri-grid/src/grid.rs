//! Flat row-major cell storage with torus topology.

use crate::error::GridError;
use petri_core::Cell;
use smallvec::SmallVec;
use std::fmt;

/// The 8 Moore-neighbourhood offsets, in fixed enumeration order.
///
/// The count-based rule is insensitive to this order, but it is kept
/// stable so any order-sensitive consumer sees a deterministic sequence.
pub const NEIGHBOUR_OFFSETS: [(i32, i32); 8] = [
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
];

/// A rectangular field of [`Cell`]s with periodic (torus) boundaries.
///
/// Cells are stored flat in row-major order. Coordinates are `(x, y)` with
/// `x` the column and `y` the row; lookups through [`get`](Grid::get)
/// normalize out-of-range coordinates by wrapping to the opposite edge, so
/// every cell has exactly eight Moore neighbours.
///
/// ```
/// use petri_core::Cell;
/// use petri_grid::Grid;
///
/// let mut grid = Grid::new(4, 4).unwrap();
/// grid.set(3, 0, Cell::Alive);
/// // Column -1 wraps to the last column, row 4 back to row 0.
/// assert_eq!(grid.get(-1, 0), Cell::Alive);
/// assert_eq!(grid.get(3, 4), grid.get(3, 0));
/// assert_eq!(grid.get(0, 4), Cell::Dead);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: usize = i32::MAX as usize;

    /// Create an all-dead grid of the given dimensions.
    ///
    /// Returns `Err(GridError::Empty)` if either dimension is 0, or
    /// `Err(GridError::DimensionTooLarge)` if either exceeds [`Self::MAX_DIM`].
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        check_dims(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        })
    }

    /// Build a grid from a flat row-major cell buffer.
    ///
    /// Returns `Err(GridError::CellCountMismatch)` when the buffer does not
    /// hold exactly `width * height` cells.
    pub fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Result<Self, GridError> {
        check_dims(width, height)?;
        if cells.len() != width * height {
            return Err(GridError::CellCountMismatch {
                expected: width * height,
                found: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build a grid from nested rows.
    ///
    /// Returns `Err(GridError::RaggedRows)` when any row's length differs
    /// from the first row's.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        check_dims(width, height)?;
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != width {
                return Err(GridError::RaggedRows {
                    row,
                    expected: width,
                    found: cells.len(),
                });
            }
        }
        Ok(Self {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// The cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Read the cell at `(x, y)`, wrapping out-of-range coordinates.
    ///
    /// Normalization is the euclidean modulo on each axis, so coordinates
    /// arbitrarily far out of range resolve to their periodic image.
    pub fn get(&self, x: i32, y: i32) -> Cell {
        let x = wrap_axis(x, self.width);
        let y = wrap_axis(y, self.height);
        self.cells[y * self.width + x]
    }

    /// Write the cell at in-bounds `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        assert!(x < self.width && y < self.height, "cell ({x}, {y}) out of bounds");
        self.cells[y * self.width + x] = cell;
    }

    /// The 8 Moore neighbours of `(x, y)`, in [`NEIGHBOUR_OFFSETS`] order.
    pub fn neighbours(&self, x: i32, y: i32) -> SmallVec<[Cell; 8]> {
        NEIGHBOUR_OFFSETS
            .iter()
            .map(|&(dx, dy)| self.get(x + dx, y + dy))
            .collect()
    }

    /// Count of live cells among the 8 Moore neighbours of `(x, y)`.
    pub fn live_neighbours(&self, x: i32, y: i32) -> u8 {
        NEIGHBOUR_OFFSETS
            .iter()
            .filter(|&&(dx, dy)| self.get(x + dx, y + dy).is_alive())
            .count() as u8
    }
}

/// Render each row as space-joined `#`/`-` glyphs, rows newline-joined.
///
/// A read-only projection for tracing and demos; not part of any digest.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            if y > 0 {
                f.write_str("\n")?;
            }
            for x in 0..self.width {
                if x > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", self.cells[y * self.width + x].glyph())?;
            }
        }
        Ok(())
    }
}

/// Resolve one axis value onto the torus via euclidean modulo.
fn wrap_axis(v: i32, len: usize) -> usize {
    let n = len as i32;
    (((v % n) + n) % n) as usize
}

fn check_dims(width: usize, height: usize) -> Result<(), GridError> {
    if width == 0 || height == 0 {
        return Err(GridError::Empty);
    }
    if width > Grid::MAX_DIM {
        return Err(GridError::DimensionTooLarge {
            name: "width",
            value: width,
            max: Grid::MAX_DIM,
        });
    }
    if height > Grid::MAX_DIM {
        return Err(GridError::DimensionTooLarge {
            name: "height",
            value: height,
            max: Grid::MAX_DIM,
        });
    }
    Ok(())
}
