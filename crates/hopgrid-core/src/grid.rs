//! A square boolean passability grid.
//!
//! [`PassGrid`] is the terrain map handed to the search engine: `true` means
//! a unit may stand on the cell. It is indexed `[y][x]` (row-major) and is
//! always square with side `N ≥ 1`.

use crate::geom::{Point, Range};

/// Errors raised when building a [`PassGrid`] from rows.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// No rows, or rows with no cells.
    #[error("grid must have at least one cell")]
    Empty,
    /// A row length differs from the number of rows.
    #[error("grid is not square: row {row} has {len} cells, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
    /// The side exceeds [`PassGrid::MAX_SIZE`].
    #[error("grid side {size} exceeds the maximum of {max}", max = PassGrid::MAX_SIZE)]
    TooLarge { size: usize },
}

/// An `N`×`N` grid of passable (`true`) and blocked (`false`) cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassGrid {
    cells: Vec<bool>,
    size: i32,
}

impl PassGrid {
    /// Largest supported side. `MAX_SIZE²` still fits an `i32`.
    pub const MAX_SIZE: i32 = 46_340;

    /// Create a fully passable `size`×`size` grid.
    pub fn open(size: i32) -> Result<Self, GridError> {
        Self::filled(size, true)
    }

    /// Create a `size`×`size` grid with every cell set to `passable`.
    pub fn filled(size: i32, passable: bool) -> Result<Self, GridError> {
        let side = Self::check_side(size)?;
        Ok(Self {
            cells: vec![passable; side * side],
            size,
        })
    }

    /// Build a grid from row-major rows (`rows[y][x]`).
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self, GridError> {
        let n = rows.len();
        let size = i32::try_from(n).map_err(|_| GridError::TooLarge { size: n })?;
        Self::check_side(size)?;
        let mut cells = Vec::with_capacity(n * n);
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != n {
                return Err(GridError::NotSquare {
                    row,
                    len: r.len(),
                    expected: n,
                });
            }
            cells.extend_from_slice(r);
        }
        Ok(Self { cells, size })
    }

    /// Side length `N`.
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// The bounding range `[0, N) × [0, N)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::square(self.size)
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// Whether `p` is inside the grid and passable.
    #[inline]
    pub fn passable(&self, p: Point) -> bool {
        self.index(p).is_some_and(|i| self.cells[i])
    }

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<bool> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Set the cell at `p`. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, passable: bool) {
        if let Some(i) = self.index(p) {
            self.cells[i] = passable;
        }
    }

    /// Mark `p` as blocked. Does nothing if out of bounds.
    pub fn block(&mut self, p: Point) {
        self.set(p, false);
    }

    /// Number of passable cells.
    pub fn count_passable(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Iterate over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.size as usize)
    }

    fn check_side(size: i32) -> Result<usize, GridError> {
        if size < 1 {
            return Err(GridError::Empty);
        }
        if size > Self::MAX_SIZE {
            return Err(GridError::TooLarge {
                size: size as usize,
            });
        }
        Ok(size as usize)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.y as usize * self.size as usize + p.x as usize)
    }
}
