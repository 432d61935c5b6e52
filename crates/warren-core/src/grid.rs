//! A square grid of [`CellState`] values for maze terrain.
//!
//! The grid stores persistent terrain only (walls and carved passages).
//! Search trails are never written back here; they are derived artifacts
//! returned by the search strategies, so a failed search leaves the grid
//! bit-for-bit unchanged.

use std::fmt;

use crate::geom::Point;

/// Smallest grid side length for which a maze interior can be carved.
pub const MIN_SIZE: usize = 5;

/// Terrain state of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// Solid wall, impassable.
    #[default]
    Wall,
    /// Carved passage.
    Open,
}

/// Errors from grid construction and checked cell access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Requested side length is below [`MIN_SIZE`].
    InvalidSize(usize),
    /// Coordinate outside `[0, size)` on either axis.
    OutOfBounds(Point),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize(size) => {
                write!(f, "grid size {size} is below the minimum of {MIN_SIZE}")
            }
            Self::OutOfBounds(p) => write!(f, "coordinate {p} is out of bounds"),
        }
    }
}

impl std::error::Error for GridError {}

/// A square `size × size` grid of [`CellState`] values.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    size: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create a new all-[`Wall`](CellState::Wall) grid.
    pub fn new(size: usize) -> Result<Self, GridError> {
        if size < MIN_SIZE {
            return Err(GridError::InvalidSize(size));
        }
        Ok(Self {
            size,
            cells: vec![CellState::Wall; size * size],
        })
    }

    /// Side length of the grid.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the point lies within the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.size && (p.y as usize) < self.size
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.y as usize * self.size + p.x as usize)
    }

    /// State of the cell at `p`, or an error outside the grid.
    pub fn state(&self, p: Point) -> Result<CellState, GridError> {
        self.index(p)
            .map(|i| self.cells[i])
            .ok_or(GridError::OutOfBounds(p))
    }

    /// Overwrite the cell at `p`, or fail outside the grid.
    pub fn set_state(&mut self, p: Point, state: CellState) -> Result<(), GridError> {
        let i = self.index(p).ok_or(GridError::OutOfBounds(p))?;
        self.cells[i] = state;
        Ok(())
    }

    /// State of the cell at `p`, or `None` outside the grid.
    #[inline]
    pub fn at(&self, p: Point) -> Option<CellState> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Overwrite the cell at `p`. Does nothing outside the grid.
    #[inline]
    pub fn set(&mut self, p: Point, state: CellState) {
        if let Some(i) = self.index(p) {
            self.cells[i] = state;
        }
    }

    /// Whether `p` is inside the grid and carved open.
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        self.at(p) == Some(CellState::Open)
    }

    /// Count the cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Iterate over `(Point, CellState)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, CellState)> + '_ {
        self.cells.iter().enumerate().map(|(i, &c)| {
            let p = Point::new((i % self.size) as i32, (i / self.size) as i32);
            (p, c)
        })
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let mut g = Grid::new(5).unwrap();
        g.set(Point::new(4, 4), CellState::Open);
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }
}
