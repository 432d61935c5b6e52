//! Randomized recursive-backtracking maze generation.
//!
//! The generator carves a *perfect* maze: the carved passages form a tree,
//! so there is exactly one simple path between any two open cells.

use rand::Rng;
use rand::RngExt;
use rand::seq::SliceRandom;

use warren_core::{CellState, Grid, GridError, Point};

use crate::search::DIRECTIONS;

/// A generated maze: the carved grid plus its start and end cells.
///
/// `start` and `end` are distinct and both open.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Maze {
    pub grid: Grid,
    pub start: Point,
    pub end: Point,
}

/// Maze generator operating on a fresh [`Grid`] per call.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a new generator drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Carve a perfect maze of the given side length.
    ///
    /// The start cell is chosen uniformly over the whole grid; the end cell
    /// is sampled uniformly among the carved cells and resampled until it
    /// differs from the start, which keeps every open cell reachable from
    /// every other.
    pub fn generate(&mut self, size: usize) -> Result<Maze, GridError> {
        let mut grid = Grid::new(size)?;

        let start = Point::new(
            self.rng.random_range(0..size) as i32,
            self.rng.random_range(0..size) as i32,
        );
        self.carve(&mut grid, start);

        let open: Vec<Point> = grid
            .iter()
            .filter(|&(_, c)| c == CellState::Open)
            .map(|(p, _)| p)
            .collect();
        log::debug!("carved {} of {} cells in a {size}x{size} maze", open.len(), size * size);

        let end = loop {
            let candidate = open[self.rng.random_range(0..open.len())];
            if candidate != start {
                break candidate;
            }
        };

        Ok(Maze { grid, start, end })
    }

    /// Growing-tree carving with an explicit stack.
    ///
    /// From the top of the stack, shuffle the four directions and advance to
    /// the first two-step target that is in bounds and still walled, opening
    /// the intermediate cell along the way. A cell with no such target is
    /// popped. Each advance moves through walled territory only, so the
    /// carved passages form a spanning tree of the reachable lattice.
    fn carve(&mut self, grid: &mut Grid, start: Point) {
        grid.set(start, CellState::Open);
        let mut stack = vec![start];

        while let Some(&current) = stack.last() {
            let mut dirs = DIRECTIONS;
            dirs.shuffle(&mut self.rng);

            let mut advanced = false;
            for d in dirs {
                let target = current + d * 2;
                if grid.at(target) == Some(CellState::Wall) {
                    grid.set(current + d, CellState::Open);
                    grid.set(target, CellState::Open);
                    stack.push(target);
                    advanced = true;
                    break;
                }
            }
            if !advanced {
                stack.pop();
            }
        }
    }
}

/// Generate a maze with a borrowed random source.
///
/// Convenience wrapper over [`MazeGen`] for one-shot callers.
pub fn generate(size: usize, rng: &mut impl Rng) -> Result<Maze, GridError> {
    MazeGen::new(rng).generate(size)
}
