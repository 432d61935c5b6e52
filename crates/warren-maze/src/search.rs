//! Shared search-strategy contract: [`Strategy`], [`SearchResult`] and the
//! [`search`] entry point.
//!
//! Every strategy reads the grid, never writes it. Visited bookkeeping lives
//! in per-invocation scratch buffers, and the trail a renderer would paint
//! comes back inside the result, so running a search twice on the same grid
//! gives the same answer.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use warren_core::{Grid, GridError, Point};

use crate::astar::a_star;
use crate::bfs::breadth_first;
use crate::dfs::depth_first;
use crate::iddfs::iterative_deepening;

/// Expansion order shared by all strategies: down, up, right, left
/// (+row, −row, +col, −col). DFS and IDDFS results depend on it.
pub(crate) const DIRECTIONS: [Point; 4] = [
    Point::new(0, 1),
    Point::new(0, -1),
    Point::new(1, 0),
    Point::new(-1, 0),
];

/// Flat row-major index of an in-bounds point.
#[inline]
pub(crate) fn flat(size: usize, p: Point) -> usize {
    p.y as usize * size + p.x as usize
}

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// The four interchangeable search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    DepthFirst,
    BreadthFirst,
    AStar,
    IterativeDeepening,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::DepthFirst => "dfs",
            Self::BreadthFirst => "bfs",
            Self::AStar => "astar",
            Self::IterativeDeepening => "iddfs",
        };
        f.write_str(name)
    }
}

/// Error for parsing an unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStrategy(pub String);

impl fmt::Display for UnknownStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown search strategy {:?}", self.0)
    }
}

impl std::error::Error for UnknownStrategy {}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dfs" => Ok(Self::DepthFirst),
            "bfs" => Ok(Self::BreadthFirst),
            "astar" => Ok(Self::AStar),
            "iddfs" => Ok(Self::IterativeDeepening),
            other => Err(UnknownStrategy(other.to_string())),
        }
    }
}

/// Outcome of one search invocation.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Whether the end cell was reached.
    pub found: bool,
    /// Cells from start to end inclusive; empty on failure. BreadthFirst
    /// performs no path reconstruction and always leaves this empty.
    pub path: Vec<Point>,
    /// Cells a renderer would paint as the search trail: the path itself for
    /// DepthFirst, AStar and IterativeDeepening, the explored frontier in
    /// enqueue order for BreadthFirst. Empty on failure.
    pub trail: Vec<Point>,
    /// Wall-clock time spent inside the strategy body.
    pub elapsed: Duration,
}

/// Strategy-internal outcome, before timing is attached.
pub(crate) struct Outcome {
    pub(crate) found: bool,
    pub(crate) path: Vec<Point>,
    pub(crate) trail: Vec<Point>,
}

impl Outcome {
    pub(crate) fn not_found() -> Self {
        Self {
            found: false,
            path: Vec::new(),
            trail: Vec::new(),
        }
    }
}

/// Run one strategy against `grid` from `start` to `end`.
///
/// Fails with [`GridError::OutOfBounds`] before any search work if either
/// endpoint lies outside the grid. An unreachable end cell is not an error:
/// the result comes back with `found == false` and empty path and trail.
pub fn search(
    grid: &Grid,
    strategy: Strategy,
    start: Point,
    end: Point,
) -> Result<SearchResult, GridError> {
    grid.state(start)?;
    grid.state(end)?;

    let clock = Instant::now();
    let outcome = match strategy {
        Strategy::DepthFirst => depth_first(grid, start, end),
        Strategy::BreadthFirst => breadth_first(grid, start, end),
        Strategy::AStar => a_star(grid, start, end),
        Strategy::IterativeDeepening => iterative_deepening(grid, start, end),
    };
    let elapsed = clock.elapsed();
    log::debug!("{strategy} from {start} to {end}: found={} in {elapsed:?}", outcome.found);

    Ok(SearchResult {
        found: outcome.found,
        path: outcome.path,
        trail: outcome.trail,
        elapsed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::MazeGen;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use warren_core::CellState;

    const ALL: [Strategy; 4] = [
        Strategy::DepthFirst,
        Strategy::BreadthFirst,
        Strategy::AStar,
        Strategy::IterativeDeepening,
    ];

    fn maze(seed: u64, size: usize) -> crate::Maze {
        MazeGen::new(StdRng::seed_from_u64(seed)).generate(size).unwrap()
    }

    /// A 5×5 grid whose top row is an open corridor.
    fn corridor() -> Grid {
        let mut grid = Grid::new(5).unwrap();
        for x in 0..5 {
            grid.set(Point::new(x, 0), CellState::Open);
        }
        grid
    }

    fn assert_valid_path(grid: &Grid, path: &[Point], start: Point, end: Point) {
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&end));
        for pair in path.windows(2) {
            assert_eq!(manhattan(pair[0], pair[1]), 1, "non-adjacent step in {path:?}");
        }
        for &p in path {
            assert!(grid.is_open(p), "path touches wall at {p}");
        }
    }

    #[test]
    fn all_strategies_find_a_path_in_a_maze() {
        for seed in [0, 1, 2] {
            let m = maze(seed, 11);
            for strategy in ALL {
                let r = search(&m.grid, strategy, m.start, m.end).unwrap();
                assert!(r.found, "{strategy} failed on seed {seed}");
                if strategy == Strategy::BreadthFirst {
                    assert!(r.path.is_empty());
                    assert!(!r.trail.is_empty());
                } else {
                    assert_valid_path(&m.grid, &r.path, m.start, m.end);
                    assert_eq!(r.path, r.trail);
                }
            }
        }
    }

    #[test]
    fn all_strategies_fail_cleanly_when_disconnected() {
        // Fully walled 5×5 with only the start cell open.
        let mut grid = Grid::new(5).unwrap();
        let start = Point::new(0, 0);
        let end = Point::new(4, 4);
        grid.set(start, CellState::Open);

        for strategy in ALL {
            let r = search(&grid, strategy, start, end).unwrap();
            assert!(!r.found, "{strategy} claimed a path on a walled grid");
            assert!(r.path.is_empty());
            assert!(r.trail.is_empty());
        }
    }

    #[test]
    fn shortest_path_strategies_agree() {
        for seed in [5, 6, 7, 8] {
            let m = maze(seed, 9);
            let astar = search(&m.grid, Strategy::AStar, m.start, m.end).unwrap();
            let iddfs = search(&m.grid, Strategy::IterativeDeepening, m.start, m.end).unwrap();
            let dfs = search(&m.grid, Strategy::DepthFirst, m.start, m.end).unwrap();
            assert_eq!(astar.path.len(), iddfs.path.len());
            assert!(astar.path.len() <= dfs.path.len());
        }
    }

    #[test]
    fn corridor_paths_are_exact() {
        let grid = corridor();
        let start = Point::new(0, 0);
        let end = Point::new(4, 0);
        for strategy in [Strategy::DepthFirst, Strategy::AStar, Strategy::IterativeDeepening] {
            let r = search(&grid, strategy, start, end).unwrap();
            assert!(r.found);
            assert_eq!(r.path.len(), 5, "{strategy}");
            assert_valid_path(&grid, &r.path, start, end);
        }
        let bfs = search(&grid, Strategy::BreadthFirst, start, end).unwrap();
        assert!(bfs.found);
        // The corridor frontier is the corridor itself, minus the start.
        assert_eq!(bfs.trail, vec![
            Point::new(1, 0),
            Point::new(2, 0),
            Point::new(3, 0),
            Point::new(4, 0),
        ]);
    }

    #[test]
    fn repeated_searches_are_idempotent() {
        let m = maze(9, 9);
        for strategy in ALL {
            let first = search(&m.grid, strategy, m.start, m.end).unwrap();
            let second = search(&m.grid, strategy, m.start, m.end).unwrap();
            assert_eq!(first.found, second.found);
            assert_eq!(first.path.len(), second.path.len());
            assert_eq!(first.path, second.path);
        }
    }

    #[test]
    fn start_equal_to_end() {
        let grid = corridor();
        let p = Point::new(2, 0);
        for strategy in ALL {
            let r = search(&grid, strategy, p, p).unwrap();
            assert!(r.found, "{strategy}");
            if strategy != Strategy::BreadthFirst {
                assert_eq!(r.path, vec![p]);
            }
        }
    }

    #[test]
    fn out_of_bounds_endpoints_are_rejected() {
        let grid = corridor();
        let outside = Point::new(5, 0);
        let inside = Point::new(0, 0);
        let err = search(&grid, Strategy::AStar, outside, inside).unwrap_err();
        assert_eq!(err, GridError::OutOfBounds(outside));
        let err = search(&grid, Strategy::DepthFirst, inside, outside).unwrap_err();
        assert_eq!(err, GridError::OutOfBounds(outside));
    }

    #[test]
    fn strategy_names_round_trip() {
        for strategy in ALL {
            let parsed: Strategy = strategy.to_string().parse().unwrap();
            assert_eq!(parsed, strategy);
        }
        assert!("bogus".parse::<Strategy>().is_err());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn search_result_round_trip() {
        let r = SearchResult {
            found: true,
            path: vec![Point::new(0, 0), Point::new(1, 0)],
            trail: vec![Point::new(0, 0), Point::new(1, 0)],
            elapsed: Duration::from_nanos(1234),
        };
        let json = serde_json::to_string(&r).unwrap();
        let back: SearchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.found, r.found);
        assert_eq!(back.path, r.path);
        assert_eq!(back.elapsed, r.elapsed);
    }
}
