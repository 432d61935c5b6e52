//! Perfect-maze generation and multi-strategy pathfinding.
//!
//! This crate carves a square grid into a perfect maze and runs one of four
//! interchangeable search strategies against it:
//!
//! - **Depth-first** single-path exploration ([`Strategy::DepthFirst`])
//! - **Breadth-first** layer expansion ([`Strategy::BreadthFirst`])
//! - **A\*** with the Manhattan heuristic ([`Strategy::AStar`])
//! - **Iterative-deepening DFS** ([`Strategy::IterativeDeepening`])
//!
//! All strategies share one contract ([`search`]): the grid is read-only,
//! visited bookkeeping is per-invocation scratch, elapsed time wraps the
//! strategy body only, and an unreachable end cell is a normal
//! `found == false` result rather than an error.
//!
//! | Strategy | Shortest path? | Trail contents |
//! |---|---|---|
//! | DepthFirst | no | the path |
//! | BreadthFirst | n/a (no reconstruction) | explored frontier |
//! | AStar | yes | the path |
//! | IterativeDeepening | yes | the path |

mod astar;
mod bfs;
mod dfs;
mod generator;
mod iddfs;
mod search;
mod session;

pub use generator::{Maze, MazeGen, generate};
pub use search::{SearchResult, Strategy, UnknownStrategy, manhattan, search};
pub use session::{Session, SessionError};
