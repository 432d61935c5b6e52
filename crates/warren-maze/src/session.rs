//! Stateful generate-then-search facade.
//!
//! UI callers keep one current maze and trigger searches against it. The
//! session refuses to search before the first successful generation.

use std::fmt;

use rand::Rng;

use warren_core::GridError;

use crate::generator::{Maze, MazeGen};
use crate::search::{SearchResult, Strategy, search};

/// Errors surfaced by [`Session`] calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// A search was requested before any maze was generated.
    NotGenerated,
    /// Generation or search rejected its input.
    Grid(GridError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotGenerated => write!(f, "no maze has been generated yet"),
            Self::Grid(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::NotGenerated => None,
        }
    }
}

impl From<GridError> for SessionError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// Holds the current maze between a generate call and later searches.
#[derive(Debug, Default)]
pub struct Session {
    maze: Option<Maze>,
}

impl Session {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a fresh maze, replacing any previous one.
    pub fn generate(&mut self, size: usize, rng: &mut impl Rng) -> Result<&Maze, SessionError> {
        let maze = MazeGen::new(rng).generate(size)?;
        Ok(self.maze.insert(maze))
    }

    /// The current maze, if one has been generated.
    pub fn maze(&self) -> Option<&Maze> {
        self.maze.as_ref()
    }

    /// Run `strategy` against the current maze.
    pub fn search(&self, strategy: Strategy) -> Result<SearchResult, SessionError> {
        let maze = self.maze.as_ref().ok_or(SessionError::NotGenerated)?;
        Ok(search(&maze.grid, strategy, maze.start, maze.end)?)
    }
}
