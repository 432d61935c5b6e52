//! Generalized-graph path finding.
//!
//! A secondary instance of the same search abstractions as `warren-maze`,
//! operating over an adjacency list instead of a grid:
//!
//! - [`Graph`] — undirected adjacency-list graph with DFS, BFS and Dijkstra
//!   path queries ([`Graph::shortest_path`])
//! - [`RoadMap`] — a random graph with 2-D node positions for rendering
//!
//! "No route" is a normal empty-path outcome; only out-of-range vertex ids
//! are errors.

mod graph;
mod roadmap;

pub use graph::{Graph, GraphError, Method, UnknownMethod};
pub use roadmap::RoadMap;
