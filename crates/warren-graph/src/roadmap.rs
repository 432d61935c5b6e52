//! Random road maps: a random graph with 2-D node positions attached.
//!
//! Positions exist purely so a renderer can scatter the nodes; every edge
//! still costs one hop, so shortest paths are hop-count paths.

use rand::Rng;
use rand::RngExt;

use warren_core::Point;

use crate::graph::{Graph, GraphError, Method};

/// A random geometric overlay over a [`Graph`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoadMap {
    graph: Graph,
    positions: Vec<Point>,
}

impl RoadMap {
    /// Sample a road map: `nodes` positions uniform in `[0, extent)²` and an
    /// independent edge per unordered pair with the given probability.
    /// `extent` must be positive.
    pub fn random(nodes: usize, extent: i32, probability: f64, rng: &mut impl Rng) -> Self {
        let positions = (0..nodes)
            .map(|_| {
                Point::new(
                    rng.random_range(0..extent),
                    rng.random_range(0..extent),
                )
            })
            .collect();
        let graph = Graph::random(nodes, probability, rng);
        Self { graph, positions }
    }

    /// The underlying graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Node positions, indexed by vertex id.
    pub fn positions(&self) -> &[Point] {
        &self.positions
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.positions.len()
    }

    /// Shortest hop-count path between two nodes, via Dijkstra.
    pub fn shortest_path(&self, start: usize, end: usize) -> Result<Vec<usize>, GraphError> {
        self.graph.shortest_path(Method::Dijkstra, start, end)
    }
}
