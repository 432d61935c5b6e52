//! Undirected adjacency-list graph with DFS, BFS and Dijkstra path queries.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::RngExt;

/// Sentinel distance meaning "not yet reached" in Dijkstra.
const UNREACHABLE: usize = usize::MAX;

/// Errors from graph construction and path queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// Vertex id outside `[0, vertices)`.
    OutOfBounds { vertex: usize, vertices: usize },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { vertex, vertices } => {
                write!(f, "vertex {vertex} is out of bounds for a graph with {vertices} vertices")
            }
        }
    }
}

impl std::error::Error for GraphError {}

/// Path-finding method over a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    DepthFirst,
    BreadthFirst,
    Dijkstra,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::DepthFirst => "dfs",
            Self::BreadthFirst => "bfs",
            Self::Dijkstra => "dijkstra",
        };
        f.write_str(name)
    }
}

/// Error for parsing an unknown method name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMethod(pub String);

impl fmt::Display for UnknownMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown path-finding method {:?}", self.0)
    }
}

impl std::error::Error for UnknownMethod {}

impl FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dfs" => Ok(Self::DepthFirst),
            "bfs" => Ok(Self::BreadthFirst),
            "dijkstra" => Ok(Self::Dijkstra),
            other => Err(UnknownMethod(other.to_string())),
        }
    }
}

/// An undirected graph over vertices `0..vertices`, stored as adjacency
/// lists. Edges are unweighted; every hop costs one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    adj: Vec<Vec<usize>>,
}

impl Graph {
    /// Create an edgeless graph with the given vertex count.
    pub fn new(vertices: usize) -> Self {
        Self {
            adj: vec![Vec::new(); vertices],
        }
    }

    /// Build a graph from an explicit edge list.
    pub fn from_edges(vertices: usize, edges: &[(usize, usize)]) -> Result<Self, GraphError> {
        let mut graph = Self::new(vertices);
        for &(v, w) in edges {
            graph.add_edge(v, w)?;
        }
        Ok(graph)
    }

    /// Sample a random graph: each unordered vertex pair receives an edge
    /// independently with the given probability.
    pub fn random(vertices: usize, probability: f64, rng: &mut impl Rng) -> Self {
        let mut graph = Self::new(vertices);
        for i in 0..vertices {
            for j in i + 1..vertices {
                let draw: f64 = rng.random();
                if draw < probability {
                    graph.adj[i].push(j);
                    graph.adj[j].push(i);
                }
            }
        }
        log::debug!(
            "sampled a random graph: {} vertices, {} edges (p = {probability})",
            vertices,
            graph.edge_count()
        );
        graph
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(Vec::len).sum::<usize>() / 2
    }

    fn check(&self, vertex: usize) -> Result<usize, GraphError> {
        if vertex >= self.adj.len() {
            return Err(GraphError::OutOfBounds {
                vertex,
                vertices: self.adj.len(),
            });
        }
        Ok(vertex)
    }

    /// Add an undirected edge between `v` and `w`. Duplicate edges are ignored.
    pub fn add_edge(&mut self, v: usize, w: usize) -> Result<(), GraphError> {
        self.check(v)?;
        self.check(w)?;
        if !self.adj[v].contains(&w) {
            self.adj[v].push(w);
        }
        if !self.adj[w].contains(&v) {
            self.adj[w].push(v);
        }
        Ok(())
    }

    /// Neighbors of `v` in insertion order.
    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.adj[v]
    }

    /// Find a path from `start` to `end` with the given method.
    ///
    /// Returns the vertex sequence from `start` to `end` inclusive, or an
    /// empty sequence when no route exists (a normal outcome, not an error).
    /// BreadthFirst and Dijkstra paths are shortest in hop count; DepthFirst
    /// paths are merely simple.
    pub fn shortest_path(
        &self,
        method: Method,
        start: usize,
        end: usize,
    ) -> Result<Vec<usize>, GraphError> {
        self.check(start)?;
        self.check(end)?;
        let path = match method {
            Method::DepthFirst => self.dfs_path(start, end),
            Method::BreadthFirst => self.bfs_path(start, end),
            Method::Dijkstra => self.dijkstra_path(start, end),
        };
        Ok(path)
    }

    /// Iterative DFS. Vertices are marked visited for good on entry and the
    /// path pops on dead ends, so the returned route is simple but depends
    /// on adjacency insertion order.
    fn dfs_path(&self, start: usize, end: usize) -> Vec<usize> {
        if start == end {
            return vec![start];
        }
        let mut visited = vec![false; self.adj.len()];
        let mut path = vec![start];
        // (vertex, index of the next neighbor to try)
        let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
        visited[start] = true;

        while let Some(top) = stack.last_mut() {
            let v = top.0;
            let mut next = None;
            while top.1 < self.adj[v].len() {
                let n = self.adj[v][top.1];
                top.1 += 1;
                if !visited[n] {
                    next = Some(n);
                    break;
                }
            }
            match next {
                Some(n) => {
                    visited[n] = true;
                    path.push(n);
                    if n == end {
                        return path;
                    }
                    stack.push((n, 0));
                }
                None => {
                    path.pop();
                    stack.pop();
                }
            }
        }

        Vec::new()
    }

    /// BFS with parent-pointer reconstruction.
    fn bfs_path(&self, start: usize, end: usize) -> Vec<usize> {
        let mut visited = vec![false; self.adj.len()];
        let mut parent: Vec<Option<usize>> = vec![None; self.adj.len()];
        let mut queue = VecDeque::new();
        visited[start] = true;
        queue.push_back(start);

        while let Some(v) = queue.pop_front() {
            if v == end {
                break;
            }
            for &n in &self.adj[v] {
                if !visited[n] {
                    visited[n] = true;
                    parent[n] = Some(v);
                    queue.push_back(n);
                }
            }
        }

        reconstruct(&parent, start, end)
    }

    /// Uniform-cost shortest path with linear minimum selection each round
    /// rather than a priority queue. O(V²), fine at road-map scale.
    fn dijkstra_path(&self, start: usize, end: usize) -> Vec<usize> {
        let vertices = self.adj.len();
        let mut dist = vec![UNREACHABLE; vertices];
        let mut prev: Vec<Option<usize>> = vec![None; vertices];
        let mut visited = vec![false; vertices];
        dist[start] = 0;

        for _ in 0..vertices {
            let mut current = None;
            for v in 0..vertices {
                if !visited[v]
                    && dist[v] != UNREACHABLE
                    && current.is_none_or(|c: usize| dist[v] < dist[c])
                {
                    current = Some(v);
                }
            }
            let Some(v) = current else {
                break;
            };
            visited[v] = true;

            for &n in &self.adj[v] {
                if !visited[n] && dist[v] + 1 < dist[n] {
                    dist[n] = dist[v] + 1;
                    prev[n] = Some(v);
                }
            }
        }

        if dist[end] == UNREACHABLE {
            return Vec::new();
        }
        reconstruct(&prev, start, end)
    }
}

/// Walk parent pointers from `end` back to a root and reverse. If the chain
/// does not begin at `start` the target was unreachable: return empty.
fn reconstruct(parent: &[Option<usize>], start: usize, end: usize) -> Vec<usize> {
    let mut path = Vec::new();
    let mut cursor = Some(end);
    while let Some(v) = cursor {
        path.push(v);
        cursor = parent[v];
    }
    path.reverse();
    if path.first() == Some(&start) {
        path
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const METHODS: [Method; 3] = [Method::DepthFirst, Method::BreadthFirst, Method::Dijkstra];

    fn triangle() -> Graph {
        Graph::from_edges(3, &[(0, 1), (1, 2), (0, 2)]).unwrap()
    }

    #[test]
    fn add_edge_rejects_out_of_bounds() {
        let mut g = Graph::new(3);
        assert_eq!(
            g.add_edge(0, 3),
            Err(GraphError::OutOfBounds {
                vertex: 3,
                vertices: 3
            })
        );
        assert_eq!(
            g.add_edge(7, 1),
            Err(GraphError::OutOfBounds {
                vertex: 7,
                vertices: 3
            })
        );
    }

    #[test]
    fn edges_are_symmetric_and_deduplicated() {
        let mut g = Graph::new(3);
        g.add_edge(0, 1).unwrap();
        g.add_edge(1, 0).unwrap();
        assert_eq!(g.neighbors(0), &[1]);
        assert_eq!(g.neighbors(1), &[0]);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn triangle_shortest_paths() {
        let g = triangle();
        assert_eq!(g.shortest_path(Method::BreadthFirst, 0, 2).unwrap(), vec![0, 2]);
        assert_eq!(g.shortest_path(Method::Dijkstra, 0, 2).unwrap(), vec![0, 2]);
        // DFS follows insertion order through vertex 1 first.
        assert_eq!(g.shortest_path(Method::DepthFirst, 0, 2).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn line_graph_paths() {
        let g = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
        for method in METHODS {
            assert_eq!(g.shortest_path(method, 0, 3).unwrap(), vec![0, 1, 2, 3]);
        }
    }

    #[test]
    fn start_equals_end() {
        let g = triangle();
        for method in METHODS {
            assert_eq!(g.shortest_path(method, 1, 1).unwrap(), vec![1]);
        }
    }

    #[test]
    fn disconnected_queries_return_empty() {
        let g = Graph::from_edges(4, &[(0, 1)]).unwrap();
        for method in METHODS {
            assert!(g.shortest_path(method, 0, 3).unwrap().is_empty(), "{method}");
        }
    }

    #[test]
    fn zero_probability_yields_no_edges() {
        let mut rng = StdRng::seed_from_u64(1);
        let g = Graph::random(10, 0.0, &mut rng);
        assert_eq!(g.edge_count(), 0);
        for method in METHODS {
            for end in 1..10 {
                assert!(g.shortest_path(method, 0, end).unwrap().is_empty());
            }
        }
    }

    #[test]
    fn unit_probability_yields_complete_graph() {
        let mut rng = StdRng::seed_from_u64(1);
        let g = Graph::random(6, 1.0, &mut rng);
        assert_eq!(g.edge_count(), 6 * 5 / 2);
        // Every pair is directly connected.
        assert_eq!(g.shortest_path(Method::BreadthFirst, 2, 5).unwrap(), vec![2, 5]);
    }

    #[test]
    fn random_is_deterministic_under_a_seed() {
        let a = Graph::random(8, 0.4, &mut StdRng::seed_from_u64(5));
        let b = Graph::random(8, 0.4, &mut StdRng::seed_from_u64(5));
        assert_eq!(a, b);
    }

    #[test]
    fn shortest_path_rejects_out_of_bounds_vertices() {
        let g = triangle();
        assert!(g.shortest_path(Method::BreadthFirst, 0, 9).is_err());
        assert!(g.shortest_path(Method::Dijkstra, 9, 0).is_err());
    }

    #[test]
    fn method_names_round_trip() {
        for method in METHODS {
            let parsed: Method = method.to_string().parse().unwrap();
            assert_eq!(parsed, method);
        }
        assert!("prim".parse::<Method>().is_err());
    }
}
