//! `warren` — command-line harness for maze generation and path search.

mod render;

use std::time::Instant;

use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;

use warren_graph::{Graph, Method, RoadMap};
use warren_maze::{MazeGen, Strategy};

use render::{render_maze, render_path};

#[derive(Parser)]
#[command(name = "warren", version, about = "Maze generation and multi-strategy pathfinding")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Carve a perfect maze and print it.
    Generate {
        /// Side length of the maze (at least 5).
        #[arg(short, long)]
        size: usize,
        /// Seed for reproducible generation.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Carve a maze, run one search strategy and print the trail.
    Search {
        /// Search strategy: dfs, bfs, astar or iddfs.
        strategy: Strategy,
        /// Side length of the maze (at least 5).
        #[arg(short, long)]
        size: usize,
        /// Seed for reproducible generation.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Build a graph from explicit edges and find a path.
    Graph {
        /// Path-finding method: dfs, bfs or dijkstra.
        method: Method,
        /// Number of vertices.
        #[arg(short, long)]
        vertices: usize,
        /// An edge as `v,w`; repeat for more edges.
        #[arg(short, long = "edge", value_parser = parse_edge)]
        edges: Vec<(usize, usize)>,
        /// Start vertex.
        #[arg(long)]
        start: usize,
        /// End vertex.
        #[arg(long)]
        end: usize,
    },
    /// Sample a random graph and find a path.
    RandomGraph {
        /// Path-finding method: dfs, bfs or dijkstra.
        method: Method,
        /// Number of vertices.
        #[arg(short, long)]
        vertices: usize,
        /// Probability of an edge per vertex pair.
        #[arg(short, long)]
        probability: f64,
        /// Seed for reproducible sampling.
        #[arg(long)]
        seed: Option<u64>,
        /// Start vertex.
        #[arg(long)]
        start: usize,
        /// End vertex.
        #[arg(long)]
        end: usize,
    },
    /// Sample a random road map and find the shortest route.
    RoadMap {
        /// Number of nodes.
        #[arg(short, long)]
        nodes: usize,
        /// Side length of the square the nodes scatter over.
        #[arg(long, default_value_t = 600)]
        extent: i32,
        /// Probability of a road per node pair.
        #[arg(short, long, default_value_t = 0.3)]
        probability: f64,
        /// Seed for reproducible sampling.
        #[arg(long)]
        seed: Option<u64>,
        /// Start node.
        #[arg(long)]
        start: usize,
        /// End node.
        #[arg(long)]
        end: usize,
    },
}

fn parse_edge(s: &str) -> Result<(usize, usize), String> {
    let (v, w) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `v,w`, got {s:?}"))?;
    let v = v.trim().parse().map_err(|e| format!("bad vertex {v:?}: {e}"))?;
    let w = w.trim().parse().map_err(|e| format!("bad vertex {w:?}: {e}"))?;
    Ok((v, w))
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

fn report_graph_path(method: Method, graph: &Graph, start: usize, end: usize) -> Result<(), Box<dyn std::error::Error>> {
    let clock = Instant::now();
    let path = graph.shortest_path(method, start, end)?;
    let elapsed = clock.elapsed();
    if path.is_empty() {
        println!("no path found");
    } else {
        println!("{method} path: {}", render_path(&path));
        println!("elapsed: {} ns", elapsed.as_nanos());
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate { size, seed } => {
            let maze = MazeGen::new(rng_from(seed)).generate(size)?;
            print!("{}", render_maze(&maze, &[]));
        }
        Command::Search { strategy, size, seed } => {
            let maze = MazeGen::new(rng_from(seed)).generate(size)?;
            let result = warren_maze::search(&maze.grid, strategy, maze.start, maze.end)?;
            print!("{}", render_maze(&maze, &result.trail));
            if result.found {
                if result.path.is_empty() {
                    println!("found (no path reconstruction for {strategy})");
                } else {
                    println!("found: path length {}", result.path.len());
                }
                println!("elapsed: {} ns", result.elapsed.as_nanos());
            } else {
                println!("no path found");
            }
        }
        Command::Graph {
            method,
            vertices,
            edges,
            start,
            end,
        } => {
            let graph = Graph::from_edges(vertices, &edges)?;
            report_graph_path(method, &graph, start, end)?;
        }
        Command::RandomGraph {
            method,
            vertices,
            probability,
            seed,
            start,
            end,
        } => {
            let graph = Graph::random(vertices, probability, &mut rng_from(seed));
            println!("sampled {} edges", graph.edge_count());
            report_graph_path(method, &graph, start, end)?;
        }
        Command::RoadMap {
            nodes,
            extent,
            probability,
            seed,
            start,
            end,
        } => {
            let map = RoadMap::random(nodes, extent, probability, &mut rng_from(seed));
            for (id, p) in map.positions().iter().enumerate() {
                println!("node {id} at {p}");
            }
            println!("roads: {}", map.graph().edge_count());
            report_graph_path(Method::Dijkstra, map.graph(), start, end)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_parsing() {
        assert_eq!(parse_edge("0,1"), Ok((0, 1)));
        assert_eq!(parse_edge(" 3 , 4 "), Ok((3, 4)));
        assert!(parse_edge("3").is_err());
        assert!(parse_edge("a,b").is_err());
    }

    #[test]
    fn cli_parses_search_command() {
        let cli = Cli::try_parse_from(["warren", "search", "astar", "--size", "9", "--seed", "7"]).unwrap();
        match cli.command {
            Command::Search { strategy, size, seed } => {
                assert_eq!(strategy, Strategy::AStar);
                assert_eq!(size, 9);
                assert_eq!(seed, Some(7));
            }
            _ => panic!("wrong command"),
        }
    }

    #[test]
    fn cli_parses_graph_command() {
        let cli = Cli::try_parse_from([
            "warren", "graph", "bfs", "-v", "3", "-e", "0,1", "-e", "1,2", "--start", "0", "--end", "2",
        ])
        .unwrap();
        match cli.command {
            Command::Graph { method, vertices, edges, start, end } => {
                assert_eq!(method, Method::BreadthFirst);
                assert_eq!(vertices, 3);
                assert_eq!(edges, vec![(0, 1), (1, 2)]);
                assert_eq!(start, 0);
                assert_eq!(end, 2);
            }
            _ => panic!("wrong command"),
        }
    }
}
