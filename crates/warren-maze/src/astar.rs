//! A* search with the Manhattan heuristic.

use std::collections::BinaryHeap;

use warren_core::{Grid, Point};

use crate::search::{DIRECTIONS, Outcome, flat, manhattan};

/// Search node held in the arena. The parent chain forms a tree rooted at
/// the start cell and is only walked for path reconstruction.
#[derive(Clone, Copy)]
struct Node {
    pos: Point,
    g: i32,
    parent: Option<usize>,
}

/// Reference into the node arena, ordered by `f` for use in `BinaryHeap`.
/// Ties carry no secondary key; heap order decides between equal `f`.
#[derive(Clone, Copy, Eq, PartialEq)]
struct OpenEntry {
    idx: usize,
    f: i32,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other.f.cmp(&self.f)
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Best-first expansion ordered by `f = g + manhattan(pos, end)`.
///
/// Cells settle into the closed set when dequeued; a neighbor is pushed
/// whenever it is not yet closed, so the queue tolerates duplicate entries
/// for a still-open cell and stale pops are skipped instead of the queue
/// being rewritten. Unit step costs and the admissible, consistent heuristic
/// make the reconstructed path shortest in step count.
pub(crate) fn a_star(grid: &Grid, start: Point, end: Point) -> Outcome {
    if !grid.is_open(start) {
        return Outcome::not_found();
    }

    let size = grid.size();
    let mut closed = vec![false; size * size];
    let mut nodes = vec![Node {
        pos: start,
        g: 0,
        parent: None,
    }];
    let mut open = BinaryHeap::new();
    open.push(OpenEntry {
        idx: 0,
        f: manhattan(start, end),
    });

    while let Some(entry) = open.pop() {
        let current = nodes[entry.idx];
        if closed[flat(size, current.pos)] {
            // Stale duplicate of an already-settled cell.
            continue;
        }
        if current.pos == end {
            return reconstruct(&nodes, entry.idx);
        }
        closed[flat(size, current.pos)] = true;

        for d in DIRECTIONS {
            let next = current.pos + d;
            if !grid.is_open(next) || closed[flat(size, next)] {
                continue;
            }
            let g = current.g + 1;
            nodes.push(Node {
                pos: next,
                g,
                parent: Some(entry.idx),
            });
            open.push(OpenEntry {
                idx: nodes.len() - 1,
                f: g + manhattan(next, end),
            });
        }
    }

    Outcome::not_found()
}

/// Walk parent references back to the start and reverse.
fn reconstruct(nodes: &[Node], goal: usize) -> Outcome {
    let mut path = Vec::new();
    let mut cursor = Some(goal);
    while let Some(idx) = cursor {
        path.push(nodes[idx].pos);
        cursor = nodes[idx].parent;
    }
    path.reverse();
    Outcome {
        found: true,
        trail: path.clone(),
        path,
    }
}
