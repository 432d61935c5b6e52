//! Breadth-first search over the grid.

use std::collections::VecDeque;

use warren_core::{Grid, Point};

use crate::search::{DIRECTIONS, Outcome, flat};

/// Queue-based layer-by-layer expansion from the start cell.
///
/// A separate visited matrix prevents re-enqueueing; every enqueued neighbor
/// is appended to the trail, so on success the trail is the explored
/// frontier in enqueue order rather than a start-to-end path. No path is
/// reconstructed: the search reports success on the first dequeue equal to
/// the end cell and leaves `path` empty.
pub(crate) fn breadth_first(grid: &Grid, start: Point, end: Point) -> Outcome {
    if !grid.is_open(start) {
        return Outcome::not_found();
    }

    let size = grid.size();
    let mut visited = vec![false; size * size];
    let mut queue = VecDeque::new();
    let mut trail = Vec::new();

    visited[flat(size, start)] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current == end {
            return Outcome {
                found: true,
                path: Vec::new(),
                trail,
            };
        }
        for d in DIRECTIONS {
            let next = current + d;
            if grid.is_open(next) && !visited[flat(size, next)] {
                visited[flat(size, next)] = true;
                queue.push_back(next);
                trail.push(next);
            }
        }
    }

    Outcome::not_found()
}
