//! Depth-first search with explicit backtracking.

use warren_core::{Grid, Point};

use crate::search::{DIRECTIONS, Outcome, flat};

/// Single-path exploration in fixed direction order.
///
/// A cell joins the path when entered and leaves it again when every
/// direction from it has failed, so a cell abandoned on one branch stays
/// reachable through another and the surviving path is exactly the
/// successful route. Stops the instant the end cell turns up as a neighbor.
/// The path is finite but not necessarily shortest.
pub(crate) fn depth_first(grid: &Grid, start: Point, end: Point) -> Outcome {
    if !grid.is_open(start) {
        return Outcome::not_found();
    }
    if start == end {
        return Outcome {
            found: true,
            path: vec![start],
            trail: vec![start],
        };
    }

    let size = grid.size();
    let mut on_path = vec![false; size * size];
    let mut path = vec![start];
    // (cell, index of the next direction to try from it)
    let mut stack: Vec<(Point, usize)> = vec![(start, 0)];
    on_path[flat(size, start)] = true;

    while let Some(top) = stack.last_mut() {
        let current = top.0;
        let mut next = None;
        while top.1 < DIRECTIONS.len() {
            let candidate = current + DIRECTIONS[top.1];
            top.1 += 1;
            if grid.is_open(candidate) && !on_path[flat(size, candidate)] {
                next = Some(candidate);
                break;
            }
        }

        match next {
            Some(next) if next == end => {
                path.push(end);
                return Outcome {
                    found: true,
                    trail: path.clone(),
                    path,
                };
            }
            Some(next) => {
                on_path[flat(size, next)] = true;
                path.push(next);
                stack.push((next, 0));
            }
            None => {
                // Dead end: unwind and make the cell revisitable.
                on_path[flat(size, current)] = false;
                path.pop();
                stack.pop();
            }
        }
    }

    Outcome::not_found()
}
