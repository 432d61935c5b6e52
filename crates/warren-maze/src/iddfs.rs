//! Iterative-deepening depth-first search.

use warren_core::{Grid, Point};

use crate::search::{DIRECTIONS, Outcome, flat};

/// Depth-limited DFS under increasing depth bounds.
///
/// Each bound runs a fresh depth-limited pass with its own visited matrix;
/// the first bound at which the goal is reached yields the result, so the
/// path found is no longer than any smaller bound allowed. Memory stays
/// bounded by one pass at the price of repeated work.
pub(crate) fn iterative_deepening(grid: &Grid, start: Point, end: Point) -> Outcome {
    if !grid.is_open(start) {
        return Outcome::not_found();
    }

    let size = grid.size();
    for limit in 0..size * size {
        if let Some(path) = depth_limited(grid, start, end, limit) {
            return Outcome {
                found: true,
                trail: path.clone(),
                path,
            };
        }
    }

    Outcome::not_found()
}

/// One depth-limited pass. `limit` bounds the number of steps from the
/// start; the goal test precedes the depth test, so the end cell is
/// recognized even with the budget exhausted.
///
/// Within a pass, visited cells stay visited across backtracking (only the
/// path marking is undone), and a budget-exhausted non-goal cell is skipped
/// without being marked, leaving it open to deeper passes.
fn depth_limited(grid: &Grid, start: Point, end: Point, limit: usize) -> Option<Vec<Point>> {
    if start == end {
        return Some(vec![start]);
    }
    if limit == 0 {
        return None;
    }

    let size = grid.size();
    let mut visited = vec![false; size * size];
    let mut path = vec![start];
    // (cell, index of the next direction to try from it)
    let mut stack: Vec<(Point, usize)> = vec![(start, 0)];
    visited[flat(size, start)] = true;

    while !stack.is_empty() {
        // Remaining budget at the top cell; cells only enter the stack while
        // they still have at least one step left.
        let budget = limit + 1 - stack.len();
        let Some(top) = stack.last_mut() else {
            break;
        };
        let current = top.0;
        let mut next = None;
        while top.1 < DIRECTIONS.len() {
            let candidate = current + DIRECTIONS[top.1];
            top.1 += 1;
            if !grid.is_open(candidate) || visited[flat(size, candidate)] {
                continue;
            }
            if candidate == end {
                path.push(candidate);
                return Some(path);
            }
            if budget == 1 {
                // Candidate could not expand further; leave it unvisited.
                continue;
            }
            next = Some(candidate);
            break;
        }

        match next {
            Some(next) => {
                visited[flat(size, next)] = true;
                path.push(next);
                stack.push((next, 0));
            }
            None => {
                path.pop();
                stack.pop();
            }
        }
    }

    None
}
