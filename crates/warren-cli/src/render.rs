//! ASCII rendering of mazes and search trails.

use std::collections::HashSet;

use warren_core::Point;
use warren_maze::Maze;

/// Render a maze with a search trail overlay.
///
/// `#` wall, `.` open, `*` trail, `S`/`E` the endpoints. The trail is a
/// pure overlay; the grid itself carries no trail state.
pub fn render_maze(maze: &Maze, trail: &[Point]) -> String {
    let size = maze.grid.size() as i32;
    let on_trail: HashSet<Point> = trail.iter().copied().collect();
    let mut out = String::with_capacity((size * (size + 1)) as usize);

    for y in 0..size {
        for x in 0..size {
            let p = Point::new(x, y);
            let ch = if p == maze.start {
                'S'
            } else if p == maze.end {
                'E'
            } else if on_trail.contains(&p) {
                '*'
            } else if maze.grid.is_open(p) {
                '.'
            } else {
                '#'
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

/// Render a graph path as `0 -> 1 -> 2`.
pub fn render_path(path: &[usize]) -> String {
    path.iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}
