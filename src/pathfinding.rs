use crate::error::{MazeError, Result};
use crate::grid::Grid;
use crate::spanning_tree::SpanningTree;

/// Depth-first escape search over the spanning tree.
///
/// An explicit stack holds the cells on the branch currently being explored;
/// each frame keeps a cursor into its cell's link list so backtracking
/// resumes where it left off. The search stops the moment the goal is
/// pushed, leaving the stack holding the entrance-to-exit path. Afterwards
/// the wall cell between every consecutive pair 2 units apart is spliced in
/// so the path matches the rendered corridor.
///
/// An exhausted search means the tree lost its connectivity guarantee; that
/// is an internal inconsistency, not a recoverable condition.
pub fn find_escape_path(
    grid: &Grid,
    tree: &SpanningTree,
    start: usize,
    goal: usize,
) -> Result<Vec<usize>> {
    let mut stack: Vec<usize> = vec![start];
    let mut cursors: Vec<usize> = vec![0];
    let mut visited = vec![false; grid.len()];
    visited[start] = true;

    while let Some(&current) = stack.last() {
        if current == goal {
            break;
        }
        let depth = stack.len() - 1;
        let links = tree.links_of(current);
        let mut advanced = false;
        while cursors[depth] < links.len() {
            let next = links[cursors[depth]].to;
            cursors[depth] += 1;
            if !visited[next] {
                visited[next] = true;
                stack.push(next);
                cursors.push(0);
                advanced = true;
                break;
            }
        }
        if !advanced {
            stack.pop();
            cursors.pop();
        }
    }

    if stack.is_empty() {
        return Err(MazeError::Inconsistency(format!(
            "no path between entrance cells {start} and {goal}"
        )));
    }

    Ok(interpolate_midpoints(grid, &stack))
}

/// Splice the physical midpoint cell between consecutive path cells that sit
/// 2 grid-units apart.
fn interpolate_midpoints(grid: &Grid, cells: &[usize]) -> Vec<usize> {
    let mut path = Vec::with_capacity(cells.len() * 2);
    for (i, &id) in cells.iter().enumerate() {
        path.push(id);
        if let Some(&next) = cells.get(i + 1) {
            if let Some(mid) = grid.midpoint_between(id, next) {
                path.push(mid);
            }
        }
    }
    path
}
