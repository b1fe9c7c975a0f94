use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cell::Link;
use crate::error::{MazeError, Result};
use crate::graph::build_graph;
use crate::grid::Grid;
use crate::pathfinding::find_escape_path;
use crate::spanning_tree::{grow_spanning_tree, SpanningTree};

pub const WALL_GLYPH: &str = "\u{2588}\u{2588}";
pub const PASSAGE_GLYPH: &str = "  ";
pub const PATH_GLYPH: &str = "//";

/// Boundary side an entrance is punched through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

/// A generated maze: the cell arena, its corridor tree, the two entrance
/// cells, and the escape path once one has been found.
#[derive(Debug, Clone)]
pub struct Maze {
    grid: Grid,
    tree: SpanningTree,
    entrances: [usize; 2],
    path: Option<Vec<usize>>,
}

impl Maze {
    /// Generate a fresh maze: build the weighted adjacency graph, grow the
    /// spanning tree from room (1,1), carve passages along it, and punch one
    /// entrance per requested side.
    pub fn generate(
        height: i32,
        width: i32,
        sides: [Side; 2],
        rng: &mut impl Rng,
    ) -> Result<Maze> {
        let mut grid = Grid::new(height, width)?;
        let graph = build_graph(&grid, rng);
        let start = grid.get_id(1, 1);
        let mut tree = grow_spanning_tree(&grid, &graph, start);
        carve_passages(&mut grid, &tree);
        let first = place_entrance(&mut grid, &mut tree, sides[0], rng)?;
        let second = place_entrance(&mut grid, &mut tree, sides[1], rng)?;
        Ok(Maze {
            grid,
            tree,
            entrances: [first, second],
            path: None,
        })
    }

    /// Reassemble a maze from restored parts (snapshot loading).
    pub fn from_parts(grid: Grid, tree: SpanningTree, entrances: [usize; 2]) -> Maze {
        Maze {
            grid,
            tree,
            entrances,
            path: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn tree(&self) -> &SpanningTree {
        &self.tree
    }

    /// The two entrance cell ids, in placement order.
    pub fn entrances(&self) -> [usize; 2] {
        self.entrances
    }

    pub fn solved_path(&self) -> Option<&[usize]> {
        self.path.as_deref()
    }

    /// Run the depth-first escape search between the two entrances and keep
    /// the resulting path for rendering. The path is rebuilt on every call.
    pub fn find_escape(&mut self) -> Result<&[usize]> {
        let [start, goal] = self.entrances;
        let path = find_escape_path(&self.grid, &self.tree, start, goal)?;
        Ok(self.path.insert(path))
    }

    /// Render the maze as text, one line per row, 2-character glyphs. Cells
    /// on the solved path (if any) use the path marker.
    pub fn render(&self) -> String {
        let on_path: HashSet<usize> = self
            .path
            .as_ref()
            .map(|p| p.iter().copied().collect())
            .unwrap_or_default();
        let mut out = String::with_capacity(self.grid.len() * 2 + self.grid.height as usize);
        for row in 0..self.grid.height {
            for col in 0..self.grid.width {
                let id = self.grid.get_id(row, col);
                let glyph = if on_path.contains(&id) {
                    PATH_GLYPH
                } else if self.grid.is_wall(id) {
                    WALL_GLYPH
                } else {
                    PASSAGE_GLYPH
                };
                out.push_str(glyph);
            }
            out.push('\n');
        }
        out
    }
}

/// Open every tree member, every link destination, and the wall cell sitting
/// between the endpoints of each 2-unit link. Untouched cells stay walls.
fn carve_passages(grid: &mut Grid, tree: &SpanningTree) {
    for id in 0..grid.len() {
        if !tree.contains(id) {
            continue;
        }
        grid.carve(id);
        for &link in tree.links_of(id) {
            grid.carve(link.to);
            if let Some(mid) = grid.midpoint_between(link.from, link.to) {
                grid.carve(mid);
            }
        }
    }
}

/// Punch one entrance through the given side: pick a random tree cell in the
/// band one step inside that edge, carve the boundary cell just outside it,
/// and wire the new cell into the tree in both directions with weight 1.
///
/// Candidates are restricted to tree members, not merely carved cells: a
/// carved midpoint between two rooms has no tree links of its own, and an
/// entrance attached there would strand the escape search.
fn place_entrance(
    grid: &mut Grid,
    tree: &mut SpanningTree,
    side: Side,
    rng: &mut impl Rng,
) -> Result<usize> {
    let candidates: Vec<usize> = match side {
        Side::Left | Side::Right => {
            let col = if side == Side::Left { 1 } else { grid.width - 2 };
            (1..grid.height - 1)
                .map(|row| grid.get_id(row, col))
                .filter(|&id| !grid.is_wall(id) && tree.contains(id))
                .collect()
        }
        Side::Top | Side::Bottom => {
            let row = if side == Side::Top { 1 } else { grid.height - 2 };
            (1..grid.width - 1)
                .map(|col| grid.get_id(row, col))
                .filter(|&id| !grid.is_wall(id) && tree.contains(id))
                .collect()
        }
    };
    let &interior = candidates.choose(rng).ok_or_else(|| {
        MazeError::Inconsistency(format!("no open cell to attach a {side:?} entrance to"))
    })?;

    let (row, col) = grid.get_coords(interior);
    let (e_row, e_col) = match side {
        Side::Left => (row, col - 1),
        Side::Right => (row, col + 1),
        Side::Top => (row - 1, col),
        Side::Bottom => (row + 1, col),
    };
    let entrance = grid.get_id(e_row, e_col);
    grid.carve(entrance);
    let link = Link::new(entrance, interior, 1);
    tree.add_link(link);
    tree.add_link(link.flip());
    Ok(entrance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn generate(height: i32, width: i32, seed: u64) -> Maze {
        let mut rng = StdRng::seed_from_u64(seed);
        Maze::generate(height, width, [Side::Left, Side::Right], &mut rng).unwrap()
    }

    #[test]
    fn carving_opens_rooms_and_midpoints() {
        let maze = generate(5, 5, 11);
        let grid = maze.grid();
        for (row, col) in [(1, 1), (1, 3), (3, 1), (3, 3)] {
            assert!(!grid.is_wall(grid.get_id(row, col)));
        }
        // Outer corners are never carved.
        for (row, col) in [(0, 0), (0, 4), (4, 0), (4, 4)] {
            assert!(grid.is_wall(grid.get_id(row, col)));
        }
    }

    #[test]
    fn entrances_sit_on_opposite_boundaries() {
        let maze = generate(5, 5, 12);
        let grid = maze.grid();
        let [left, right] = maze.entrances();
        let (l_row, l_col) = grid.get_coords(left);
        let (r_row, r_col) = grid.get_coords(right);
        assert_eq!(l_col, 0);
        assert_eq!(r_col, grid.width - 1);
        assert!(!grid.is_wall(left));
        assert!(!grid.is_wall(right));
        // Each entrance connects to an open interior cell.
        assert!(!grid.is_wall(grid.get_id(l_row, 1)));
        assert!(!grid.is_wall(grid.get_id(r_row, grid.width - 2)));
    }

    #[test]
    fn top_bottom_entrances_are_supported() {
        let mut rng = StdRng::seed_from_u64(13);
        let maze = Maze::generate(7, 7, [Side::Top, Side::Bottom], &mut rng).unwrap();
        let grid = maze.grid();
        let [top, bottom] = maze.entrances();
        assert_eq!(grid.get_coords(top).0, 0);
        assert_eq!(grid.get_coords(bottom).0, grid.height - 1);
    }

    #[test]
    fn entrance_links_exist_in_both_directions() {
        let maze = generate(7, 7, 14);
        for entrance in maze.entrances() {
            let out = maze.tree().links_of(entrance);
            assert_eq!(out.len(), 1);
            assert_eq!(out[0].weight, 1);
            let interior = out[0].to;
            assert!(maze
                .tree()
                .links_of(interior)
                .iter()
                .any(|l| l.to == entrance));
        }
    }

    #[test]
    fn render_is_idempotent_and_shaped() {
        let maze = generate(5, 7, 15);
        let first = maze.render();
        assert_eq!(first, maze.render());
        let lines: Vec<&str> = first.lines().collect();
        assert_eq!(lines.len(), 5);
        for line in lines {
            assert_eq!(line.chars().count(), 14);
        }
    }

    #[test]
    fn render_marks_path_cells_after_solving() {
        let mut maze = generate(7, 7, 16);
        assert!(!maze.render().contains(PATH_GLYPH));
        maze.find_escape().unwrap();
        assert!(maze.render().contains(PATH_GLYPH));
    }
}
