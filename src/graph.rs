use rand::Rng;

use crate::cell::Link;
use crate::grid::Grid;

/// Adjacency graph over the cell arena. Each cell id maps to its outgoing
/// links in insertion order; iteration order is what makes tree growth
/// deterministic for a fixed weight sequence.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph {
    links: Vec<Vec<Link>>,
}

impl AdjacencyGraph {
    fn new(cell_count: usize) -> Self {
        AdjacencyGraph {
            links: vec![Vec::new(); cell_count],
        }
    }

    pub fn links_of(&self, id: usize) -> &[Link] {
        self.links.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of directed entries; every undirected connection counts
    /// twice.
    pub fn link_count(&self) -> usize {
        self.links.iter().map(Vec::len).sum()
    }

    /// Insert an undirected connection unless the pair is already linked.
    /// Both directions are stored with the same weight.
    fn add_link(&mut self, from: usize, to: usize, weight: u32) {
        let link = Link::new(from, to, weight);
        if self.links[from].iter().any(|l| l.joins_same_pair(&link)) {
            return;
        }
        self.links[from].push(link);
        self.links[to].push(link.flip());
    }
}

/// Build the randomized-weight adjacency graph for a grid.
///
/// Every room cell gets candidate links to the room cells 2 units away in the
/// four cardinal directions. A neighbor coordinate landing on the far
/// boundary is pulled back by one so the cell nearest that edge still gets a
/// connection; coordinates outside the grid are skipped silently. Weights are
/// independent uniform draws from `[1, height*width]`.
pub fn build_graph(grid: &Grid, rng: &mut impl Rng) -> AdjacencyGraph {
    let mut graph = AdjacencyGraph::new(grid.len());
    let max_weight = (grid.height * grid.width) as u32;

    let mut row = 1;
    while row < grid.height - 1 {
        let mut col = 1;
        while col < grid.width - 1 {
            let from = grid.get_id(row, col);
            for (dr, dc) in [(-2, 0), (2, 0), (0, -2), (0, 2)] {
                let mut n_row = row + dr;
                let mut n_col = col + dc;
                if n_row == grid.height - 1 {
                    n_row -= 1;
                }
                if n_col == grid.width - 1 {
                    n_col -= 1;
                }
                if !grid.in_bounds(n_row, n_col) {
                    continue;
                }
                let to = grid.get_id(n_row, n_col);
                let weight = rng.gen_range(1..=max_weight);
                graph.add_link(from, to, weight);
            }
            col += 2;
        }
        row += 2;
    }
    graph
}
